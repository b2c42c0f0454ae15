pub mod check_connectivity;

pub use check_connectivity::{CheckConnectivityUseCase, ConnectivityReport};

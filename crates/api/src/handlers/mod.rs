pub mod connectivity;
pub mod domains;
pub mod health;
pub mod results;

pub use health::health_check;

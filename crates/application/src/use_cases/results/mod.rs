pub mod get_results;

pub use get_results::GetResultsUseCase;

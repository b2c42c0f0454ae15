//! repwatch application layer: ports, classification and use cases.
pub mod ports;
pub mod services;
pub mod use_cases;

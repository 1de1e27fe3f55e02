//! Command-line front end: JSON purchase request in, JSON confirmation out.

pub mod backends;
pub mod config;
pub mod request;

pub use config::{CliConfig, ConfigError};
pub use request::{Outcome, PurchaseRequest, run};

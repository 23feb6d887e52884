pub mod config;
pub mod error;
pub mod result;

pub use config::{AppConfig, Locale};
pub use error::{ErrorCategory, HiveError};
pub use result::HiveResult;

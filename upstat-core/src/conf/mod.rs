mod duration;
mod error;
mod loader;
#[cfg(test)]
mod tests;
pub mod types;

pub use duration::parse_duration;
pub use error::ConfigError;
pub use loader::load_config;
pub use types::{AnalysisConfig, AnalysisSection};

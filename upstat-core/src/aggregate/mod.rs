mod aggregator;
mod error;
mod stats;
mod types;

pub use aggregator::*;
pub use error::*;
pub use types::*;

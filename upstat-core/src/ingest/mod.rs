mod error;
mod parse;
mod session;
#[cfg(test)]
mod tests;
mod types;

pub use error::*;
pub use parse::{LineOutcome, SkipReason, parse_document, parse_line, round_ms, timing_ms};
pub use session::*;
pub use types::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("invalid aggregator configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

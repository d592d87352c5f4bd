pub mod fixtures;
pub mod tracing;

pub use fixtures::{fixture_path, write_log};
pub use tracing::{CapturedEvent, init_test_tracing};

pub mod analyze;
pub mod config;

use crate::conf::ConfigError;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal};

/// Prints a command failure, and a hint for configuration mistakes, to stderr.
pub fn report_error(err: &anyhow::Error) {
    if io::stderr().is_terminal() {
        eprintln!("{} {err:#}", "error:".red().bold());
    } else {
        eprintln!("error: {err:#}");
    }

    if let Some(hint) = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ConfigError>())
        .and_then(config::config_error_hint)
    {
        eprintln!();
        eprintln!("{hint}");
    }
}

use crate::conf::error::ConfigError;
use crate::conf::types::{AnalysisSection, ConfigFile};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the `analysis` block of an HCL config file.
pub fn load_config(path: &Path) -> Result<AnalysisSection, ConfigError> {
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let parsed: ConfigFile = hcl::from_str(&s).map_err(|e| ConfigError::parse(path, e))?;

    debug!(path = %path.display(), analysis = ?parsed.analysis, "loaded config file");

    Ok(parsed.analysis)
}

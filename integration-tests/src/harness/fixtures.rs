use std::fs;
use std::path::{Path, PathBuf};

/// Absolute path of a file under `integration-tests/fixtures`.
pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Writes `lines` newline-joined to `dir/name` and returns the path.
pub fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join("\n")).expect("failed to write log fixture");
    path
}

use crate::conf::{AnalysisConfig, AnalysisSection, ConfigError, load_config};
use crate::render::OutputFormat;
use pretty_assertions::assert_eq;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

fn section(period: Option<&str>, format: Option<&str>) -> AnalysisSection {
    AnalysisSection {
        period: period.map(str::to_string),
        format: format.map(str::to_string),
    }
}

#[test]
fn loads_analysis_block() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("upstat.hcl");
    fs::write(
        &path,
        r#"
analysis {
  period = "PT1H"
  format = "csv"
}
"#,
    )
    .unwrap();

    // Act
    let loaded = load_config(&path).unwrap();

    // Assert
    assert_eq!(loaded, section(Some("PT1H"), Some("csv")));
}

#[test]
fn missing_block_is_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("upstat.hcl");
    fs::write(&path, "").unwrap();

    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded, AnalysisSection::default());
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempdir().unwrap();

    let err = load_config(&dir.path().join("absent.hcl")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn malformed_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("upstat.hcl");
    fs::write(&path, "analysis {\n  period = \n").unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn overrides_win_over_file_values() {
    let file = section(Some("PT1H"), Some("csv"));

    let merged = file.merge(section(Some("PT5M"), None));

    assert_eq!(merged, section(Some("PT5M"), Some("csv")));
}

#[test]
fn resolve_validates_and_defaults() {
    let resolved = section(Some("PT5M"), None).resolve().unwrap();

    assert_eq!(
        resolved,
        AnalysisConfig {
            period: "PT5M".to_string(),
            bucket_width: Duration::from_secs(300),
            format: OutputFormat::Grouped,
        }
    );
}

#[test]
fn resolve_requires_period() {
    let err = section(None, Some("csv")).resolve().unwrap_err();

    assert!(matches!(err, ConfigError::MissingPeriod));
}

#[test]
fn resolve_rejects_unknown_format() {
    let err = section(Some("PT5M"), Some("xml")).resolve().unwrap_err();

    assert!(matches!(err, ConfigError::UnsupportedFormat { .. }));
}

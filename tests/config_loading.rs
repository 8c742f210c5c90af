use std::fs;
use gap_analyzer::config::config_manager::ConfigManager;
use gap_analyzer::enums::feature_category::FeatureCategory;
use gap_analyzer::enums::output_format::OutputFormat;
use gap_analyzer::errors::GapAnalyzerError;
use gap_analyzer::services::gap_analyzer::GapAnalyzer;
use gap_analyzer::structs::scan_result::ScanResult;
use crate::common::issue;

const CONFIG: &str = r#"
[analyzer]
exclusion_patterns = ["legacy dashboard"]
use_default_catalog = false
description_max_chars = 12

[[analyzer.catalog]]
name = "Hardware wallet support"
category = "integration"
priority = "high"
implementation_complexity = "complex"

[scanner]
timeout_secs = 5

[[repositories]]
name = "exchange"
owner = "acme"
repo = "exchange"

[[repositories]]
name = "docs"
owner = "acme"
repo = "docs"
enabled = false

[output]
format = "md"
"#;

#[test]
fn loads_a_full_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, CONFIG).unwrap();

    let config = ConfigManager::load(Some(&path)).unwrap();

    assert_eq!(config.analyzer.exclusion_patterns, vec!["legacy dashboard".to_string()]);
    assert_eq!(config.analyzer.catalog[0].category, FeatureCategory::Integration);
    assert_eq!(config.scanner.timeout_secs, 5);
    assert_eq!(config.scanner.per_page, 100);
    assert_eq!(config.enabled_repositories().count(), 1);
    assert!(config.repositories[0].enabled);
    assert_eq!(config.output.format, OutputFormat::Markdown);
    assert_eq!(config.server.port, 8080);
    assert!(ConfigManager::validate_config(&config).is_ok());
}

#[test]
fn configured_analyzer_uses_its_own_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, CONFIG).unwrap();
    let config = ConfigManager::load(Some(&path)).unwrap();

    let analyzer = GapAnalyzer::from_config(&config.analyzer).unwrap();
    let scan = ScanResult::new(
        vec![
            issue(1, "Legacy Dashboard feature parity", &[], None),
            issue(2, "Admin login feature", &[], Some("a body longer than twelve chars")),
        ],
        vec![],
        90.0,
    );
    let result = analyzer.analyze(scan).unwrap();

    assert_eq!(result.excluded_tasks, vec!["Issue #1: Legacy Dashboard feature parity".to_string()]);
    assert_eq!(result.missing_features.len(), 2);
    assert_eq!(result.missing_features[0].description, "a body longe");
    assert_eq!(result.missing_features[1].name, "Hardware wallet support");
    assert_eq!(result.missing_features[1].estimated_hours, 20);
}

#[test]
fn broken_toml_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[analyzer\nuse_default_catalog = ").unwrap();

    let error = ConfigManager::load(Some(&path)).unwrap_err();

    match error {
        GapAnalyzerError::ConfigurationFileError { path: reported, .. } => {
            assert_eq!(reported, path.display().to_string());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validation_reports_warnings_separately() {
    let config = toml::from_str(
        r#"
[analyzer]
use_default_catalog = false
"#,
    )
    .unwrap();

    let validation = ConfigManager::validation_result(&config);

    assert!(validation.is_valid);
    assert!(validation.warnings.iter().any(|w| w.contains("No enabled repositories")));
    assert!(validation.warnings.iter().any(|w| w.contains("Gap catalog is empty")));
}

#[test]
fn blank_exclusion_patterns_are_rejected() {
    let config = toml::from_str("[analyzer]\nexclusion_patterns = [\"admin login\", \"  \"]\n").unwrap();

    let errors = ConfigManager::validate_config(&config).unwrap_err();

    assert_eq!(errors, vec!["analyzer.exclusion_patterns contains a blank pattern".to_string()]);
}

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{GapAnalyzerError, GapResult};
use crate::structs::config::config::Config;
use crate::structs::validation_result::ValidationResult;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Loads `path`, or the default location when `None`.
    ///
    /// A missing default file yields `Config::default()`; a missing explicit path is an error.
    pub fn load(path: Option<&Path>) -> GapResult<Config> {
        let explicit = path.is_some();
        let config_path = path.map_or_else(Self::default_config_path, Path::to_path_buf);

        if !config_path.exists() {
            if explicit {
                return Err(GapAnalyzerError::config_file_error(
                    &config_path.display().to_string(),
                    "file does not exist",
                ));
            }
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)
            .map_err(|e| GapAnalyzerError::config_file_error(&config_path.display().to_string(), &e.to_string()))
    }

    pub fn create_sample_config(path: &Path) -> GapResult<()> {
        if path.exists() {
            return Err(GapAnalyzerError::config_file_error(
                &path.display().to_string(),
                "file already exists",
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, SAMPLE_CONFIG)?;
        println!("📝 Sample config written to: {}", path.display());
        println!("   Edit [[repositories]] and run `gap-analyzer validate`");
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let mut names = HashSet::new();
        for repo in &config.repositories {
            if repo.name.trim().is_empty() {
                errors.push(format!("Repository {} has an empty name", repo.full_name()));
            }
            if repo.owner.trim().is_empty() || repo.repo.trim().is_empty() {
                errors.push(format!("Repository '{}' needs both owner and repo", repo.name));
            }
            if !names.insert(&repo.name) {
                errors.push(format!("Duplicate repository name: {}", repo.name));
            }
        }

        let mut catalog_names = HashSet::new();
        for entry in &config.analyzer.catalog {
            if entry.name.trim().is_empty() {
                errors.push("Catalog entry with an empty name".to_string());
            } else if !catalog_names.insert(entry.name.to_lowercase()) {
                errors.push(format!("Duplicate catalog entry: {}", entry.name));
            }
            if entry.estimated_hours == Some(0) {
                errors.push(format!("Catalog entry '{}' has zero estimated hours", entry.name));
            }
        }

        if config.analyzer.exclusion_patterns.iter().any(|pattern| pattern.trim().is_empty()) {
            errors.push("analyzer.exclusion_patterns contains a blank pattern".to_string());
        }
        if config.analyzer.description_max_chars == 0 {
            errors.push("analyzer.description_max_chars must be greater than zero".to_string());
        }
        if config.scanner.timeout_secs == 0 {
            errors.push("scanner.timeout_secs must be greater than zero".to_string());
        }
        if !(1..=100).contains(&config.scanner.per_page) {
            errors.push(format!("scanner.per_page must be between 1 and 100, got {}", config.scanner.per_page));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn config_warnings(config: &Config) -> Vec<String> {
        let mut warnings = Vec::new();

        if config.enabled_repositories().next().is_none() {
            warnings.push("No enabled repositories; `analyze` will need --input".to_string());
        }
        if !config.analyzer.use_default_catalog && config.analyzer.catalog.is_empty() {
            warnings.push("Gap catalog is empty; reports will only contain issue-derived features".to_string());
        }
        if std::env::var(&config.scanner.token_env).is_err() {
            warnings.push(format!(
                "{} is not set; GitHub requests will be anonymous and rate limited",
                config.scanner.token_env
            ));
        }

        warnings
    }

    pub fn validation_result(config: &Config) -> ValidationResult {
        let errors = Self::validate_config(config).err().unwrap_or_default();
        ValidationResult::from_findings(errors, Self::config_warnings(config))
    }
}

const SAMPLE_CONFIG: &str = r#"# Gap Analyzer Configuration

[analyzer]
# Titles containing any of these (case-insensitive) are never reported as gaps
exclusion_patterns = [
    "admin login",
    "admin-login",
    "admin auth",
    "admin authentication",
    "login page design",
    "login screen",
]

# Start from the built-in known-gap catalog
use_default_catalog = true

# Issue bodies are cut to this many characters
description_max_chars = 200

# Extra known gaps appended after the built-in catalog
[[analyzer.catalog]]
name = "Fiat On-Ramp"
description = "Card and bank transfer deposits"
category = "integration"
priority = "high"
implementation_complexity = "complex"
affects_layout = false
# estimated_hours = 20

[scanner]
api_url = "https://api.github.com"
token_env = "GITHUB_TOKEN"
timeout_secs = 30
per_page = 100

[[repositories]]
name = "exchange"
owner = "my-org"
repo = "exchange"
enabled = true

[server]
host = "127.0.0.1"
port = 8080

[output]
# text, json or markdown
format = "text"
# output_dir = "./reports"
"#;

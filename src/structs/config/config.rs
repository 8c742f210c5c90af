use serde::{Deserialize, Serialize};
use crate::structs::config::analyzer_config::AnalyzerConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::repository_config::RepositoryConfig;
use crate::structs::config::scanner_config::ScannerConfig;
use crate::structs::config::server_config::ServerConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub repositories: Vec<RepositoryConfig>,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn enabled_repositories(&self) -> impl Iterator<Item = &RepositoryConfig> {
        self.repositories.iter().filter(|repo| repo.enabled)
    }

    pub fn repository_names(&self) -> Vec<String> {
        self.repositories.iter().map(|repo| repo.name.clone()).collect()
    }
}

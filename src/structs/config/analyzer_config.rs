use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::catalog_entry::CatalogEntry;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    #[serde(default = "ConfigHelper::default_exclusion_patterns")]
    pub exclusion_patterns: Vec<String>,

    /// Start from the built-in known-gap catalog before appending `catalog`.
    #[serde(default = "ConfigHelper::default_use_default_catalog")]
    pub use_default_catalog: bool,

    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,

    #[serde(default = "ConfigHelper::default_description_max_chars")]
    pub description_max_chars: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exclusion_patterns: ConfigHelper::default_exclusion_patterns(),
            use_default_catalog: ConfigHelper::default_use_default_catalog(),
            catalog: Vec::new(),
            description_max_chars: ConfigHelper::default_description_max_chars(),
        }
    }
}

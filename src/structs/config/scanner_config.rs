use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    #[serde(default = "ConfigHelper::default_api_url")]
    pub api_url: String,

    /// Environment variable holding a GitHub token; anonymous requests when unset.
    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_per_page")]
    pub per_page: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            api_url: ConfigHelper::default_api_url(),
            token_env: ConfigHelper::default_token_env(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            per_page: ConfigHelper::default_per_page(),
        }
    }
}

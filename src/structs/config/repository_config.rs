use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    pub name: String,
    pub owner: String,
    pub repo: String,

    #[serde(default = "ConfigHelper::default_enabled")]
    pub enabled: bool,
}

impl RepositoryConfig {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

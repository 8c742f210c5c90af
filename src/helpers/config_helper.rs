use crate::config::constants::{
    DEFAULT_DESCRIPTION_MAX_CHARS, DEFAULT_EXCLUSION_PATTERNS, DEFAULT_GITHUB_API_URL, DEFAULT_GITHUB_TOKEN_ENV,
    DEFAULT_PER_PAGE, DEFAULT_SCAN_TIMEOUT_SECS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_exclusion_patterns() -> Vec<String> {
        DEFAULT_EXCLUSION_PATTERNS.iter().map(ToString::to_string).collect()
    }

    pub const fn default_use_default_catalog() -> bool {
        true
    }

    pub const fn default_description_max_chars() -> usize {
        DEFAULT_DESCRIPTION_MAX_CHARS
    }

    pub fn default_api_url() -> String {
        DEFAULT_GITHUB_API_URL.to_string()
    }

    pub fn default_token_env() -> String {
        DEFAULT_GITHUB_TOKEN_ENV.to_string()
    }

    pub const fn default_timeout_secs() -> u64 {
        DEFAULT_SCAN_TIMEOUT_SECS
    }

    pub const fn default_per_page() -> u32 {
        DEFAULT_PER_PAGE
    }

    pub const fn default_enabled() -> bool {
        true
    }

    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub const fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }
}

use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_SCAN_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_DESCRIPTION_MAX_CHARS: usize = 200;
pub const MAX_REQUEST_BODY_BYTES: u64 = 4 * 1024 * 1024;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const GITHUB_USER_AGENT: &str = concat!("gap-analyzer/", env!("CARGO_PKG_VERSION"));

pub const CONFIG_DIR_NAME: &str = "gap-analyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Hours added to any estimate whose work touches page layout.
pub const LAYOUT_SURCHARGE_HOURS: u32 = 4;

pub const NO_DESCRIPTION: &str = "No description provided";

/// Admin login / authentication screen redesign work is out of scope for gap analysis.
pub const DEFAULT_EXCLUSION_PATTERNS: &[&str] = &[
    "admin login",
    "admin-login",
    "admin auth",
    "admin authentication",
    "admin sign in",
    "admin signin",
    "login page design",
    "login page redesign",
    "login screen",
    "login layout",
    "auth page design",
    "auth screen",
];

pub const fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub const fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

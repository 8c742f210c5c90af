mod common;
mod scenarios;
mod properties;
mod config_loading;
mod github_scanner;

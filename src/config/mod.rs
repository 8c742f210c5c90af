pub mod config_manager;
pub mod constants;
pub mod gap_catalog;

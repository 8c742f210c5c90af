pub mod analyzer_config;
pub mod catalog_entry;
pub mod config;
pub mod output_config;
pub mod repository_config;
pub mod scanner_config;
pub mod server_config;

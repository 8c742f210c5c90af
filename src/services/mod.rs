pub mod analysis_runner;
pub mod classifier;
pub mod estimator;
pub mod exclusion_filter;
pub mod file_scan_source;
pub mod gap_analyzer;
pub mod github_scanner;
pub mod report_renderer;
pub mod scan_validator;

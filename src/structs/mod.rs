pub mod analysis_summary;
pub mod analysis_summary_builder;
pub mod category_stats;
pub mod classification;
pub mod cli;
pub mod config;
pub mod deep_analysis_result;
pub mod feature_filter;
pub mod issue;
pub mod missing_feature;
pub mod pull_request;
pub mod scan_result;
pub mod validation_result;

//! Repository feature-gap analysis.
//!
//! A [`structs::scan_result::ScanResult`] (issues, pull requests, health score) goes
//! through [`services::gap_analyzer::GapAnalyzer`] and comes out as a
//! [`structs::deep_analysis_result::DeepAnalysisResult`]: feature-like open issues
//! classified and estimated, merged with a known-gap catalog, with protected
//! work (admin login and auth screens) filtered out and listed separately.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::enums::priority::Priority;
use crate::structs::missing_feature::MissingFeature;
use crate::structs::scan_result::ScanResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeepAnalysisResult {
    pub scan_result: ScanResult,
    pub missing_features: Vec<MissingFeature>,
    pub excluded_tasks: Vec<String>,
    pub total_missing_count: usize,
    /// Only priorities that occur in `missing_features` have a key.
    pub priority_breakdown: BTreeMap<Priority, usize>,
}

impl DeepAnalysisResult {
    pub fn priority_count(&self, priority: Priority) -> usize {
        self.priority_breakdown.get(&priority).copied().unwrap_or(0)
    }

    pub fn total_estimated_hours(&self) -> u32 {
        self.missing_features.iter().map(|feature| feature.estimated_hours).sum()
    }
}

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::enums::feature_category::FeatureCategory;
use crate::enums::implementation_complexity::ImplementationComplexity;
use crate::enums::priority::Priority;
use crate::structs::analysis_summary_builder::AnalysisSummaryBuilder;
use crate::structs::category_stats::CategoryStats;
use crate::structs::deep_analysis_result::DeepAnalysisResult;

/// Roll-up figures shown next to a report.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    // Totals
    pub total_features: usize,
    pub issue_derived_count: usize,
    pub catalog_count: usize,
    pub excluded_task_count: usize,

    // Effort
    pub total_estimated_hours: u32,
    pub layout_impact_count: usize,

    pub health_score: f64,

    pub category_breakdown: BTreeMap<FeatureCategory, usize>,
    pub category_hours: BTreeMap<FeatureCategory, u32>,
    pub complexity_breakdown: BTreeMap<ImplementationComplexity, usize>,
    pub priority_breakdown: BTreeMap<Priority, usize>,
}

impl AnalysisSummary {
    pub fn from_result(result: &DeepAnalysisResult) -> Self {
        result
            .missing_features
            .iter()
            .fold(AnalysisSummaryBuilder::new(), AnalysisSummaryBuilder::add_feature)
            .excluded_task_count(result.excluded_tasks.len())
            .health_score(result.scan_result.health_score)
            .build()
    }

    pub fn urgent_count(&self) -> usize {
        [Priority::Critical, Priority::High]
            .iter()
            .filter_map(|priority| self.priority_breakdown.get(priority))
            .sum()
    }

    pub fn category_stats(&self, category: FeatureCategory) -> CategoryStats {
        let count = self.category_breakdown.get(&category).copied().unwrap_or(0);
        let percentage = if self.total_features > 0 {
            (count * 100) / self.total_features
        } else {
            0
        };

        CategoryStats {
            category,
            count,
            percentage,
            estimated_hours: self.category_hours.get(&category).copied().unwrap_or(0),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

use crate::structs::analysis_summary::AnalysisSummary;
use crate::structs::missing_feature::MissingFeature;

pub struct AnalysisSummaryBuilder {
    summary: AnalysisSummary,
}

impl AnalysisSummaryBuilder {
    pub fn new() -> Self {
        Self {
            summary: AnalysisSummary::default(),
        }
    }

    #[must_use]
    pub fn add_feature(mut self, feature: &MissingFeature) -> Self {
        let summary = &mut self.summary;
        summary.total_features += 1;
        if feature.is_catalog_entry() {
            summary.catalog_count += 1;
        } else {
            summary.issue_derived_count += 1;
        }

        summary.total_estimated_hours += feature.estimated_hours;
        if feature.affects_layout {
            summary.layout_impact_count += 1;
        }

        *summary.category_breakdown.entry(feature.category).or_insert(0) += 1;
        *summary.category_hours.entry(feature.category).or_insert(0) += feature.estimated_hours;
        *summary.complexity_breakdown.entry(feature.implementation_complexity).or_insert(0) += 1;
        *summary.priority_breakdown.entry(feature.priority).or_insert(0) += 1;
        self
    }

    #[must_use]
    pub fn excluded_task_count(mut self, count: usize) -> Self {
        self.summary.excluded_task_count = count;
        self
    }

    #[must_use]
    pub fn health_score(mut self, health_score: f64) -> Self {
        self.summary.health_score = health_score;
        self
    }

    pub fn build(self) -> AnalysisSummary {
        self.summary
    }
}

impl Default for AnalysisSummaryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

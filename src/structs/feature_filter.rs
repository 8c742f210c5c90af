use serde::{Deserialize, Serialize};
use crate::enums::feature_category::FeatureCategory;
use crate::enums::priority::Priority;
use crate::structs::missing_feature::MissingFeature;

/// Display-side narrowing of a report. `None` matches everything.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureFilter {
    pub category: Option<FeatureCategory>,
    pub priority: Option<Priority>,
}

impl FeatureFilter {
    pub const fn new(category: Option<FeatureCategory>, priority: Option<Priority>) -> Self {
        Self { category, priority }
    }

    pub const fn is_active(&self) -> bool {
        self.category.is_some() || self.priority.is_some()
    }

    pub fn matches(&self, feature: &MissingFeature) -> bool {
        let category_match = self.category.map_or(true, |category| feature.category == category);
        let priority_match = self.priority.map_or(true, |priority| feature.priority == priority);
        category_match && priority_match
    }

    pub fn apply<'a>(&self, features: &'a [MissingFeature]) -> Vec<&'a MissingFeature> {
        features.iter().filter(|feature| self.matches(feature)).collect()
    }

    pub fn total_hours(&self, features: &[MissingFeature]) -> u32 {
        self.apply(features).iter().map(|feature| feature.estimated_hours).sum()
    }
}

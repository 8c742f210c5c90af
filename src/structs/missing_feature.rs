use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::enums::feature_category::FeatureCategory;
use crate::enums::implementation_complexity::ImplementationComplexity;
use crate::enums::priority::Priority;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MissingFeature {
    pub category: FeatureCategory,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub implementation_complexity: ImplementationComplexity,
    pub affects_layout: bool,
    /// Empty for catalog entries.
    pub related_issues: BTreeSet<u64>,
    pub estimated_hours: u32,
}

impl MissingFeature {
    pub fn is_catalog_entry(&self) -> bool {
        self.related_issues.is_empty()
    }
}

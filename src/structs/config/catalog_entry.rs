use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use crate::enums::feature_category::FeatureCategory;
use crate::enums::implementation_complexity::ImplementationComplexity;
use crate::enums::priority::Priority;
use crate::services::estimator::Estimator;
use crate::structs::missing_feature::MissingFeature;

/// A known-gap record as written in the config file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub category: FeatureCategory,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub implementation_complexity: ImplementationComplexity,

    #[serde(default)]
    pub affects_layout: bool,

    /// Falls back to the estimator when omitted.
    #[serde(default)]
    pub estimated_hours: Option<u32>,
}

impl CatalogEntry {
    pub fn to_feature(&self) -> MissingFeature {
        MissingFeature {
            category: self.category,
            name: self.name.clone(),
            description: self.description.clone(),
            priority: self.priority,
            implementation_complexity: self.implementation_complexity,
            affects_layout: self.affects_layout,
            related_issues: BTreeSet::new(),
            estimated_hours: self.estimated_hours.unwrap_or_else(|| {
                Estimator::estimate_hours(self.implementation_complexity, self.affects_layout)
            }),
        }
    }
}

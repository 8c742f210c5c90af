use serde::{Deserialize, Serialize};
use crate::enums::feature_category::FeatureCategory;
use crate::enums::implementation_complexity::ImplementationComplexity;
use crate::enums::priority::Priority;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub category: FeatureCategory,
    pub priority: Priority,
    pub implementation_complexity: ImplementationComplexity,
    pub affects_layout: bool,
}

use serde::{Deserialize, Serialize};
use crate::enums::feature_category::FeatureCategory;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryStats {
    pub category: FeatureCategory,
    pub count: usize,
    pub percentage: usize,
    pub estimated_hours: u32,
}

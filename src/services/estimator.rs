use crate::config::constants::LAYOUT_SURCHARGE_HOURS;
use crate::enums::implementation_complexity::ImplementationComplexity;

pub struct Estimator;

impl Estimator {
    /// simple 4h, moderate 8h, complex 20h, plus a flat surcharge when layout is touched.
    pub const fn estimate_hours(complexity: ImplementationComplexity, affects_layout: bool) -> u32 {
        let base = complexity.base_hours();
        if affects_layout {
            base + LAYOUT_SURCHARGE_HOURS
        } else {
            base
        }
    }
}

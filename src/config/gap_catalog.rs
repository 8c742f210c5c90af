use std::collections::BTreeSet;
use once_cell::sync::Lazy;
use crate::enums::feature_category::FeatureCategory::{self, Community, Core, Integration, Performance, Security, Ui};
use crate::enums::implementation_complexity::ImplementationComplexity::{self, Complex, Moderate, Simple};
use crate::enums::priority::Priority::{self, Critical, High, Low, Medium};
use crate::structs::missing_feature::MissingFeature;

/// Known platform gaps that issue text never surfaces. Appended to every report
/// in this order; edit here (or in `[[analyzer.catalog]]`) rather than in the analyzer.
pub static DEFAULT_GAP_CATALOG: Lazy<Vec<MissingFeature>> = Lazy::new(|| {
    vec![
        known_gap(
            Core,
            "Real-time WebSocket Data Channel",
            "Prices, balances and order status are polled; a push channel is needed for live updates",
            Critical,
            Complex,
            false,
            20,
        ),
        known_gap(
            Ui,
            "Advanced Trading Charts",
            "Candlestick charts with indicators, zoom and multiple timeframes for token pairs",
            High,
            Complex,
            true,
            24,
        ),
        known_gap(
            Security,
            "Security Audit Logging",
            "Tamper-evident log of privileged actions, transaction approvals and configuration changes",
            Critical,
            Moderate,
            false,
            8,
        ),
        known_gap(
            Security,
            "Two-Factor Authentication for User Accounts",
            "TOTP based second factor for wallet holders, with recovery codes",
            High,
            Moderate,
            false,
            8,
        ),
        known_gap(
            Integration,
            "Multi-Chain Wallet Integration",
            "Connect wallets on more than one chain and reconcile balances across them",
            High,
            Complex,
            false,
            20,
        ),
        known_gap(
            Core,
            "Automated Backup and Recovery",
            "Scheduled database backups with a tested restore procedure",
            High,
            Moderate,
            false,
            8,
        ),
        known_gap(
            Performance,
            "Response Caching Layer",
            "Cache market and leaderboard reads instead of recomputing them per request",
            Medium,
            Moderate,
            false,
            8,
        ),
        known_gap(
            Performance,
            "Database Query Optimization",
            "Indexes and pagination for the transaction history and leaderboard queries",
            Medium,
            Moderate,
            false,
            8,
        ),
        known_gap(
            Core,
            "Push Notification Service",
            "Deliver price alerts and project updates outside the browser session",
            Medium,
            Moderate,
            false,
            8,
        ),
        known_gap(
            Community,
            "Community Governance Voting",
            "Token-weighted proposals and voting on funded environmental projects",
            Medium,
            Moderate,
            true,
            12,
        ),
        known_gap(
            Integration,
            "Public REST API Documentation",
            "Published reference for the public endpoints with request and response examples",
            Low,
            Simple,
            false,
            4,
        ),
        known_gap(
            Ui,
            "Mobile Responsive Layout Polish",
            "Dashboard panels overflow on narrow screens",
            Low,
            Simple,
            true,
            8,
        ),
    ]
});

fn known_gap(
    category: FeatureCategory,
    name: &str,
    description: &str,
    priority: Priority,
    implementation_complexity: ImplementationComplexity,
    affects_layout: bool,
    estimated_hours: u32,
) -> MissingFeature {
    MissingFeature {
        category,
        name: name.to_string(),
        description: description.to_string(),
        priority,
        implementation_complexity,
        affects_layout,
        related_issues: BTreeSet::new(),
        estimated_hours,
    }
}

pub fn default_gap_catalog() -> Vec<MissingFeature> {
    DEFAULT_GAP_CATALOG.clone()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use super::*;
    use crate::services::estimator::Estimator;
    use crate::services::exclusion_filter::ExclusionFilter;

    #[test]
    fn catalog_hours_agree_with_the_estimator() {
        for feature in DEFAULT_GAP_CATALOG.iter() {
            assert_eq!(
                feature.estimated_hours,
                Estimator::estimate_hours(feature.implementation_complexity, feature.affects_layout),
                "{}",
                feature.name
            );
        }
    }

    #[test]
    fn catalog_entries_are_unique_and_unlinked() {
        let names: HashSet<_> = DEFAULT_GAP_CATALOG.iter().map(|feature| feature.name.as_str()).collect();
        assert_eq!(names.len(), DEFAULT_GAP_CATALOG.len());
        assert!(DEFAULT_GAP_CATALOG.iter().all(MissingFeature::is_catalog_entry));
    }

    #[test]
    fn default_patterns_keep_the_whole_catalog() {
        let filter = ExclusionFilter::default();
        assert!(DEFAULT_GAP_CATALOG.iter().all(|feature| !filter.is_excluded(&feature.name)));
    }
}

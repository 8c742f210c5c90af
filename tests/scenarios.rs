use std::collections::BTreeSet;
use gap_analyzer::config::gap_catalog::default_gap_catalog;
use gap_analyzer::enums::feature_category::FeatureCategory;
use gap_analyzer::enums::implementation_complexity::ImplementationComplexity;
use gap_analyzer::enums::priority::Priority;
use gap_analyzer::services::classifier::Classifier;
use gap_analyzer::services::gap_analyzer::GapAnalyzer;
use gap_analyzer::structs::scan_result::ScanResult;
use crate::common::{issue, pull_request};

#[test]
fn empty_scan_reports_the_catalog() {
    let analyzer = GapAnalyzer::default();

    let result = analyzer.analyze(ScanResult::new(vec![], vec![], 100.0)).unwrap();

    assert_eq!(result.missing_features, default_gap_catalog());
    assert!(result.excluded_tasks.is_empty());
    assert_eq!(result.total_missing_count, default_gap_catalog().len());
    assert_eq!(result.priority_breakdown.values().sum::<usize>(), result.total_missing_count);
}

#[test]
fn plain_enhancement_gets_default_classification() {
    let scan = ScanResult::new(
        vec![issue(1, "Add real-time notifications feature", &["enhancement"], Some("need websockets"))],
        vec![],
        80.0,
    );

    let result = GapAnalyzer::default().analyze(scan).unwrap();
    let feature = &result.missing_features[0];

    assert_eq!(feature.name, "Add real-time notifications feature");
    assert_eq!(feature.description, "need websockets");
    assert_eq!(feature.category, FeatureCategory::Core);
    assert_eq!(feature.priority, Priority::Medium);
    assert_eq!(feature.implementation_complexity, ImplementationComplexity::Moderate);
    assert!(!feature.affects_layout);
    assert_eq!(feature.estimated_hours, 8);
    assert_eq!(feature.related_issues, BTreeSet::from([1]));
    assert_eq!(result.total_missing_count, default_gap_catalog().len() + 1);
}

#[test]
fn admin_login_work_is_protected() {
    let scan = ScanResult::new(
        vec![issue(42, "Admin Login Page Layout Redesign", &["feature"], None)],
        vec![pull_request(43, "Tweak admin-login spacing")],
        70.0,
    );

    let result = GapAnalyzer::default().analyze(scan).unwrap();

    assert_eq!(
        result.excluded_tasks,
        vec![
            "Issue #42: Admin Login Page Layout Redesign".to_string(),
            "PR #43: Tweak admin-login spacing".to_string(),
        ]
    );
    assert!(result
        .missing_features
        .iter()
        .all(|feature| feature.name != "Admin Login Page Layout Redesign"));
}

#[test]
fn critical_security_issue_is_classified_as_complex() {
    let issue = issue(
        7,
        "Critical security vulnerability in API, complex fix required",
        &["critical", "security"],
        None,
    );

    let classification = Classifier::classify(&issue);

    assert_eq!(classification.category, FeatureCategory::Security);
    assert_eq!(classification.priority, Priority::Critical);
    assert_eq!(classification.implementation_complexity, ImplementationComplexity::Complex);
    assert!(!classification.affects_layout);
}

#[test]
fn issue_features_come_before_catalog_entries() {
    let scan = ScanResult::new(
        vec![
            issue(2, "Margin trading feature", &[], None),
            issue(1, "Referral rewards", &["enhancement"], None),
        ],
        vec![],
        55.0,
    );

    let result = GapAnalyzer::default().analyze(scan).unwrap();
    let names: Vec<&str> = result.missing_features.iter().take(3).map(|f| f.name.as_str()).collect();

    assert_eq!(names[0], "Margin trading feature");
    assert_eq!(names[1], "Referral rewards");
    assert_eq!(names[2], default_gap_catalog()[0].name);
}

#[test]
fn analysis_value_rejects_malformed_payloads() {
    let payload = serde_json::json!({
        "issues": [{"number": 1, "state": "open"}],
        "pullRequests": [],
        "healthScore": 50
    });

    let error = GapAnalyzer::default().analyze_value(payload).unwrap_err();

    assert_eq!(error.kind(), "InvalidScanResultError");
    assert!(error.to_string().contains("issues[0].title"));
}

use gap_analyzer::enums::issue_state::IssueState;
use gap_analyzer::services::estimator::Estimator;
use gap_analyzer::services::gap_analyzer::GapAnalyzer;
use gap_analyzer::structs::issue::Issue;
use gap_analyzer::structs::pull_request::PullRequest;
use gap_analyzer::structs::scan_result::ScanResult;
use proptest::prelude::*;

const TITLES: &[&str] = &[
    "Staking rewards feature",
    "Admin login screen refresh",
    "Crash when switching networks",
    "Dark mode UI feature",
    "Faster order book performance",
    "API rate limit integration",
    "Login page redesign for admins",
    "Community forum",
    "Quick copy address button",
    "Major rewrite of the matching engine",
];

const LABELS: &[&str] = &["feature", "enhancement", "bug", "critical", "high", "low", "security", "design"];

fn issue_strategy() -> impl Strategy<Value = Issue> {
    (
        1u64..10_000,
        prop::sample::select(TITLES),
        prop::sample::subsequence(LABELS, 0..3),
        prop::option::of("[a-z ]{0,300}"),
        any::<bool>(),
    )
        .prop_map(|(number, title, labels, body, open)| Issue {
            number,
            title: title.to_string(),
            body,
            state: if open { IssueState::Open } else { IssueState::Closed },
            labels: labels.into_iter().map(ToString::to_string).collect(),
        })
}

fn pull_request_strategy() -> impl Strategy<Value = PullRequest> {
    (1u64..10_000, prop::sample::select(TITLES)).prop_map(|(number, title)| PullRequest {
        number,
        title: title.to_string(),
        body: None,
        state: IssueState::Open,
        labels: Vec::new(),
    })
}

fn scan_strategy() -> impl Strategy<Value = ScanResult> {
    (
        prop::collection::vec(issue_strategy(), 0..20),
        prop::collection::vec(pull_request_strategy(), 0..10),
        0.0f64..=100.0,
    )
        .prop_map(|(issues, pull_requests, score)| ScanResult::new(issues, pull_requests, score))
}

proptest! {
    #[test]
    fn analysis_is_deterministic(scan in scan_strategy()) {
        let analyzer = GapAnalyzer::default();
        let first = analyzer.analyze(scan.clone()).unwrap();
        let second = analyzer.analyze(scan).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn report_invariants_hold(scan in scan_strategy()) {
        let analyzer = GapAnalyzer::default();
        let result = analyzer.analyze(scan.clone()).unwrap();

        prop_assert_eq!(result.total_missing_count, result.missing_features.len());
        prop_assert_eq!(result.priority_breakdown.values().sum::<usize>(), result.total_missing_count);
        prop_assert!(result.priority_breakdown.values().all(|count| *count > 0));
        prop_assert_eq!(&result.scan_result, &scan);

        for feature in &result.missing_features {
            prop_assert!(!analyzer.exclusion_filter().is_excluded(&feature.name));
            prop_assert!(feature.estimated_hours > 0);
            prop_assert_eq!(
                feature.estimated_hours,
                Estimator::estimate_hours(feature.implementation_complexity, feature.affects_layout)
            );
            prop_assert!(feature.description.chars().count() <= 200);
        }

        let excluded_sources = scan.issues.iter().filter(|i| analyzer.exclusion_filter().is_excluded(&i.title)).count()
            + scan.pull_requests.iter().filter(|p| analyzer.exclusion_filter().is_excluded(&p.title)).count();
        prop_assert_eq!(result.excluded_tasks.len(), excluded_sources);
    }
}

use std::net::SocketAddr;
use gap_analyzer::errors::GapAnalyzerError;
use gap_analyzer::services::github_scanner::GitHubScanner;
use gap_analyzer::structs::config::repository_config::RepositoryConfig;
use gap_analyzer::structs::config::scanner_config::ScannerConfig;
use gap_analyzer::traits::scan_source::ScanSource;
use serde_json::json;
use warp::Filter;

fn spawn_fake_github() -> SocketAddr {
    let issues = warp::path!("repos" / "acme" / "exchange" / "issues")
        .and(warp::get())
        .map(|| {
            warp::reply::json(&json!([
                {"number": 1, "title": "Staking feature", "body": "stake tokens", "state": "open",
                 "labels": [{"name": "enhancement"}]},
                {"number": 2, "title": "Old crash", "body": null, "state": "closed", "labels": []},
                {"number": 3, "title": "Add staking UI", "state": "open", "labels": [],
                 "pull_request": {"url": "https://example.invalid/pulls/3"}}
            ]))
        });

    let pulls = warp::path!("repos" / "acme" / "exchange" / "pulls")
        .and(warp::get())
        .map(|| {
            warp::reply::json(&json!([
                {"number": 3, "title": "Add staking UI", "body": "wip", "state": "open", "labels": []},
                {"number": 4, "title": "Admin login screen tweaks", "state": "open", "labels": [{"name": "ui"}]}
            ]))
        });

    let (addr, server) = warp::serve(issues.or(pulls)).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

fn scanner_config(addr: SocketAddr) -> ScannerConfig {
    ScannerConfig {
        api_url: format!("http://{addr}/"),
        token_env: "GAP_ANALYZER_TEST_TOKEN_THAT_IS_NEVER_SET".to_string(),
        timeout_secs: 5,
        per_page: 50,
    }
}

fn repository(repo: &str) -> RepositoryConfig {
    RepositoryConfig {
        name: repo.to_string(),
        owner: "acme".to_string(),
        repo: repo.to_string(),
        enabled: true,
    }
}

#[tokio::test]
async fn fetches_issues_and_pull_requests() {
    let addr = spawn_fake_github();
    let scanner = GitHubScanner::new(&repository("exchange"), &scanner_config(addr)).unwrap();

    assert_eq!(scanner.name(), "github:acme/exchange");
    let scan = scanner.fetch_scan().await.unwrap();

    let issue_numbers: Vec<u64> = scan.issues.iter().map(|issue| issue.number).collect();
    assert_eq!(issue_numbers, vec![1, 2]);
    assert_eq!(scan.issues[0].labels, vec!["enhancement".to_string()]);
    assert_eq!(scan.pull_requests.len(), 2);
    assert_eq!(scan.pull_requests[1].labels, vec!["ui".to_string()]);
    assert!((scan.health_score - 50.0).abs() < f64::EPSILON);
    assert!(scan.last_scan_time.is_some());
}

#[tokio::test]
async fn http_errors_become_scan_source_errors() {
    let addr = spawn_fake_github();
    let scanner = GitHubScanner::new(&repository("missing"), &scanner_config(addr)).unwrap();

    let error = scanner.fetch_scan().await.unwrap_err();

    match error {
        GapAnalyzerError::ScanSourceError { source_name, status_code, .. } => {
            assert_eq!(source_name, "github:acme/missing");
            assert_eq!(status_code, Some(404));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

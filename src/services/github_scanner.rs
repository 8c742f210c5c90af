use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use crate::config::constants::{timeout_duration, GITHUB_USER_AGENT};
use crate::enums::issue_state::IssueState;
use crate::errors::{GapAnalyzerError, GapResult};
use crate::structs::config::repository_config::RepositoryConfig;
use crate::structs::config::scanner_config::ScannerConfig;
use crate::structs::issue::Issue;
use crate::structs::pull_request::PullRequest;
use crate::structs::scan_result::ScanResult;
use crate::traits::scan_source::ScanSource;

#[derive(Deserialize)]
struct GitHubLabel {
    name: String,
}

#[derive(Deserialize)]
struct GitHubIssue {
    number: u64,
    title: String,
    #[serde(default)]
    body: Option<String>,
    state: IssueState,
    #[serde(default)]
    labels: Vec<GitHubLabel>,
    /// Present when the "issue" is really a pull request.
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct GitHubPullRequest {
    number: u64,
    title: String,
    #[serde(default)]
    body: Option<String>,
    state: IssueState,
    #[serde(default)]
    labels: Vec<GitHubLabel>,
}

/// Single-page snapshot of a repository's issues and open pull requests from the GitHub REST API.
pub struct GitHubScanner {
    client: Client,
    api_url: String,
    owner: String,
    repo: String,
    token: Option<String>,
    per_page: u32,
}

impl GitHubScanner {
    pub fn new(repository: &RepositoryConfig, scanner: &ScannerConfig) -> GapResult<Self> {
        let client = Client::builder()
            .user_agent(GITHUB_USER_AGENT)
            .timeout(timeout_duration(scanner.timeout_secs))
            .build()?;

        let token = std::env::var(&scanner.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty());
        if token.is_none() {
            log::debug!("{} is not set, scanning {} anonymously", scanner.token_env, repository.full_name());
        }

        Ok(Self {
            client,
            api_url: scanner.api_url.trim_end_matches('/').to_string(),
            owner: repository.owner.clone(),
            repo: repository.repo.clone(),
            token,
            per_page: scanner.per_page,
        })
    }

    /// Percentage of fetched issues that are closed; 100 for a repository without issues.
    pub fn health_score(issues: &[Issue]) -> f64 {
        if issues.is_empty() {
            return 100.0;
        }
        let closed = issues.iter().filter(|issue| !issue.state.is_open()).count();
        #[allow(clippy::cast_precision_loss)]
        let ratio = closed as f64 / issues.len() as f64;
        (ratio * 100.0).round()
    }

    fn request(&self, endpoint: &str, state: &str) -> RequestBuilder {
        let url = format!("{}/repos/{}/{}/{}", self.api_url, self.owner, self.repo, endpoint);
        let per_page = self.per_page.to_string();
        let request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .query(&[("state", state), ("per_page", per_page.as_str())]);

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, state: &str) -> GapResult<T> {
        let response = self.request(endpoint, state).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GapAnalyzerError::scan_source_error(
                &self.name(),
                &format!("GET {endpoint} returned {status}: {}", body.trim()),
                Some(status.as_u16()),
            ));
        }

        response.json::<T>().await.map_err(|e| {
            GapAnalyzerError::scan_source_error(
                &self.name(),
                &format!("malformed {endpoint} payload: {e}"),
                Some(status.as_u16()),
            )
        })
    }

    async fn fetch_issues(&self) -> GapResult<Vec<Issue>> {
        let raw: Vec<GitHubIssue> = self.get_json("issues", "all").await?;
        Ok(raw
            .into_iter()
            .filter(|issue| issue.pull_request.is_none())
            .map(|issue| Issue {
                number: issue.number,
                title: issue.title,
                body: issue.body,
                state: issue.state,
                labels: issue.labels.into_iter().map(|label| label.name).collect(),
            })
            .collect())
    }

    async fn fetch_pull_requests(&self) -> GapResult<Vec<PullRequest>> {
        let raw: Vec<GitHubPullRequest> = self.get_json("pulls", "open").await?;
        Ok(raw
            .into_iter()
            .map(|pr| PullRequest {
                number: pr.number,
                title: pr.title,
                body: pr.body,
                state: pr.state,
                labels: pr.labels.into_iter().map(|label| label.name).collect(),
            })
            .collect())
    }
}

#[async_trait]
impl ScanSource for GitHubScanner {
    fn name(&self) -> String {
        format!("github:{}/{}", self.owner, self.repo)
    }

    async fn fetch_scan(&self) -> GapResult<ScanResult> {
        log::info!("📥 Fetching issues and pull requests for {}/{}", self.owner, self.repo);
        let (issues, pull_requests) = futures::try_join!(self.fetch_issues(), self.fetch_pull_requests())?;
        log::debug!("Fetched {} issues and {} pull requests", issues.len(), pull_requests.len());

        let health_score = Self::health_score(&issues);
        Ok(ScanResult::new(issues, pull_requests, health_score).with_last_scan_time(Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(number: u64, state: IssueState) -> Issue {
        Issue {
            number,
            title: format!("Issue {number}"),
            body: None,
            state,
            labels: vec![],
        }
    }

    #[test]
    fn health_is_share_of_closed_issues() {
        let issues = vec![
            issue(1, IssueState::Closed),
            issue(2, IssueState::Closed),
            issue(3, IssueState::Open),
        ];
        assert!((GitHubScanner::health_score(&issues) - 67.0).abs() < f64::EPSILON);
        assert!((GitHubScanner::health_score(&[]) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn issue_payload_maps_labels_and_pull_request_marker() {
        let raw: Vec<GitHubIssue> = serde_json::from_str(
            r#"[
                {"number": 1, "title": "a", "body": null, "state": "open", "labels": [{"name": "enhancement", "color": "fff"}]},
                {"number": 2, "title": "b", "state": "closed", "labels": [], "pull_request": {"url": "x"}}
            ]"#,
        )
        .unwrap();
        assert_eq!(raw[0].labels[0].name, "enhancement");
        assert!(raw[0].pull_request.is_none());
        assert!(raw[1].pull_request.is_some());
    }
}

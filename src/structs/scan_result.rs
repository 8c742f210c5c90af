use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::structs::issue::Issue;
use crate::structs::pull_request::PullRequest;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub issues: Vec<Issue>,
    pub pull_requests: Vec<PullRequest>,
    pub health_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_scan_time: Option<DateTime<Utc>>,
}

impl ScanResult {
    pub const fn new(issues: Vec<Issue>, pull_requests: Vec<PullRequest>, health_score: f64) -> Self {
        Self {
            issues,
            pull_requests,
            health_score,
            last_scan_time: None,
        }
    }

    #[must_use]
    pub fn with_last_scan_time(mut self, last_scan_time: DateTime<Utc>) -> Self {
        self.last_scan_time = Some(last_scan_time);
        self
    }

    pub fn open_issue_count(&self) -> usize {
        self.issues.iter().filter(|issue| issue.state.is_open()).count()
    }
}

use serde::{Deserialize, Serialize};
use crate::enums::issue_state::IssueState;

/// Only consulted for the excluded-task report; never turned into a feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub state: IssueState,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl PullRequest {
    pub fn report_line(&self) -> String {
        format!("PR #{}: {}", self.number, self.title)
    }
}

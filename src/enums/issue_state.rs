use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl Default for IssueState {
    fn default() -> Self {
        Self::Open
    }
}

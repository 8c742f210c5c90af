use serde::{Deserialize, Serialize};
use crate::enums::issue_state::IssueState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub state: IssueState,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Issue {
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    /// Lower-cased title and body, matched separately so a keyword never spans the two.
    pub fn searchable_fields(&self) -> [String; 2] {
        [self.title.to_lowercase(), self.body_text().to_lowercase()]
    }

    pub fn lowercase_labels(&self) -> Vec<String> {
        self.labels.iter().map(|label| label.to_lowercase()).collect()
    }

    pub fn report_line(&self) -> String {
        format!("Issue #{}: {}", self.number, self.title)
    }
}

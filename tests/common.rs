use gap_analyzer::enums::issue_state::IssueState;
use gap_analyzer::structs::issue::Issue;
use gap_analyzer::structs::pull_request::PullRequest;

pub fn issue(number: u64, title: &str, labels: &[&str], body: Option<&str>) -> Issue {
    Issue {
        number,
        title: title.to_string(),
        body: body.map(ToString::to_string),
        state: IssueState::Open,
        labels: labels.iter().map(ToString::to_string).collect(),
    }
}

pub fn pull_request(number: u64, title: &str) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        body: None,
        state: IssueState::Open,
        labels: Vec::new(),
    }
}

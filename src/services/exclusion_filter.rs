use crate::config::constants::DEFAULT_EXCLUSION_PATTERNS;
use crate::structs::scan_result::ScanResult;

/// Case-insensitive substring match against a fixed set of out-of-scope patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionFilter {
    patterns: Vec<String>,
}

impl ExclusionFilter {
    /// Patterns are lower-cased as given; blank ones are dropped since they would match every title.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| pattern.as_ref().to_lowercase())
            .filter(|pattern| !pattern.trim().is_empty())
            .collect();

        Self { patterns }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_excluded(&self, title: &str) -> bool {
        self.matching_pattern(title).is_some()
    }

    pub fn matching_pattern(&self, title: &str) -> Option<&str> {
        let title = title.to_lowercase();
        self.patterns
            .iter()
            .find(|pattern| title.contains(pattern.as_str()))
            .map(String::as_str)
    }

    /// Every excluded issue then every excluded pull request, in scan order.
    /// Derived from the raw titles, independent of which issues were feature candidates.
    pub fn excluded_tasks(&self, scan_result: &ScanResult) -> Vec<String> {
        let issues = scan_result
            .issues
            .iter()
            .filter(|issue| self.is_excluded(&issue.title))
            .map(|issue| issue.report_line());

        let pull_requests = scan_result
            .pull_requests
            .iter()
            .filter(|pr| self.is_excluded(&pr.title))
            .map(|pr| pr.report_line());

        issues.chain(pull_requests).collect()
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUSION_PATTERNS)
    }
}

use crate::enums::feature_category::FeatureCategory;
use crate::enums::implementation_complexity::ImplementationComplexity;
use crate::enums::priority::Priority;
use crate::helpers::text_matcher::{any_contains, contains_any};
use crate::structs::classification::Classification;
use crate::structs::issue::Issue;

/// Ordered keyword rule; the first rule whose keywords hit decides the outcome.
pub struct KeywordRule<T: 'static> {
    pub keywords: &'static [&'static str],
    pub outcome: T,
}

/// Evaluated over labels and title.
pub const CATEGORY_RULES: &[KeywordRule<FeatureCategory>] = &[
    KeywordRule { keywords: &["security"], outcome: FeatureCategory::Security },
    KeywordRule { keywords: &["performance"], outcome: FeatureCategory::Performance },
    KeywordRule { keywords: &["ui", "ux"], outcome: FeatureCategory::Ui },
    KeywordRule { keywords: &["integration", "api"], outcome: FeatureCategory::Integration },
    KeywordRule { keywords: &["community"], outcome: FeatureCategory::Community },
];

/// Evaluated over labels only.
pub const PRIORITY_RULES: &[KeywordRule<Priority>] = &[
    KeywordRule { keywords: &["critical", "high-priority"], outcome: Priority::Critical },
    KeywordRule { keywords: &["high", "important"], outcome: Priority::High },
    KeywordRule { keywords: &["low", "low-priority"], outcome: Priority::Low },
];

/// Evaluated over title and body.
pub const COMPLEXITY_RULES: &[KeywordRule<ImplementationComplexity>] = &[
    KeywordRule { keywords: &["simple", "quick", "simple fix"], outcome: ImplementationComplexity::Simple },
    KeywordRule { keywords: &["complex", "major"], outcome: ImplementationComplexity::Complex },
];

pub const LAYOUT_KEYWORDS: &[&str] = &["layout", "design", "ui change", "interface", "styling", "visual"];

const FEATURE_LABEL_KEYWORDS: &[&str] = &["feature", "enhancement"];
const FEATURE_TITLE_KEYWORDS: &[&str] = &["feature"];

fn first_match<T: Copy>(rules: &[KeywordRule<T>], hit: impl Fn(&[&str]) -> bool, fallback: T) -> T {
    rules
        .iter()
        .find(|rule| hit(rule.keywords))
        .map_or(fallback, |rule| rule.outcome)
}

pub struct Classifier;

impl Classifier {
    /// A feature/enhancement label, or "feature" in the title.
    pub fn is_feature_like(issue: &Issue) -> bool {
        any_contains(&issue.lowercase_labels(), FEATURE_LABEL_KEYWORDS)
            || contains_any(&issue.title.to_lowercase(), FEATURE_TITLE_KEYWORDS)
    }

    pub fn classify(issue: &Issue) -> Classification {
        let labels = issue.lowercase_labels();
        let title = issue.title.to_lowercase();
        let title_and_body = issue.searchable_fields();

        Classification {
            category: Self::category(&labels, &title),
            priority: Self::priority(&labels),
            implementation_complexity: Self::complexity(&title_and_body),
            affects_layout: Self::affects_layout(&title_and_body),
        }
    }

    pub fn category(labels: &[String], title: &str) -> FeatureCategory {
        first_match(
            CATEGORY_RULES,
            |keywords| any_contains(labels, keywords) || contains_any(title, keywords),
            FeatureCategory::Core,
        )
    }

    pub fn priority(labels: &[String]) -> Priority {
        first_match(PRIORITY_RULES, |keywords| any_contains(labels, keywords), Priority::Medium)
    }

    pub fn complexity(title_and_body: &[String]) -> ImplementationComplexity {
        first_match(
            COMPLEXITY_RULES,
            |keywords| any_contains(title_and_body, keywords),
            ImplementationComplexity::Moderate,
        )
    }

    pub fn affects_layout(title_and_body: &[String]) -> bool {
        any_contains(title_and_body, LAYOUT_KEYWORDS)
    }
}

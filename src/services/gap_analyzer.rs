use std::collections::{BTreeMap, BTreeSet};
use crate::config::constants::{DEFAULT_DESCRIPTION_MAX_CHARS, NO_DESCRIPTION};
use crate::config::gap_catalog::default_gap_catalog;
use crate::enums::priority::Priority;
use crate::errors::{GapAnalyzerError, GapResult};
use crate::helpers::text_matcher::truncate_chars;
use crate::services::classifier::Classifier;
use crate::services::estimator::Estimator;
use crate::services::exclusion_filter::ExclusionFilter;
use crate::services::scan_validator::ScanValidator;
use crate::structs::config::analyzer_config::AnalyzerConfig;
use crate::structs::deep_analysis_result::DeepAnalysisResult;
use crate::structs::issue::Issue;
use crate::structs::missing_feature::MissingFeature;
use crate::structs::scan_result::ScanResult;

/// Turns a `ScanResult` into a prioritized feature-gap report.
///
/// Holds only read-only tables (exclusion patterns and gap catalog), so one
/// instance can serve any number of concurrent `analyze` calls.
#[derive(Debug, Clone)]
pub struct GapAnalyzer {
    exclusion_filter: ExclusionFilter,
    catalog: Vec<MissingFeature>,
    description_max_chars: usize,
}

impl GapAnalyzer {
    pub const fn new(exclusion_filter: ExclusionFilter, catalog: Vec<MissingFeature>) -> Self {
        Self {
            exclusion_filter,
            catalog,
            description_max_chars: DEFAULT_DESCRIPTION_MAX_CHARS,
        }
    }

    #[must_use]
    pub fn with_description_max_chars(mut self, description_max_chars: usize) -> Self {
        self.description_max_chars = description_max_chars;
        self
    }

    pub fn from_config(config: &AnalyzerConfig) -> GapResult<Self> {
        let mut catalog = if config.use_default_catalog {
            default_gap_catalog()
        } else {
            Vec::new()
        };

        for entry in &config.catalog {
            if entry.name.trim().is_empty() {
                return Err(GapAnalyzerError::config_error(
                    "catalog entries need a name",
                    Some("analyzer.catalog.name"),
                    None,
                ));
            }
            if entry.estimated_hours == Some(0) {
                return Err(GapAnalyzerError::config_error(
                    &format!("catalog entry '{}' has zero estimated hours", entry.name),
                    Some("analyzer.catalog.estimated_hours"),
                    Some("Remove estimated_hours to let the estimator compute it"),
                ));
            }
            catalog.push(entry.to_feature());
        }

        Ok(Self::new(ExclusionFilter::new(&config.exclusion_patterns), catalog)
            .with_description_max_chars(config.description_max_chars))
    }

    pub const fn exclusion_filter(&self) -> &ExclusionFilter {
        &self.exclusion_filter
    }

    pub fn catalog(&self) -> &[MissingFeature] {
        &self.catalog
    }

    /// Validates an untyped payload first, then analyzes it.
    pub fn analyze_value(&self, payload: serde_json::Value) -> GapResult<DeepAnalysisResult> {
        let scan_result = ScanValidator::from_value(payload)?;
        self.analyze(scan_result)
    }

    pub fn analyze(&self, scan_result: ScanResult) -> GapResult<DeepAnalysisResult> {
        ScanValidator::validate(&scan_result)?;

        let issue_features: Vec<MissingFeature> = scan_result
            .issues
            .iter()
            .filter(|issue| self.is_candidate(issue))
            .map(|issue| self.feature_from_issue(issue))
            .collect();
        log::debug!("Classified {} feature-like open issues", issue_features.len());

        let missing_features: Vec<MissingFeature> = issue_features
            .into_iter()
            .chain(self.catalog.iter().cloned())
            .filter(|feature| self.keep_feature(feature))
            .collect();

        let excluded_tasks = self.exclusion_filter.excluded_tasks(&scan_result);
        let priority_breakdown = Self::priority_breakdown(&missing_features);

        log::info!(
            "Gap analysis: {} missing features, {} excluded tasks",
            missing_features.len(),
            excluded_tasks.len()
        );

        Ok(DeepAnalysisResult {
            total_missing_count: missing_features.len(),
            scan_result,
            missing_features,
            excluded_tasks,
            priority_breakdown,
        })
    }

    fn is_candidate(&self, issue: &Issue) -> bool {
        if !issue.state.is_open() {
            return false;
        }
        if let Some(pattern) = self.exclusion_filter.matching_pattern(&issue.title) {
            log::debug!("Skipping issue #{} ('{}'): matches '{}'", issue.number, issue.title, pattern);
            return false;
        }
        Classifier::is_feature_like(issue)
    }

    fn keep_feature(&self, feature: &MissingFeature) -> bool {
        match self.exclusion_filter.matching_pattern(&feature.name) {
            Some(pattern) => {
                log::debug!("Dropping feature '{}': matches '{}'", feature.name, pattern);
                false
            }
            None => true,
        }
    }

    fn feature_from_issue(&self, issue: &Issue) -> MissingFeature {
        let classification = Classifier::classify(issue);
        let body = issue.body_text().trim();
        let description = if body.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            truncate_chars(body, self.description_max_chars)
        };

        MissingFeature {
            category: classification.category,
            name: issue.title.clone(),
            description,
            priority: classification.priority,
            implementation_complexity: classification.implementation_complexity,
            affects_layout: classification.affects_layout,
            related_issues: BTreeSet::from([issue.number]),
            estimated_hours: Estimator::estimate_hours(
                classification.implementation_complexity,
                classification.affects_layout,
            ),
        }
    }

    fn priority_breakdown(features: &[MissingFeature]) -> BTreeMap<Priority, usize> {
        features.iter().fold(BTreeMap::new(), |mut breakdown, feature| {
            *breakdown.entry(feature.priority).or_insert(0) += 1;
            breakdown
        })
    }
}

impl Default for GapAnalyzer {
    fn default() -> Self {
        Self::new(ExclusionFilter::default(), default_gap_catalog())
    }
}

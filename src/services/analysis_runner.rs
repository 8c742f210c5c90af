use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use crate::errors::{GapAnalyzerError, GapResult};
use crate::services::gap_analyzer::GapAnalyzer;
use crate::structs::deep_analysis_result::DeepAnalysisResult;
use crate::traits::scan_source::ScanSource;

/// Awaits one scan-source fetch, then runs the analyzer on it.
///
/// There is no retry: a failed or timed-out fetch is returned to the caller as is,
/// and a fetch abandoned by the timeout never yields a partial report.
pub struct AnalysisRunner {
    analyzer: Arc<GapAnalyzer>,
    fetch_timeout: Duration,
}

impl AnalysisRunner {
    pub const fn new(analyzer: Arc<GapAnalyzer>, fetch_timeout: Duration) -> Self {
        Self { analyzer, fetch_timeout }
    }

    pub async fn run(&self, source: &dyn ScanSource) -> GapResult<DeepAnalysisResult> {
        let source_name = source.name();
        log::debug!("Fetching scan from {source_name}");

        let scan_result = match timeout(self.fetch_timeout, source.fetch_scan()).await {
            Ok(fetched) => fetched?,
            Err(_) => {
                log::warn!("⏰ Scan from {} timed out after {:?}", source_name, self.fetch_timeout);
                return Err(GapAnalyzerError::scan_source_error(
                    &source_name,
                    &format!("timed out after {}s", self.fetch_timeout.as_secs()),
                    None,
                ));
            }
        };

        self.analyzer.analyze(scan_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::issue_state::IssueState;
    use crate::services::exclusion_filter::ExclusionFilter;
    use crate::structs::issue::Issue;
    use crate::structs::scan_result::ScanResult;
    use crate::traits::scan_source::MockScanSource;

    fn runner() -> AnalysisRunner {
        let analyzer = GapAnalyzer::new(ExclusionFilter::default(), Vec::new());
        AnalysisRunner::new(Arc::new(analyzer), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn analyzes_what_the_source_returns() {
        let mut source = MockScanSource::new();
        source.expect_name().return_const("mock".to_string());
        source.expect_fetch_scan().times(1).returning(|| {
            Ok(ScanResult::new(
                vec![Issue {
                    number: 9,
                    title: "Add real-time notifications feature".to_string(),
                    body: Some("need websockets".to_string()),
                    state: IssueState::Open,
                    labels: vec!["enhancement".to_string()],
                }],
                vec![],
                75.0,
            ))
        });

        let result = runner().run(&source).await.unwrap();

        assert_eq!(result.total_missing_count, 1);
        assert_eq!(result.missing_features[0].estimated_hours, 8);
    }

    #[tokio::test]
    async fn source_errors_propagate_unchanged() {
        let mut source = MockScanSource::new();
        source.expect_name().return_const("mock".to_string());
        source
            .expect_fetch_scan()
            .returning(|| Err(GapAnalyzerError::scan_source_error("mock", "401 Unauthorized", Some(401))));

        let error = runner().run(&source).await.unwrap_err();

        assert_eq!(error, GapAnalyzerError::scan_source_error("mock", "401 Unauthorized", Some(401)));
    }

    struct StalledSource;

    #[async_trait::async_trait]
    impl ScanSource for StalledSource {
        fn name(&self) -> String {
            "stalled".to_string()
        }

        async fn fetch_scan(&self) -> GapResult<ScanResult> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(ScanResult::new(vec![], vec![], 100.0))
        }
    }

    #[tokio::test]
    async fn slow_sources_time_out_as_scan_source_errors() {
        let runner = AnalysisRunner::new(Arc::new(GapAnalyzer::default()), Duration::from_millis(20));

        let error = runner.run(&StalledSource).await.unwrap_err();

        assert!(matches!(error, GapAnalyzerError::ScanSourceError { ref source_name, .. } if source_name == "stalled"));
        assert!(error.is_recoverable());
    }

    #[tokio::test]
    async fn invalid_scans_fail_the_whole_run() {
        let mut source = MockScanSource::new();
        source.expect_name().return_const("mock".to_string());
        source
            .expect_fetch_scan()
            .returning(|| Ok(ScanResult::new(vec![], vec![], 250.0)));

        let error = runner().run(&source).await.unwrap_err();

        assert!(matches!(error, GapAnalyzerError::InvalidScanResultError { .. }));
    }
}

use async_trait::async_trait;
use crate::errors::GapResult;
use crate::structs::scan_result::ScanResult;

/// Where a `ScanResult` comes from. Implementations own transport, auth and
/// payload decoding; failures surface as `ScanSourceError` or `InvalidScanResultError`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScanSource: Send + Sync {
    /// Human-readable origin, used in logs and error messages.
    fn name(&self) -> String;

    async fn fetch_scan(&self) -> GapResult<ScanResult>;
}

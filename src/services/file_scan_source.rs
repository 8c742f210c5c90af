use std::io::Read;
use std::path::PathBuf;
use async_trait::async_trait;
use crate::errors::{GapAnalyzerError, GapResult};
use crate::services::scan_validator::ScanValidator;
use crate::structs::scan_result::ScanResult;
use crate::traits::scan_source::ScanSource;

/// Reads a JSON `ScanResult` exported by some other scanner. `-` reads stdin.
pub struct FileScanSource {
    path: PathBuf,
}

impl FileScanSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    async fn read_payload(&self) -> GapResult<String> {
        if self.is_stdin() {
            return tokio::task::spawn_blocking(|| {
                let mut payload = String::new();
                std::io::stdin().read_to_string(&mut payload).map(|_| payload)
            })
            .await
            .map_err(|e| GapAnalyzerError::system_error("reading stdin", &e.to_string()))?
            .map_err(|e| GapAnalyzerError::file_error("-", "read", &e.to_string()));
        }

        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| GapAnalyzerError::file_error(&self.path.display().to_string(), "read", &e.to_string()))
    }
}

#[async_trait]
impl ScanSource for FileScanSource {
    fn name(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            format!("file:{}", self.path.display())
        }
    }

    async fn fetch_scan(&self) -> GapResult<ScanResult> {
        log::info!("📂 Loading scan result from {}", self.name());
        let payload = self.read_payload().await?;
        ScanValidator::from_json_str(&payload)
    }
}

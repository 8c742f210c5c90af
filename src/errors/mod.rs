use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum GapAnalyzerError {
    // Upstream scan errors
    #[error("Scan source '{source_name}' failed: {reason}")]
    ScanSourceError {
        source_name: String,
        reason: String,
        status_code: Option<u16>,
    },

    // Structural validation errors
    #[error("Invalid scan result: '{field}' {reason}")]
    InvalidScanResultError {
        field: String,
        reason: String,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Repository errors
    #[error("Repository '{name}' not found")]
    RepositoryNotFound {
        name: String,
        available: Vec<String>,
    },

    // File operation errors
    #[error("File operation '{operation}' failed for '{file_path}': {reason}")]
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // HTTP server errors
    #[error("Server error during {operation}: {reason}")]
    ServerError {
        operation: String,
        reason: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl GapAnalyzerError {
    pub fn scan_source_error(source_name: &str, reason: &str, status_code: Option<u16>) -> Self {
        Self::ScanSourceError {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
            status_code,
        }
    }

    pub fn invalid_scan_result(field: &str, reason: &str) -> Self {
        Self::InvalidScanResultError {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn config_file_error(path: &str, reason: &str) -> Self {
        Self::ConfigurationFileError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn server_error(operation: &str, reason: &str) -> Self {
        Self::ServerError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Stable machine-readable name, used as the `error` field of API payloads.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ScanSourceError { .. } => "ScanSourceError",
            Self::InvalidScanResultError { .. } => "InvalidScanResultError",
            Self::ConfigurationError { .. } => "ConfigurationError",
            Self::ConfigurationFileError { .. } => "ConfigurationFileError",
            Self::RepositoryNotFound { .. } => "RepositoryNotFound",
            Self::FileOperationError { .. } => "FileOperationError",
            Self::ParseError { .. } => "ParseError",
            Self::ServerError { .. } => "ServerError",
            Self::SystemError { .. } => "SystemError",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::ScanSourceError { .. } | Self::ConfigurationError { .. } => true,
            Self::InvalidScanResultError { .. }
            | Self::ConfigurationFileError { .. }
            | Self::RepositoryNotFound { .. }
            | Self::FileOperationError { .. }
            | Self::ParseError { .. }
            | Self::ServerError { .. }
            | Self::SystemError { .. } => false,
        }
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::InvalidScanResultError { .. }
            | Self::ConfigurationFileError { .. }
            | Self::FileOperationError { .. }
            | Self::ServerError { .. } => ErrorSeverity::High,
            Self::ScanSourceError { .. } | Self::RepositoryNotFound { .. } | Self::ParseError { .. } => {
                ErrorSeverity::Medium
            }
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ScanSourceError { source_name, reason, status_code } => {
                let mut msg = format!("Scan source '{source_name}' failed: {reason}");
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {code})"));
                }
                msg.push_str("\n💡 Check your network connection and token, then retry the analysis");
                msg
            }
            Self::InvalidScanResultError { field, reason } => {
                format!("Invalid scan result: '{field}' {reason}\n💡 A scan result needs 'issues', 'pullRequests' and 'healthScore'")
            }
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{path}': {reason}\n💡 Check file permissions and syntax")
            }
            Self::RepositoryNotFound { name, available } => {
                let mut msg = format!("Repository '{name}' not found");
                if !available.is_empty() {
                    msg.push_str(&format!("\n💡 Available repositories: {}", available.join(", ")));
                }
                msg
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{operation}' failed for '{file_path}': {reason}\n💡 Check file permissions and path")
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {content_type}: {reason}");
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {line})"));
                }
                msg.push_str("\n💡 Check the format and syntax of the input");
                msg
            }
            Self::ServerError { operation, reason } => {
                format!("Server error during {operation}: {reason}\n💡 Check that the port is free")
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {operation}: {reason}")
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for analyzer operations
pub type GapResult<T> = Result<T, GapAnalyzerError>;

/// Error handler for consistent error reporting at the CLI boundary
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &GapAnalyzerError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for GapAnalyzerError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for GapAnalyzerError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for GapAnalyzerError {
    fn from(error: toml::de::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<toml::ser::Error> for GapAnalyzerError {
    fn from(error: toml::ser::Error) -> Self {
        Self::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for GapAnalyzerError {
    fn from(error: reqwest::Error) -> Self {
        Self::ScanSourceError {
            source_name: error
                .url()
                .map_or_else(|| "HTTP request".to_string(), ToString::to_string),
            reason: error.to_string(),
            status_code: error.status().map(|s| s.as_u16()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_source_errors_are_recoverable() {
        let error = GapAnalyzerError::scan_source_error("github", "timed out", None);
        assert!(error.is_recoverable());
        assert_eq!(error.kind(), "ScanSourceError");
    }

    #[test]
    fn invalid_scan_result_names_the_field() {
        let error = GapAnalyzerError::invalid_scan_result("healthScore", "is missing");
        assert!(!error.is_recoverable());
        assert_eq!(error.severity(), ErrorSeverity::High);
        assert_eq!(error.to_string(), "Invalid scan result: 'healthScore' is missing");
    }

    #[test]
    fn repository_not_found_lists_alternatives() {
        let error = GapAnalyzerError::RepositoryNotFound {
            name: "missing".to_string(),
            available: vec!["exchange".to_string(), "wallet".to_string()],
        };
        assert!(error.user_message().contains("exchange, wallet"));
    }
}

use thiserror::Error;

pub const DEFAULT_LOAD_FAILURE: &str = "Failed to load advocates";

/// 載入 advocates 失敗的唯一分類：網路錯誤、非 2xx 狀態、或回應內容無法解析
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("{}", non_empty_or_default(.0))]
    Network(String),

    #[error("HTTP {0}")]
    HttpStatus(u16),

    #[error("{}", non_empty_or_default(.0))]
    Parse(String),
}

impl LoadError {
    /// 顯示給使用者的訊息
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::HttpStatus(status.as_u16()),
            None => LoadError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

fn non_empty_or_default(message: &str) -> &str {
    if message.trim().is_empty() {
        DEFAULT_LOAD_FAILURE
    } else {
        message
    }
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to load advocates: {0}")]
    LoadError(#[from] LoadError),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration '{field}' is invalid: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::LoadError(_) => ErrorCategory::Network,
            DirectoryError::ConfigError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::MissingConfigError { .. }
            | DirectoryError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            DirectoryError::CsvError(_) | DirectoryError::SerializationError(_) => {
                ErrorCategory::Output
            }
            DirectoryError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路問題通常可以稍後重試
            DirectoryError::LoadError(LoadError::Network(_)) => ErrorSeverity::Medium,
            DirectoryError::LoadError(LoadError::HttpStatus(code)) if *code >= 500 => {
                ErrorSeverity::Medium
            }
            DirectoryError::LoadError(_) => ErrorSeverity::High,
            DirectoryError::ConfigError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::MissingConfigError { .. }
            | DirectoryError::ConfigValidationError { .. } => ErrorSeverity::High,
            DirectoryError::CsvError(_) | DirectoryError::SerializationError(_) => {
                ErrorSeverity::High
            }
            DirectoryError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::LoadError(e) => format!("Error: {}", e.user_message()),
            DirectoryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            DirectoryError::MissingConfigError { field } => {
                format!("Missing setting '{}'", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the advocates endpoint is reachable and returns { \"data\": [...] }"
            }
            ErrorCategory::Configuration => {
                "Check the command-line flags and the TOML configuration file"
            }
            ErrorCategory::Output => "Try a different --format or check the record contents",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;

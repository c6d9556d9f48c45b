use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventGetterError {
    #[error("Expected 3 arguments (year, month, keyword), got {count}")]
    ArgumentCountError { count: usize },

    #[error("Year is not a number: {value}")]
    InvalidYearError { value: String },

    #[error("Month is not a number: {value}")]
    InvalidMonthError { value: String },

    #[error("Month out of range: {value}")]
    MonthOutOfRangeError { value: i32 },

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EventGetterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EventGetterError::ArgumentCountError { .. }
            | EventGetterError::InvalidYearError { .. }
            | EventGetterError::InvalidMonthError { .. }
            | EventGetterError::MonthOutOfRangeError { .. } => ErrorCategory::Input,
            EventGetterError::HttpStatusError { .. } | EventGetterError::ApiError(_) => {
                ErrorCategory::Network
            }
            EventGetterError::ConfigValidationError { .. }
            | EventGetterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EventGetterError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 顯示給使用者的訊息 (輸入錯誤時直接印到標準輸出)
    pub fn user_friendly_message(&self) -> String {
        match self {
            EventGetterError::ArgumentCountError { .. } => {
                "provide a 4-digit year, 2-digit month, and keyword".to_string()
            }
            EventGetterError::InvalidYearError { .. } => "year must be numeric".to_string(),
            EventGetterError::InvalidMonthError { .. } => "month must be numeric".to_string(),
            EventGetterError::MonthOutOfRangeError { .. } => {
                "month must be between 1 and 12".to_string()
            }
            EventGetterError::HttpStatusError { status, .. } => status.to_string(),
            EventGetterError::ApiError(e) => format!("request failed: {}", e),
            EventGetterError::IoError(e) => format!("I/O failure: {}", e),
            EventGetterError::ConfigValidationError { field, message } => {
                format!("invalid configuration ({}): {}", field, message)
            }
            EventGetterError::InvalidConfigValueError { field, reason, .. } => {
                format!("invalid configuration ({}): {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EventGetterError::ArgumentCountError { .. } => {
                "Run as: event-getter <year> <month> <keyword>"
            }
            EventGetterError::InvalidYearError { .. } => "Pass the year as digits, e.g. 2024",
            EventGetterError::InvalidMonthError { .. }
            | EventGetterError::MonthOutOfRangeError { .. } => {
                "Pass the month as a number from 1 to 12"
            }
            EventGetterError::HttpStatusError { .. } => {
                "Check the service endpoint and query parameters"
            }
            EventGetterError::ApiError(_) => "Check network connectivity and the service endpoint",
            EventGetterError::IoError(_) => "Check that standard output is writable",
            EventGetterError::ConfigValidationError { .. }
            | EventGetterError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, EventGetterError>;

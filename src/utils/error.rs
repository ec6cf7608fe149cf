use crate::domain::messages;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("name is empty")]
    EmptyName,

    #[error("user \"{name}\" already exists")]
    DuplicateName { name: String },

    #[error("user \"{name}\" not found")]
    NotFound { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入造成的結果，可直接回報
    Input,
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

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::EmptyName
            | RosterError::DuplicateName { .. }
            | RosterError::NotFound { .. } => ErrorCategory::Input,
            RosterError::TomlError(_)
            | RosterError::ConfigError { .. }
            | RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RosterError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 名冊操作本身的失敗 (空白、重複、找不到)
    pub fn is_registry_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    /// 顯示給使用者的訊息；名冊錯誤直接對應訊息目錄
    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::EmptyName => messages::EMPTY_NAME.to_string(),
            RosterError::DuplicateName { .. } => messages::DUPLICATE_USER.to_string(),
            RosterError::NotFound { .. } => messages::USER_NOT_FOUND.to_string(),
            RosterError::IoError(e) => format!("Terminal I/O failed: {}", e),
            RosterError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            RosterError::ConfigError { message } => format!("Configuration problem: {}", message),
            RosterError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            RosterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RosterError::EmptyName => "Type a name before submitting",
            RosterError::DuplicateName { .. } => "Pick a name that is not on the list yet",
            RosterError::NotFound { .. } => "Use `list` to see the current names",
            RosterError::IoError(_) => "Check that stdin/stdout are still attached",
            RosterError::TomlError(_) => "Fix the TOML syntax in the config file",
            RosterError::ConfigError { .. } => "Review the config file and command line flags",
            RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. } => {
                "Remove blank or repeated seed names and keep the prompt on one line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

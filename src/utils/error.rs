use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Verification task failed: {message}")]
    TaskFailed { message: String },

    #[error("Expected {expected} results but collected {received}")]
    IncompleteResults { expected: usize, received: usize },
}

impl CheckError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::IoError(e) => format!("Could not read a required file: {}", e),
            CheckError::SerializationError(e) => format!("Could not render output: {}", e),
            CheckError::ConfigParseError { message } => {
                format!("The configuration file is not valid TOML: {}", message)
            }
            CheckError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            CheckError::TaskFailed { .. } => "A verification worker stopped unexpectedly".to_string(),
            CheckError::IncompleteResults { expected, received } => format!(
                "Only {} of {} conditions reported back",
                received, expected
            ),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CheckError::IoError(_) => "Check that the --config path exists and is readable",
            CheckError::SerializationError(_) => "Re-run without --json",
            CheckError::ConfigParseError { .. } => {
                "Fix the TOML syntax, or omit --config to use the built-in fixtures"
            }
            CheckError::InvalidConfigValueError { .. } => {
                "Correct the listed field in the configuration file"
            }
            CheckError::TaskFailed { .. } | CheckError::IncompleteResults { .. } => {
                "Re-run with --verbose and report the log output"
            }
        }
    }

    /// 結束碼：配置錯誤為 1，驗證執行錯誤為 2，輸出錯誤為 3
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::IoError(_)
            | CheckError::ConfigParseError { .. }
            | CheckError::InvalidConfigValueError { .. } => 1,
            CheckError::TaskFailed { .. } | CheckError::IncompleteResults { .. } => 2,
            CheckError::SerializationError(_) => 3,
        }
    }

    /// 記錄錯誤並以對應結束碼離開
    pub fn exit(&self) -> ! {
        tracing::error!("❌ {}", self);
        eprintln!("❌ {}", self.user_friendly_message());
        eprintln!("💡 {}", self.recovery_suggestion());
        std::process::exit(self.exit_code())
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

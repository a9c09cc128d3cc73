use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Payload serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
}

impl ProbeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProbeError::Transport(_) => ErrorCategory::Network,
            ProbeError::Decode(_) => ErrorCategory::Data,
            ProbeError::Serialization(_) | ProbeError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// 程序結束碼：配置錯誤 1、傳輸錯誤 2、解析錯誤 3
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Data => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

//! 错误类型
//!
//! - `StoreError`: 存储层失败
//! - `CheckError`: 提交检查时的校验失败或存储失败
//! - `ConfigError`: 启动配置错误

/// 用户看到的通用失败提示
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("unsupported order spec: {0}")]
    InvalidOrder(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("one or both inputs are empty")]
    MissingInput,

    #[error("inputs are identical")]
    SameInput,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl CheckError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CheckError::MissingInput | CheckError::SameInput)
    }

    /// 返回给前端展示的文案
    pub fn user_message(&self) -> &'static str {
        match self {
            CheckError::MissingInput => "Please enter both words or phrases",
            CheckError::SameInput => "Please enter different words or phrases",
            CheckError::Store(_) => GENERIC_FAILURE_MESSAGE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

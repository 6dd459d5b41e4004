//! 统一错误处理
//!
//! 提供应用级错误类型：
//! - [`AppError`] - 应用错误枚举
//!
//! 种子工具的错误策略是二元的：任何未处理的失败向上传播到 `main`，
//! 记录日志后以非零状态退出。没有部分成功，没有重试。

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 资源不存在
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// 数据校验失败
    #[error("Validation error: {0}")]
    Validation(String),

    /// 数据库错误
    #[error("Database error: {0}")]
    Database(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(String),

    /// 完整性检查未通过
    #[error("Integrity check failed: {0} violation(s)")]
    IntegrityViolations(usize),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<surrealdb::Error> for AppError {
    fn from(err: surrealdb::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型
//! - [`money`] - 金额计算 (rust_decimal)
//! - [`time`] - 样本数据时间轴工具
//! - 日志、校验等工具

pub mod error;
pub mod logger;
pub mod money;
pub mod result;
pub mod time;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;

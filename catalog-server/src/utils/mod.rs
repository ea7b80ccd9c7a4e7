//! 工具模块 - 日志和表单校验
//!
//! # 内容
//!
//! - [`logger`] - 日志初始化与旧日志清理
//! - [`validation`] - 文本长度校验

pub mod logger;
pub mod validation;

// Re-export error types used by handlers
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};

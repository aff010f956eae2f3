//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型 (from shared::error)
//! - 日志初始化
//! - 时间工具

pub mod error;
pub mod logger;
pub mod time;

pub use shared::error::{AppError, AppResult, ErrorCode};

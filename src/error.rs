//! # 统一错误处理模块
//!
//! 定义 mechkit 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// mechkit 统一错误类型
#[derive(Error, Debug)]
pub enum MechkitError {
    // ─────────────────────────────────────────────────────────────
    // 滑移系构造错误
    // ─────────────────────────────────────────────────────────────
    #[error("Number of slip planes ({planes}) does not match input slip direction groups ({groups})")]
    PlaneCountMismatch { planes: usize, groups: usize },

    #[error("Slip plane {plane} has {found} directions, expected {expected}")]
    UnevenDirections {
        plane: usize,
        expected: usize,
        found: usize,
    },

    #[error("Slip system needs at least one plane with at least one direction")]
    EmptySystem,

    #[error("Zero-length vector: {0}")]
    ZeroVector(String),

    // ─────────────────────────────────────────────────────────────
    // 查询错误
    // ─────────────────────────────────────────────────────────────
    #[error("{what} index {index} out of range (len {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid vector '{input}': {reason}")]
    InvalidVector { input: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 振动模型错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid model parameter {name} = {value} (must be finite and > 0)")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Characteristic equation has no real natural frequencies")]
    NoRealModes,

    #[error("Mode shape is singular at omega = {0} rad/s")]
    SingularModeShape(f64),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MechkitError>;

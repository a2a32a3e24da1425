//! # 数据模型模块
//!
//! 定义精确有理数向量，供滑移系分析使用。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `slip/` 使用
//! - 子模块: vector

pub mod vector;

pub use vector::MillerVector;

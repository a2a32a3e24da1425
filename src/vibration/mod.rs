//! # 振动分析模块
//!
//! 车辆悬架两自由度（垂向 + 俯仰）模型的固有频率与振型。
//!
//! ## 子模块
//! - `suspension`: 模型与求解
//! - `export`: 振型曲线导出
//!
//! ## 依赖关系
//! - 被 `commands/modes.rs` 使用

pub mod export;
pub mod suspension;

pub use suspension::{to_hertz, SuspensionModel};

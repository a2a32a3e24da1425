//! # 解析器模块
//!
//! 提供命令行输入的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: vector

pub mod vector;

pub use vector::{parse_vector, parse_vector_list};

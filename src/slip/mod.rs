//! # 滑移系分析模块
//!
//! 计算单晶在给定加载方向下各滑移系的 Schmid 因子，并生成 LaTeX 表格。
//!
//! ## 子模块
//! - `system`: 滑移系与余弦计算
//! - `rounding`: 有效数字舍入
//! - `format`: 晶体学记号
//! - `table`: LaTeX 表格与输出端
//! - `presets`: 内置 FCC/BCC 滑移系族
//! - `export`: CSV 导出
//!
//! ## 依赖关系
//! - 被 `commands/schmid.rs` 使用
//! - 使用 `models/vector.rs`

pub mod export;
pub mod format;
pub mod presets;
pub mod rounding;
pub mod system;
pub mod table;

pub use presets::SlipFamily;
pub use system::{SchmidEntry, SlipSystem};
pub use table::{TableSink, WriterSink};

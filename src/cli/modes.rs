//! # modes 子命令 CLI 定义
//!
//! 悬架两自由度模型参数，默认值为参考车辆的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/modes.rs`

use clap::Args;
use std::path::PathBuf;

/// modes 子命令参数
#[derive(Args, Debug)]
pub struct ModesArgs {
    /// Front spring rate (N/m)
    #[arg(long, default_value_t = 1.6e4)]
    pub k1: f64,

    /// Rear spring rate (N/m)
    #[arg(long, default_value_t = 2.5e4)]
    pub k2: f64,

    /// Distance from centre of gravity to front spring (m)
    #[arg(long, default_value_t = 1.5)]
    pub l1: f64,

    /// Distance from centre of gravity to rear spring (m)
    #[arg(long, default_value_t = 1.1)]
    pub l2: f64,

    /// Sprung mass (kg)
    #[arg(long, default_value_t = 730.0)]
    pub mass: f64,

    /// Pitch moment of inertia about the centre of gravity (kg·m²)
    #[arg(long, default_value_t = 1350.0)]
    pub inertia: f64,

    // ─────────────────────────────────────────────────────────────
    // 振型曲线采样
    // ─────────────────────────────────────────────────────────────
    /// Start of the mode-shape sweep (rad/s)
    #[arg(long, default_value_t = 6.5)]
    pub sweep_start: f64,

    /// End of the mode-shape sweep (rad/s)
    #[arg(long, default_value_t = 8.0)]
    pub sweep_end: f64,

    /// Number of sweep samples
    #[arg(long, default_value_t = 1000)]
    pub samples: usize,

    /// Export the sampled mode-shape curve to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

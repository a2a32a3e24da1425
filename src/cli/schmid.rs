//! # schmid 子命令 CLI 定义
//!
//! 滑移系 Schmid 因子分析。滑移面用 `--plane` 逐个给出，每个 `--plane`
//! 按顺序对应一个 `--dirs`（同一面上的方向用 `;` 分隔）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/schmid.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 内置滑移系族
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SlipPreset {
    /// Face-centred cubic {111}<110>
    Fcc,
    /// Body-centred cubic {110}<111>
    Bcc,
}

impl std::fmt::Display for SlipPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlipPreset::Fcc => write!(f, "fcc"),
            SlipPreset::Bcc => write!(f, "bcc"),
        }
    }
}

/// schmid 子命令参数
#[derive(Args, Debug)]
pub struct SchmidArgs {
    /// Loading direction, e.g. "0,0,1", "[1 1 1]" or "001"
    #[arg(short, long, allow_hyphen_values = true)]
    pub force: String,

    /// Slip plane normal; repeat once per plane
    #[arg(short, long = "plane", allow_hyphen_values = true)]
    pub planes: Vec<String>,

    /// Slip directions on the matching --plane, separated by ';'
    #[arg(short, long = "dirs", allow_hyphen_values = true)]
    pub dirs: Vec<String>,

    /// Use a built-in slip family instead of --plane/--dirs
    #[arg(long, value_enum, conflicts_with_all = ["planes", "dirs"])]
    pub preset: Option<SlipPreset>,

    /// Significant figures for cosines and Schmid factors
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=15))]
    pub digits: u32,

    /// Also write the LaTeX source to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export the computed columns to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Skip the terminal preview table
    #[arg(long, default_value_t = false)]
    pub no_preview: bool,
}

//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `schmid`: 滑移系 Schmid 因子表
//! - `modes`: 悬架固有频率与振型
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: schmid, modes

pub mod modes;
pub mod schmid;

use clap::{Parser, Subcommand};

/// mechkit - 工程分析小工具箱
#[derive(Parser)]
#[command(name = "mechkit")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Slip-system Schmid factors and suspension vibration modes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute Schmid factors for slip systems and emit a LaTeX table
    Schmid(schmid::SchmidArgs),

    /// Compute bounce/pitch natural frequencies and mode shapes of a suspension
    Modes(modes::ModesArgs),
}

//! # mechkit - 工程分析小工具箱
//!
//! 将零散的工程分析脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `schmid` - 滑移系 Schmid 因子计算与 LaTeX 表格生成
//! - `modes`  - 车辆悬架垂向/俯仰固有频率与振型
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (向量解析器)
//!   │     ├── slip/      (滑移系分析)
//!   │     ├── vibration/ (悬架振动模型)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod slip;
mod utils;
mod vibration;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}

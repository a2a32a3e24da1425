//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `slip/`, `vibration/`, `utils/`
//! - 子模块: schmid, modes

pub mod modes;
pub mod schmid;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Schmid(args) => schmid::execute(args),
        Commands::Modes(args) => modes::execute(args),
    }
}

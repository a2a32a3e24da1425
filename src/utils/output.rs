//! # 美化输出工具
//!
//! mechkit 的日志层：状态信息统一带彩色前缀输出，错误走标准错误。
//! LaTeX 源码和结果表格本身不经过这里，直接写到标准输出。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

const RULE_WIDTH: usize = 60;

/// 状态级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn tag(self) -> ColoredString {
        match self {
            Level::Info => "[*]".blue().bold(),
            Level::Success => "[OK]".green().bold(),
            Level::Warning => "[WARN]".yellow().bold(),
            Level::Error => "[ERR]".red().bold(),
        }
    }
}

fn status(level: Level, msg: &str) {
    match level {
        Level::Error => eprintln!("{} {}", level.tag(), msg),
        _ => println!("{} {}", level.tag(), msg),
    }
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    status(Level::Info, msg);
}

/// 打印成功消息
pub fn print_success(msg: &str) {
    status(Level::Success, msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    status(Level::Warning, msg);
}

/// 打印错误消息（标准错误）
pub fn print_error(msg: &str) {
    status(Level::Error, msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let rule = "─".repeat(RULE_WIDTH);
    println!("\n{}\n  {}\n{}\n", rule.dimmed(), title.bold(), rule.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}

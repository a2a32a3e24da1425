//! # 晶体学记号格式化
//!
//! 将向量渲染为 LaTeX 晶体学记号：晶向使用方括号 `[uvw]`，晶面使用圆括号 `(hkl)`，
//! 负指数写成上横线。
//!
//! ## 规则
//! - 所有分量绝对值 < 10：直接拼接，负号写作 `\bar{n}`，如 `$[1\bar{1}0]$`
//! - 任一分量绝对值 >= 10：负号写作 `\overline{n}`，并且括号与各分量之间都用
//!   细空格 `\,` 分隔，如 `$(\,10\,\overline{3}\,0\,)$`
//!
//! ## 依赖关系
//! - 被 `slip/table.rs`, `slip/export.rs` 和 `commands/schmid.rs` 使用
//! - 使用 `models/vector.rs`

use crate::models::MillerVector;

use num_rational::Rational64;
use num_traits::Signed;

/// 渲染为 LaTeX 记号（晶面用圆括号，晶向用方括号）
pub fn format_vector(vector: &MillerVector, is_plane: bool) -> String {
    let components = vector.components();
    let multi_digit = components
        .iter()
        .any(|c| c.abs() >= Rational64::from_integer(10));

    let (head, tail) = if is_plane { ("$(", ")$") } else { ("$[", "]$") };

    let mut items = Vec::with_capacity(5);
    items.push(head.to_string());
    for c in components {
        if !c.is_negative() {
            items.push(c.to_string());
        } else if multi_digit {
            items.push(format!(r"\overline{{{}}}", c.abs()));
        } else {
            items.push(format!(r"\bar{{{}}}", c.abs()));
        }
    }
    items.push(tail.to_string());

    if multi_digit {
        items.join(r"\,")
    } else {
        items.concat()
    }
}

/// 纯文本记号，用于终端表格和 CSV，如 `(1 1 1)`、`[0 1 -1]`
pub fn format_plain(vector: &MillerVector, is_plane: bool) -> String {
    let c = vector.components();
    if is_plane {
        format!("({} {} {})", c[0], c[1], c[2])
    } else {
        format!("[{} {} {}]", c[0], c[1], c[2])
    }
}

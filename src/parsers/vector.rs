//! # 向量字面量解析器
//!
//! 解析命令行中输入的晶体学向量。
//!
//! ## 支持的写法
//! ```text
//! 1,1,1        1 -1 0       [0 1 -1]     (1,1,1)
//! <110>        {111}        1-10         1/2,1/2,0
//! ```
//! 紧凑写法（如 `1-10`、`-111`）只适用于一位数分量。
//! 同一滑移面上的多个方向用 `;` 分隔。
//!
//! ## 依赖关系
//! - 被 `commands/schmid.rs` 调用
//! - 使用 `models/vector.rs`
//! - 使用 `regex` 匹配分量

use crate::error::{MechkitError, Result};
use crate::models::MillerVector;

use num_rational::Rational64;
use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s,]+").unwrap());

static COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?\d+)(?:/(\d+))?$").unwrap());

static COMPACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d[+-]?\d[+-]?\d$").unwrap());

static COMPACT_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[+-]?\d").unwrap());

/// 解析单个向量
pub fn parse_vector(input: &str) -> Result<MillerVector> {
    let body = strip_brackets(input.trim());

    let tokens: Vec<&str> = if COMPACT.is_match(body) {
        COMPACT_ITEM.find_iter(body).map(|m| m.as_str()).collect()
    } else {
        SEPARATOR.split(body).filter(|s| !s.is_empty()).collect()
    };

    if tokens.len() != 3 {
        return Err(invalid(
            input,
            format!("expected 3 components, found {}", tokens.len()),
        ));
    }

    let mut components = [Rational64::from_integer(0); 3];
    for (slot, token) in components.iter_mut().zip(tokens) {
        *slot = parse_component(input, token)?;
    }

    Ok(MillerVector::new(components))
}

/// 解析以 `;` 分隔的向量列表
pub fn parse_vector_list(input: &str) -> Result<Vec<MillerVector>> {
    let vectors = input
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_vector)
        .collect::<Result<Vec<_>>>()?;

    if vectors.is_empty() {
        return Err(invalid(input, "no vectors given".to_string()));
    }
    Ok(vectors)
}

fn parse_component(input: &str, token: &str) -> Result<Rational64> {
    let caps = COMPONENT
        .captures(token)
        .ok_or_else(|| invalid(input, format!("'{}' is not an integer or fraction", token)))?;

    let numer: i64 = caps[1]
        .parse()
        .map_err(|_| invalid(input, format!("'{}' is out of range", token)))?;

    let denom: i64 = match caps.get(2) {
        Some(d) => d
            .as_str()
            .parse()
            .map_err(|_| invalid(input, format!("'{}' is out of range", token)))?,
        None => 1,
    };

    if denom == 0 {
        return Err(invalid(input, format!("'{}' has a zero denominator", token)));
    }

    Ok(Rational64::new(numer, denom))
}

fn strip_brackets(s: &str) -> &str {
    const PAIRS: [(char, char); 4] = [('[', ']'), ('(', ')'), ('<', '>'), ('{', '}')];

    for (open, close) in PAIRS {
        if let Some(inner) = s.strip_prefix(open).and_then(|r| r.strip_suffix(close)) {
            return inner.trim();
        }
    }
    s
}

fn invalid(input: &str, reason: String) -> MechkitError {
    MechkitError::InvalidVector {
        input: input.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_separated_forms() {
        let expected = MillerVector::from_ints(1, -1, 0);
        assert_eq!(parse_vector("1,-1,0").unwrap(), expected);
        assert_eq!(parse_vector("1 -1 0").unwrap(), expected);
        assert_eq!(parse_vector("[1, -1, 0]").unwrap(), expected);
        assert_eq!(parse_vector(" <1 -1 0> ").unwrap(), expected);
    }

    #[test]
    fn test_parse_compact_form() {
        assert_eq!(
            parse_vector("1-10").unwrap(),
            MillerVector::from_ints(1, -1, 0)
        );
        assert_eq!(
            parse_vector("(-111)").unwrap(),
            MillerVector::from_ints(-1, 1, 1)
        );
        assert_eq!(parse_vector("{111}").unwrap(), MillerVector::from_ints(1, 1, 1));
    }

    #[test]
    fn test_parse_multi_digit_needs_separators() {
        assert_eq!(
            parse_vector("10 -3 0").unwrap(),
            MillerVector::from_ints(10, -3, 0)
        );
        assert!(parse_vector("10-30").is_err());
    }

    #[test]
    fn test_parse_fractions() {
        let v = parse_vector("1/2, -1/2, 0").unwrap();
        assert_eq!(
            v.components(),
            &[
                Rational64::new(1, 2),
                Rational64::new(-1, 2),
                Rational64::from_integer(0)
            ]
        );
        // 分数自动约分
        assert_eq!(parse_vector("2/4 0 0").unwrap().components()[0], Rational64::new(1, 2));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_vector("1,1"),
            Err(MechkitError::InvalidVector { .. })
        ));
        assert!(parse_vector("1,1,1,1").is_err());
        assert!(parse_vector("a,b,c").is_err());
        assert!(parse_vector("1/0,1,1").is_err());
        assert!(parse_vector("1.5,1,1").is_err());
        assert!(parse_vector("99999999999999999999,1,1").is_err());
    }

    #[test]
    fn test_parse_vector_list() {
        let dirs = parse_vector_list("0,1,-1; 1,0,-1 ;1 -1 0;").unwrap();
        assert_eq!(dirs.len(), 3);
        assert_eq!(dirs[2], MillerVector::from_ints(1, -1, 0));

        assert!(parse_vector_list(" ; ").is_err());
    }
}

//! # 有效数字舍入
//!
//! 角度余弦和 Schmid 因子都按固定有效数字位数舍入并显示。
//! 舍入后的值以十进制 `mantissa × 10^exponent` 精确保存，尾数恰好有 `digits`
//! 位，保证文本形式稳定（例如 `0.82`、`-0.71`、`1.0`、`0.00`）。
//! 两个舍入值的乘积在整数上计算，再按十进制舍入，不经过二进制浮点。
//!
//! ## 依赖关系
//! - 被 `slip/system.rs` 和 `slip/table.rs` 使用
//! - 无外部依赖

/// 支持的最大有效数字位数
pub const MAX_DIGITS: u32 = 15;

/// 按有效数字舍入的标量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounded {
    mantissa: i64,
    exponent: i32,
    digits: u32,
}

impl Rounded {
    /// 将原始值舍入到 `digits` 位有效数字（限制在 1..=15）
    pub fn new(raw: f64, digits: u32) -> Self {
        let digits = digits.clamp(1, MAX_DIGITS);
        if raw == 0.0 || !raw.is_finite() {
            return Rounded::zero(digits);
        }

        let mut exponent = raw.abs().log10().floor() as i32 + 1 - digits as i32;
        let mut mantissa = scale_round(raw, exponent);
        // log10 在十的整数次幂附近可能偏差一位
        if mantissa.unsigned_abs() < 10u64.pow(digits - 1) {
            exponent -= 1;
            mantissa = scale_round(raw, exponent);
        }

        Rounded::normalized(mantissa as i128, exponent, digits)
    }

    fn zero(digits: u32) -> Self {
        Rounded {
            mantissa: 0,
            exponent: 0,
            digits,
        }
    }

    /// 把任意整数尾数舍入（四舍五入，远离零）到恰好 `digits` 位
    fn normalized(mantissa: i128, exponent: i32, digits: u32) -> Self {
        if mantissa == 0 {
            return Rounded::zero(digits);
        }

        let negative = mantissa < 0;
        let mut m = mantissa.unsigned_abs();
        let mut exponent = exponent;
        let width = decimal_width(m);

        if width > digits {
            let divisor = 10u128.pow(width - digits);
            let (q, r) = (m / divisor, m % divisor);
            m = if 2 * r >= divisor { q + 1 } else { q };
            exponent += (width - digits) as i32;
        } else if width < digits {
            m *= 10u128.pow(digits - width);
            exponent -= (digits - width) as i32;
        }
        if m == 10u128.pow(digits) {
            m /= 10;
            exponent += 1;
        }

        let m = m as i64;
        Rounded {
            mantissa: if negative { -m } else { m },
            exponent,
            digits,
        }
    }

    pub fn value(&self) -> f64 {
        let m = self.mantissa as f64;
        if self.exponent >= 0 {
            m * 10f64.powi(self.exponent)
        } else {
            m / 10f64.powi(-self.exponent)
        }
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    /// |self · other|，在已舍入的十进制值上精确计算后再次舍入
    pub fn abs_product(&self, other: &Rounded) -> Rounded {
        let product = (self.mantissa as i128 * other.mantissa as i128).abs();
        Rounded::normalized(product, self.exponent + other.exponent, self.digits)
    }
}

impl std::fmt::Display for Rounded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.mantissa == 0 {
            return write!(f, "{:.*}", self.digits as usize, 0.0);
        }

        let sign = if self.mantissa < 0 { "-" } else { "" };
        let digits = self.mantissa.unsigned_abs().to_string();
        if self.exponent >= 0 {
            return write!(f, "{}{}{}", sign, digits, "0".repeat(self.exponent as usize));
        }

        let decimals = (-self.exponent) as usize;
        let padded = format!("{:0>width$}", digits, width = decimals + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
        write!(f, "{}{}.{}", sign, int_part, frac_part)
    }
}

/// round(x / 10^exponent)
fn scale_round(x: f64, exponent: i32) -> i64 {
    let scaled = if exponent >= 0 {
        x / 10f64.powi(exponent)
    } else {
        x * 10f64.powi(-exponent)
    };
    scaled.round() as i64
}

fn decimal_width(mut n: u128) -> u32 {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_two_significant() {
        assert_eq!(Rounded::new(0.816496, 2).value(), 0.82);
        assert_eq!(Rounded::new(-0.707107, 2).value(), -0.71);
        assert_eq!(Rounded::new(0.577350, 2).value(), 0.58);
        assert_eq!(Rounded::new(0.0123, 2).value(), 0.012);
        assert_eq!(Rounded::new(123.0, 2).value(), 120.0);
    }

    #[test]
    fn test_display_keeps_significant_figures() {
        assert_eq!(Rounded::new(0.816496, 2).to_string(), "0.82");
        assert_eq!(Rounded::new(-0.707107, 2).to_string(), "-0.71");
        assert_eq!(Rounded::new(1.0, 2).to_string(), "1.0");
        assert_eq!(Rounded::new(0.0123, 2).to_string(), "0.012");
        assert_eq!(Rounded::new(0.816496, 3).to_string(), "0.816");
        assert_eq!(Rounded::new(123.0, 2).to_string(), "120");
        assert_eq!(Rounded::new(0.001, 2).to_string(), "0.0010");
    }

    #[test]
    fn test_zero_display() {
        assert_eq!(Rounded::new(0.0, 2).to_string(), "0.00");
        assert_eq!(Rounded::new(-0.0, 2).to_string(), "0.00");
        assert_eq!(Rounded::new(0.0, 3).to_string(), "0.000");
    }

    #[test]
    fn test_rounding_up_to_next_decade() {
        // 0.996 -> 1.0
        let r = Rounded::new(0.996, 2);
        assert_eq!(r.value(), 1.0);
        assert_eq!(r.to_string(), "1.0");
    }

    #[test]
    fn test_abs_product_uses_rounded_inputs() {
        let cos_phi = Rounded::new(1.0 / 3f64.sqrt(), 2);
        let cos_lambda = Rounded::new(-1.0 / 2f64.sqrt(), 2);

        // 0.58 * 0.71 = 0.4118 -> 0.41
        let sf = cos_phi.abs_product(&cos_lambda);
        assert_eq!(sf.value(), 0.41);
        assert_eq!(sf.to_string(), "0.41");
    }

    #[test]
    fn test_abs_product_differs_from_full_precision() {
        // 0.0354 -> 0.035, 0.035^2 = 0.001225 -> 0.0012
        let a = Rounded::new(0.0354, 2);
        assert_eq!(a.abs_product(&a).to_string(), "0.0012");

        // 全精度结果为 0.00125316 -> 0.0013
        assert_eq!(Rounded::new(0.0354 * 0.0354, 2).to_string(), "0.0013");
    }

    #[test]
    fn test_abs_product_exact_halfway_rounds_up() {
        // 0.50 * 0.57 = 0.285，在 f64 中为 0.28499999999999998
        let sf = Rounded::new(0.5, 2).abs_product(&Rounded::new(0.57, 2));
        assert_eq!(sf.to_string(), "0.29");

        let sf = Rounded::new(-0.5, 2).abs_product(&Rounded::new(0.71, 2));
        assert_eq!(sf.to_string(), "0.36");

        // 0.5 * 0.5 = 0.25 -> 0.3
        let half = Rounded::new(0.5, 1);
        assert_eq!(half.abs_product(&half).to_string(), "0.3");
    }

    #[test]
    fn test_digits_clamped() {
        assert_eq!(Rounded::new(0.577350, 0).to_string(), "0.6");

        let r = Rounded::new(1.0 / 3.0, 400);
        assert!(r.value().is_finite());
        assert_eq!(r.to_string(), "0.333333333333333");
        assert!(r.abs_product(&r).value().is_finite());
    }
}

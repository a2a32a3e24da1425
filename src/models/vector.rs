//! # 晶体学向量
//!
//! 以精确有理数存储的三分量向量，用于表示力方向、晶面法线（Miller 指数）
//! 和晶向。点积与模长平方在任意精度有理数上计算，不会溢出；只有开方在
//! `f64` 中进行。
//!
//! ## 依赖关系
//! - 被 `slip/` 和 `parsers/vector.rs` 使用
//! - 使用 `num-rational` 的 `Rational64`（存储）和 `BigRational`（运算）

use num_bigint::BigInt;
use num_rational::{BigRational, Rational64};
use num_traits::{ToPrimitive, Zero};

/// 三分量精确向量 [h, k, l]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MillerVector([Rational64; 3]);

impl MillerVector {
    /// 从有理数分量创建
    pub fn new(components: [Rational64; 3]) -> Self {
        MillerVector(components)
    }

    /// 从整数指数创建
    pub fn from_ints(h: i64, k: i64, l: i64) -> Self {
        MillerVector([
            Rational64::from_integer(h),
            Rational64::from_integer(k),
            Rational64::from_integer(l),
        ])
    }

    pub fn components(&self) -> &[Rational64; 3] {
        &self.0
    }

    /// 是否为零向量
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|c| c.is_zero())
    }

    /// 精确点积
    pub fn dot(&self, other: &MillerVector) -> BigRational {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(BigRational::zero(), |sum, (a, b)| sum + widen(a) * widen(b))
    }

    /// 精确模长平方
    pub fn norm_squared(&self) -> BigRational {
        self.dot(self)
    }

    /// 模长
    pub fn norm(&self) -> f64 {
        big_to_f64(&self.norm_squared()).sqrt()
    }

    /// 与另一向量夹角的余弦（未舍入）
    ///
    /// 两个向量都必须非零；调用方在构造阶段保证这一点。
    pub fn cos_angle(&self, other: &MillerVector) -> f64 {
        let dot = self.dot(other);
        if dot.is_zero() {
            return 0.0;
        }
        let cos = big_to_f64(&dot) / (self.norm() * other.norm());
        cos.clamp(-1.0, 1.0)
    }
}

impl std::fmt::Display for MillerVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {} {}]", self.0[0], self.0[1], self.0[2])
    }
}

impl From<[i64; 3]> for MillerVector {
    fn from(v: [i64; 3]) -> Self {
        MillerVector::from_ints(v[0], v[1], v[2])
    }
}

fn widen(r: &Rational64) -> BigRational {
    BigRational::new(BigInt::from(*r.numer()), BigInt::from(*r.denom()))
}

/// 任意精度有理数转浮点
fn big_to_f64(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or_else(|| {
        let numer = r.numer().to_f64().unwrap_or(f64::NAN);
        let denom = r.denom().to_f64().unwrap_or(f64::NAN);
        numer / denom
    })
}

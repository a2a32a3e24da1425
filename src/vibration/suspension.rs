//! # 车辆悬架俯仰-垂向振动模型
//!
//! 两自由度刚体模型：车身质心垂向位移 x 与俯仰角 θ，前后弹簧 k1、k2
//! 分别距质心 L1、L2。
//!
//! ## 公式
//! 特征方程（s = iω）：
//! ```text
//! A s⁴ + B s² + C = 0
//! A = I_G m
//! B = I_G k1 + I_G k2 + L1² k1 m + L2² k2 m
//! C = L1² k1 k2 + 2 L1 L2 k1 k2 + L2² k1 k2
//! ```
//! 作为 ω² 的二次方程求解。振型比：
//! ```text
//! x/θ = (L1 k1 - L2 k2) / (k1 + k2 - m ω²)
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/modes.rs` 调用
//! - 无外部依赖

use crate::error::{MechkitError, Result};

/// 两自由度悬架模型（国际单位制）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuspensionModel {
    /// 前弹簧刚度 (N/m)
    pub k1: f64,
    /// 后弹簧刚度 (N/m)
    pub k2: f64,
    /// 前弹簧到质心距离 (m)
    pub l1: f64,
    /// 后弹簧到质心距离 (m)
    pub l2: f64,
    /// 质量 (kg)
    pub mass: f64,
    /// 绕质心俯仰转动惯量 (kg·m²)
    pub inertia: f64,
}

impl Default for SuspensionModel {
    fn default() -> Self {
        SuspensionModel {
            k1: 1.6e4,
            k2: 2.5e4,
            l1: 1.5,
            l2: 1.1,
            mass: 730.0,
            inertia: 1350.0,
        }
    }
}

impl SuspensionModel {
    /// 检查所有参数有限且为正
    pub fn validate(&self) -> Result<()> {
        let params = [
            ("k1", self.k1),
            ("k2", self.k2),
            ("l1", self.l1),
            ("l2", self.l2),
            ("mass", self.mass),
            ("inertia", self.inertia),
        ];
        for (name, value) in params {
            if !value.is_finite() || value <= 0.0 {
                return Err(MechkitError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// 特征方程系数 (A, B, C)
    pub fn characteristic_coefficients(&self) -> (f64, f64, f64) {
        let (k1, k2, l1, l2, m, ig) = (self.k1, self.k2, self.l1, self.l2, self.mass, self.inertia);

        let a = ig * m;
        let b = ig * k1 + ig * k2 + l1 * l1 * k1 * m + l2 * l2 * k2 * m;
        let c = l1 * l1 * k1 * k2 + 2.0 * l1 * l2 * k1 * k2 + l2 * l2 * k1 * k2;
        (a, b, c)
    }

    /// 两个固有频率 (ω1, ω2)，单位 rad/s，升序
    pub fn natural_frequencies(&self) -> Result<(f64, f64)> {
        self.validate()?;
        let (a, b, c) = self.characteristic_coefficients();

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Err(MechkitError::NoRealModes);
        }
        let root = discriminant.sqrt();

        // 数值稳定的二次方程求根
        let q = 0.5 * (b + root);
        let w2_high = q / a;
        let w2_low = c / q;

        if !(w2_low > 0.0 && w2_high > 0.0) {
            return Err(MechkitError::NoRealModes);
        }
        Ok((w2_low.sqrt(), w2_high.sqrt()))
    }

    /// 给定频率下的振型比 x/θ
    pub fn mode_shape(&self, omega: f64) -> Result<f64> {
        let denominator = self.k1 + self.k2 - self.mass * omega * omega;
        if denominator == 0.0 {
            return Err(MechkitError::SingularModeShape(omega));
        }
        Ok((self.l1 * self.k1 - self.l2 * self.k2) / denominator)
    }

    /// 两阶固有频率处的振型比
    pub fn mode_shapes(&self) -> Result<(f64, f64)> {
        let (w1, w2) = self.natural_frequencies()?;
        Ok((self.mode_shape(w1)?, self.mode_shape(w2)?))
    }

    /// 在 [start, end] 上等间距采样 `samples` 个点的振型曲线 (ω, x/θ)
    pub fn sweep(&self, start: f64, end: f64, samples: usize) -> Result<Vec<(f64, f64)>> {
        self.validate()?;
        if samples < 2 {
            return Err(MechkitError::InvalidArgument(format!(
                "sweep needs at least 2 samples, got {}",
                samples
            )));
        }
        if !(start.is_finite() && end.is_finite() && end > start) {
            return Err(MechkitError::InvalidArgument(format!(
                "invalid sweep range {}..{}",
                start, end
            )));
        }

        let step = (end - start) / (samples - 1) as f64;
        (0..samples)
            .map(|i| {
                let omega = if i == samples - 1 {
                    end
                } else {
                    start + step * i as f64
                };
                self.mode_shape(omega).map(|shape| (omega, shape))
            })
            .collect()
    }
}

/// rad/s 转 Hz
pub fn to_hertz(omega: f64) -> f64 {
    omega / (2.0 * std::f64::consts::PI)
}

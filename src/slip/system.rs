//! # 滑移系 Schmid 因子分析器
//!
//! 给定加载方向 F、若干滑移面以及每个面上的滑移方向，计算每个
//! (滑移面, 滑移方向) 组合的 Schmid 因子。
//!
//! ## 公式
//! - cos(φ) = F·n / (|n| |F|)，n 为滑移面法线
//! - cos(λ) = F·d / (|F| |d|)，d 为滑移方向
//! - S.F. = |cos(φ) cos(λ)|
//!
//! 两个余弦先按 `digits` 位有效数字舍入，Schmid 因子在舍入后的值上计算，
//! 再舍入一次。表格中显示的数值因此可以复现，但不一定等于全精度乘积。
//!
//! ## 依赖关系
//! - 被 `commands/schmid.rs` 调用
//! - 使用 `models/vector.rs`, `slip/rounding.rs`

use crate::error::{MechkitError, Result};
use crate::models::MillerVector;
use crate::slip::rounding::{Rounded, MAX_DIGITS};

use num_traits::Zero;

/// 默认有效数字位数
pub const DEFAULT_DIGITS: u32 = 2;

/// 表格中的一列：一个滑移面上的一个滑移方向
#[derive(Debug, Clone, PartialEq)]
pub struct SchmidEntry {
    pub plane_index: usize,
    pub direction_index: usize,
    pub plane: MillerVector,
    pub direction: MillerVector,
    pub cos_phi: Rounded,
    pub cos_lambda: Rounded,
    pub schmid_factor: Rounded,
}

/// 滑移系
///
/// 构造后只读，所有查询都是纯函数。
#[derive(Debug, Clone)]
pub struct SlipSystem {
    force: MillerVector,
    planes: Vec<MillerVector>,
    directions: Vec<Vec<MillerVector>>,
    n_dirs: usize,
    digits: u32,
}

impl SlipSystem {
    /// 创建滑移系
    ///
    /// `directions[p]` 是第 p 个滑移面上的滑移方向列表，所有面的方向数必须相同。
    pub fn new(
        force: MillerVector,
        planes: Vec<MillerVector>,
        directions: Vec<Vec<MillerVector>>,
    ) -> Result<Self> {
        if planes.len() != directions.len() {
            return Err(MechkitError::PlaneCountMismatch {
                planes: planes.len(),
                groups: directions.len(),
            });
        }

        let n_dirs = directions.first().map(Vec::len).unwrap_or(0);
        if planes.is_empty() || n_dirs == 0 {
            return Err(MechkitError::EmptySystem);
        }

        for (p, group) in directions.iter().enumerate() {
            if group.len() != n_dirs {
                return Err(MechkitError::UnevenDirections {
                    plane: p,
                    expected: n_dirs,
                    found: group.len(),
                });
            }
        }

        if force.is_zero() {
            return Err(MechkitError::ZeroVector("force direction".to_string()));
        }
        for (p, plane) in planes.iter().enumerate() {
            if plane.is_zero() {
                return Err(MechkitError::ZeroVector(format!("slip plane {}", p)));
            }
            for (d, dir) in directions[p].iter().enumerate() {
                if dir.is_zero() {
                    return Err(MechkitError::ZeroVector(format!(
                        "slip direction {} of plane {}",
                        d, p
                    )));
                }
            }
        }

        Ok(SlipSystem {
            force,
            planes,
            directions,
            n_dirs,
            digits: DEFAULT_DIGITS,
        })
    }

    /// 设置有效数字位数（限制在 1..=15）
    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits.clamp(1, MAX_DIGITS);
        self
    }

    pub fn force(&self) -> &MillerVector {
        &self.force
    }

    pub fn planes(&self) -> &[MillerVector] {
        &self.planes
    }

    pub fn directions(&self) -> &[Vec<MillerVector>] {
        &self.directions
    }

    pub fn n_planes(&self) -> usize {
        self.planes.len()
    }

    pub fn n_dirs(&self) -> usize {
        self.n_dirs
    }

    /// 数据列总数 = 滑移面数 × 每面方向数
    pub fn n_columns(&self) -> usize {
        self.n_planes() * self.n_dirs
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// 力与滑移面法线夹角的余弦
    pub fn get_cos_phi(&self, plane: usize) -> Result<Rounded> {
        let normal = self.plane(plane)?;
        let cos = self.force.cos_angle(normal);
        Ok(Rounded::new(cos, self.digits))
    }

    /// 力与滑移面上第 `direction` 个滑移方向夹角的余弦
    pub fn get_cos_lambda(&self, plane: usize, direction: usize) -> Result<Rounded> {
        let dir = self.direction(plane, direction)?;
        let cos = self.force.cos_angle(dir);
        Ok(Rounded::new(cos, self.digits))
    }

    /// 按滑移面、再按方向的顺序计算所有列
    pub fn entries(&self) -> Result<Vec<SchmidEntry>> {
        let mut entries = Vec::with_capacity(self.n_columns());

        for (p, plane) in self.planes.iter().enumerate() {
            let cos_phi = self.get_cos_phi(p)?;
            for (d, direction) in self.directions[p].iter().enumerate() {
                let cos_lambda = self.get_cos_lambda(p, d)?;
                entries.push(SchmidEntry {
                    plane_index: p,
                    direction_index: d,
                    plane: *plane,
                    direction: *direction,
                    cos_phi,
                    cos_lambda,
                    schmid_factor: cos_phi.abs_product(&cos_lambda),
                });
            }
        }

        Ok(entries)
    }

    /// Schmid 因子最大的滑移系（最先开动）
    ///
    /// 所有 Schmid 因子都为零时没有滑移系会开动，返回空列表。
    pub fn primary_systems(&self) -> Result<Vec<SchmidEntry>> {
        let entries = self.entries()?;
        let max = entries
            .iter()
            .map(|e| e.schmid_factor.value())
            .fold(0.0_f64, f64::max);
        if max == 0.0 {
            return Ok(Vec::new());
        }

        Ok(entries
            .into_iter()
            .filter(|e| e.schmid_factor.value() == max)
            .collect())
    }

    /// 不在对应滑移面内的方向 (plane, direction)
    ///
    /// 按立方晶系约定判断：方向在面内当且仅当 n·d = 0。
    pub fn non_coplanar(&self) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        for (p, plane) in self.planes.iter().enumerate() {
            for (d, dir) in self.directions[p].iter().enumerate() {
                if !plane.dot(dir).is_zero() {
                    found.push((p, d));
                }
            }
        }
        found
    }

    fn plane(&self, index: usize) -> Result<&MillerVector> {
        self.planes.get(index).ok_or(MechkitError::IndexOutOfRange {
            what: "plane",
            index,
            len: self.planes.len(),
        })
    }

    fn direction(&self, plane: usize, index: usize) -> Result<&MillerVector> {
        self.plane(plane)?;
        self.directions[plane]
            .get(index)
            .ok_or(MechkitError::IndexOutOfRange {
                what: "direction",
                index,
                len: self.n_dirs,
            })
    }
}

//! # 常用滑移系族
//!
//! 内置立方晶体的主要滑移系，可直接代替手工输入的滑移面和滑移方向。
//!
//! | 族 | 滑移面 | 滑移方向 | 数量 |
//! |----|--------|----------|------|
//! | FCC | {111} | <110> | 4 × 3 |
//! | BCC | {110} | <111> | 6 × 2 |
//!
//! ## 依赖关系
//! - 被 `commands/schmid.rs` 使用
//! - 使用 `models/vector.rs`

use crate::models::MillerVector;

type FamilyTable = &'static [([i64; 3], &'static [[i64; 3]])];

const FCC_111_110: FamilyTable = &[
    ([1, 1, 1], &[[0, 1, -1], [1, 0, -1], [1, -1, 0]]),
    ([-1, 1, 1], &[[0, 1, -1], [1, 0, 1], [1, 1, 0]]),
    ([1, -1, 1], &[[0, 1, 1], [1, 0, -1], [1, 1, 0]]),
    ([1, 1, -1], &[[0, 1, 1], [1, 0, 1], [1, -1, 0]]),
];

const BCC_110_111: FamilyTable = &[
    ([1, 1, 0], &[[1, -1, 1], [-1, 1, 1]]),
    ([1, -1, 0], &[[1, 1, 1], [1, 1, -1]]),
    ([1, 0, 1], &[[1, 1, -1], [-1, 1, 1]]),
    ([1, 0, -1], &[[1, 1, 1], [1, -1, 1]]),
    ([0, 1, 1], &[[1, 1, -1], [1, -1, 1]]),
    ([0, 1, -1], &[[1, 1, 1], [-1, 1, 1]]),
];

/// 滑移系族：滑移面及其上的滑移方向
#[derive(Debug, Clone)]
pub struct SlipFamily {
    pub name: &'static str,
    pub planes: Vec<MillerVector>,
    pub directions: Vec<Vec<MillerVector>>,
}

impl SlipFamily {
    fn from_table(name: &'static str, table: FamilyTable) -> Self {
        SlipFamily {
            name,
            planes: table.iter().map(|(p, _)| MillerVector::from(*p)).collect(),
            directions: table
                .iter()
                .map(|(_, dirs)| dirs.iter().map(|d| MillerVector::from(*d)).collect())
                .collect(),
        }
    }

    /// 面心立方 {111}<110>
    pub fn fcc() -> Self {
        Self::from_table("FCC {111}<110>", FCC_111_110)
    }

    /// 体心立方 {110}<111>
    pub fn bcc() -> Self {
        Self::from_table("BCC {110}<111>", BCC_110_111)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slip::SlipSystem;

    #[test]
    fn test_fcc_shape_and_coplanarity() {
        let fcc = SlipFamily::fcc();
        assert_eq!(fcc.planes.len(), 4);
        assert!(fcc.directions.iter().all(|g| g.len() == 3));

        let system =
            SlipSystem::new(MillerVector::from_ints(0, 0, 1), fcc.planes, fcc.directions).unwrap();
        assert!(system.non_coplanar().is_empty());
    }

    #[test]
    fn test_bcc_shape_and_coplanarity() {
        let bcc = SlipFamily::bcc();
        assert_eq!(bcc.planes.len(), 6);
        assert!(bcc.directions.iter().all(|g| g.len() == 2));

        let system =
            SlipSystem::new(MillerVector::from_ints(1, 2, 3), bcc.planes, bcc.directions).unwrap();
        assert!(system.non_coplanar().is_empty());
    }

    #[test]
    fn test_fcc_001_loading_schmid_factors() {
        let fcc = SlipFamily::fcc();
        let system =
            SlipSystem::new(MillerVector::from_ints(0, 0, 1), fcc.planes, fcc.directions).unwrap();

        let entries = system.entries().unwrap();
        let active = entries
            .iter()
            .filter(|e| e.schmid_factor.to_string() == "0.41")
            .count();
        let inactive = entries
            .iter()
            .filter(|e| e.schmid_factor.value() == 0.0)
            .count();

        assert_eq!(active, 8);
        assert_eq!(inactive, 4);
        assert_eq!(system.primary_systems().unwrap().len(), 8);
    }
}

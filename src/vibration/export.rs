//! # 振型曲线导出
//!
//! 将 (ω, x/θ) 采样曲线导出为 CSV，供外部绘图工具使用。
//!
//! ## 依赖关系
//! - 被 `commands/modes.rs` 调用
//! - 使用 `csv` 写入

use crate::error::{MechkitError, Result};

use std::path::Path;

/// 导出振型曲线为 CSV 文件
pub fn sweep_to_csv(points: &[(f64, f64)], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["omega_rad_s", "x_over_theta"])?;
    for (omega, shape) in points {
        wtr.write_record(&[format!("{:.6}", omega), format!("{:.6}", shape)])?;
    }

    wtr.flush().map_err(|e| MechkitError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

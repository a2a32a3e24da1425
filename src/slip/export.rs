//! # Schmid 因子数据导出
//!
//! 将每个 (滑移面, 滑移方向) 列导出为 CSV，数值与 LaTeX 表格中显示的完全一致。
//!
//! ## 列
//! `plane, direction, cos_phi, cos_lambda, schmid_factor`
//!
//! ## 依赖关系
//! - 被 `commands/schmid.rs` 调用
//! - 使用 `slip/system.rs` 的 SchmidEntry
//! - 使用 `csv` + `serde` 写入

use crate::error::{MechkitError, Result};
use crate::slip::format::format_plain;
use crate::slip::SchmidEntry;

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct SchmidRecord {
    plane: String,
    direction: String,
    cos_phi: String,
    cos_lambda: String,
    schmid_factor: String,
}

impl From<&SchmidEntry> for SchmidRecord {
    fn from(e: &SchmidEntry) -> Self {
        SchmidRecord {
            plane: format_plain(&e.plane, true),
            direction: format_plain(&e.direction, false),
            cos_phi: e.cos_phi.to_string(),
            cos_lambda: e.cos_lambda.to_string(),
            schmid_factor: e.schmid_factor.to_string(),
        }
    }
}

/// 导出为 CSV 文件
pub fn to_csv(entries: &[SchmidEntry], output_path: &Path) -> Result<()> {
    let path = output_path.display().to_string();
    let file = File::create(output_path).map_err(|e| MechkitError::FileWriteError {
        path: path.clone(),
        source: e,
    })?;

    write_csv(entries, file, &path)
}

/// 写入任意 `Write`，`label` 用于错误信息
pub fn write_csv<W: Write>(entries: &[SchmidEntry], writer: W, label: &str) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for entry in entries {
        wtr.serialize(SchmidRecord::from(entry))?;
    }

    wtr.flush().map_err(|e| MechkitError::FileWriteError {
        path: label.to_string(),
        source: e,
    })
}

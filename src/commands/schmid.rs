//! # schmid 子命令实现
//!
//! 构造滑移系，计算 Schmid 因子并输出 LaTeX 表格。
//!
//! ## 功能
//! - 手工输入滑移面/方向，或使用 FCC/BCC 预设
//! - 终端预览表格（tabled）
//! - LaTeX 源码输出到标准输出，可选写入文件
//! - 可选 CSV 导出
//!
//! ## 依赖关系
//! - 使用 `cli/schmid.rs` 定义的 SchmidArgs
//! - 使用 `parsers/vector.rs` 解析向量
//! - 使用 `slip/` 模块进行计算与输出

use crate::cli::schmid::{SchmidArgs, SlipPreset};
use crate::error::{MechkitError, Result};
use crate::models::MillerVector;
use crate::parsers;
use crate::slip::format::format_plain;
use crate::slip::{export, SchmidEntry, SlipFamily, SlipSystem, TableSink, WriterSink};
use crate::utils::output;

use std::fs::File;
use std::io::{self, BufWriter};
use tabled::{Table, Tabled};

/// 预览表格行
#[derive(Tabled)]
struct PreviewRow {
    #[tabled(rename = "#")]
    index: String,
    #[tabled(rename = "Plane")]
    plane: String,
    #[tabled(rename = "Direction")]
    direction: String,
    #[tabled(rename = "cos φ")]
    cos_phi: String,
    #[tabled(rename = "cos λ")]
    cos_lambda: String,
    #[tabled(rename = "|S.F.|")]
    schmid_factor: String,
}

/// 执行 Schmid 因子分析
pub fn execute(args: SchmidArgs) -> Result<()> {
    output::print_header("Slip System Schmid Factor Analysis");

    let system = build_system(&args)?;

    output::print_info(&format!(
        "Force direction {}, {} planes x {} directions, {} significant figures",
        format_plain(system.force(), false),
        system.n_planes(),
        system.n_dirs(),
        system.digits()
    ));

    for (p, d) in system.non_coplanar() {
        output::print_warning(&format!(
            "Direction {} does not lie in plane {}",
            format_plain(&system.directions()[p][d], false),
            format_plain(&system.planes()[p], true)
        ));
    }

    let entries = system.entries()?;
    if !args.no_preview {
        print_preview(&entries);
    }

    let primary = system.primary_systems()?;
    if primary.is_empty() {
        output::print_warning("All Schmid factors are zero, no slip system is activated");
    }
    for entry in primary {
        output::print_success(&format!(
            "Primary slip system: {}{} with |S.F.| = {}",
            format_plain(&entry.plane, true),
            format_plain(&entry.direction, false),
            entry.schmid_factor
        ));
    }

    output::print_separator();
    let mut display = WriterSink::new(io::stdout(), "stdout");

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| MechkitError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            let mut echo = WriterSink::new(BufWriter::new(file), path.display().to_string());
            system.generate_table(&mut display, Some(&mut echo as &mut dyn TableSink))?;
            output::print_separator();
            output::print_success(&format!("LaTeX table written to '{}'", path.display()));
        }
        None => {
            system.generate_table(&mut display, None)?;
            output::print_separator();
        }
    }

    if let Some(csv_path) = &args.csv {
        export::to_csv(&entries, csv_path)?;
        output::print_success(&format!("CSV written to '{}'", csv_path.display()));
    }

    Ok(())
}

/// 根据参数构造滑移系
fn build_system(args: &SchmidArgs) -> Result<SlipSystem> {
    let force = parsers::parse_vector(&args.force)?;

    let (planes, directions) = match args.preset {
        Some(preset) => {
            let family = match preset {
                SlipPreset::Fcc => SlipFamily::fcc(),
                SlipPreset::Bcc => SlipFamily::bcc(),
            };
            output::print_info(&format!("Using preset {}", family.name));
            (family.planes, family.directions)
        }
        None => {
            let planes = args
                .planes
                .iter()
                .map(|p| parsers::parse_vector(p))
                .collect::<Result<Vec<MillerVector>>>()?;
            let directions = args
                .dirs
                .iter()
                .map(|d| parsers::parse_vector_list(d))
                .collect::<Result<Vec<_>>>()?;
            (planes, directions)
        }
    };

    Ok(SlipSystem::new(force, planes, directions)?.with_digits(args.digits))
}

/// 打印预览表格
fn print_preview(entries: &[SchmidEntry]) {
    let rows: Vec<PreviewRow> = entries
        .iter()
        .map(|e| PreviewRow {
            index: format!("{}.{}", e.plane_index + 1, e.direction_index + 1),
            plane: format_plain(&e.plane, true),
            direction: format_plain(&e.direction, false),
            cos_phi: e.cos_phi.to_string(),
            cos_lambda: e.cos_lambda.to_string(),
            schmid_factor: e.schmid_factor.to_string(),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!("{} Slip Systems", rows.len()));
        println!("{}", Table::new(&rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(force: &str, planes: &[&str], dirs: &[&str]) -> SchmidArgs {
        SchmidArgs {
            force: force.to_string(),
            planes: planes.iter().map(|s| s.to_string()).collect(),
            dirs: dirs.iter().map(|s| s.to_string()).collect(),
            preset: None,
            digits: 2,
            output: None,
            csv: None,
            no_preview: true,
        }
    }

    #[test]
    fn test_build_system_from_pairs() {
        let system = build_system(&args(
            "[0 0 1]",
            &["1,1,1", "-1,1,1"],
            &["0,1,-1;1,0,-1", "0,1,-1;1,1,0"],
        ))
        .unwrap();

        assert_eq!(system.n_planes(), 2);
        assert_eq!(system.n_dirs(), 2);
    }

    #[test]
    fn test_build_system_unpaired_dirs() {
        let err = build_system(&args("001", &["111", "-111"], &["01-1"])).unwrap_err();
        assert!(matches!(err, MechkitError::PlaneCountMismatch { .. }));
    }

    #[test]
    fn test_build_system_preset() {
        let mut a = args("001", &[], &[]);
        a.preset = Some(SlipPreset::Bcc);
        a.digits = 3;

        let system = build_system(&a).unwrap();
        assert_eq!(system.n_columns(), 12);
        assert_eq!(system.digits(), 3);
    }

    #[test]
    fn test_build_system_without_planes() {
        let err = build_system(&args("001", &[], &[])).unwrap_err();
        assert!(matches!(err, MechkitError::EmptySystem));
    }
}

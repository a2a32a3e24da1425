//! # modes 子命令实现
//!
//! 计算悬架模型的两阶固有频率和振型，可选导出振型曲线。
//!
//! ## 依赖关系
//! - 使用 `cli/modes.rs` 定义的 ModesArgs
//! - 使用 `vibration/` 模块进行计算与导出

use crate::cli::modes::ModesArgs;
use crate::error::Result;
use crate::utils::output;
use crate::vibration::{export, to_hertz, SuspensionModel};

use tabled::{Table, Tabled};

/// 模态结果行
#[derive(Tabled)]
struct ModeRow {
    #[tabled(rename = "Mode")]
    mode: usize,
    #[tabled(rename = "ω (rad/s)")]
    omega: String,
    #[tabled(rename = "f (Hz)")]
    frequency: String,
    #[tabled(rename = "x/θ")]
    shape: String,
}

/// 执行模态分析
pub fn execute(args: ModesArgs) -> Result<()> {
    output::print_header("Suspension Bounce/Pitch Modes");

    let model = model_from_args(&args);
    model.validate()?;

    output::print_info(&format!(
        "k1 = {} N/m, k2 = {} N/m, L1 = {} m, L2 = {} m, m = {} kg, I_G = {} kg·m²",
        model.k1, model.k2, model.l1, model.l2, model.mass, model.inertia
    ));

    let (w1, w2) = model.natural_frequencies()?;
    let (mode1, mode2) = model.mode_shapes()?;

    let rows = vec![
        ModeRow {
            mode: 1,
            omega: format!("{:.4}", w1),
            frequency: format!("{:.4}", to_hertz(w1)),
            shape: format!("{:.3}", mode1),
        },
        ModeRow {
            mode: 2,
            omega: format!("{:.4}", w2),
            frequency: format!("{:.4}", to_hertz(w2)),
            shape: format!("{:.3}", mode2),
        },
    ];
    println!("{}", Table::new(&rows));

    match &args.csv {
        Some(path) => {
            let points = model.sweep(args.sweep_start, args.sweep_end, args.samples)?;
            export::sweep_to_csv(&points, path)?;
            output::print_success(&format!(
                "Mode-shape curve ({} points, {}..{} rad/s) written to '{}'",
                points.len(),
                args.sweep_start,
                args.sweep_end,
                path.display()
            ));
        }
        None => output::print_info("Use --csv <FILE> to export the sampled mode-shape curve"),
    }

    Ok(())
}

fn model_from_args(args: &ModesArgs) -> SuspensionModel {
    SuspensionModel {
        k1: args.k1,
        k2: args.k2,
        l1: args.l1,
        l2: args.l2,
        mass: args.mass,
        inertia: args.inertia,
    }
}

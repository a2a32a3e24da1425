//! # LaTeX 表格生成
//!
//! 将滑移系的计算结果渲染为 booktabs 风格的 LaTeX 表格，并发送到输出端。
//!
//! ## 表格结构
//! ```text
//! \begin{center}
//! \addtolength{\leftskip}{-2cm}
//! \addtolength{\rightskip}{-2cm}
//! \begin{tabular}{lll...}
//! \multicolumn{n}{c}{Force Direction: $[001]$} \\
//! \toprule
//! Slip Plane & \multicolumn{3}{c}{$(111)$} & ... \\
//! \midrule
//! Slip Direction & $[01\bar{1}]$ & ... \\
//! $\cos(\phi)$ & 0.58 & ... \\
//! $\cos(\lambda)$ & -0.71 & ... \\
//! |S.F.| & 0.41 & ... \\
//! \end{tabular}
//! \end{center}
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/schmid.rs` 调用
//! - 使用 `slip/system.rs`, `slip/format.rs`

use crate::error::{MechkitError, Result};
use crate::slip::format::format_vector;
use crate::slip::system::SlipSystem;

use std::io::Write;

/// 表格输出端
pub trait TableSink {
    /// 输出完整的表格源码
    fn emit(&mut self, source: &str) -> Result<()>;
}

/// 基于 `Write` 的输出端（标准输出或文件）
pub struct WriterSink<W: Write> {
    writer: W,
    label: String,
}

impl<W: Write> WriterSink<W> {
    /// `label` 用于错误信息（文件路径或 "stdout"）
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        WriterSink {
            writer,
            label: label.into(),
        }
    }
}

impl<W: Write> TableSink for WriterSink<W> {
    fn emit(&mut self, source: &str) -> Result<()> {
        writeln!(self.writer, "{}", source)
            .and_then(|_| self.writer.flush())
            .map_err(|e| MechkitError::FileWriteError {
                path: self.label.clone(),
                source: e,
            })
    }
}

impl SlipSystem {
    /// 渲染 LaTeX 表格源码（纯函数）
    pub fn render_table(&self) -> Result<String> {
        let n = self.n_columns() + 1;

        let mut lines = vec![
            r"\begin{center}".to_string(),
            r"\addtolength{\leftskip}{-2cm}".to_string(),
            r"\addtolength{\rightskip}{-2cm}".to_string(),
            format!(r"\begin{{tabular}}{{{}}}", "l".repeat(n)),
            format!(
                r"\multicolumn{{{}}}{{c}}{{Force Direction: {}}} \\",
                n,
                format_vector(self.force(), false)
            ),
            r"\toprule".to_string(),
        ];

        let mut plane_row = vec!["Slip Plane".to_string()];
        for plane in self.planes() {
            plane_row.push(format!(
                r"\multicolumn{{{}}}{{c}}{{{}}}",
                self.n_dirs(),
                format_vector(plane, true)
            ));
        }

        let mut direction_row = vec!["Slip Direction".to_string()];
        let mut cos_phi_row = vec![r"$\cos(\phi)$".to_string()];
        let mut cos_lambda_row = vec![r"$\cos(\lambda)$".to_string()];
        let mut schmid_row = vec!["|S.F.|".to_string()];

        for entry in self.entries()? {
            direction_row.push(format_vector(&entry.direction, false));
            cos_phi_row.push(entry.cos_phi.to_string());
            cos_lambda_row.push(entry.cos_lambda.to_string());
            schmid_row.push(entry.schmid_factor.to_string());
        }

        lines.push(table_row(&plane_row));
        lines.push(r"\midrule".to_string());
        for row in [&direction_row, &cos_phi_row, &cos_lambda_row, &schmid_row] {
            lines.push(table_row(row));
        }
        lines.push(r"\end{tabular}".to_string());
        lines.push(r"\end{center}".to_string());

        Ok(lines.join("\n"))
    }

    /// 生成表格并输出
    ///
    /// 若提供 `echo`，先输出纯文本副本，再输出到 `display`。返回输出的源码。
    pub fn generate_table(
        &self,
        display: &mut dyn TableSink,
        echo: Option<&mut dyn TableSink>,
    ) -> Result<String> {
        let source = self.render_table()?;
        if let Some(echo) = echo {
            echo.emit(&source)?;
        }
        display.emit(&source)?;
        Ok(source)
    }
}

fn table_row(cells: &[String]) -> String {
    format!(r"{} \\", cells.join(" & "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MillerVector;

    /// 收集到内存的输出端
    #[derive(Debug, Default)]
    struct MemorySink {
        emitted: Vec<String>,
    }

    impl TableSink for MemorySink {
        fn emit(&mut self, source: &str) -> Result<()> {
            self.emitted.push(source.to_string());
            Ok(())
        }
    }

    fn v(h: i64, k: i64, l: i64) -> MillerVector {
        MillerVector::from_ints(h, k, l)
    }

    fn sample_system() -> SlipSystem {
        SlipSystem::new(
            v(0, 0, 1),
            vec![v(1, 1, 1), v(-1, 1, 1)],
            vec![
                vec![v(0, 1, -1), v(1, 0, -1)],
                vec![v(0, 1, -1), v(1, 1, 0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_render_exact_layout() {
        let system =
            SlipSystem::new(v(0, 0, 1), vec![v(1, 1, 1)], vec![vec![v(0, 1, -1)]]).unwrap();

        let expected = [
            r"\begin{center}",
            r"\addtolength{\leftskip}{-2cm}",
            r"\addtolength{\rightskip}{-2cm}",
            r"\begin{tabular}{ll}",
            r"\multicolumn{2}{c}{Force Direction: $[001]$} \\",
            r"\toprule",
            r"Slip Plane & \multicolumn{1}{c}{$(111)$} \\",
            r"\midrule",
            r"Slip Direction & $[01\bar{1}]$ \\",
            r"$\cos(\phi)$ & 0.58 \\",
            r"$\cos(\lambda)$ & -0.71 \\",
            r"|S.F.| & 0.41 \\",
            r"\end{tabular}",
            r"\end{center}",
        ]
        .join("\n");

        assert_eq!(system.render_table().unwrap(), expected);
    }

    #[test]
    fn test_columns_span_directions() {
        let source = sample_system().render_table().unwrap();

        assert!(source.contains(r"\begin{tabular}{lllll}"));
        assert!(source.contains(r"\multicolumn{5}{c}{Force Direction: $[001]$}"));
        assert!(source.contains(
            r"Slip Plane & \multicolumn{2}{c}{$(111)$} & \multicolumn{2}{c}{$(\bar{1}11)$} \\"
        ));
        assert!(source.contains(r"$\cos(\phi)$ & 0.58 & 0.58 & 0.58 & 0.58 \\"));
        assert!(source.contains(r"$\cos(\lambda)$ & -0.71 & -0.71 & -0.71 & 0.00 \\"));
        assert!(source.contains(r"|S.F.| & 0.41 & 0.41 & 0.41 & 0.00 \\"));
    }

    #[test]
    fn test_generate_table_is_idempotent() {
        let system = sample_system();
        let mut first = MemorySink::default();
        let mut second = MemorySink::default();

        let a = system.generate_table(&mut first, None).unwrap();
        let b = system.generate_table(&mut second, None).unwrap();

        assert_eq!(a, b);
        assert_eq!(first.emitted, second.emitted);
    }

    #[test]
    fn test_generate_table_emits_to_both_sinks() {
        let system = sample_system();
        let mut display = MemorySink::default();
        let mut echo = MemorySink::default();

        let source = system
            .generate_table(&mut display, Some(&mut echo as &mut dyn TableSink))
            .unwrap();

        assert_eq!(display.emitted, vec![source.clone()]);
        assert_eq!(echo.emitted, vec![source]);
    }

    #[test]
    fn test_writer_sink() {
        let system = sample_system();
        let mut buf: Vec<u8> = Vec::new();
        {
            let mut sink = WriterSink::new(&mut buf, "buffer");
            system.generate_table(&mut sink, None).unwrap();
        }
        let written = String::from_utf8(buf).unwrap();
        assert!(written.starts_with(r"\begin{center}"));
        assert!(written.ends_with("\\end{center}\n"));
    }
}

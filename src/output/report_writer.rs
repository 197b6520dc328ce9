// ==========================================
// 弹药配装优化系统 - 结果报告输出
// ==========================================
// 文本格式:
//   Total Damage: <总伤害>
//   Ammunition Packs Selection Ratio:
//   <名称> > <选择比例>        （按结果顺序逐行）
// ==========================================

use crate::domain::item::AllocationResult;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 报告输出错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("报告写入失败 ({path}): {message}")]
    WriteFailed { path: String, message: String },

    #[error("JSON 序列化失败: {0}")]
    JsonSerializeError(#[from] serde_json::Error),
}

// ==========================================
// 输出格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("未知输出格式: {}", other)),
        }
    }
}

// ==========================================
// ReportWriter - 报告渲染与写入
// ==========================================
pub struct ReportWriter {
    decimal_places: usize,
    format: OutputFormat,
}

impl ReportWriter {
    pub fn new(decimal_places: usize, format: OutputFormat) -> Self {
        Self {
            decimal_places,
            format,
        }
    }

    /// 按配置格式渲染
    pub fn render(&self, result: &AllocationResult) -> Result<String, ReportError> {
        match self.format {
            OutputFormat::Text => Ok(self.render_text(result)),
            OutputFormat::Json => self.render_json(result),
        }
    }

    /// 渲染文本报告（数值保留 decimal_places 位，去除尾随 0）
    pub fn render_text(&self, result: &AllocationResult) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Total Damage: {}",
            format_number(result.total_value, self.decimal_places)
        );
        out.push_str("Ammunition Packs Selection Ratio:\n");
        for selection in &result.selections {
            let _ = writeln!(
                out,
                "{} > {}",
                selection.name,
                format_number(selection.take_ratio, self.decimal_places)
            );
        }
        out
    }

    pub fn render_json(&self, result: &AllocationResult) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    /// 渲染并写入文件（覆盖已有内容）
    pub fn write_file(&self, path: &Path, result: &AllocationResult) -> Result<(), ReportError> {
        let content = self.render(result)?;

        fs::write(path, content).map_err(|e| ReportError::WriteFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        info!(
            path = %path.display(),
            selected_count = result.selections.len(),
            "报告已写入"
        );
        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new(2, OutputFormat::Text)
    }
}

/// 四舍五入到指定位数并去除尾随 0（70.00 → 70，0.70 → 0.7）
pub fn format_number(value: f64, decimal_places: usize) -> String {
    let fixed = format!("{:.*}", decimal_places, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::Selection;
    use tempfile::TempDir;

    fn sample_result() -> AllocationResult {
        AllocationResult {
            selections: vec![
                Selection {
                    name: "A".to_string(),
                    take_ratio: 1.0,
                    weight: 5.0,
                    value: 50.0,
                },
                Selection {
                    name: "B".to_string(),
                    take_ratio: 1.0 / 3.0,
                    weight: 3.0,
                    value: 9.0,
                },
            ],
            total_value: 53.0,
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(70.0, 2), "70");
        assert_eq!(format_number(0.7, 2), "0.7");
        assert_eq!(format_number(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_number(2.0 / 3.0, 2), "0.67");
        assert_eq!(format_number(-0.001, 2), "0");
        assert_eq!(format_number(12.0, 0), "12");
    }

    #[test]
    fn test_render_text() {
        let text = ReportWriter::default().render_text(&sample_result());

        assert_eq!(
            text,
            "Total Damage: 53\nAmmunition Packs Selection Ratio:\nA > 1\nB > 0.33\n"
        );
    }

    #[test]
    fn test_render_text_empty() {
        let text = ReportWriter::default().render_text(&AllocationResult::empty());
        assert_eq!(text, "Total Damage: 0\nAmmunition Packs Selection Ratio:\n");
    }

    #[test]
    fn test_render_json() {
        let writer = ReportWriter::new(2, OutputFormat::Json);
        let json = writer.render(&sample_result()).unwrap();

        let parsed: AllocationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.selections.len(), 2);
        assert_eq!(parsed.total_value, 53.0);
    }

    #[test]
    fn test_write_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        ReportWriter::default()
            .write_file(&path, &sample_result())
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Total Damage: 53\n"));
    }
}

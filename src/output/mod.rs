// ==========================================
// 弹药配装优化系统 - 输出层
// ==========================================
// 职责: 将分配结果渲染为报告（文本 / JSON）并写出
// ==========================================

pub mod report_writer;

pub use report_writer::{format_number, OutputFormat, ReportError, ReportWriter};

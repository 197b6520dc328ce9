// ==========================================
// 弹药配装优化系统 - API层错误类型
// ==========================================
// 职责: 汇总导入 / 配置 / 输出错误，供调用方统一处理
// 红线: 任一错误都终止本次计算，不输出部分结果
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use crate::output::ReportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("输入导入失败: {0}")]
    Import(#[from] ImportError),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    // ==========================================
    // 输出错误
    // ==========================================
    #[error("报告输出失败: {0}")]
    OutputWriteError(#[from] ReportError),
}

impl ApiError {
    /// 是否为输入记录不足（需静默终止，不产生输出）
    pub fn is_input_shortage(&self) -> bool {
        matches!(self, ApiError::Import(ImportError::InputShortage { .. }))
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

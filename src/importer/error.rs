// ==========================================
// 弹药配装优化系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 所有导入错误均为终止性错误，不产生部分结果
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .txt/.json）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("记录解析失败: {0}")]
    CsvParseError(String),

    #[error("JSON 解析失败: {0}")]
    JsonParseError(String),

    // ===== 格式错误 =====
    #[error("头部缺失 (行 {line}): 期望 `{field}: <值>`")]
    HeaderMissing { line: usize, field: String },

    #[error("类型转换失败 (行 {row}, 字段 {field}): 无法解析 `{value}`")]
    TypeConversion {
        row: usize,
        field: String,
        value: String,
    },

    #[error("记录格式错误 (行 {row}): 期望 `名称 / 重量 / 伤害`，实际 {fields} 个字段")]
    MalformedRecord { row: usize, fields: usize },

    #[error("弹药记录不足: 声明 {declared} 条，实际 {found} 条")]
    InputShortage { declared: usize, found: usize },

    // ===== 前置条件错误 =====
    #[error("弹药数据无效 (行 {row}, 名称 {name}): {message}")]
    InvalidItem {
        row: usize,
        name: String,
        message: String,
    },

    #[error("最大重量无效: {0}（必须为非负有限数）")]
    CapacityNegative(f64),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::JsonParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

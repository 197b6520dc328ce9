// ==========================================
// 弹药配装优化系统 - 导入层
// ==========================================
// 职责: 读取外部输入，校验分配前置条件
// 支持: 文本格式, JSON
// ==========================================

// 模块声明
pub mod dq_validator;
pub mod error;
pub mod file_parser;
pub mod input_parser_trait;

// 重导出核心类型
pub use dq_validator::DqValidator;
pub use error::{ImportError, ImportResult};
pub use file_parser::{JsonInputParser, TextInputParser, UniversalInputParser};

// 重导出 Trait 接口
pub use input_parser_trait::InputParser;

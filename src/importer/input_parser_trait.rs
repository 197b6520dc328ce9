// ==========================================
// 弹药配装优化系统 - 输入解析接口
// ==========================================
// 职责: 定义输入解析器的统一接口（文本格式 / JSON）
// ==========================================

use crate::domain::item::AllocationInput;
use crate::importer::error::{ImportError, ImportResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

// ==========================================
// Trait: InputParser
// ==========================================
pub trait InputParser: Send + Sync {
    /// 从任意读取源解析分配输入
    ///
    /// # 返回
    /// - Ok(AllocationInput): 容量 + 恰好 declared_count 条弹药记录
    /// - Err: 格式错误、记录不足
    fn parse_reader(&self, reader: Box<dyn Read + '_>) -> ImportResult<AllocationInput>;

    /// 从文件解析分配输入
    fn parse_file(&self, file_path: &Path) -> ImportResult<AllocationInput> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        self.parse_reader(Box::new(file))
    }
}

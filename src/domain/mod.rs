// ==========================================
// 弹药配装优化系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与策略类型
// 红线: 不含文件读写逻辑,不含引擎逻辑
// ==========================================

pub mod item;
pub mod types;

// 重导出核心类型
pub use item::{AllocationInput, AllocationResult, Item, Selection};
pub use types::{RatioMode, ZeroTakePolicy};

// ==========================================
// 弹药配装优化系统 - 引擎层
// ==========================================
// 职责: 贪心分配规则,不做文件读写
// 红线: 引擎为纯函数,输入相同则输出相同
// ==========================================

pub mod allocator;
pub mod ranking;

// 重导出核心引擎
pub use allocator::Allocator;
pub use ranking::{RankedItem, ValueDensityRanker};

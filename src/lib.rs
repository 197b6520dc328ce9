// ==========================================
// 弹药配装优化系统 - 核心库
// ==========================================
// 系统定位: 在最大累计重量约束下选择弹药组合，使总伤害最大
// 算法: 分数背包贪心（按单位重量伤害降序填充，最后一项允许部分选入）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 贪心分配
pub mod engine;

// 导入层 - 外部输入
pub mod importer;

// 输出层 - 结果报告
pub mod output;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    AllocationInput, AllocationResult, Item, RatioMode, Selection, ZeroTakePolicy,
};

// 引擎
pub use engine::{Allocator, ValueDensityRanker};

// API
pub use api::{AllocationApi, ApiError, ApiResult};

// 配置
pub use config::AllocatorConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "弹药配装优化系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

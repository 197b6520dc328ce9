// ==========================================
// 弹药配装优化系统 - 配置层
// ==========================================
// 职责: 运行配置管理,支持多级覆写
// 来源: JSON 配置文件 / 环境变量 / 命令行参数
// ==========================================

pub mod allocator_config;

// 重导出核心配置
pub use allocator_config::{config_keys, default_config_path, AllocatorConfig, ConfigError};

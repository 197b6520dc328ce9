// ==========================================
// 弹药配装优化系统 - API 层
// ==========================================
// 职责: 对外业务接口,编排导入/校验/引擎/输出
// ==========================================

pub mod allocation_api;
pub mod error;

pub use allocation_api::AllocationApi;
pub use error::{ApiError, ApiResult};

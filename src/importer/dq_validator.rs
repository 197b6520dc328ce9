// ==========================================
// 弹药配装优化系统 - 数据质量校验器
// ==========================================
// 职责: 分配前置条件校验（容量非负、重量为正、数值有限）
// 红线: 校验失败即终止，不进入分配引擎
// ==========================================

use crate::domain::item::AllocationInput;
use crate::importer::error::{ImportError, ImportResult};
use tracing::warn;

// 第一条弹药记录所在行号（头部两行之后）
const FIRST_RECORD_ROW: usize = 3;

pub struct DqValidator;

impl DqValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验分配输入
    ///
    /// # 返回
    /// - Ok(()): 满足分配引擎前置条件
    /// - Err(CapacityNegative): 容量为负或非有限数
    /// - Err(InvalidItem): 首个不合法的弹药记录
    pub fn validate(&self, input: &AllocationInput) -> ImportResult<()> {
        if !input.capacity.is_finite() || input.capacity < 0.0 {
            warn!(capacity = input.capacity, "最大重量无效");
            return Err(ImportError::CapacityNegative(input.capacity));
        }

        for (idx, item) in input.items.iter().enumerate() {
            let message = if !item.weight.is_finite() || item.weight <= 0.0 {
                Some(format!("重量必须为正数，实际 {}", item.weight))
            } else if !item.value.is_finite() {
                Some(format!("伤害必须为有限数，实际 {}", item.value))
            } else {
                None
            };

            if let Some(message) = message {
                warn!(name = %item.name, %message, "弹药数据无效");
                return Err(ImportError::InvalidItem {
                    row: idx + FIRST_RECORD_ROW,
                    name: item.name.clone(),
                    message,
                });
            }
        }

        Ok(())
    }
}

impl Default for DqValidator {
    fn default() -> Self {
        Self::new()
    }
}

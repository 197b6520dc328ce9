// ==========================================
// 弹药配装优化系统 - 领域类型定义
// ==========================================
// 职责: 分配策略相关的枚举（比值计算方式 / 零比例选择处理）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 比值计算方式 (Ratio Mode)
// ==========================================
// 决定 value_per_weight 的计算精度，影响排序与平局处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioMode {
    /// 全精度实数除法（默认）
    Exact,
    /// 向零截断为整数（兼容旧输出）
    Truncated,
}

impl RatioMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatioMode::Exact => "exact",
            RatioMode::Truncated => "truncated",
        }
    }

    /// 计算单位重量价值
    pub fn value_per_weight(&self, value: f64, weight: f64) -> f64 {
        let ratio = value / weight;
        match self {
            RatioMode::Exact => ratio,
            RatioMode::Truncated => ratio.trunc(),
        }
    }
}

impl Default for RatioMode {
    fn default() -> Self {
        RatioMode::Exact
    }
}

impl fmt::Display for RatioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RatioMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(RatioMode::Exact),
            "truncated" | "truncate" | "legacy" => Ok(RatioMode::Truncated),
            other => Err(format!("未知比值计算方式: {}", other)),
        }
    }
}

// ==========================================
// 零比例选择处理 (Zero Take Policy)
// ==========================================
// 仅当剩余容量为 0 时遇到首个物品才会产生 take_ratio = 0 的选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTakePolicy {
    /// 丢弃零比例选择（默认）
    Omit,
    /// 保留零比例选择
    Keep,
}

impl ZeroTakePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZeroTakePolicy::Omit => "omit",
            ZeroTakePolicy::Keep => "keep",
        }
    }
}

impl Default for ZeroTakePolicy {
    fn default() -> Self {
        ZeroTakePolicy::Omit
    }
}

impl fmt::Display for ZeroTakePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ZeroTakePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "omit" | "drop" => Ok(ZeroTakePolicy::Omit),
            "keep" => Ok(ZeroTakePolicy::Keep),
            other => Err(format!("未知零比例处理策略: {}", other)),
        }
    }
}

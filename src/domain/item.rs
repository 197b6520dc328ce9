// ==========================================
// 弹药配装优化系统 - 弹药与选择结果领域模型
// ==========================================
// 职责: Item（弹药类型）/ Selection（选择比例）/ AllocationResult（分配结果）
// 红线: Item 读入后不可变；累计重量不得超过容量
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Item - 弹药类型
// ==========================================
// weight: 单位重量（必须 > 0，由 DqValidator 保证）
// value:  单位伤害
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub weight: f64,
    pub value: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }
}

// ==========================================
// Selection - 单个弹药的选择结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub name: String,
    pub take_ratio: f64, // 1.0 = 整包选入；(0,1) = 部分选入（最多一个）
    pub weight: f64,
    pub value: f64,
}

impl Selection {
    /// 实际占用重量
    pub fn taken_weight(&self) -> f64 {
        self.weight * self.take_ratio
    }

    /// 实际贡献伤害
    pub fn contribution(&self) -> f64 {
        self.value * self.take_ratio
    }

    pub fn is_partial(&self) -> bool {
        self.take_ratio < 1.0
    }
}

// ==========================================
// AllocationResult - 分配结果
// ==========================================
// selections 按名称升序排列（排名顺序只是计算细节）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub selections: Vec<Selection>,
    pub total_value: f64,
}

impl AllocationResult {
    pub fn empty() -> Self {
        Self {
            selections: Vec::new(),
            total_value: 0.0,
        }
    }

    /// 所有选择的实际占用总重量
    pub fn total_weight(&self) -> f64 {
        self.selections.iter().map(Selection::taken_weight).sum()
    }

    /// 部分选入的条目（按不变量至多一个）
    pub fn partial_selections(&self) -> impl Iterator<Item = &Selection> {
        self.selections.iter().filter(|s| s.is_partial())
    }
}

// ==========================================
// AllocationInput - 一次分配所需的全部输入
// ==========================================
// 由导入层生成，declared_count 为输入头部声明的记录数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationInput {
    pub declared_count: usize,
    pub capacity: f64,
    pub items: Vec<Item>,
}

// ==========================================
// 弹药配装优化系统 - 贪心分配引擎
// ==========================================
// 职责: 分数背包贪心选择
// 输入: 容量 + 弹药列表（已校验）
// 输出: AllocationResult（按名称排序的选择 + 总伤害）
// ==========================================
// 红线: 累计占用重量不得超过容量；至多一个部分选入
// ==========================================

use crate::domain::item::{AllocationResult, Item, Selection};
use crate::domain::types::{RatioMode, ZeroTakePolicy};
use crate::engine::ranking::{RankedItem, ValueDensityRanker};
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

// ==========================================
// FillState - 折叠状态
// ==========================================
// 沿排名序列传递：剩余容量 + 已选列表 + 是否已停止
#[derive(Debug)]
struct FillState {
    remaining: f64,
    selections: Vec<Selection>,
    stopped: bool,
}

impl FillState {
    fn start(capacity: f64) -> Self {
        Self {
            remaining: capacity,
            selections: Vec::new(),
            stopped: false,
        }
    }

    /// 尝试选入一个排名条目
    ///
    /// 规则：
    /// 1) remaining > weight: 整包选入，继续
    /// 2) remaining == weight: 整包选入，停止
    /// 3) remaining < weight: 按 remaining / weight 部分选入，停止
    fn admit(self, ranked: &RankedItem<'_>) -> Self {
        if self.stopped {
            return self;
        }

        let item = ranked.item;
        let (take_ratio, remaining, stopped) = if self.remaining > item.weight {
            (1.0, self.remaining - item.weight, false)
        } else if self.remaining == item.weight {
            (1.0, 0.0, true)
        } else {
            (self.remaining / item.weight, 0.0, true)
        };

        debug!(
            name = %item.name,
            value_per_weight = ranked.value_per_weight,
            take_ratio,
            remaining,
            "选入弹药"
        );

        let mut selections = self.selections;
        selections.push(Selection {
            name: item.name.clone(),
            take_ratio,
            weight: item.weight,
            value: item.value,
        });

        Self {
            remaining,
            selections,
            stopped,
        }
    }
}

// ==========================================
// Allocator - 贪心分配引擎
// ==========================================
pub struct Allocator {
    ranker: ValueDensityRanker,
    zero_take_policy: ZeroTakePolicy,
}

impl Allocator {
    /// 构造函数（全精度比值 + 丢弃零比例选择）
    pub fn new() -> Self {
        Self::with_policy(RatioMode::default(), ZeroTakePolicy::default())
    }

    /// 按指定策略构造
    pub fn with_policy(ratio_mode: RatioMode, zero_take_policy: ZeroTakePolicy) -> Self {
        Self {
            ranker: ValueDensityRanker::new(ratio_mode),
            zero_take_policy,
        }
    }

    pub fn ratio_mode(&self) -> RatioMode {
        self.ranker.ratio_mode()
    }

    pub fn zero_take_policy(&self) -> ZeroTakePolicy {
        self.zero_take_policy
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算最优分配
    ///
    /// 前置条件（调用方负责，见 DqValidator）：
    /// - capacity >= 0
    /// - 每个 item.weight > 0
    ///
    /// # 参数
    /// - `capacity`: 最大累计重量
    /// - `items`: 弹药列表（允许重名，视为独立条目）
    ///
    /// # 返回
    /// 按名称升序排列的选择列表 + 总伤害
    #[instrument(skip(self, items), fields(
        items_count = items.len(),
        ratio_mode = %self.ratio_mode(),
        zero_take_policy = %self.zero_take_policy
    ))]
    pub fn allocate(&self, capacity: f64, items: &[Item]) -> AllocationResult {
        let ranked = self.ranker.rank(items);

        let filled = ranked
            .iter()
            .fold(FillState::start(capacity), |state, ranked| state.admit(ranked));

        let mut selections: Vec<Selection> = match self.zero_take_policy {
            ZeroTakePolicy::Keep => filled.selections,
            ZeroTakePolicy::Omit => filled
                .selections
                .into_iter()
                .filter(|s| s.take_ratio > 0.0)
                .collect(),
        };

        selections.sort_by(compare_for_report);

        let total_value: f64 = selections.iter().map(Selection::contribution).sum();

        info!(
            selected_count = selections.len(),
            remaining_capacity = filled.remaining,
            total_value,
            "分配完成"
        );

        AllocationResult {
            selections,
            total_value,
        }
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new()
    }
}

/// 报告顺序：名称升序，其余字段 (take_ratio, weight, value) 升序兜底
fn compare_for_report(a: &Selection, b: &Selection) -> Ordering {
    a.name
        .cmp(&b.name)
        .then_with(|| a.take_ratio.total_cmp(&b.take_ratio))
        .then_with(|| a.weight.total_cmp(&b.weight))
        .then_with(|| a.value.total_cmp(&b.value))
}

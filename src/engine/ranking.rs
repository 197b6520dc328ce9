// ==========================================
// 弹药配装优化系统 - 单位重量价值排序引擎
// ==========================================
// 职责: 计算 value_per_weight 并按复合键降序排序
// 输入: 弹药列表
// 输出: 排名后的 RankedItem 列表（借用原始 Item）
// ==========================================
// 排序键: (value_per_weight, name, weight, value) 整体降序
// 平局必须可复现，不依赖输入顺序
// ==========================================

use crate::domain::item::Item;
use crate::domain::types::RatioMode;
use std::cmp::Ordering;

// ==========================================
// RankedItem - 排名视图
// ==========================================
// 仅在计算内部使用，不对外持久化
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedItem<'a> {
    pub item: &'a Item,
    pub value_per_weight: f64,
}

// ==========================================
// ValueDensityRanker - 排序引擎
// ==========================================
pub struct ValueDensityRanker {
    ratio_mode: RatioMode,
}

impl ValueDensityRanker {
    /// 构造函数
    ///
    /// # 参数
    /// - `ratio_mode`: 比值计算方式（全精度 / 截断）
    pub fn new(ratio_mode: RatioMode) -> Self {
        Self { ratio_mode }
    }

    pub fn ratio_mode(&self) -> RatioMode {
        self.ratio_mode
    }

    /// 排序弹药列表
    ///
    /// # 返回
    /// 排名后的列表（单位重量价值从高到低）
    pub fn rank<'a>(&self, items: &'a [Item]) -> Vec<RankedItem<'a>> {
        let mut ranked: Vec<RankedItem<'a>> = items
            .iter()
            .map(|item| RankedItem {
                item,
                value_per_weight: self.ratio_mode.value_per_weight(item.value, item.weight),
            })
            .collect();

        ranked.sort_by(|a, b| self.compare(a, b));
        ranked
    }

    /// 比较两个排名条目（Ordering::Less 表示 a 排在前面）
    pub fn compare(&self, a: &RankedItem<'_>, b: &RankedItem<'_>) -> Ordering {
        b.value_per_weight
            .total_cmp(&a.value_per_weight)
            .then_with(|| b.item.name.cmp(&a.item.name))
            .then_with(|| b.item.weight.total_cmp(&a.item.weight))
            .then_with(|| b.item.value.total_cmp(&a.item.value))
    }
}

impl Default for ValueDensityRanker {
    fn default() -> Self {
        Self::new(RatioMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(ranked: &[RankedItem<'_>]) -> Vec<String> {
        ranked.iter().map(|r| r.item.name.clone()).collect()
    }

    #[test]
    fn test_rank_by_value_per_weight_desc() {
        let items = vec![
            Item::new("Low", 10.0, 10.0),
            Item::new("High", 2.0, 30.0),
            Item::new("Mid", 4.0, 20.0),
        ];

        let ranked = ValueDensityRanker::default().rank(&items);

        assert_eq!(names(&ranked), vec!["High", "Mid", "Low"]);
        assert_eq!(ranked[0].value_per_weight, 15.0);
    }

    #[test]
    fn test_tie_breaks_on_name_then_weight_then_value_desc() {
        let items = vec![
            Item::new("A", 5.0, 50.0),
            Item::new("B", 5.0, 50.0),
            Item::new("B", 2.0, 20.0),
            Item::new("C", 1.0, 10.0),
        ];

        let ranked = ValueDensityRanker::default().rank(&items);

        assert_eq!(names(&ranked), vec!["C", "B", "B", "A"]);
        // 同名同比值：重量大者在前
        assert_eq!(ranked[1].item.weight, 5.0);
        assert_eq!(ranked[2].item.weight, 2.0);
    }

    #[test]
    fn test_rank_independent_of_input_order() {
        let forward = vec![
            Item::new("X", 3.0, 9.0),
            Item::new("Y", 3.0, 9.0),
            Item::new("Z", 1.0, 7.0),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let ranker = ValueDensityRanker::default();
        assert_eq!(names(&ranker.rank(&forward)), names(&ranker.rank(&backward)));
    }

    #[test]
    fn test_truncated_mode_creates_ties() {
        // 全精度下 P(2.9) > Q(2.1)；截断后同为 2，按名称降序 Q 在前
        let items = vec![Item::new("P", 10.0, 29.0), Item::new("Q", 10.0, 21.0)];

        let exact = ValueDensityRanker::new(RatioMode::Exact).rank(&items);
        let truncated = ValueDensityRanker::new(RatioMode::Truncated).rank(&items);

        assert_eq!(names(&exact), vec!["P", "Q"]);
        assert_eq!(names(&truncated), vec!["Q", "P"]);
        assert_eq!(truncated[0].value_per_weight, 2.0);
    }

    #[test]
    fn test_rank_empty() {
        let items: Vec<Item> = Vec::new();
        assert!(ValueDensityRanker::default().rank(&items).is_empty());
    }
}

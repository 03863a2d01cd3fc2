// ==========================================
// 设施维保/安全巡检 - 检查清单聚合引擎
// ==========================================
// 职责: 检查项 → 分类得分 → 加权总分, 以及完成度统计
// 红线: 无状态, 每次变更整体重算, 不维护累计值
// 边界: 空分类得 0 分 (不跳过, 不给满分)
//       权重和为 0 时总分为 0
// ==========================================

use crate::config::profile::PassRule;
use crate::domain::checklist::{
    CategoryResult, ChecklistItemResult, CompletionStats, GENERAL_CATEGORY_ID,
    GENERAL_CATEGORY_NAME,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 聚合结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistSummary {
    /// 已回写 category_compliance_score 的分类
    pub categories: Vec<CategoryResult>,
    pub overall_score: u8,
    pub completion: CompletionStats,
}

// ==========================================
// ChecklistAggregator - 检查清单聚合引擎
// ==========================================
pub struct ChecklistAggregator {
    pass_rule: PassRule,
}

impl ChecklistAggregator {
    pub fn new(pass_rule: PassRule) -> Self {
        Self { pass_rule }
    }

    /// 维保隐式分类 (无显式分类时使用, 权重 100)
    pub fn implicit_general_category(items: Vec<ChecklistItemResult>) -> CategoryResult {
        CategoryResult::new(GENERAL_CATEGORY_ID, GENERAL_CATEGORY_NAME, 100.0).with_items(items)
    }

    /// 检查项是否计入合格
    ///
    /// - Completed: completed
    /// - CompletedAndCompliant: completed 且 status ∈ {compliant, not_applicable}
    pub fn is_passing(&self, item: &ChecklistItemResult) -> bool {
        match self.pass_rule {
            PassRule::Completed => item.completed,
            PassRule::CompletedAndCompliant => item.completed && item.status.counts_as_passing(),
        }
    }

    /// 分类得分 = round(100 × 合格数 / 总数), 空分类为 0
    pub fn aggregate_category(&self, items: &[ChecklistItemResult]) -> u8 {
        let passing = items.iter().filter(|item| self.is_passing(item)).count();
        percentage(passing, items.len())
    }

    /// 加权总分 = round(Σ(分类得分 × 权重) / Σ权重)
    ///
    /// 使用各分类已有的 category_compliance_score;
    /// 非有限或负的权重按 0 处理
    pub fn aggregate_overall(&self, categories: &[CategoryResult]) -> u8 {
        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;

        for category in categories {
            let weight = effective_weight(category);
            weighted_sum += f64::from(category.category_compliance_score) * weight;
            weight_sum += weight;
        }

        if weight_sum <= 0.0 {
            return 0;
        }

        (weighted_sum / weight_sum).round().clamp(0.0, 100.0) as u8
    }

    /// 重算并回写每个分类的 category_compliance_score
    pub fn rescore_categories(&self, categories: &mut [CategoryResult]) {
        for category in categories.iter_mut() {
            category.category_compliance_score = self.aggregate_category(&category.checklist_items);
        }
    }

    /// 完成度统计 (跨分类展平, 只看 completed)
    pub fn completion_stats(&self, categories: &[CategoryResult]) -> CompletionStats {
        let mut stats = CompletionStats::default();

        for category in categories {
            stats.time_spent_minutes = stats.time_spent_minutes.saturating_add(category.time_spent);
            for item in &category.checklist_items {
                stats.total += 1;
                if item.completed {
                    stats.completed += 1;
                }
                if item.is_required {
                    stats.required_total += 1;
                    if item.completed {
                        stats.required_completed += 1;
                    }
                }
            }
        }

        stats.percentage = percentage(stats.completed, stats.total);
        stats
    }

    /// 完整聚合: 分类得分 → 总分 → 完成度
    #[instrument(skip(self, categories), fields(categories = categories.len()))]
    pub fn summarize(&self, categories: &[CategoryResult]) -> ChecklistSummary {
        let mut categories = categories.to_vec();
        self.rescore_categories(&mut categories);

        let overall_score = self.aggregate_overall(&categories);
        let completion = self.completion_stats(&categories);

        tracing::debug!(
            overall_score,
            completed = completion.completed,
            total = completion.total,
            "检查清单聚合完成"
        );

        ChecklistSummary {
            categories,
            overall_score,
            completion,
        }
    }
}

fn effective_weight(category: &CategoryResult) -> f64 {
    if category.weight.is_finite() && category.weight > 0.0 {
        category.weight
    } else {
        if category.weight != 0.0 {
            tracing::warn!(
                category_id = %category.category_id,
                weight = category.weight,
                "分类权重非法, 按 0 处理"
            );
        }
        0.0
    }
}

/// round(100 × part / total), total 为 0 时返回 0
fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * part as f64 / total as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ItemStatus;

    fn item(id: &str, completed: bool, status: ItemStatus) -> ChecklistItemResult {
        let mut item = ChecklistItemResult::new(id, "检查项");
        item.completed = completed;
        item.status = status;
        item
    }

    fn scored(id: &str, weight: f64, score: u8) -> CategoryResult {
        let mut category = CategoryResult::new(id, id, weight);
        category.category_compliance_score = score;
        category
    }

    fn safety() -> ChecklistAggregator {
        ChecklistAggregator::new(PassRule::CompletedAndCompliant)
    }

    fn maintenance() -> ChecklistAggregator {
        ChecklistAggregator::new(PassRule::Completed)
    }

    #[test]
    fn test_scenario_1_empty_category_scores_zero() {
        assert_eq!(safety().aggregate_category(&[]), 0);
        assert_eq!(maintenance().aggregate_category(&[]), 0);
    }

    #[test]
    fn test_scenario_2_empty_category_contributes_zero() {
        let categories = vec![
            CategoryResult::new("A", "A", 50.0)
                .with_items(vec![item("1", true, ItemStatus::Compliant)]),
            CategoryResult::new("B", "B", 50.0),
        ];

        let summary = safety().summarize(&categories);
        assert_eq!(summary.categories[1].category_compliance_score, 0);
        assert_eq!(summary.overall_score, 50, "空分类按 0 分参与加权");
    }

    #[test]
    fn test_scenario_3_weighted_overall() {
        let categories = vec![scored("A", 70.0, 100), scored("B", 30.0, 0)];
        assert_eq!(safety().aggregate_overall(&categories), 70);
    }

    #[test]
    fn test_scenario_4_weights_are_normalized() {
        // 权重和不为 100
        let categories = vec![scored("A", 1.0, 100), scored("B", 3.0, 60)];
        assert_eq!(safety().aggregate_overall(&categories), 70);
    }

    #[test]
    fn test_scenario_5_zero_weight_sum() {
        let categories = vec![scored("A", 0.0, 100), scored("B", 0.0, 80)];
        assert_eq!(safety().aggregate_overall(&categories), 0);
        assert_eq!(safety().aggregate_overall(&[]), 0);
    }

    #[test]
    fn test_scenario_6_invalid_weights_count_as_zero() {
        let categories = vec![
            scored("A", -20.0, 0),
            scored("B", f64::NAN, 0),
            scored("C", 10.0, 90),
        ];
        assert_eq!(safety().aggregate_overall(&categories), 90);
    }

    #[test]
    fn test_scenario_7_safety_pass_rule() {
        let items = vec![
            item("1", true, ItemStatus::Compliant),
            item("2", true, ItemStatus::NotApplicable),
            item("3", true, ItemStatus::NonCompliant),
            item("4", false, ItemStatus::Compliant),
        ];

        // 4 项中只有 2 项计入
        assert_eq!(safety().aggregate_category(&items), 50);
        // 维保只看 completed
        assert_eq!(maintenance().aggregate_category(&items), 75);
    }

    #[test]
    fn test_scenario_8_category_rounding() {
        let items = vec![
            item("1", true, ItemStatus::Compliant),
            item("2", true, ItemStatus::Compliant),
            item("3", false, ItemStatus::Pending),
        ];
        assert_eq!(safety().aggregate_category(&items), 67);

        let items = vec![
            item("1", true, ItemStatus::Compliant),
            item("2", false, ItemStatus::Pending),
            item("3", false, ItemStatus::Pending),
        ];
        assert_eq!(safety().aggregate_category(&items), 33);
    }

    #[test]
    fn test_scenario_9_end_to_end_two_categories() {
        let categories = vec![
            CategoryResult::new("A", "消防设施", 60.0).with_items(vec![
                item("A1", true, ItemStatus::Compliant),
                item("A2", true, ItemStatus::Compliant),
                item("A3", false, ItemStatus::Pending),
            ]),
            CategoryResult::new("B", "电气安全", 40.0).with_items(vec![
                item("B1", true, ItemStatus::Compliant),
                item("B2", true, ItemStatus::Compliant),
            ]),
        ];

        let summary = safety().summarize(&categories);
        assert_eq!(summary.categories[0].category_compliance_score, 67);
        assert_eq!(summary.categories[1].category_compliance_score, 100);
        assert_eq!(summary.overall_score, 80);
        assert_eq!(summary.completion.completed, 4);
        assert_eq!(summary.completion.total, 5);
        assert_eq!(summary.completion.percentage, 80);
    }

    #[test]
    fn test_scenario_10_completion_stats_extras() {
        let mut required_done = item("1", true, ItemStatus::Compliant);
        required_done.is_required = true;
        let mut required_open = item("2", false, ItemStatus::Pending);
        required_open.is_required = true;

        let mut a = CategoryResult::new("A", "A", 50.0).with_items(vec![required_done]);
        a.time_spent = 25;
        let mut b = CategoryResult::new("B", "B", 50.0).with_items(vec![required_open]);
        b.time_spent = 35;

        let stats = maintenance().completion_stats(&[a, b]);
        assert_eq!(stats.required_total, 2);
        assert_eq!(stats.required_completed, 1);
        assert!(!stats.required_satisfied());
        assert_eq!(stats.time_spent_minutes, 60);
        assert_eq!(stats.percentage, 50);
    }

    #[test]
    fn test_scenario_11_completion_zero_items() {
        let stats = safety().completion_stats(&[CategoryResult::new("A", "A", 100.0)]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percentage, 0);
    }

    #[test]
    fn test_scenario_12_completion_ignores_status() {
        // 完成度只看 completed, 与合规判定无关
        let categories = vec![CategoryResult::new("A", "A", 100.0)
            .with_items(vec![item("1", true, ItemStatus::NonCompliant)])];

        let summary = safety().summarize(&categories);
        assert_eq!(summary.completion.percentage, 100);
        assert_eq!(summary.overall_score, 0);
    }

    #[test]
    fn test_scenario_13_implicit_general_category() {
        let category = ChecklistAggregator::implicit_general_category(vec![
            item("1", true, ItemStatus::Pending),
            item("2", false, ItemStatus::Pending),
        ]);
        assert_eq!(category.category_id, GENERAL_CATEGORY_ID);
        assert_eq!(category.weight, 100.0);

        let summary = maintenance().summarize(&[category]);
        assert_eq!(summary.overall_score, 50);
    }

    #[test]
    fn test_scenario_14_stale_stored_score_is_replaced() {
        let mut category = CategoryResult::new("A", "A", 100.0)
            .with_items(vec![item("1", false, ItemStatus::Pending)]);
        category.category_compliance_score = 100; // 过期值

        let summary = safety().summarize(&[category]);
        assert_eq!(summary.categories[0].category_compliance_score, 0);
        assert_eq!(summary.overall_score, 0);
    }
}

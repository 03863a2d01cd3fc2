// ==========================================
// 设施维保/安全巡检 - 检查清单领域模型
// ==========================================
// 层级: ChecklistItemResult (叶子) -> CategoryResult (分类)
// 分类得分为派生字段, 由 ChecklistAggregator 计算
// ==========================================

use crate::domain::types::{ItemStatus, RiskLevel};
use serde::{Deserialize, Serialize};

/// 维保领域隐式分类的 ID
pub const GENERAL_CATEGORY_ID: &str = "general";

/// 维保领域隐式分类的名称
pub const GENERAL_CATEGORY_NAME: &str = "general checklist";

// ==========================================
// ChecklistItemResult - 检查项结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItemResult {
    pub item_id: String,     // 分类内唯一
    pub description: String, // 检查内容
    #[serde(default)]
    pub is_required: bool, // 是否必检
    #[serde(default)]
    pub risk_level: Option<RiskLevel>, // 风险等级 (仅安全巡检)
    #[serde(default)]
    pub completed: bool, // 是否已执行
    #[serde(default)]
    pub status: ItemStatus, // 判定结果
    #[serde(default)]
    pub notes: Option<String>,
}

impl ChecklistItemResult {
    pub fn new(item_id: &str, description: &str) -> Self {
        Self {
            item_id: item_id.to_string(),
            description: description.to_string(),
            is_required: false,
            risk_level: None,
            completed: false,
            status: ItemStatus::Pending,
            notes: None,
        }
    }
}

// ==========================================
// CategoryResult - 分类结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    pub category_id: String,
    pub category_name: String,

    /// 分类权重 (0-100), 各分类之和不要求为 100, 聚合时归一化
    pub weight: f64,

    /// 耗时 (分钟, 人工填写)
    #[serde(default)]
    pub time_spent: u32,

    #[serde(default)]
    pub checklist_items: Vec<ChecklistItemResult>,

    /// 分类得分 (0-100, 派生)
    #[serde(default)]
    pub category_compliance_score: u8,
}

impl CategoryResult {
    pub fn new(category_id: &str, category_name: &str, weight: f64) -> Self {
        Self {
            category_id: category_id.to_string(),
            category_name: category_name.to_string(),
            weight,
            time_spent: 0,
            checklist_items: Vec::new(),
            category_compliance_score: 0,
        }
    }

    pub fn with_items(mut self, items: Vec<ChecklistItemResult>) -> Self {
        self.checklist_items = items;
        self
    }
}

// ==========================================
// CompletionStats - 完成度统计
// ==========================================
// 与合规得分相互独立: 只看 completed 字段, 跨分类展平统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8, // total == 0 时为 0

    pub required_completed: usize,
    pub required_total: usize,

    /// 各分类耗时之和 (分钟)
    pub time_spent_minutes: u32,
}

impl CompletionStats {
    /// 必检项是否全部完成
    pub fn required_satisfied(&self) -> bool {
        self.required_completed == self.required_total
    }
}

// ==========================================
// 设施维保/安全巡检 - 执行记录领域模型
// ==========================================
// RecordDraft:      表单实时编辑中的草稿 (用户输入)
// RecordSubmission: 提交后的不可变记录 (含全部派生字段)
// ==========================================

use crate::domain::checklist::{CategoryResult, CompletionStats};
use crate::domain::types::{ComplianceStatus, Domain, RecordStatus, RiskLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Violation - 违规项 (仅安全巡检)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub violation_id: String,
    pub description: String,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub corrective_action: Option<String>,
}

impl Violation {
    pub fn new(violation_id: &str, description: &str, risk_level: RiskLevel) -> Self {
        Self {
            violation_id: violation_id.to_string(),
            description: description.to_string(),
            risk_level,
            category_id: None,
            corrective_action: None,
        }
    }
}

// ==========================================
// RecordDraft - 记录草稿
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub schedule_id: String,
    pub completed_date: NaiveDate,

    /// 开始/结束时间 (HH:MM, 表单原始字符串)
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,

    #[serde(default)]
    pub category_results: Vec<CategoryResult>,

    #[serde(default)]
    pub violations: Vec<Violation>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl RecordDraft {
    pub fn new(schedule_id: &str, completed_date: NaiveDate) -> Self {
        Self {
            schedule_id: schedule_id.to_string(),
            completed_date,
            start_time: None,
            end_time: None,
            category_results: Vec::new(),
            violations: Vec::new(),
            notes: None,
        }
    }
}

// ==========================================
// RecordSubmission - 已提交记录
// ==========================================
// 提交后不再修改, verified 由复核角色另行设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSubmission {
    pub schedule_id: String,
    pub domain: Domain,
    pub completed_date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,

    /// 实际时长 (小时, 派生)
    pub actual_duration: Option<f64>,

    pub category_results: Vec<CategoryResult>,

    /// 加权总分 (0-100, 派生)
    pub overall_score: u8,
    pub completion: CompletionStats,

    pub status: RecordStatus,
    pub compliance_status: Option<ComplianceStatus>,
    pub violations: Vec<Violation>,

    pub notes: Option<String>,
    pub verified: bool,
}

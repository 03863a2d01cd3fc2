// ==========================================
// 设施维保/安全巡检 - 领域类型定义
// ==========================================
// 序列化格式: 与前端表单取值一致 (snake_case / kebab-case)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 业务领域 (Domain)
// ==========================================
// 维保与安全巡检两套规则并存, 由调用方所在领域选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Maintenance,      // 设备维保
    SafetyInspection, // 安全巡检
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Maintenance => "maintenance",
            Domain::SafetyInspection => "safety_inspection",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "maintenance" => Ok(Domain::Maintenance),
            "safety_inspection" | "safety-inspection" | "safety" => Ok(Domain::SafetyInspection),
            other => Err(format!("未知业务领域: {}", other)),
        }
    }
}

// ==========================================
// 执行频率 (Frequency)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    HalfYearly,
    Annually,
    Custom, // 按 custom_frequency_days 天数
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::HalfYearly => "half-yearly",
            Frequency::Annually => "annually",
            Frequency::Custom => "custom",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "half-yearly" | "half_yearly" | "semi-annually" => Ok(Frequency::HalfYearly),
            "annually" | "yearly" => Ok(Frequency::Annually),
            "custom" => Ok(Frequency::Custom),
            other => Err(format!("未知执行频率: {}", other)),
        }
    }
}

// ==========================================
// 风险等级 (Risk Level)
// ==========================================
// 仅安全巡检使用
// 顺序: Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 检查项状态 (Item Status)
// ==========================================
// 由巡检人员显式选择, 与 completed 相互独立
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Pending,           // 未判定
    Compliant,         // 合规
    NonCompliant,      // 不合规
    RequiresAttention, // 需关注
    NotApplicable,     // 不适用
}

impl ItemStatus {
    /// 安全巡检中计入合格的状态
    pub fn counts_as_passing(&self) -> bool {
        matches!(self, ItemStatus::Compliant | ItemStatus::NotApplicable)
    }
}

impl Default for ItemStatus {
    fn default() -> Self {
        ItemStatus::Pending
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Pending => write!(f, "pending"),
            ItemStatus::Compliant => write!(f, "compliant"),
            ItemStatus::NonCompliant => write!(f, "non_compliant"),
            ItemStatus::RequiresAttention => write!(f, "requires_attention"),
            ItemStatus::NotApplicable => write!(f, "not_applicable"),
        }
    }
}

// ==========================================
// 记录完成状态 (Record Status)
// ==========================================
// 顺序: Failed < PartiallyCompleted < Completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Failed,
    PartiallyCompleted,
    Completed,
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordStatus::Failed => write!(f, "failed"),
            RecordStatus::PartiallyCompleted => write!(f, "partially_completed"),
            RecordStatus::Completed => write!(f, "completed"),
        }
    }
}

// ==========================================
// 合规状态 (Compliance Status)
// ==========================================
// 仅安全巡检使用
// 顺序: NonCompliant < RequiresAttention < Compliant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    NonCompliant,
    RequiresAttention,
    Compliant,
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceStatus::NonCompliant => write!(f, "non_compliant"),
            ComplianceStatus::RequiresAttention => write!(f, "requires_attention"),
            ComplianceStatus::Compliant => write!(f, "compliant"),
        }
    }
}

// ==========================================
// 到期状态 (Due State)
// ==========================================
// 驾驶舱徽标使用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueState {
    Upcoming, // 未临近
    DueSoon,  // 临近到期
    DueToday, // 今日到期
    Overdue,  // 已超期
}

impl fmt::Display for DueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueState::Upcoming => write!(f, "upcoming"),
            DueState::DueSoon => write!(f, "due_soon"),
            DueState::DueToday => write!(f, "due_today"),
            DueState::Overdue => write!(f, "overdue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_serde_names() {
        let json = serde_json::to_string(&Frequency::HalfYearly).unwrap();
        assert_eq!(json, "\"half-yearly\"");

        let parsed: Frequency = serde_json::from_str("\"annually\"").unwrap();
        assert_eq!(parsed, Frequency::Annually);
    }

    #[test]
    fn test_frequency_from_str_aliases() {
        assert_eq!("half_yearly".parse::<Frequency>().unwrap(), Frequency::HalfYearly);
        assert_eq!(" Monthly ".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert!("fortnightly".parse::<Frequency>().is_err());
    }

    #[test]
    fn test_status_ordering_worst_first() {
        assert!(RecordStatus::Failed < RecordStatus::PartiallyCompleted);
        assert!(ComplianceStatus::NonCompliant < ComplianceStatus::RequiresAttention);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn test_item_status_passing_set() {
        assert!(ItemStatus::Compliant.counts_as_passing());
        assert!(ItemStatus::NotApplicable.counts_as_passing());
        assert!(!ItemStatus::RequiresAttention.counts_as_passing());
        assert!(!ItemStatus::Pending.counts_as_passing());
    }
}

// ==========================================
// 设施维保/安全巡检 - 记录状态判定引擎
// ==========================================
// 职责: 完成度 → status; 合规得分 + 违规 → complianceStatus
// 红线: 判定是全函数, 不报错;
//       输入缺失/越界时取最保守 (最差) 结果
// ==========================================

use crate::config::profile::{CompliancePolicy, DomainProfile, StatusThresholds};
use crate::domain::record::Violation;
use crate::domain::types::{ComplianceStatus, RecordStatus, RiskLevel};
use serde::{Deserialize, Serialize};

/// 判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub status: RecordStatus,
    /// 仅配置了 CompliancePolicy 的领域有值
    pub compliance_status: Option<ComplianceStatus>,
}

// ==========================================
// RecordClassifier - 记录状态判定引擎
// ==========================================
pub struct RecordClassifier {
    thresholds: StatusThresholds,
    compliance: Option<CompliancePolicy>,
}

impl RecordClassifier {
    pub fn new(thresholds: StatusThresholds, compliance: Option<CompliancePolicy>) -> Self {
        Self {
            thresholds,
            compliance,
        }
    }

    pub fn from_profile(profile: &DomainProfile) -> Self {
        Self::new(profile.status, profile.compliance.clone())
    }

    /// 综合判定
    ///
    /// # 参数
    /// - `completion_percentage`: 完成度百分比
    /// - `overall_score`: 加权合规总分 (仅安全巡检)
    /// - `violations`: 违规清单, None 视为无违规记录
    pub fn classify(
        &self,
        completion_percentage: Option<u8>,
        overall_score: Option<u8>,
        violations: Option<&[Violation]>,
    ) -> Classification {
        Classification {
            status: self.classify_status(completion_percentage),
            compliance_status: self.classify_compliance(overall_score, violations),
        }
    }

    /// 完成状态判定
    ///
    /// # 规则
    /// - = 100 → Completed
    /// - ≥ partial_min → PartiallyCompleted
    /// - 其他 / 缺失 / > 100 → Failed
    pub fn classify_status(&self, completion_percentage: Option<u8>) -> RecordStatus {
        match completion_percentage {
            Some(100) => RecordStatus::Completed,
            Some(p) if p > 100 => {
                tracing::warn!(percentage = p, "完成度越界, 按 failed 处理");
                RecordStatus::Failed
            }
            Some(p) if p >= self.thresholds.partial_min => RecordStatus::PartiallyCompleted,
            Some(_) => RecordStatus::Failed,
            None => RecordStatus::Failed,
        }
    }

    /// 合规状态判定 (顺序执行, 命中即返回)
    ///
    /// 1) 得分 < non_compliant_below 或 存在升级风险等级的违规 → NonCompliant
    /// 2) 得分 < attention_below 或 存在任意违规 → RequiresAttention
    /// 3) 其他 → Compliant
    ///
    /// 得分缺失或 > 100 → NonCompliant
    pub fn classify_compliance(
        &self,
        overall_score: Option<u8>,
        violations: Option<&[Violation]>,
    ) -> Option<ComplianceStatus> {
        let policy = self.compliance.as_ref()?;
        let violations = violations.unwrap_or(&[]);

        let score = match overall_score {
            Some(s) if s <= 100 => s,
            other => {
                tracing::warn!(score = ?other, "合规得分缺失或越界, 按 non_compliant 处理");
                return Some(ComplianceStatus::NonCompliant);
            }
        };

        let escalated = violations
            .iter()
            .any(|v| policy.escalating_risk_levels.contains(&v.risk_level));

        if score < policy.non_compliant_below || escalated {
            return Some(ComplianceStatus::NonCompliant);
        }

        if score < policy.attention_below || !violations.is_empty() {
            return Some(ComplianceStatus::RequiresAttention);
        }

        Some(ComplianceStatus::Compliant)
    }

    /// 违规清单中的最高风险等级
    pub fn max_violation_risk(violations: &[Violation]) -> Option<RiskLevel> {
        violations.iter().map(|v| v.risk_level).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maintenance() -> RecordClassifier {
        RecordClassifier::from_profile(&DomainProfile::maintenance())
    }

    fn safety() -> RecordClassifier {
        RecordClassifier::from_profile(&DomainProfile::safety_inspection())
    }

    fn violation(risk_level: RiskLevel) -> Violation {
        Violation::new("V1", "灭火器过期", risk_level)
    }

    #[test]
    fn test_scenario_1_maintenance_status_boundaries() {
        let c = maintenance();
        assert_eq!(c.classify_status(Some(100)), RecordStatus::Completed);
        assert_eq!(c.classify_status(Some(99)), RecordStatus::PartiallyCompleted);
        assert_eq!(c.classify_status(Some(50)), RecordStatus::PartiallyCompleted, "50 含下界");
        assert_eq!(c.classify_status(Some(49)), RecordStatus::Failed);
        assert_eq!(c.classify_status(Some(0)), RecordStatus::Failed);
    }

    #[test]
    fn test_scenario_2_safety_status_boundaries() {
        let c = safety();
        assert_eq!(c.classify_status(Some(100)), RecordStatus::Completed);
        assert_eq!(c.classify_status(Some(70)), RecordStatus::PartiallyCompleted, "70 含下界");
        assert_eq!(c.classify_status(Some(69)), RecordStatus::Failed);
    }

    #[test]
    fn test_scenario_3_missing_or_out_of_range_completion_is_failed() {
        assert_eq!(maintenance().classify_status(None), RecordStatus::Failed);
        assert_eq!(maintenance().classify_status(Some(150)), RecordStatus::Failed);
    }

    #[test]
    fn test_scenario_4_maintenance_has_no_compliance_status() {
        let result = maintenance().classify(Some(100), Some(100), None);
        assert_eq!(result.status, RecordStatus::Completed);
        assert_eq!(result.compliance_status, None);
    }

    #[test]
    fn test_scenario_5_compliance_score_thresholds() {
        let c = safety();
        assert_eq!(c.classify_compliance(Some(79), None), Some(ComplianceStatus::NonCompliant));
        assert_eq!(c.classify_compliance(Some(80), None), Some(ComplianceStatus::RequiresAttention));
        assert_eq!(c.classify_compliance(Some(94), None), Some(ComplianceStatus::RequiresAttention));
        assert_eq!(c.classify_compliance(Some(95), None), Some(ComplianceStatus::Compliant));
        assert_eq!(c.classify_compliance(Some(100), Some(&[])), Some(ComplianceStatus::Compliant));
    }

    #[test]
    fn test_scenario_6_critical_violation_overrides_high_score() {
        let violations = vec![violation(RiskLevel::Critical)];
        assert_eq!(
            safety().classify_compliance(Some(96), Some(&violations)),
            Some(ComplianceStatus::NonCompliant)
        );

        let violations = vec![violation(RiskLevel::High)];
        assert_eq!(
            safety().classify_compliance(Some(100), Some(&violations)),
            Some(ComplianceStatus::NonCompliant)
        );
    }

    #[test]
    fn test_scenario_7_minor_violation_requires_attention() {
        let violations = vec![violation(RiskLevel::Low), violation(RiskLevel::Medium)];
        assert_eq!(
            safety().classify_compliance(Some(100), Some(&violations)),
            Some(ComplianceStatus::RequiresAttention)
        );
    }

    #[test]
    fn test_scenario_8_missing_score_is_non_compliant() {
        assert_eq!(safety().classify_compliance(None, None), Some(ComplianceStatus::NonCompliant));
        assert_eq!(safety().classify_compliance(Some(101), None), Some(ComplianceStatus::NonCompliant));
    }

    #[test]
    fn test_scenario_9_end_to_end_classification() {
        let result = safety().classify(Some(80), Some(80), Some(&[]));
        assert_eq!(result.status, RecordStatus::PartiallyCompleted);
        assert_eq!(result.compliance_status, Some(ComplianceStatus::RequiresAttention));
    }

    #[test]
    fn test_scenario_10_max_violation_risk() {
        let violations = vec![
            violation(RiskLevel::Medium),
            violation(RiskLevel::Critical),
            violation(RiskLevel::Low),
        ];
        assert_eq!(RecordClassifier::max_violation_risk(&violations), Some(RiskLevel::Critical));
        assert_eq!(RecordClassifier::max_violation_risk(&[]), None);
    }
}

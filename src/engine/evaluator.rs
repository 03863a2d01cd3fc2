// ==========================================
// 设施维保/安全巡检 - 记录评估编排
// ==========================================
// 顺序:
// 1) DurationCalculator  → actual_duration
// 2) ChecklistAggregator → 分类得分/总分/完成度
// 3) RecordClassifier    → status / complianceStatus
// 各引擎无状态, 每次表单变更整体重算
// ==========================================

use crate::config::profile::DomainProfile;
use crate::domain::record::{RecordDraft, RecordSubmission};
use crate::domain::types::RiskLevel;
use crate::engine::checklist::{ChecklistAggregator, ChecklistSummary};
use crate::engine::classifier::{Classification, RecordClassifier};
use crate::engine::duration::DurationCalculator;
use crate::engine::error::EngineError;
use tracing::instrument;

/// 实时评估结果 (表单显示用, 不阻断输入)
#[derive(Debug, Clone, PartialEq)]
pub struct LiveEvaluation {
    pub actual_duration: Option<f64>,
    /// 时长无法计算的原因 (作为提示展示)
    pub duration_error: Option<EngineError>,
    pub summary: ChecklistSummary,
    pub classification: Classification,
    pub max_violation_risk: Option<RiskLevel>,
}

// ==========================================
// RecordEvaluator - 记录评估编排
// ==========================================
pub struct RecordEvaluator {
    profile: DomainProfile,
    duration: DurationCalculator,
    aggregator: ChecklistAggregator,
    classifier: RecordClassifier,
}

impl RecordEvaluator {
    pub fn new(profile: DomainProfile) -> Self {
        Self {
            duration: DurationCalculator::new(profile.duration.clone()),
            aggregator: ChecklistAggregator::new(profile.pass_rule),
            classifier: RecordClassifier::from_profile(&profile),
            profile,
        }
    }

    pub fn profile(&self) -> &DomainProfile {
        &self.profile
    }

    pub fn duration_calculator(&self) -> &DurationCalculator {
        &self.duration
    }

    pub fn aggregator(&self) -> &ChecklistAggregator {
        &self.aggregator
    }

    pub fn classifier(&self) -> &RecordClassifier {
        &self.classifier
    }

    /// 实时评估草稿
    ///
    /// 时长计算失败不报错, 返回 None 并附带原因
    #[instrument(skip(self, draft), fields(domain = %self.profile.domain, schedule_id = %draft.schedule_id))]
    pub fn evaluate_live(&self, draft: &RecordDraft) -> LiveEvaluation {
        let (actual_duration, duration_error) = match self.duration.duration_from_input(
            draft.completed_date,
            draft.start_time.as_deref(),
            draft.end_time.as_deref(),
        ) {
            Ok(hours) => (hours, None),
            Err(e) => {
                tracing::debug!(error = %e, "实时评估: 时长暂不可用");
                (None, Some(e))
            }
        };

        let summary = self.aggregator.summarize(&draft.category_results);
        let classification = self.classifier.classify(
            Some(summary.completion.percentage),
            Some(summary.overall_score),
            Some(&draft.violations),
        );

        LiveEvaluation {
            actual_duration,
            duration_error,
            summary,
            classification,
            max_violation_risk: RecordClassifier::max_violation_risk(&draft.violations),
        }
    }

    /// 生成提交记录 (调用方负责提交前校验)
    ///
    /// 无合规策略的领域不保留违规清单
    pub fn finalize(&self, draft: RecordDraft, actual_duration: Option<f64>) -> RecordSubmission {
        let summary = self.aggregator.summarize(&draft.category_results);

        let violations = if self.profile.compliance.is_some() {
            draft.violations
        } else {
            if !draft.violations.is_empty() {
                tracing::warn!(
                    count = draft.violations.len(),
                    domain = %self.profile.domain,
                    "该领域不记录违规, 已忽略"
                );
            }
            Vec::new()
        };

        let classification = self.classifier.classify(
            Some(summary.completion.percentage),
            Some(summary.overall_score),
            Some(&violations),
        );

        RecordSubmission {
            schedule_id: draft.schedule_id,
            domain: self.profile.domain,
            completed_date: draft.completed_date,
            start_time: normalize_time(draft.start_time),
            end_time: normalize_time(draft.end_time),
            actual_duration,
            category_results: summary.categories,
            overall_score: summary.overall_score,
            completion: summary.completion,
            status: classification.status,
            compliance_status: classification.compliance_status,
            violations,
            notes: draft.notes,
            verified: false,
        }
    }
}

/// 去除首尾空白, 空串视为缺失
fn normalize_time(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

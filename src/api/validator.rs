// ==========================================
// 设施维保/安全巡检 - 提交校验器
// ==========================================
// 职责: 提交前的数据完整性校验
// Strict:  任何违规都阻断提交 (安全巡检)
// AutoFix: 使用保守默认值, 记录警告后放行 (维保)
// ==========================================

use std::collections::HashSet;

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::config::profile::{DomainProfile, ValidationMode};
use crate::domain::record::RecordDraft;
use crate::domain::types::Frequency;
use crate::engine::due_date::DueDateProjector;
use crate::engine::duration::DurationCalculator;
use crate::engine::error::EngineError;
use crate::i18n::{t, t_with_args};

// ==========================================
// SubmissionValidator - 提交校验器
// ==========================================
pub struct SubmissionValidator {
    mode: ValidationMode,
    default_custom_frequency_days: u32,
    duration: DurationCalculator,
}

impl SubmissionValidator {
    pub fn new(profile: &DomainProfile) -> Self {
        Self {
            mode: profile.validation_mode,
            default_custom_frequency_days: profile.default_custom_frequency_days,
            duration: DurationCalculator::new(profile.duration.clone()),
        }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// 校验记录草稿
    ///
    /// # 返回
    /// - Ok(actual_duration): 校验通过 (AutoFix 下时长不可用时为 None)
    /// - Err(ApiError::ValidationFailed): Strict 模式下存在违规
    ///
    /// # 规则
    /// - 开始/结束时间: 必填 (按策略) / 格式 / 时长合理性
    /// - 分类权重在 [0, 100]
    /// - 分类内检查项 ID 不重复
    pub fn validate_record(&self, draft: &RecordDraft) -> ApiResult<Option<f64>> {
        let mut violations = Vec::new();

        let times = self
            .duration
            .parse_times(draft.start_time.as_deref(), draft.end_time.as_deref());

        // 每个出错的时间字段各一条违规
        let actual_duration = match times {
            Ok(Some((start, end))) => {
                match self.duration.duration(draft.completed_date, start, end) {
                    Ok(hours) => Some(hours),
                    Err(e) => {
                        violations.push(duration_violation(&e));
                        None
                    }
                }
            }
            Ok(None) => None,
            Err(errors) => {
                violations.extend(errors.iter().map(duration_violation));
                None
            }
        };

        for category in &draft.category_results {
            let weight = category.weight;
            if !weight.is_finite() || !(0.0..=100.0).contains(&weight) {
                violations.push(ValidationViolation::new(
                    &format!("category_results.{}.weight", category.category_id),
                    "WEIGHT_OUT_OF_RANGE",
                    t_with_args(
                        "validation.weight_out_of_range",
                        &[
                            ("category", category.category_name.as_str()),
                            ("weight", weight.to_string().as_str()),
                        ],
                    ),
                ));
            }

            let mut seen = HashSet::new();
            for item in &category.checklist_items {
                if !seen.insert(item.item_id.as_str()) {
                    violations.push(ValidationViolation::new(
                        &format!("category_results.{}.checklist_items", category.category_id),
                        "DUPLICATE_ITEM",
                        t_with_args(
                            "validation.duplicate_item",
                            &[
                                ("category", category.category_name.as_str()),
                                ("item", item.item_id.as_str()),
                            ],
                        ),
                    ));
                }
            }
        }

        self.settle(violations)?;
        Ok(actual_duration)
    }

    /// 校验计划的自定义周期天数
    ///
    /// # 返回
    /// - Ok(Some(days)): custom 频率的生效天数 (AutoFix 下可能为默认值)
    /// - Ok(None): 非 custom 频率
    /// - Err: Strict 模式下天数缺失或非正
    pub fn validate_custom_days(
        &self,
        frequency: Frequency,
        custom_days: Option<i64>,
    ) -> ApiResult<Option<u32>> {
        if frequency != Frequency::Custom {
            return Ok(None);
        }

        let (days, defaulted) = DueDateProjector::new()
            .resolve_custom_days(custom_days, self.default_custom_frequency_days);

        if defaulted {
            let value = custom_days.map_or_else(|| "-".to_string(), |d| d.to_string());
            let violation = match self.mode {
                ValidationMode::Strict => ValidationViolation::new(
                    "custom_frequency_days",
                    "CUSTOM_DAYS_INVALID",
                    t_with_args("validation.custom_days_invalid", &[("value", value.as_str())]),
                ),
                ValidationMode::AutoFix => ValidationViolation::new(
                    "custom_frequency_days",
                    "CUSTOM_DAYS_DEFAULTED",
                    t_with_args(
                        "validation.custom_days_defaulted",
                        &[("value", value.as_str()), ("default", days.to_string().as_str())],
                    ),
                ),
            };
            self.settle(vec![violation])?;
        }

        Ok(Some(days))
    }

    /// 根据模式决定是否返回错误
    fn settle(&self, violations: Vec<ValidationViolation>) -> ApiResult<()> {
        if violations.is_empty() {
            return Ok(());
        }

        match self.mode {
            ValidationMode::Strict => Err(ApiError::ValidationFailed {
                reason: t("validation.failed"),
                violations,
            }),
            ValidationMode::AutoFix => {
                for v in &violations {
                    tracing::warn!(field = %v.field, violation_type = %v.violation_type, "AutoFix模式: {}", v.reason);
                }
                Ok(())
            }
        }
    }
}

fn duration_violation(err: &EngineError) -> ValidationViolation {
    let field = err.field();
    match err {
        EngineError::MissingTime { field } => ValidationViolation::new(
            field,
            "TIME_MISSING",
            t_with_args("validation.time_missing", &[("field", field.as_str())]),
        ),
        EngineError::InvalidTime { field, value } => ValidationViolation::new(
            field,
            "TIME_INVALID",
            t_with_args("validation.time_invalid", &[("field", field.as_str()), ("value", value.as_str())]),
        ),
        EngineError::NonPositiveDuration { hours } => ValidationViolation::new(
            field,
            "DURATION_NON_POSITIVE",
            t_with_args("validation.duration_non_positive", &[("hours", format!("{:.2}", hours).as_str())]),
        ),
        EngineError::ImplausibleOvernightSpan { hours, limit } => ValidationViolation::new(
            field,
            "DURATION_OVERNIGHT_IMPLAUSIBLE",
            t_with_args(
                "validation.duration_overnight_implausible",
                &[
                    ("hours", format!("{:.2}", hours).as_str()),
                    ("limit", limit.to_string().as_str()),
                ],
            ),
        ),
        EngineError::DateOutOfRange { .. } => {
            ValidationViolation::new(field, "DATE_OUT_OF_RANGE", err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checklist::{CategoryResult, ChecklistItemResult};
    use chrono::NaiveDate;

    fn draft(start: Option<&str>, end: Option<&str>) -> RecordDraft {
        let mut draft = RecordDraft::new("S-001", NaiveDate::from_ymd_opt(2025, 5, 20).unwrap());
        draft.start_time = start.map(str::to_string);
        draft.end_time = end.map(str::to_string);
        draft
    }

    #[test]
    fn test_scenario_1_strict_rejects_missing_end_time() {
        let validator = SubmissionValidator::new(&DomainProfile::safety_inspection());

        let err = validator.validate_record(&draft(Some("08:00"), None)).unwrap_err();
        let violations = err.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "end_time");
        assert_eq!(violations[0].violation_type, "TIME_MISSING");
    }

    #[test]
    fn test_scenario_2_strict_rejects_long_overnight_span() {
        let validator = SubmissionValidator::new(&DomainProfile::safety_inspection());

        let err = validator.validate_record(&draft(Some("18:00"), Some("07:30"))).unwrap_err();
        assert_eq!(err.violations()[0].violation_type, "DURATION_OVERNIGHT_IMPLAUSIBLE");
    }

    #[test]
    fn test_scenario_3_autofix_tolerates_missing_times() {
        let validator = SubmissionValidator::new(&DomainProfile::maintenance());

        assert_eq!(validator.validate_record(&draft(None, None)).unwrap(), None);
        assert_eq!(validator.validate_record(&draft(Some("bad"), Some("10:00"))).unwrap(), None);
        assert_eq!(
            validator.validate_record(&draft(Some("09:00"), Some("09:02"))).unwrap(),
            Some(0.1)
        );
    }

    #[test]
    fn test_scenario_4_weight_and_duplicate_items() {
        let validator = SubmissionValidator::new(&DomainProfile::safety_inspection());

        let mut draft = draft(Some("08:00"), Some("10:00"));
        draft.category_results = vec![
            CategoryResult::new("A", "消防", 120.0),
            CategoryResult::new("B", "电气", 40.0).with_items(vec![
                ChecklistItemResult::new("B1", "接地"),
                ChecklistItemResult::new("B1", "接地"),
            ]),
        ];

        let err = validator.validate_record(&draft).unwrap_err();
        let types: Vec<&str> = err.violations().iter().map(|v| v.violation_type.as_str()).collect();
        assert_eq!(types, vec!["WEIGHT_OUT_OF_RANGE", "DUPLICATE_ITEM"]);
        assert_eq!(err.violations()[0].field, "category_results.A.weight");
    }

    #[test]
    fn test_scenario_5_custom_days() {
        let strict = SubmissionValidator::new(&DomainProfile::safety_inspection());
        let lenient = SubmissionValidator::new(&DomainProfile::maintenance());

        assert_eq!(strict.validate_custom_days(Frequency::Weekly, None).unwrap(), None);
        assert_eq!(strict.validate_custom_days(Frequency::Custom, Some(14)).unwrap(), Some(14));

        let err = strict.validate_custom_days(Frequency::Custom, Some(0)).unwrap_err();
        assert_eq!(err.violations()[0].field, "custom_frequency_days");

        assert_eq!(lenient.validate_custom_days(Frequency::Custom, Some(-3)).unwrap(), Some(30));
    }

    #[test]
    fn test_scenario_6_strict_reports_each_bad_time_field() {
        let validator = SubmissionValidator::new(&DomainProfile::safety_inspection());

        let err = validator.validate_record(&draft(None, None)).unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["start_time", "end_time"]);

        let err = validator.validate_record(&draft(Some("25:61"), None)).unwrap_err();
        let types: Vec<&str> = err.violations().iter().map(|v| v.violation_type.as_str()).collect();
        assert_eq!(types, vec!["TIME_INVALID", "TIME_MISSING"]);
    }

    #[test]
    fn test_scenario_7_strict_rejects_duration_rounded_to_zero() {
        let validator = SubmissionValidator::new(&DomainProfile::safety_inspection());

        let err = validator.validate_record(&draft(Some("09:00"), Some("09:00:10"))).unwrap_err();
        let violations = err.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "end_time");
        assert_eq!(violations[0].violation_type, "DURATION_NON_POSITIVE");
    }
}

// ==========================================
// 设施维保/安全巡检 - 领域配置档
// ==========================================
// 维保与安全巡检两套时长/阈值策略并存, 不合并:
// 同一套引擎接口, 按调用方领域选择配置档
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::{Domain, RiskLevel};
use serde::{Deserialize, Serialize};

// ==========================================
// DurationPolicy - 时长计算策略
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationPolicy {
    /// 时长下限 (小时), 不足时抬升到下限
    #[serde(default)]
    pub min_hours: Option<f64>,

    /// 时长上限 (小时), 超出时截断
    #[serde(default)]
    pub max_hours: Option<f64>,

    /// 跨夜时长上限 (小时), 超出视为录入错误
    #[serde(default)]
    pub max_overnight_hours: Option<f64>,

    /// 非正时长是否报错 (否则按下限处理)
    #[serde(default)]
    pub reject_non_positive: bool,

    /// 保留小数位, None 表示不取整
    #[serde(default)]
    pub round_decimals: Option<u32>,

    /// 提交时开始/结束时间是否必填
    #[serde(default)]
    pub require_times: bool,
}

impl DurationPolicy {
    /// 维保: 下限 0.1 小时, 不取整, 容错
    pub fn maintenance() -> Self {
        Self {
            min_hours: Some(0.1),
            max_hours: None,
            max_overnight_hours: None,
            reject_non_positive: false,
            round_decimals: None,
            require_times: false,
        }
    }

    /// 安全巡检: 上限 24 小时, 跨夜超 12 小时拒绝, 保留 2 位小数
    pub fn safety_inspection() -> Self {
        Self {
            min_hours: None,
            max_hours: Some(24.0),
            max_overnight_hours: Some(12.0),
            reject_non_positive: true,
            round_decimals: Some(2),
            require_times: true,
        }
    }
}

// ==========================================
// PassRule - 检查项合格判定规则
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassRule {
    /// completed == true
    Completed,
    /// completed == true 且 status ∈ {compliant, not_applicable}
    CompletedAndCompliant,
}

// ==========================================
// StatusThresholds - 完成状态阈值
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusThresholds {
    /// 部分完成下限 (含), 低于此值判定 failed
    pub partial_min: u8,
}

// ==========================================
// CompliancePolicy - 合规状态阈值 (仅安全巡检)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompliancePolicy {
    /// 低于此分判定 non_compliant
    pub non_compliant_below: u8,

    /// 低于此分判定 requires_attention
    pub attention_below: u8,

    /// 出现即判定 non_compliant 的违规风险等级
    pub escalating_risk_levels: Vec<RiskLevel>,
}

impl CompliancePolicy {
    pub fn safety_inspection() -> Self {
        Self {
            non_compliant_below: 80,
            attention_below: 95,
            escalating_risk_levels: vec![RiskLevel::High, RiskLevel::Critical],
        }
    }
}

// ==========================================
// ValidationMode - 校验模式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// 严格模式：任何违规都阻断提交
    Strict,
    /// 自动修复模式：使用保守默认值并记录警告
    AutoFix,
}

// ==========================================
// DomainProfile - 领域配置档
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainProfile {
    pub domain: Domain,
    pub duration: DurationPolicy,
    pub pass_rule: PassRule,
    pub status: StatusThresholds,

    #[serde(default)]
    pub compliance: Option<CompliancePolicy>,

    pub validation_mode: ValidationMode,

    /// custom 频率缺失/非法时使用的天数
    #[serde(default = "default_custom_frequency_days")]
    pub default_custom_frequency_days: u32,

    /// 距到期日不超过该天数视为临近到期
    #[serde(default = "default_due_soon_days")]
    pub due_soon_days: u32,
}

fn default_custom_frequency_days() -> u32 {
    30
}

fn default_due_soon_days() -> u32 {
    7
}

impl DomainProfile {
    /// 维保内置配置档
    pub fn maintenance() -> Self {
        Self {
            domain: Domain::Maintenance,
            duration: DurationPolicy::maintenance(),
            pass_rule: PassRule::Completed,
            status: StatusThresholds { partial_min: 50 },
            compliance: None,
            validation_mode: ValidationMode::AutoFix,
            default_custom_frequency_days: default_custom_frequency_days(),
            due_soon_days: default_due_soon_days(),
        }
    }

    /// 安全巡检内置配置档
    pub fn safety_inspection() -> Self {
        Self {
            domain: Domain::SafetyInspection,
            duration: DurationPolicy::safety_inspection(),
            pass_rule: PassRule::CompletedAndCompliant,
            status: StatusThresholds { partial_min: 70 },
            compliance: Some(CompliancePolicy::safety_inspection()),
            validation_mode: ValidationMode::Strict,
            default_custom_frequency_days: default_custom_frequency_days(),
            due_soon_days: default_due_soon_days(),
        }
    }

    pub fn builtin(domain: Domain) -> Self {
        match domain {
            Domain::Maintenance => Self::maintenance(),
            Domain::SafetyInspection => Self::safety_inspection(),
        }
    }

    pub fn is_strict(&self) -> bool {
        self.validation_mode == ValidationMode::Strict
    }

    /// 校验配置档取值
    ///
    /// # 规则
    /// - 百分比阈值在 [0, 100]
    /// - attention_below >= non_compliant_below
    /// - default_custom_frequency_days > 0
    /// - 时长边界非负且 min <= max
    pub fn validate(&self) -> ConfigResult<()> {
        let invalid = |key: &str, message: String| ConfigError::InvalidValue {
            domain: self.domain,
            key: key.to_string(),
            message,
        };

        if self.status.partial_min > 100 {
            return Err(invalid(
                "status.partial_min",
                format!("{} 超出 [0, 100]", self.status.partial_min),
            ));
        }

        if let Some(compliance) = &self.compliance {
            if compliance.attention_below > 100 {
                return Err(invalid(
                    "compliance.attention_below",
                    format!("{} 超出 [0, 100]", compliance.attention_below),
                ));
            }
            if compliance.attention_below < compliance.non_compliant_below {
                return Err(invalid(
                    "compliance.attention_below",
                    format!(
                        "{} 小于 non_compliant_below={}",
                        compliance.attention_below, compliance.non_compliant_below
                    ),
                ));
            }
        }

        if self.default_custom_frequency_days == 0 {
            return Err(invalid(
                "default_custom_frequency_days",
                "必须为正整数".to_string(),
            ));
        }

        let bounds = [
            ("duration.min_hours", self.duration.min_hours),
            ("duration.max_hours", self.duration.max_hours),
            ("duration.max_overnight_hours", self.duration.max_overnight_hours),
        ];
        for (key, value) in bounds {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(invalid(key, format!("{} 必须为非负数", v)));
                }
            }
        }

        if let (Some(min), Some(max)) = (self.duration.min_hours, self.duration.max_hours) {
            if min > max {
                return Err(invalid(
                    "duration.min_hours",
                    format!("{} 大于 max_hours={}", min, max),
                ));
            }
        }

        Ok(())
    }
}

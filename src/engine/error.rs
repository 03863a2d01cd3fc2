// ==========================================
// 设施维保/安全巡检 - 引擎层错误类型
// ==========================================
// 红线: 所有错误必须指明字段与原因
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::types::Frequency;
use chrono::NaiveDate;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    // ===== 日期推算 =====
    #[error("日期超出可表示范围: start_date={start_date}, frequency={frequency}")]
    DateOutOfRange {
        start_date: NaiveDate,
        frequency: Frequency,
    },

    // ===== 时间输入 =====
    #[error("时间缺失 (字段 {field})")]
    MissingTime { field: String },

    #[error("时间格式错误 (字段 {field}): 期望 HH:MM，实际 {value}")]
    InvalidTime { field: String, value: String },

    // ===== 时长校验 =====
    #[error("作业时长非正: {hours} 小时")]
    NonPositiveDuration { hours: f64 },

    #[error("跨夜作业时长不合理: {hours} 小时 (上限 {limit} 小时)")]
    ImplausibleOvernightSpan { hours: f64, limit: f64 },
}

impl EngineError {
    /// 出错的表单字段
    pub fn field(&self) -> &str {
        match self {
            EngineError::DateOutOfRange { .. } => "start_date",
            EngineError::MissingTime { field } | EngineError::InvalidTime { field, .. } => {
                field.as_str()
            }
            EngineError::NonPositiveDuration { .. }
            | EngineError::ImplausibleOvernightSpan { .. } => "end_time",
        }
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

// ==========================================
// 设施维保/安全巡检 - 作业时长计算引擎
// ==========================================
// 职责: 由 completed_date + 开始/结束时间 计算实际时长 (小时)
// 规则: 结束时间 ≤ 开始时间 视为跨夜, 加 24 小时
// 策略: 由 DurationPolicy 决定下限/上限/跨夜上限/取整
//       维保与安全巡检两套策略并存, 不合并
// ==========================================

use crate::config::profile::DurationPolicy;
use crate::engine::error::{EngineError, EngineResult};
use chrono::{NaiveDate, NaiveTime};

const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: i64 = 86_400;

/// 解析 HH:MM (或 HH:MM:SS) 时间
///
/// # 参数
/// - `field`: 表单字段名 (用于错误提示)
/// - `value`: 原始输入, None 或空白视为缺失
pub fn parse_time_of_day(field: &str, value: Option<&str>) -> EngineResult<NaiveTime> {
    let raw = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => {
            return Err(EngineError::MissingTime {
                field: field.to_string(),
            })
        }
    };

    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| EngineError::InvalidTime {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

// ==========================================
// DurationCalculator - 作业时长计算引擎
// ==========================================
pub struct DurationCalculator {
    policy: DurationPolicy,
}

impl DurationCalculator {
    pub fn new(policy: DurationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &DurationPolicy {
        &self.policy
    }

    /// 计算实际时长 (小时)
    ///
    /// # 顺序
    /// 1) 组合 date+start / date+end, 结束 ≤ 开始 则跨夜 +24h
    /// 2) 跨夜且超过 max_overnight_hours → ImplausibleOvernightSpan
    /// 3) 抬升到 min_hours, 截断到 max_hours
    /// 4) 按 round_decimals 取整
    /// 5) 取整后非正且 reject_non_positive → NonPositiveDuration
    pub fn duration(&self, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> EngineResult<f64> {
        let start_at = date.and_time(start);
        let end_at = date.and_time(end);

        let overnight = end_at <= start_at;
        let mut elapsed = (end_at - start_at).num_seconds();
        if overnight {
            elapsed += SECONDS_PER_DAY;
        }
        let mut hours = elapsed as f64 / SECONDS_PER_HOUR;

        if overnight {
            if let Some(limit) = self.policy.max_overnight_hours {
                if hours > limit {
                    return Err(EngineError::ImplausibleOvernightSpan { hours, limit });
                }
            }
        }

        if let Some(min) = self.policy.min_hours {
            hours = hours.max(min);
        }
        if let Some(max) = self.policy.max_hours {
            hours = hours.min(max);
        }

        if let Some(decimals) = self.policy.round_decimals {
            hours = round_to(hours, decimals);
        }

        // 几秒的作业取整后可能为 0
        if hours <= 0.0 && self.policy.reject_non_positive {
            return Err(EngineError::NonPositiveDuration { hours });
        }

        tracing::debug!(%date, %start, %end, overnight, hours, "作业时长计算完成");
        Ok(hours)
    }

    /// 逐字段解析开始/结束时间
    ///
    /// # 返回
    /// - Ok(Some((start, end))): 两个时间均有效
    /// - Ok(None): 时间缺失且策略不要求必填
    /// - Err(errors): 每个出错字段一条, 按 start_time / end_time 顺序
    ///
    /// 格式错误总是报告; 缺失仅在 require_times 时报告
    pub fn parse_times(
        &self,
        start_time: Option<&str>,
        end_time: Option<&str>,
    ) -> Result<Option<(NaiveTime, NaiveTime)>, Vec<EngineError>> {
        let start = parse_time_of_day("start_time", start_time);
        let end = parse_time_of_day("end_time", end_time);

        if let (Ok(start), Ok(end)) = (&start, &end) {
            return Ok(Some((*start, *end)));
        }

        let errors: Vec<EngineError> = [start.err(), end.err()]
            .into_iter()
            .flatten()
            .filter(|e| self.policy.require_times || !matches!(e, EngineError::MissingTime { .. }))
            .collect();

        if errors.is_empty() {
            Ok(None)
        } else {
            Err(errors)
        }
    }

    /// 由表单字符串计算时长
    ///
    /// # 返回
    /// - Ok(Some(hours)): 计算成功
    /// - Ok(None): 时间缺失且策略不要求必填
    /// - Err: 时间缺失(必填)/格式错误/时长不合理 (多个字段出错时返回第一个)
    pub fn duration_from_input(
        &self,
        date: NaiveDate,
        start_time: Option<&str>,
        end_time: Option<&str>,
    ) -> EngineResult<Option<f64>> {
        match self.parse_times(start_time, end_time) {
            Ok(Some((start, end))) => self.duration(date, start, end).map(Some),
            Ok(None) => Ok(None),
            Err(mut errors) => Err(errors.remove(0)),
        }
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

// ==========================================
// 设施维保/安全巡检 - 到期日推算引擎
// ==========================================
// 职责: 由 start_date + 频率 推算 next_due_date
// 红线: 每次只前进一个周期, 整体重算, 不累加
// 月/年运算: 目标月无对应日时取该月最后一天
//           (01-31 + 1 月 -> 02-28/29)
// ==========================================

use crate::domain::types::{DueState, Frequency};
use crate::engine::error::{EngineError, EngineResult};
use chrono::{Days, Months, NaiveDate};

/// custom 频率缺失/非法时的默认天数
pub const DEFAULT_CUSTOM_FREQUENCY_DAYS: u32 = 30;

/// 周期步长
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Days(u64),
    Months(u32),
}

// ==========================================
// DueDateProjector - 到期日推算引擎
// ==========================================
pub struct DueDateProjector {
    // 无状态引擎
}

impl DueDateProjector {
    pub fn new() -> Self {
        Self {}
    }

    /// 推算下次到期日 (custom 默认 30 天)
    pub fn project(
        &self,
        start_date: NaiveDate,
        frequency: Frequency,
        custom_days: Option<i64>,
    ) -> EngineResult<NaiveDate> {
        self.project_with_default(start_date, frequency, custom_days, DEFAULT_CUSTOM_FREQUENCY_DAYS)
    }

    /// 推算下次到期日
    ///
    /// # 参数
    /// - `start_date`: 计划开始日期
    /// - `frequency`: 执行频率
    /// - `custom_days`: 自定义天数 (仅 custom 使用)
    /// - `default_days`: custom_days 缺失/非正时使用的天数
    ///
    /// # 返回
    /// start_date 前进恰好一个周期后的日期
    pub fn project_with_default(
        &self,
        start_date: NaiveDate,
        frequency: Frequency,
        custom_days: Option<i64>,
        default_days: u32,
    ) -> EngineResult<NaiveDate> {
        let period = match frequency {
            Frequency::Daily => Period::Days(1),
            Frequency::Weekly => Period::Days(7),
            Frequency::Monthly => Period::Months(1),
            Frequency::Quarterly => Period::Months(3),
            Frequency::HalfYearly => Period::Months(6),
            Frequency::Annually => Period::Months(12),
            Frequency::Custom => {
                let (days, _) = self.resolve_custom_days(custom_days, default_days);
                Period::Days(u64::from(days))
            }
        };

        let next = match period {
            Period::Days(n) => start_date.checked_add_days(Days::new(n)),
            Period::Months(n) => start_date.checked_add_months(Months::new(n)),
        };

        next.ok_or(EngineError::DateOutOfRange {
            start_date,
            frequency,
        })
    }

    /// 解析自定义周期天数
    ///
    /// # 返回
    /// (生效天数, 是否使用了默认值)
    ///
    /// # 边界处理
    /// - None / 0 / 负数 / 超出 u32 → default_days (可恢复的输入错误, 记录警告)
    /// - default_days 为 0 时按 30 天处理
    pub fn resolve_custom_days(&self, custom_days: Option<i64>, default_days: u32) -> (u32, bool) {
        let fallback = if default_days == 0 {
            DEFAULT_CUSTOM_FREQUENCY_DAYS
        } else {
            default_days
        };

        match custom_days.and_then(|d| u32::try_from(d).ok()) {
            Some(days) if days > 0 => (days, false),
            _ => {
                tracing::warn!(
                    custom_days = ?custom_days,
                    fallback,
                    "自定义周期天数无效, 使用默认值"
                );
                (fallback, true)
            }
        }
    }

    /// 判定到期状态
    ///
    /// # 规则
    /// - days_until_due < 0 → Overdue
    /// - days_until_due = 0 → DueToday
    /// - days_until_due ≤ due_soon_days → DueSoon
    /// - 其他 → Upcoming
    ///
    /// # 返回
    /// (DueState, days_until_due)
    pub fn due_state(
        &self,
        next_due_date: NaiveDate,
        today: NaiveDate,
        due_soon_days: u32,
    ) -> (DueState, i64) {
        let days_until_due = (next_due_date - today).num_days();

        let state = if days_until_due < 0 {
            DueState::Overdue
        } else if days_until_due == 0 {
            DueState::DueToday
        } else if days_until_due <= i64::from(due_soon_days) {
            DueState::DueSoon
        } else {
            DueState::Upcoming
        };

        (state, days_until_due)
    }
}

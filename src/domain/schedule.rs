// ==========================================
// 设施维保/安全巡检 - 周期计划领域模型
// ==========================================
// 红线: next_due_date 永远等于 start_date 前进一个周期,
//       编辑任一周期字段后整体重算, 不在旧值上累加
// ==========================================

use crate::domain::types::{Domain, Frequency};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ScheduleDefinition - 周期计划
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDefinition {
    pub schedule_id: String,
    pub title: String,
    pub domain: Domain,
    pub frequency: Frequency,

    /// 自定义周期天数 (仅 frequency=custom 有意义)
    #[serde(default)]
    pub custom_frequency_days: Option<i64>,

    pub start_date: NaiveDate,

    /// 下次到期日 (派生, 由 DueDateProjector 计算)
    pub next_due_date: NaiveDate,
}

// ==========================================
// ScheduleInput - 计划编辑表单输入
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInput {
    pub schedule_id: String,
    pub title: String,
    pub domain: Domain,
    pub frequency: Frequency,
    #[serde(default)]
    pub custom_frequency_days: Option<i64>,
    pub start_date: NaiveDate,
}

// ==========================================
// ScheduleUpdate - 计划编辑 (部分字段)
// ==========================================
// None 表示字段未修改
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    /// Some(None) 表示清空自定义天数
    #[serde(default)]
    pub custom_frequency_days: Option<Option<i64>>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl ScheduleUpdate {
    /// 是否涉及周期字段 (需要重算 next_due_date)
    pub fn touches_recurrence(&self) -> bool {
        self.frequency.is_some() || self.custom_frequency_days.is_some() || self.start_date.is_some()
    }
}

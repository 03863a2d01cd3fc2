// ==========================================
// 设施维保/安全巡检 - 周期计划 API
// ==========================================
// 调用方: 维保/安全巡检计划编辑表单
// 红线: 创建/编辑周期字段后 next_due_date 整体重算,
//       不在旧 next_due_date 上累加
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::instrument;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::SubmissionValidator;
use crate::config::profile_manager::ProfileManager;
use crate::domain::schedule::{ScheduleDefinition, ScheduleInput, ScheduleUpdate};
use crate::domain::types::DueState;
use crate::engine::due_date::DueDateProjector;

// ==========================================
// ScheduleApi - 周期计划 API
// ==========================================
pub struct ScheduleApi {
    profiles: Arc<ProfileManager>,
    projector: DueDateProjector,
}

impl ScheduleApi {
    pub fn new(profiles: Arc<ProfileManager>) -> Self {
        Self {
            profiles,
            projector: DueDateProjector::new(),
        }
    }

    /// 创建周期计划
    ///
    /// # 返回
    /// - Ok(ScheduleDefinition): next_due_date 已推算
    /// - Err(ApiError::InvalidInput): 标题为空
    /// - Err(ApiError::ValidationFailed): Strict 领域下自定义天数非法
    #[instrument(skip(self, input), fields(schedule_id = %input.schedule_id, domain = %input.domain))]
    pub fn create(&self, input: ScheduleInput) -> ApiResult<ScheduleDefinition> {
        if input.title.trim().is_empty() {
            return Err(ApiError::InvalidInput("计划标题不能为空".to_string()));
        }

        let mut schedule = ScheduleDefinition {
            schedule_id: input.schedule_id,
            title: input.title.trim().to_string(),
            domain: input.domain,
            frequency: input.frequency,
            custom_frequency_days: input.custom_frequency_days,
            start_date: input.start_date,
            next_due_date: input.start_date,
        };
        self.reproject(&mut schedule)?;

        tracing::info!(next_due_date = %schedule.next_due_date, "周期计划已创建");
        Ok(schedule)
    }

    /// 编辑周期计划
    ///
    /// 只要涉及 frequency / custom_frequency_days / start_date 任一字段,
    /// 就由 start_date 重新推算 next_due_date
    #[instrument(skip(self, existing, update), fields(schedule_id = %existing.schedule_id))]
    pub fn update(
        &self,
        existing: &ScheduleDefinition,
        update: ScheduleUpdate,
    ) -> ApiResult<ScheduleDefinition> {
        let mut schedule = existing.clone();
        let touches_recurrence = update.touches_recurrence();

        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(ApiError::InvalidInput("计划标题不能为空".to_string()));
            }
            schedule.title = title.trim().to_string();
        }
        if let Some(frequency) = update.frequency {
            schedule.frequency = frequency;
        }
        if let Some(custom_days) = update.custom_frequency_days {
            schedule.custom_frequency_days = custom_days;
        }
        if let Some(start_date) = update.start_date {
            schedule.start_date = start_date;
        }

        if touches_recurrence {
            self.reproject(&mut schedule)?;
            tracing::info!(next_due_date = %schedule.next_due_date, "周期字段变更, 已重算到期日");
        }

        Ok(schedule)
    }

    /// 到期状态 (驾驶舱徽标)
    ///
    /// # 返回
    /// (DueState, days_until_due)
    pub fn due_state(&self, schedule: &ScheduleDefinition, today: NaiveDate) -> (DueState, i64) {
        let profile = self.profiles.get(schedule.domain);
        self.projector
            .due_state(schedule.next_due_date, today, profile.due_soon_days)
    }

    /// 由 start_date 整体重算 next_due_date
    fn reproject(&self, schedule: &mut ScheduleDefinition) -> ApiResult<()> {
        let profile = self.profiles.get(schedule.domain);
        let validator = SubmissionValidator::new(profile);

        if let Some(days) =
            validator.validate_custom_days(schedule.frequency, schedule.custom_frequency_days)?
        {
            schedule.custom_frequency_days = Some(i64::from(days));
        }

        schedule.next_due_date = self.projector.project_with_default(
            schedule.start_date,
            schedule.frequency,
            schedule.custom_frequency_days,
            profile.default_custom_frequency_days,
        )?;
        Ok(())
    }
}

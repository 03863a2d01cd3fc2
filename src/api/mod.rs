// ==========================================
// 设施维保/安全巡检 - API 层
// ==========================================
// 职责: 面向表单的调用入口, 组合配置档与引擎
// ==========================================

pub mod error;
pub mod record_api;
pub mod schedule_api;
pub mod validator;

pub use error::{ApiError, ApiResult, ValidationViolation};
pub use record_api::RecordApi;
pub use schedule_api::ScheduleApi;
pub use validator::SubmissionValidator;

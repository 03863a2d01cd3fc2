// ==========================================
// 设施维保/安全巡检 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含引擎逻辑
// ==========================================

pub mod checklist;
pub mod record;
pub mod schedule;
pub mod types;

// 重导出核心类型
pub use checklist::{
    CategoryResult, ChecklistItemResult, CompletionStats, GENERAL_CATEGORY_ID,
    GENERAL_CATEGORY_NAME,
};
pub use record::{RecordDraft, RecordSubmission, Violation};
pub use schedule::{ScheduleDefinition, ScheduleInput, ScheduleUpdate};
pub use types::{
    ComplianceStatus, Domain, DueState, Frequency, ItemStatus, RecordStatus, RiskLevel,
};

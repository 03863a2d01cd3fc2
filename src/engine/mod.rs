// ==========================================
// 设施维保/安全巡检 - 引擎层
// ==========================================
// 职责: 纯计算引擎, 无 I/O, 无共享可变状态
// 红线: 所有判定输出确定且可复现
// ==========================================

pub mod checklist;
pub mod classifier;
pub mod due_date;
pub mod duration;
pub mod error;
pub mod evaluator;

// 重导出核心引擎
pub use checklist::{ChecklistAggregator, ChecklistSummary};
pub use classifier::{Classification, RecordClassifier};
pub use due_date::{DueDateProjector, DEFAULT_CUSTOM_FREQUENCY_DAYS};
pub use duration::{parse_time_of_day, DurationCalculator};
pub use error::{EngineError, EngineResult};
pub use evaluator::{LiveEvaluation, RecordEvaluator};

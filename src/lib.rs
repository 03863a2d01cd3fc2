// ==========================================
// 设施维保/安全巡检 - 核心库
// ==========================================
// 系统定位: 周期计划与合规评分引擎 (纯计算, 无 I/O)
// 调用方: 计划编辑表单 / 记录编辑表单 / 违规清单
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算规则
pub mod engine;

// 配置层 - 领域配置档
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 表单调用入口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    ComplianceStatus, Domain, DueState, Frequency, ItemStatus, RecordStatus, RiskLevel,
};

// 领域实体
pub use domain::{
    CategoryResult, ChecklistItemResult, RecordDraft, RecordSubmission, ScheduleDefinition,
    Violation,
};

// 引擎
pub use engine::{
    ChecklistAggregator, DueDateProjector, DurationCalculator, RecordClassifier, RecordEvaluator,
};

// 配置
pub use config::{DomainProfile, ProfileManager};

// API
pub use api::{RecordApi, ScheduleApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "设施维保与安全巡检合规引擎";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

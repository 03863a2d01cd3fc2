// ==========================================
// 设施维保/安全巡检 - 配置层
// ==========================================
// 职责: 领域配置档 (时长策略/阈值/校验模式) 管理
// 存储: 内置值 + JSON 文档覆写
// ==========================================

pub mod error;
pub mod profile;
pub mod profile_manager;

// 重导出
pub use error::{ConfigError, ConfigResult};
pub use profile::{
    CompliancePolicy, DomainProfile, DurationPolicy, PassRule, StatusThresholds, ValidationMode,
};
pub use profile_manager::{ProfileDocument, ProfileManager};

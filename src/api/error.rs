// ==========================================
// 设施维保/安全巡检 - API层错误类型
// ==========================================
// 职责: 定义表单调用入口的错误类型
// 红线: 校验失败必须指明字段与原因
// ==========================================

use crate::config::error::ConfigError;
use crate::engine::error::EngineError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 提交校验失败（带逐字段原因）
    #[error("{reason}")]
    ValidationFailed {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("计算失败: {0}")]
    Engine(#[from] EngineError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// 校验违规明细 (非校验错误返回空)
    pub fn violations(&self) -> &[ValidationViolation] {
        match self {
            ApiError::ValidationFailed { violations, .. } => violations,
            _ => &[],
        }
    }
}

/// 校验违规明细
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationViolation {
    /// 表单字段
    pub field: String,
    /// 违规类型 (如 TIME_MISSING)
    pub violation_type: String,
    /// 可操作的提示
    pub reason: String,
}

impl ValidationViolation {
    pub fn new(field: &str, violation_type: &str, reason: String) -> Self {
        Self {
            field: field.to_string(),
            violation_type: violation_type.to_string(),
            reason,
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

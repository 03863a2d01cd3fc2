// ==========================================
// 设施维保/安全巡检 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::types::Domain;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置解析失败: {0}")]
    ParseError(String),

    #[error("配置档重复定义: domain={0}")]
    DuplicateProfile(Domain),

    #[error("配置值错误 (domain={domain}, key={key}): {message}")]
    InvalidValue {
        domain: Domain,
        key: String,
        message: String,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

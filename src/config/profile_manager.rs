// ==========================================
// 设施维保/安全巡检 - 配置档管理器
// ==========================================
// 职责: 内置配置档 + JSON 文档整体覆写
// 格式: {"profiles": [DomainProfile, ...]}
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::profile::DomainProfile;
use crate::domain::types::Domain;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 配置文档
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(default)]
    pub profiles: Vec<DomainProfile>,
}

// ==========================================
// ProfileManager - 配置档管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ProfileManager {
    maintenance: DomainProfile,
    safety_inspection: DomainProfile,
}

impl ProfileManager {
    /// 使用内置配置档创建
    pub fn new() -> Self {
        Self {
            maintenance: DomainProfile::maintenance(),
            safety_inspection: DomainProfile::safety_inspection(),
        }
    }

    /// 从 JSON 文档创建
    ///
    /// 文档中出现的领域整体覆盖内置配置档, 未出现的保持内置值
    ///
    /// # 错误
    /// - 解析失败 / 未知领域: ConfigError::ParseError
    /// - 同一领域出现两次: ConfigError::DuplicateProfile
    /// - 取值非法: ConfigError::InvalidValue
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let document: ProfileDocument = serde_json::from_str(json)?;

        let mut manager = Self::new();
        let mut seen = Vec::with_capacity(document.profiles.len());
        for profile in document.profiles {
            if seen.contains(&profile.domain) {
                return Err(ConfigError::DuplicateProfile(profile.domain));
            }
            seen.push(profile.domain);
            manager.set_profile(profile)?;
        }

        tracing::debug!(overridden = seen.len(), "配置档加载完成");
        Ok(manager)
    }

    /// 从 JSON 文件创建
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// 获取领域配置档
    pub fn get(&self, domain: Domain) -> &DomainProfile {
        match domain {
            Domain::Maintenance => &self.maintenance,
            Domain::SafetyInspection => &self.safety_inspection,
        }
    }

    /// 替换领域配置档 (先校验)
    pub fn set_profile(&mut self, profile: DomainProfile) -> ConfigResult<()> {
        profile.validate()?;
        tracing::info!(domain = %profile.domain, "覆写领域配置档");
        match profile.domain {
            Domain::Maintenance => self.maintenance = profile,
            Domain::SafetyInspection => self.safety_inspection = profile,
        }
        Ok(())
    }

    /// 当前配置快照 (JSON)
    pub fn snapshot_json(&self) -> ConfigResult<String> {
        let profiles = vec![self.maintenance.clone(), self.safety_inspection.clone()];
        Ok(serde_json::to_string(&ProfileDocument { profiles })?)
    }
}

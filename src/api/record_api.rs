// ==========================================
// 设施维保/安全巡检 - 执行记录 API
// ==========================================
// 调用方: 维保/安全巡检记录编辑表单, 违规清单
// evaluate: 每次字段变更调用, 返回实时派生值, 不阻断输入
// submit:   校验 → 派生全部字段 → 生成不可变记录
// ==========================================

use std::path::Path;

use tracing::instrument;

use crate::api::error::ApiResult;
use crate::api::validator::SubmissionValidator;
use crate::config::profile::DomainProfile;
use crate::config::profile_manager::ProfileManager;
use crate::domain::record::{RecordDraft, RecordSubmission};
use crate::domain::types::Domain;
use crate::engine::evaluator::{LiveEvaluation, RecordEvaluator};

// ==========================================
// RecordApi - 执行记录 API
// ==========================================
pub struct RecordApi {
    evaluator: RecordEvaluator,
    validator: SubmissionValidator,
}

impl RecordApi {
    /// 按领域从配置档管理器创建
    pub fn new(profiles: &ProfileManager, domain: Domain) -> Self {
        Self::for_profile(profiles.get(domain).clone())
    }

    /// 从配置文件加载配置档后创建
    ///
    /// # 返回
    /// - Err(ApiError::Config): 文件不可读/格式错误/取值非法
    pub fn from_config_path(path: impl AsRef<Path>, domain: Domain) -> ApiResult<Self> {
        let profiles = ProfileManager::from_path(path)?;
        Ok(Self::new(&profiles, domain))
    }

    pub fn for_profile(profile: DomainProfile) -> Self {
        Self {
            validator: SubmissionValidator::new(&profile),
            evaluator: RecordEvaluator::new(profile),
        }
    }

    pub fn domain(&self) -> Domain {
        self.evaluator.profile().domain
    }

    /// 实时评估 (表单实时显示)
    pub fn evaluate(&self, draft: &RecordDraft) -> LiveEvaluation {
        self.evaluator.evaluate_live(draft)
    }

    /// 提交记录
    ///
    /// # 返回
    /// - Ok(RecordSubmission): 含 actual_duration / 各级得分 / status / complianceStatus
    /// - Err(ApiError::ValidationFailed): Strict 模式下存在违规, 附逐字段原因
    #[instrument(skip(self, draft), fields(domain = %self.domain(), schedule_id = %draft.schedule_id))]
    pub fn submit(&self, draft: RecordDraft) -> ApiResult<RecordSubmission> {
        let actual_duration = self.validator.validate_record(&draft)?;
        let record = self.evaluator.finalize(draft, actual_duration);

        tracing::info!(
            status = %record.status,
            compliance_status = ?record.compliance_status,
            overall_score = record.overall_score,
            completion = record.completion.percentage,
            "记录提交完成"
        );
        Ok(record)
    }
}

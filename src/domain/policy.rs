//! Data Governance Policies
//!
//! 持久化模型向外部审计框架声明的静态元数据：
//! - 导出策略：字段是否进入用户数据导出
//! - 删除策略：用户删除账号时如何处理该模型
//! - 用户关联：模型实例与用户的对应关系

use serde::Serialize;
use std::collections::BTreeMap;

/// 字段导出策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportPolicy {
    /// 字段值直接导出
    Exported,
    /// 字段值作为导出字典的 key
    ExportedAsKeyForTakeoutDict,
    /// 不参与导出
    NotApplicable,
}

impl ExportPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exported => "EXPORTED",
            Self::ExportedAsKeyForTakeoutDict => "EXPORTED_AS_KEY_FOR_TAKEOUT_DICT",
            Self::NotApplicable => "NOT_APPLICABLE",
        }
    }
}

/// 模型删除策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeletionPolicy {
    Delete,
    DeleteAtEnd,
    Keep,
    LocallyPseudonymize,
    PseudonymizeIfPublic,
    /// 删除不由该模型自身管理
    NotApplicable,
}

impl DeletionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "DELETE",
            Self::DeleteAtEnd => "DELETE_AT_END",
            Self::Keep => "KEEP",
            Self::LocallyPseudonymize => "LOCALLY_PSEUDONYMIZE",
            Self::PseudonymizeIfPublic => "PSEUDONYMIZE_IF_PUBLIC",
            Self::NotApplicable => "NOT_APPLICABLE",
        }
    }
}

/// 模型实例与用户的关联方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelAssociationToUser {
    NotCorrespondingToUser,
    OneInstancePerUser,
    OneInstanceSharedAcrossUsers,
    MultipleInstancesPerUser,
}

impl ModelAssociationToUser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotCorrespondingToUser => "NOT_CORRESPONDING_TO_USER",
            Self::OneInstancePerUser => "ONE_INSTANCE_PER_USER",
            Self::OneInstanceSharedAcrossUsers => "ONE_INSTANCE_SHARED_ACROSS_USERS",
            Self::MultipleInstancesPerUser => "MULTIPLE_INSTANCES_PER_USER",
        }
    }
}

/// 受数据治理审计的持久化模型
///
/// 审计框架只读取这些声明，不会调用模型的其他行为
pub trait GovernedModel {
    /// 模型名称，用于审计报告
    const MODEL_NAME: &'static str;

    /// 每个持久化字段的导出策略
    fn export_policy() -> BTreeMap<&'static str, ExportPolicy>;

    fn deletion_policy() -> DeletionPolicy;

    fn model_association_to_user() -> ModelAssociationToUser;

    /// 导出时实际写出的字段
    fn field_names_for_takeout() -> Vec<&'static str> {
        Self::export_policy()
            .into_iter()
            .filter(|(_, policy)| *policy == ExportPolicy::Exported)
            .map(|(field, _)| field)
            .collect()
    }

    /// 模型是否持有对指定用户的引用
    fn has_reference_to_user_id(_user_id: &str) -> bool {
        false
    }
}

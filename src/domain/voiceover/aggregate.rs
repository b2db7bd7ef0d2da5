//! Voiceover Context - Aggregate Root

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{EntityType, VoiceoverEntry, VoiceoverError, VoiceoverKind, VoiceoverMap};
use crate::domain::policy::{DeletionPolicy, ExportPolicy, GovernedModel, ModelAssociationToUser};

/// 主键分隔符与转义符在自由文本字段内需要编码
const KEY_COMPONENT: &AsciiSet = &CONTROLS.add(b'-').add(b'%');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, KEY_COMPONENT).to_string()
}

/// 记录身份：(实体类型, 实体 ID, 实体版本, 语言口音代码)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub entity_type: EntityType,
    pub entity_id: String,
    pub entity_version: u32,
    pub language_accent_code: String,
}

impl RecordKey {
    pub fn new(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_version: u32,
        language_accent_code: impl Into<String>,
    ) -> Self {
        Self {
            entity_type,
            entity_id: entity_id.into(),
            entity_version,
            language_accent_code: language_accent_code.into(),
        }
    }

    /// 复合主键
    ///
    /// 格式: `{entity_type}-{entity_id}-{entity_version}-{language_accent_code}`，
    /// entity_id 与 language_accent_code 中的 `-` / `%` 做百分号编码，保证不同四元组的 key 互不相同
    pub fn id(&self) -> String {
        format!(
            "{}-{}",
            Self::version_prefix(self.entity_type, &self.entity_id, self.entity_version),
            encode_component(&self.language_accent_code)
        )
    }

    /// 同一实体版本下所有语言记录共享的 key 前缀（不含结尾分隔符）
    pub fn version_prefix(entity_type: EntityType, entity_id: &str, entity_version: u32) -> String {
        format!(
            "{}-{}-{}",
            entity_type,
            encode_component(entity_id),
            entity_version
        )
    }

    /// 记录是否属于该身份
    pub fn matches(&self, record: &EntityVoiceoverRecord) -> bool {
        record.entity_type() == self.entity_type
            && record.entity_id() == self.entity_id
            && record.entity_version() == self.entity_version
            && record.language_accent_code() == self.language_accent_code
    }
}

/// EntityVoiceoverRecord 聚合根
///
/// 不变量:
/// - id 由四元组确定性生成，构造后不可变
/// - entity_version 为正整数，language_accent_code 非空
/// - created_on / last_updated 仅由存储层在保存时维护
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityVoiceoverRecord {
    id: String,
    entity_type: EntityType,
    entity_id: String,
    entity_version: u32,
    language_accent_code: String,
    voiceovers: VoiceoverMap,
    created_on: Option<DateTime<Utc>>,
    last_updated: Option<DateTime<Utc>>,
    deleted: bool,
}

impl EntityVoiceoverRecord {
    /// 持久化字段名
    pub const FIELD_NAMES: [&'static str; 8] = [
        "created_on",
        "deleted",
        "last_updated",
        "entity_id",
        "entity_type",
        "entity_version",
        "language_accent_code",
        "voiceovers",
    ];

    /// 构造新记录（不持久化）
    pub fn create_new(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_version: u32,
        language_accent_code: impl Into<String>,
        voiceovers: VoiceoverMap,
    ) -> Result<Self, VoiceoverError> {
        let key = RecordKey::new(entity_type, entity_id, entity_version, language_accent_code);

        if key.entity_version == 0 {
            return Err(VoiceoverError::InvalidEntityVersion(key.entity_version));
        }
        if key.entity_id.is_empty() {
            return Err(VoiceoverError::InvalidEntityId);
        }
        if key.language_accent_code.is_empty() {
            return Err(VoiceoverError::InvalidLanguageAccentCode);
        }
        for (content_id, by_kind) in &voiceovers {
            for (kind, entry) in by_kind {
                entry
                    .validate()
                    .map_err(|reason| VoiceoverError::InvalidVoiceover {
                        content_id: content_id.clone(),
                        kind: kind.to_string(),
                        reason: reason.to_string(),
                    })?;
            }
        }

        Ok(Self {
            id: key.id(),
            entity_type: key.entity_type,
            entity_id: key.entity_id,
            entity_version: key.entity_version,
            language_accent_code: key.language_accent_code,
            voiceovers,
            created_on: None,
            last_updated: None,
            deleted: false,
        })
    }

    /// 保存前更新时间戳
    pub fn update_timestamps(&mut self, now: DateTime<Utc>) {
        if self.created_on.is_none() {
            self.created_on = Some(now);
        }
        self.last_updated = Some(now);
    }

    /// 软删除标记
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    /// 查找某内容下指定类型的配音
    pub fn voiceover(&self, content_id: &str, kind: &VoiceoverKind) -> Option<&VoiceoverEntry> {
        self.voiceovers.get(content_id).and_then(|by_kind| by_kind.get(kind))
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::new(
            self.entity_type,
            self.entity_id.clone(),
            self.entity_version,
            self.language_accent_code.clone(),
        )
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    // Getters
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn entity_version(&self) -> u32 {
        self.entity_version
    }

    pub fn language_accent_code(&self) -> &str {
        &self.language_accent_code
    }

    pub fn voiceovers(&self) -> &VoiceoverMap {
        &self.voiceovers
    }

    pub fn created_on(&self) -> Option<DateTime<Utc>> {
        self.created_on
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl GovernedModel for EntityVoiceoverRecord {
    const MODEL_NAME: &'static str = "EntityVoiceoversModel";

    /// 配音记录不包含用户数据，所有字段均不导出
    fn export_policy() -> BTreeMap<&'static str, ExportPolicy> {
        Self::FIELD_NAMES
            .iter()
            .map(|field| (*field, ExportPolicy::NotApplicable))
            .collect()
    }

    /// 删除由所属实体级联处理
    fn deletion_policy() -> DeletionPolicy {
        DeletionPolicy::NotApplicable
    }

    fn model_association_to_user() -> ModelAssociationToUser {
        ModelAssociationToUser::NotCorrespondingToUser
    }
}

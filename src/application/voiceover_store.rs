//! Voiceover Record Store
//!
//! 通过复合主键在 KeyValueStorePort 上保存 / 读取 EntityVoiceoverRecord
//! 无重试、无缓存：每个操作直接委托给存储后端

use chrono::Utc;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::KeyValueStorePort;
use crate::domain::{EntityType, EntityVoiceoverRecord, GovernedModel, RecordKey};

/// 实体配音记录存储
#[derive(Clone)]
pub struct VoiceoverRecordStore {
    store: Arc<dyn KeyValueStorePort>,
}

impl VoiceoverRecordStore {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// 保存记录（存在则覆盖），同时维护 created_on / last_updated
    ///
    /// 写入失败时调用方的记录保持不变
    pub fn save(&self, record: &mut EntityVoiceoverRecord) -> Result<(), ApplicationError> {
        let mut stamped = record.clone();
        stamped.update_timestamps(Utc::now());
        self.put(&stamped)?;
        *record = stamped;

        tracing::info!(
            id = %record.id(),
            content_count = record.voiceovers().len(),
            "Entity voiceovers saved"
        );

        Ok(())
    }

    /// 按复合主键读取记录，不存在或已软删除时返回 NotFound
    pub fn get_model(
        &self,
        entity_type: EntityType,
        entity_id: &str,
        entity_version: u32,
        language_accent_code: &str,
    ) -> Result<EntityVoiceoverRecord, ApplicationError> {
        let key = RecordKey::new(entity_type, entity_id, entity_version, language_accent_code);
        self.try_get_model(entity_type, entity_id, entity_version, language_accent_code)?
            .ok_or_else(|| {
                ApplicationError::not_found(EntityVoiceoverRecord::MODEL_NAME, key.id())
            })
    }

    /// 非严格读取：不存在或已软删除时返回 None
    pub fn try_get_model(
        &self,
        entity_type: EntityType,
        entity_id: &str,
        entity_version: u32,
        language_accent_code: &str,
    ) -> Result<Option<EntityVoiceoverRecord>, ApplicationError> {
        let key = RecordKey::new(entity_type, entity_id, entity_version, language_accent_code);
        let id = key.id();

        let Some(bytes) = self.store.get(&id)? else {
            tracing::debug!(id = %id, "Entity voiceovers not found");
            return Ok(None);
        };

        let record: EntityVoiceoverRecord = bincode::deserialize(&bytes)?;
        if record.is_deleted() {
            tracing::debug!(id = %id, "Entity voiceovers soft-deleted");
            return Ok(None);
        }
        if !key.matches(&record) {
            tracing::warn!(
                id = %id,
                stored_entity_id = %record.entity_id(),
                stored_language_accent_code = %record.language_accent_code(),
                "Stored entity voiceovers identity mismatch"
            );
            return Ok(None);
        }

        Ok(Some(record))
    }

    /// 获取某实体版本下所有语言口音的配音记录，按主键排序
    pub fn find_for_entity_version(
        &self,
        entity_type: EntityType,
        entity_id: &str,
        entity_version: u32,
    ) -> Result<Vec<EntityVoiceoverRecord>, ApplicationError> {
        let prefix = format!(
            "{}-",
            RecordKey::version_prefix(entity_type, entity_id, entity_version)
        );

        let mut records = Vec::new();
        for (_, bytes) in self.store.scan_prefix(&prefix)? {
            let record: EntityVoiceoverRecord = bincode::deserialize(&bytes)?;
            if !record.is_deleted() {
                records.push(record);
            }
        }

        tracing::debug!(
            prefix = %prefix,
            count = records.len(),
            "Entity voiceovers listed"
        );

        Ok(records)
    }

    /// 软删除记录，供所属实体级联删除使用
    pub fn mark_deleted(
        &self,
        entity_type: EntityType,
        entity_id: &str,
        entity_version: u32,
        language_accent_code: &str,
    ) -> Result<(), ApplicationError> {
        let mut record =
            self.get_model(entity_type, entity_id, entity_version, language_accent_code)?;
        record.mark_deleted();
        record.update_timestamps(Utc::now());
        self.put(&record)?;

        tracing::info!(id = %record.id(), "Entity voiceovers marked deleted");

        Ok(())
    }

    /// 检查记录是否存在（包括软删除的记录）
    pub fn exists(&self, key: &RecordKey) -> Result<bool, ApplicationError> {
        Ok(self.store.contains(&key.id())?)
    }

    fn put(&self, record: &EntityVoiceoverRecord) -> Result<(), ApplicationError> {
        let bytes = bincode::serialize(record)?;
        self.store.put(record.id(), bytes)?;
        Ok(())
    }
}

//! Domain Layer - 领域层
//!
//! - Voiceover Context: 实体配音记录
//! - Policy: 数据治理策略标签（导出 / 删除 / 用户关联）

pub mod policy;
pub mod voiceover;

pub use policy::{DeletionPolicy, ExportPolicy, GovernedModel, ModelAssociationToUser};
pub use voiceover::{
    ContentVoiceovers, EntityType, EntityVoiceoverRecord, RecordKey, VoiceoverEntry,
    VoiceoverError, VoiceoverKind, VoiceoverMap,
};

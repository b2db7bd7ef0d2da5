//! Voiceover Context - 实体配音限界上下文
//!
//! 职责:
//! - 按 (实体类型, 实体 ID, 实体版本, 语言口音) 组织配音元数据
//! - 复合主键生成
//! - 数据治理策略声明

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{EntityVoiceoverRecord, RecordKey};
pub use errors::VoiceoverError;
pub use value_objects::{
    ContentVoiceovers, CustomKind, EntityType, VoiceoverEntry, VoiceoverKind, VoiceoverMap,
};

//! Voiceover Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VoiceoverError {
    #[error("无效的实体版本: {0}，版本号必须为正整数")]
    InvalidEntityVersion(u32),

    #[error("语言口音代码不能为空")]
    InvalidLanguageAccentCode,

    #[error("实体 ID 不能为空")]
    InvalidEntityId,

    #[error("无效的实体类型: {0}")]
    InvalidEntityType(String),

    #[error("无效的配音 {content_id}/{kind}: {reason}")]
    InvalidVoiceover {
        content_id: String,
        kind: String,
        reason: String,
    },
}

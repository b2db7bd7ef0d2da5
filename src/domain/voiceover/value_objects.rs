//! Voiceover Context - Value Objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::VoiceoverError;

/// 拥有配音的内容实体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Exploration,
    Question,
    Skill,
    Story,
    Topic,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exploration => "exploration",
            Self::Question => "question",
            Self::Skill => "skill",
            Self::Story => "story",
            Self::Topic => "topic",
        }
    }
}

impl FromStr for EntityType {
    type Err = VoiceoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exploration" => Ok(Self::Exploration),
            "question" => Ok(Self::Question),
            "skill" => Ok(Self::Skill),
            "story" => Ok(Self::Story),
            "topic" => Ok(Self::Topic),
            other => Err(VoiceoverError::InvalidEntityType(other.to_string())),
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 配音类型
///
/// 开放集合：除 manual / auto 外的任意字符串原样保留，
/// 已知名称总是归一化为对应变体
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VoiceoverKind {
    /// 人工录制
    Manual,
    /// 自动生成
    Auto,
    Other(CustomKind),
}

/// 非内置的配音类型名，只能经由 `VoiceoverKind::from` 构造
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomKind(String);

impl CustomKind {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl VoiceoverKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Manual => "manual",
            Self::Auto => "auto",
            Self::Other(kind) => kind.as_str(),
        }
    }
}

impl From<String> for VoiceoverKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "manual" => Self::Manual,
            "auto" => Self::Auto,
            _ => Self::Other(CustomKind(kind)),
        }
    }
}

impl From<&str> for VoiceoverKind {
    fn from(kind: &str) -> Self {
        Self::from(kind.to_string())
    }
}

impl From<VoiceoverKind> for String {
    fn from(kind: VoiceoverKind) -> Self {
        match kind {
            VoiceoverKind::Other(kind) => kind.0,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for VoiceoverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单条配音音频的元数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceoverEntry {
    pub filename: String,
    pub file_size_bytes: u64,
    /// 源内容变更后配音已过期
    pub needs_update: bool,
    pub duration_secs: f64,
}

impl VoiceoverEntry {
    pub fn new(
        filename: impl Into<String>,
        file_size_bytes: u64,
        needs_update: bool,
        duration_secs: f64,
    ) -> Self {
        Self {
            filename: filename.into(),
            file_size_bytes,
            needs_update,
            duration_secs,
        }
    }

    /// 校验字段形状，返回失败原因
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.filename.is_empty() {
            return Err("文件名不能为空");
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err("时长必须是非负有限数");
        }
        Ok(())
    }
}

/// 单个内容下 配音类型 -> 配音
pub type ContentVoiceovers = BTreeMap<VoiceoverKind, VoiceoverEntry>;

/// content_id -> 配音类型 -> 配音
pub type VoiceoverMap = BTreeMap<String, ContentVoiceovers>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_parse() {
        assert_eq!("exploration".parse::<EntityType>().unwrap(), EntityType::Exploration);
        assert_eq!(EntityType::Question.to_string(), "question");
        assert!("collection".parse::<EntityType>().is_err());
    }

    #[test]
    fn test_voiceover_kind_open_set() {
        assert_eq!(VoiceoverKind::from("manual"), VoiceoverKind::Manual);
        assert_eq!(VoiceoverKind::from("auto"), VoiceoverKind::Auto);

        let kind = VoiceoverKind::from("studio");
        assert!(matches!(&kind, VoiceoverKind::Other(custom) if custom.as_str() == "studio"));
        assert_eq!(kind.as_str(), "studio");
        assert_eq!(String::from(kind), "studio");
    }

    #[test]
    fn test_voiceover_kind_serializes_as_plain_string() {
        let json = serde_json::to_string(&VoiceoverKind::Manual).unwrap();
        assert_eq!(json, "\"manual\"");

        let kind: VoiceoverKind = serde_json::from_str("\"dubbed\"").unwrap();
        assert_eq!(kind, VoiceoverKind::from("dubbed"));

        let kind: VoiceoverKind = serde_json::from_str("\"manual\"").unwrap();
        assert_eq!(kind, VoiceoverKind::Manual);
    }

    #[test]
    fn test_known_names_never_become_custom_kinds() {
        let mut by_kind = ContentVoiceovers::new();
        by_kind.insert(
            VoiceoverKind::from("manual"),
            VoiceoverEntry::new("x.mp3", 1, false, 1.0),
        );
        by_kind.insert(
            VoiceoverKind::Manual,
            VoiceoverEntry::new("y.mp3", 2, false, 2.0),
        );
        by_kind.insert(
            VoiceoverKind::from(String::from("auto")),
            VoiceoverEntry::new("z.mp3", 3, false, 3.0),
        );

        assert_eq!(by_kind.len(), 2);
        assert_eq!(by_kind[&VoiceoverKind::Manual].filename, "y.mp3");
        assert!(by_kind.contains_key(&VoiceoverKind::Auto));

        let json = serde_json::to_string(&by_kind).unwrap();
        let decoded: ContentVoiceovers = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, by_kind);
    }

    #[test]
    fn test_entry_validation() {
        assert!(VoiceoverEntry::new("a.mp3", 10, false, 1.5).validate().is_ok());
        assert!(VoiceoverEntry::new("", 10, false, 1.5).validate().is_err());
        assert!(VoiceoverEntry::new("a.mp3", 10, false, -0.1).validate().is_err());
        assert!(VoiceoverEntry::new("a.mp3", 10, false, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_entry_deserializes_from_dict_shape() {
        let entry: VoiceoverEntry = serde_json::from_str(
            r#"{"filename":"filename1.mp3","file_size_bytes":3000,"needs_update":false,"duration_secs":6.1}"#,
        )
        .unwrap();
        assert_eq!(entry, VoiceoverEntry::new("filename1.mp3", 3000, false, 6.1));
    }
}

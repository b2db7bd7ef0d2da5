//! Voiceover Store - 实体配音记录持久化
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voiceover Context: 按 (实体类型, 实体 ID, 实体版本, 语言口音) 组织的配音元数据
//! - Policy: 数据治理策略声明
//!
//! 应用层 (application/):
//! - Ports: KeyValueStorePort
//! - VoiceoverRecordStore: create / save / get_model
//!
//! 基础设施层 (infrastructure/):
//! - Persistence: Sled 存储
//! - Memory: DashMap 内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::{ApplicationError, VoiceoverRecordStore};
pub use config::{load_config, AppConfig};
pub use domain::{EntityType, EntityVoiceoverRecord, GovernedModel, VoiceoverEntry, VoiceoverKind};
pub use telemetry::{init_logging, TelemetryError};

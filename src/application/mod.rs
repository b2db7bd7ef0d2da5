//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（KeyValueStorePort）
//! - voiceover_store: 实体配音记录的保存与查询
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod voiceover_store;

pub use error::ApplicationError;
pub use ports::{KeyValueStorePort, StoreError};
pub use voiceover_store::VoiceoverRecordStore;

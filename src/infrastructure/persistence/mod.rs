//! Persistence Layer - 数据持久化
//!
//! Sled 存储实现与按配置选择后端的工厂

pub mod sled;

use std::sync::Arc;

use crate::application::ports::{KeyValueStorePort, StoreError};
use crate::config::{StorageBackend, StorageConfig};
use crate::infrastructure::memory::InMemoryKeyValueStore;

pub use self::sled::{SledKeyValueStore, SledStoreConfig};

/// 按配置创建存储后端
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStorePort>, StoreError> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory record storage");
            Ok(Arc::new(InMemoryKeyValueStore::new()))
        }
        StorageBackend::Sled => {
            let sled_config = SledStoreConfig {
                db_path: config.db_path.clone(),
                tree: config.tree.clone(),
            };
            Ok(Arc::new(SledKeyValueStore::new(&sled_config)?))
        }
    }
}

//! Sled Persistence - Sled 嵌入式数据库记录存储

mod key_value_store;

pub use key_value_store::{SledKeyValueStore, SledStoreConfig};

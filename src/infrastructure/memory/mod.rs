//! Memory Layer - In-Memory Record Storage
//!
//! 基于 DashMap 的 KeyValueStorePort 实现，用于测试和嵌入式场景

mod key_value_store;

pub use key_value_store::InMemoryKeyValueStore;

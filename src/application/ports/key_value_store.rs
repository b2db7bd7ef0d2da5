//! Key-Value Store Port - 记录存储后端
//!
//! 定义单 key 读写的抽象接口，具体实现在 infrastructure 层（Sled / 内存）
//! 每个操作是一次原子的单 key 交互，并发写入同一 key 时后写者胜出

use thiserror::Error;

/// Key-Value Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Key-Value Store Port
pub trait KeyValueStorePort: Send + Sync {
    /// 写入（存在则覆盖）
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// 读取
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// 检查 key 是否存在
    fn contains(&self, key: &str) -> Result<bool, StoreError>;

    /// 按前缀扫描，结果按 key 升序
    fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, StoreError>;
}

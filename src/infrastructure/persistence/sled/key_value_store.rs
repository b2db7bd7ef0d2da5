//! Sled-based Key-Value Store Implementation

use sled::{Db, Tree};
use std::path::Path;

use crate::application::ports::{KeyValueStorePort, StoreError};

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
    /// 记录所在的 tree 名称
    pub tree: String,
}

/// Sled 记录存储
pub struct SledKeyValueStore {
    db: Db,
    tree: Tree,
}

impl SledKeyValueStore {
    /// 创建新的存储实例
    pub fn new(config: &SledStoreConfig) -> Result<Self, StoreError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        let tree = db
            .open_tree(&config.tree)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            tree = %config.tree,
            entries = tree.len(),
            "SledKeyValueStore initialized"
        );

        Ok(Self { db, tree })
    }

    /// 打开现有存储
    pub fn open<P: AsRef<Path>>(path: P, tree: &str) -> Result<Self, StoreError> {
        let config = SledStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
            tree: tree.to_string(),
        };
        Self::new(&config)
    }

    /// 刷新数据库
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db
            .flush()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

impl KeyValueStorePort for SledKeyValueStore {
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let size = value.len();
        self.tree
            .insert(key, value)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::debug!(key = %key, size_bytes = size, "Entry stored");

        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match self.tree.get(key) {
            Ok(Some(data)) => Ok(Some(data.to_vec())),
            Ok(None) => Ok(None),
            Err(e) => Err(StoreError::DatabaseError(e.to_string())),
        }
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        self.tree
            .contains_key(key)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        let mut entries = Vec::new();
        for item in self.tree.scan_prefix(prefix) {
            let (key, value) = item.map_err(|e| StoreError::DatabaseError(e.to_string()))?;
            let key = String::from_utf8(key.to_vec())
                .map_err(|e| StoreError::SerializationError(e.to_string()))?;
            entries.push((key, value.to_vec()));
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_store_put_get() {
        let dir = tempdir().unwrap();
        let config = SledStoreConfig {
            db_path: dir.path().join("test.sled").to_string_lossy().to_string(),
            tree: "test".to_string(),
        };

        let store = SledKeyValueStore::new(&config).unwrap();

        // Put
        store.put("exploration-exp_id-1-en%2DUS", vec![1, 2, 3]).unwrap();

        // Get
        let result = store.get("exploration-exp_id-1-en%2DUS").unwrap();
        assert_eq!(result, Some(vec![1, 2, 3]));
        assert_eq!(store.get("exploration-exp_id-1-hi-IN").unwrap(), None);

        // Exists
        assert!(store.contains("exploration-exp_id-1-en%2DUS").unwrap());
    }

    #[test]
    fn test_scan_prefix_is_ordered() {
        let dir = tempdir().unwrap();
        let store = SledKeyValueStore::open(dir.path().join("test.sled"), "test").unwrap();

        store.put("k-2", vec![2]).unwrap();
        store.put("k-1", vec![1]).unwrap();
        store.put("other", vec![0]).unwrap();

        let entries = store.scan_prefix("k-").unwrap();
        assert_eq!(
            entries,
            vec![("k-1".to_string(), vec![1]), ("k-2".to_string(), vec![2])]
        );
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.sled");

        {
            let store = SledKeyValueStore::open(&path, "test").unwrap();
            store.put("key", vec![7, 7]).unwrap();
            store.flush().unwrap();
        }

        let store = SledKeyValueStore::open(&path, "test").unwrap();
        assert_eq!(store.get("key").unwrap(), Some(vec![7, 7]));
    }
}

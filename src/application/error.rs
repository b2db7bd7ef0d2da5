//! 应用层错误定义
//!
//! 统一的存储操作错误类型

use thiserror::Error;

use crate::application::ports::StoreError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 存储后端错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 记录编解码错误
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SerializationError(msg) => Self::SerializationError(msg),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

impl From<bincode::Error> for ApplicationError {
    fn from(err: bincode::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

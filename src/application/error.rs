//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::outcome::Flash;
use crate::domain::book::{BookId, ValidationError};

/// 触发存储失败的操作，决定返回给用户的通用提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOperation {
    List,
    Get,
    Create,
    UpdateRating,
    Delete,
}

impl BookOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookOperation::List => "list",
            BookOperation::Get => "get",
            BookOperation::Create => "create",
            BookOperation::UpdateRating => "update_rating",
            BookOperation::Delete => "delete",
        }
    }

    /// 面向用户的通用失败提示（不暴露内部细节）
    pub fn failure_message(&self) -> &'static str {
        match self {
            BookOperation::List => "Could not retrieve books from the database.",
            BookOperation::Get => "Could not load the book from the database.",
            BookOperation::Create => {
                "An unexpected error occurred while adding the book. Please try again."
            }
            BookOperation::UpdateRating => "An error occurred while updating the rating.",
            BookOperation::Delete => "An error occurred while deleting the book.",
        }
    }
}

impl std::fmt::Display for BookOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 表单校验失败（包含全部字段错误）
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// title 已存在
    #[error("Duplicate title: {0}")]
    DuplicateTitle(String),

    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: BookId,
    },

    /// 存储错误
    #[error("Storage error during {operation}: {detail}")]
    StorageError {
        operation: BookOperation,
        detail: String,
    },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(id: BookId) -> Self {
        Self::NotFound {
            resource_type: "Book",
            id,
        }
    }

    /// 创建存储错误
    pub fn storage(operation: BookOperation, detail: impl Into<String>) -> Self {
        Self::StorageError {
            operation,
            detail: detail.into(),
        }
    }

    /// 转换为面向用户的消息
    pub fn flashes(&self) -> Vec<Flash> {
        match self {
            ApplicationError::Validation(errors) => errors
                .iter()
                .map(|e| Flash::warning(e.to_string()))
                .collect(),
            ApplicationError::DuplicateTitle(title) => vec![Flash::danger(format!(
                "Error: A book with the title '{}' already exists. Please choose a different title.",
                title
            ))],
            ApplicationError::NotFound { resource_type, id } => {
                vec![Flash::danger(format!("{} {} not found.", resource_type, id))]
            }
            ApplicationError::StorageError { operation, .. } => {
                vec![Flash::danger(operation.failure_message())]
            }
        }
    }
}

impl From<Vec<ValidationError>> for ApplicationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

impl From<ValidationError> for ApplicationError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(vec![error])
    }
}

//! 用户消息
//!
//! 每个操作的结果都携带一条或多条带严重级别的消息:
//! - success: 操作完成
//! - warning: 输入校验问题
//! - danger: 存储/完整性问题

use serde::Serialize;

use crate::application::error::BookOperation;
use crate::domain::book::Book;

/// 消息严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

/// 面向用户的消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub severity: Severity,
    pub message: String,
}

impl Flash {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(Severity::Danger, message)
    }
}

/// 写操作成功的结果：受影响的书籍 + 成功消息
#[derive(Debug, Clone)]
pub struct BookOutcome {
    pub book: Book,
    pub flash: Flash,
}

impl BookOutcome {
    pub fn new(book: Book, message: impl Into<String>) -> Self {
        Self {
            book,
            flash: Flash::success(message),
        }
    }
}

/// 列表查询结果
///
/// 存储不可用时返回空列表并置位 `storage_unavailable`，而不是报错
#[derive(Debug, Clone, Default)]
pub struct BookListing {
    pub books: Vec<Book>,
    pub storage_unavailable: bool,
}

impl BookListing {
    pub fn available(books: Vec<Book>) -> Self {
        Self {
            books,
            storage_unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            books: Vec::new(),
            storage_unavailable: true,
        }
    }

    pub fn flashes(&self) -> Vec<Flash> {
        if self.storage_unavailable {
            vec![Flash::danger(BookOperation::List.failure_message())]
        } else {
            Vec::new()
        }
    }
}

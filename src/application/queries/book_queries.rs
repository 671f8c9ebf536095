//! Book Queries

use crate::domain::book::BookId;

/// 列出所有书籍查询（按 title 升序）
#[derive(Debug, Clone)]
pub struct ListBooks;

/// 获取单本书籍查询
#[derive(Debug, Clone)]
pub struct GetBook {
    pub book_id: BookId,
}

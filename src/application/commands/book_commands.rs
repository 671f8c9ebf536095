//! Book Commands

use crate::domain::book::BookId;

/// 新增书籍命令（原始表单输入）
#[derive(Debug, Clone, Default)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub rating: String,
}

/// 修改评分命令
#[derive(Debug, Clone)]
pub struct UpdateRating {
    pub book_id: BookId,
    pub rating: String,
}

/// 删除书籍命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: BookId,
}

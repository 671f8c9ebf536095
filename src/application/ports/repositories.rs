//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::book::{Book, BookId, NewBook, Rating};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ============================================================================
// Book Repository
// ============================================================================

/// Book Repository Port
///
/// 所有写操作在单条记录粒度上是事务性的：失败时整体回滚
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 获取所有书籍，按 title 升序
    async fn find_all(&self) -> Result<Vec<Book>, RepositoryError>;

    /// 根据 ID 查找书籍
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, RepositoryError>;

    /// 插入新书籍，title 已存在时返回 `Duplicate`
    async fn insert(&self, book: &NewBook) -> Result<Book, RepositoryError>;

    /// 更新评分，书籍不存在时返回 `NotFound`
    async fn update_rating(&self, id: BookId, rating: Rating) -> Result<Book, RepositoryError>;

    /// 删除书籍，书籍不存在时返回 `NotFound`
    async fn delete(&self, id: BookId) -> Result<Book, RepositoryError>;

    /// 书籍总数
    async fn count(&self) -> Result<usize, RepositoryError>;
}

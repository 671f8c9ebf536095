//! Book Context - Entities

use serde::Serialize;

use super::{Author, BookId, Rating, Title};

/// Book 实体
///
/// 不变量:
/// - id 由存储层分配，创建后不可变
/// - 创建后只有 rating 可以修改
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    id: BookId,
    title: Title,
    author: Author,
    rating: Rating,
}

impl Book {
    pub fn new(id: BookId, title: Title, author: Author, rating: Rating) -> Self {
        Self {
            id,
            title,
            author,
            rating,
        }
    }

    /// 修改评分
    pub fn rate(&mut self, rating: Rating) {
        self.rating = rating;
    }

    // Getters
    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }
}

/// 已通过校验、尚未持久化的书籍
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: Title,
    pub author: Author,
    pub rating: Rating,
}

impl NewBook {
    /// 持久化后赋予 id
    pub fn with_id(self, id: BookId) -> Book {
        Book::new(id, self.title, self.author, self.rating)
    }
}

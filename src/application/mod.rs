//! 应用层 - 用例编排（Book Service）
//!
//! 包含：
//! - ports: 六边形架构端口定义（BookRepositoryPort）
//! - commands: CQRS 命令及处理器（新增 / 修改评分 / 删除）
//! - queries: CQRS 查询及处理器（列表 / 详情）
//! - outcome: 面向用户的消息和操作结果
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod outcome;
pub mod ports;
pub mod queries;

pub use commands::{
    handlers::{CreateBookHandler, DeleteBookHandler, UpdateRatingHandler},
    CreateBook, DeleteBook, UpdateRating,
};

pub use error::{ApplicationError, BookOperation};

pub use outcome::{BookListing, BookOutcome, Flash, Severity};

pub use ports::{BookRepositoryPort, RepositoryError};

pub use queries::{
    handlers::{GetBookHandler, ListBooksHandler},
    GetBook, ListBooks,
};

//! Application State
//!
//! 持有仓储端口和所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateBookHandler, DeleteBookHandler, UpdateRatingHandler,
    // Query handlers
    GetBookHandler, ListBooksHandler,
    // Ports
    BookRepositoryPort,
};

/// 应用状态
///
/// 请求之间唯一共享的可变状态是数据库连接池（在仓储内部）
pub struct AppState {
    // ========== Ports ==========
    pub book_repo: Arc<dyn BookRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_book_handler: CreateBookHandler,
    pub update_rating_handler: UpdateRatingHandler,
    pub delete_book_handler: DeleteBookHandler,

    // ========== Query Handlers ==========
    pub list_books_handler: ListBooksHandler,
    pub get_book_handler: GetBookHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self {
            book_repo: book_repo.clone(),

            create_book_handler: CreateBookHandler::new(book_repo.clone()),
            update_rating_handler: UpdateRatingHandler::new(book_repo.clone()),
            delete_book_handler: DeleteBookHandler::new(book_repo.clone()),

            list_books_handler: ListBooksHandler::new(book_repo.clone()),
            get_book_handler: GetBookHandler::new(book_repo),
        }
    }
}

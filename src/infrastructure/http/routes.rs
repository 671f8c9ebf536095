//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping              GET   健康检查
//! - /api/book/list         GET   列出所有书籍（按书名排序）
//! - /api/book/get          POST  获取书籍详情
//! - /api/book/add          POST  新增书籍
//! - /api/book/edit_rating  POST  修改评分
//! - /api/book/delete       POST  删除书籍

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/book", book_routes())
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_books))
        .route("/get", post(handlers::get_book))
        .route("/add", post(handlers::add_book))
        .route("/edit_rating", post(handlers::edit_rating))
        .route("/delete", post(handlers::delete_book))
}

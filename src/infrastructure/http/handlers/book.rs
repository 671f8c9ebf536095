//! Book HTTP Handlers
//!
//! 收集原始输入 -> 调用命令/查询处理器 -> 映射为统一响应

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{CreateBook, DeleteBook, GetBook, ListBooks, UpdateRating};
use crate::domain::book::BookId;
use crate::infrastructure::http::dto::{
    AddBookRequest, ApiResponse, BookIdRequest, BookResponse, DeleteBookResponse,
    EditRatingRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ApiJson;
use crate::infrastructure::http::state::AppState;

/// 获取书籍列表（按书名排序）
///
/// 数据库不可达时仍返回成功和空列表，并附带 danger 消息
pub async fn list_books(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<BookResponse>>> {
    let listing = state.list_books_handler.handle(ListBooks).await;
    let messages = listing.flashes();

    let books: Vec<BookResponse> = listing.books.into_iter().map(BookResponse::from).collect();

    Json(ApiResponse::success(books).with_messages(messages))
}

/// 获取书籍详情（编辑评分页面使用）
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<BookIdRequest>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let query = GetBook {
        book_id: BookId::new(req.id),
    };

    let book = state.get_book_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(BookResponse::from(book))))
}

/// 新增书籍
pub async fn add_book(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AddBookRequest>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let command = CreateBook {
        title: req.title,
        author: req.author,
        rating: req.rating,
    };

    let outcome = state.create_book_handler.handle(command).await?;

    Ok(Json(
        ApiResponse::success(BookResponse::from(outcome.book)).with_messages([outcome.flash]),
    ))
}

/// 修改评分
pub async fn edit_rating(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<EditRatingRequest>,
) -> Result<Json<ApiResponse<BookResponse>>, ApiError> {
    let command = UpdateRating {
        book_id: BookId::new(req.id),
        rating: req.rating,
    };

    let outcome = state.update_rating_handler.handle(command).await?;

    Ok(Json(
        ApiResponse::success(BookResponse::from(outcome.book)).with_messages([outcome.flash]),
    ))
}

/// 删除书籍
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<BookIdRequest>,
) -> Result<Json<ApiResponse<DeleteBookResponse>>, ApiError> {
    let command = DeleteBook {
        book_id: BookId::new(req.id),
    };

    let outcome = state.delete_book_handler.handle(command).await?;

    Ok(Json(
        ApiResponse::success(DeleteBookResponse {
            id: outcome.book.id().value(),
            title: outcome.book.title().as_str().to_string(),
        })
        .with_messages([outcome.flash]),
    ))
}

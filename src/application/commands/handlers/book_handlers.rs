//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBook, DeleteBook, UpdateRating};
use crate::application::error::{ApplicationError, BookOperation};
use crate::application::outcome::BookOutcome;
use crate::application::ports::{BookRepositoryPort, RepositoryError};
use crate::domain::book::{validate_new_book, validate_rating, BookForm, BookId};

/// 将存储层错误转换为应用层错误
///
/// 基础设施错误在这里记录日志，返回给用户的只有通用提示
fn map_repository_error(
    operation: BookOperation,
    book_id: Option<BookId>,
    err: RepositoryError,
) -> ApplicationError {
    match err {
        RepositoryError::Duplicate(title) => ApplicationError::DuplicateTitle(title),
        RepositoryError::NotFound(detail) => match book_id {
            Some(id) => ApplicationError::not_found(id),
            None => ApplicationError::storage(operation, detail),
        },
        other => {
            tracing::error!(
                operation = %operation,
                error = %other,
                "Book storage operation failed"
            );
            ApplicationError::storage(operation, other.to_string())
        }
    }
}

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler - 校验表单并插入新书籍
pub struct CreateBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: CreateBook) -> Result<BookOutcome, ApplicationError> {
        let form = BookForm {
            title: command.title,
            author: command.author,
            rating: command.rating,
        };
        let new_book = validate_new_book(&form)?;

        let book = self
            .book_repo
            .insert(&new_book)
            .await
            .map_err(|e| map_repository_error(BookOperation::Create, None, e))?;

        tracing::info!(
            book_id = %book.id(),
            title = %book.title(),
            rating = book.rating().value(),
            "Book created"
        );

        let message = format!("Book '{}' added successfully!", book.title());
        Ok(BookOutcome::new(book, message))
    }
}

// ============================================================================
// UpdateRating
// ============================================================================

/// UpdateRating Handler - 只修改评分
pub struct UpdateRatingHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl UpdateRatingHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: UpdateRating) -> Result<BookOutcome, ApplicationError> {
        let book_id = command.book_id;

        // 先确认书籍存在，再校验输入
        self.book_repo
            .find_by_id(book_id)
            .await
            .map_err(|e| map_repository_error(BookOperation::UpdateRating, Some(book_id), e))?
            .ok_or_else(|| ApplicationError::not_found(book_id))?;

        let rating = validate_rating(&command.rating)?;

        let book = self
            .book_repo
            .update_rating(book_id, rating)
            .await
            .map_err(|e| map_repository_error(BookOperation::UpdateRating, Some(book_id), e))?;

        tracing::info!(
            book_id = %book_id,
            title = %book.title(),
            rating = rating.value(),
            "Book rating updated"
        );

        let message = format!("Rating for '{}' updated successfully!", book.title());
        Ok(BookOutcome::new(book, message))
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<BookOutcome, ApplicationError> {
        let book_id = command.book_id;

        let book = self
            .book_repo
            .delete(book_id)
            .await
            .map_err(|e| map_repository_error(BookOperation::Delete, Some(book_id), e))?;

        tracing::info!(
            book_id = %book_id,
            title = %book.title(),
            "Book deleted"
        );

        let message = format!("Book '{}' deleted successfully.", book.title());
        Ok(BookOutcome::new(book, message))
    }
}

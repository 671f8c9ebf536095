//! Book Query Handlers

use std::sync::Arc;

use crate::application::error::{ApplicationError, BookOperation};
use crate::application::outcome::BookListing;
use crate::application::ports::BookRepositoryPort;
use crate::application::queries::{GetBook, ListBooks};
use crate::domain::book::Book;

/// ListBooks Handler
///
/// 存储不可用时不返回错误：返回空列表并标记 `storage_unavailable`
pub struct ListBooksHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListBooksHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, _query: ListBooks) -> BookListing {
        match self.book_repo.find_all().await {
            Ok(books) => BookListing::available(books),
            Err(e) => {
                tracing::error!(
                    operation = %BookOperation::List,
                    error = %e,
                    "Could not retrieve books"
                );
                BookListing::unavailable()
            }
        }
    }
}

/// GetBook Handler
pub struct GetBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBook) -> Result<Book, ApplicationError> {
        self.book_repo
            .find_by_id(query.book_id)
            .await
            .map_err(|e| {
                tracing::error!(
                    operation = %BookOperation::Get,
                    book_id = %query.book_id,
                    error = %e,
                    "Could not load book"
                );
                ApplicationError::storage(BookOperation::Get, e.to_string())
            })?
            .ok_or_else(|| ApplicationError::not_found(query.book_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::application::ports::RepositoryError;
    use crate::domain::book::{Author, BookId, NewBook, Rating, Title};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteBookRepository,
    };

    async fn sqlite_repo() -> Arc<dyn BookRepositoryPort> {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Arc::new(SqliteBookRepository::new(pool))
    }

    fn new_book(title: &str, rating: f64) -> NewBook {
        NewBook {
            title: Title::new(title).unwrap(),
            author: Author::new("Someone").unwrap(),
            rating: Rating::new(rating).unwrap(),
        }
    }

    /// 所有操作都失败的仓储（模拟数据库不可达）
    struct Unreachable;

    #[async_trait]
    impl BookRepositoryPort for Unreachable {
        async fn find_all(&self) -> Result<Vec<Book>, RepositoryError> {
            Err(RepositoryError::DatabaseError("unable to open database file".to_string()))
        }

        async fn find_by_id(&self, _id: BookId) -> Result<Option<Book>, RepositoryError> {
            Err(RepositoryError::DatabaseError("unable to open database file".to_string()))
        }

        async fn insert(&self, _book: &NewBook) -> Result<Book, RepositoryError> {
            Err(RepositoryError::DatabaseError("unable to open database file".to_string()))
        }

        async fn update_rating(&self, _id: BookId, _rating: Rating) -> Result<Book, RepositoryError> {
            Err(RepositoryError::DatabaseError("unable to open database file".to_string()))
        }

        async fn delete(&self, _id: BookId) -> Result<Book, RepositoryError> {
            Err(RepositoryError::DatabaseError("unable to open database file".to_string()))
        }

        async fn count(&self) -> Result<usize, RepositoryError> {
            Err(RepositoryError::DatabaseError("unable to open database file".to_string()))
        }
    }

    #[tokio::test]
    async fn test_list_ordered_by_title() {
        let repo = sqlite_repo().await;
        for (title, rating) in [("Neuromancer", 8.0), ("Dune", 9.5), ("Hyperion", 9.0)] {
            repo.insert(&new_book(title, rating)).await.unwrap();
        }

        let listing = ListBooksHandler::new(repo).handle(ListBooks).await;

        assert!(!listing.storage_unavailable);
        let titles: Vec<&str> = listing.books.iter().map(|b| b.title().as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Hyperion", "Neuromancer"]);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let listing = ListBooksHandler::new(sqlite_repo().await).handle(ListBooks).await;
        assert!(listing.books.is_empty());
        assert!(!listing.storage_unavailable);
        assert!(listing.flashes().is_empty());
    }

    #[tokio::test]
    async fn test_list_unreachable_store() {
        let listing = ListBooksHandler::new(Arc::new(Unreachable)).handle(ListBooks).await;
        assert!(listing.books.is_empty());
        assert!(listing.storage_unavailable);
        assert_eq!(listing.flashes().len(), 1);
    }

    #[tokio::test]
    async fn test_get_book() {
        let repo = sqlite_repo().await;
        let book = repo.insert(&new_book("Dune", 9.5)).await.unwrap();
        let handler = GetBookHandler::new(repo);

        let found = handler.handle(GetBook { book_id: book.id() }).await.unwrap();
        assert_eq!(found, book);

        let err = handler
            .handle(GetBook {
                book_id: BookId::new(book.id().value() + 1),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_book_unreachable_store() {
        let err = GetBookHandler::new(Arc::new(Unreachable))
            .handle(GetBook {
                book_id: BookId::new(1),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::StorageError {
                operation: BookOperation::Get,
                ..
            }
        ));
    }
}

//! SQLite Book Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{BookRepositoryPort, RepositoryError};
use crate::domain::book::{Author, Book, BookId, NewBook, Rating, Title};

/// SQLite Book Repository
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    rating: f64,
}

/// 行数据按原样恢复，不再走表单校验
impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book::new(
            BookId::new(row.id),
            Title::from_persisted(row.title),
            Author::from_persisted(row.author),
            Rating::from_persisted(row.rating),
        )
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}

/// 写入错误：UNIQUE 冲突转换为 Duplicate
fn write_error(e: sqlx::Error, title: &str) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::Duplicate(title.to_string())
        }
        _ => database_error(e),
    }
}

const SELECT_ALL: &str = "SELECT id, title, author, rating FROM books ORDER BY title ASC";
const SELECT_BY_ID: &str = "SELECT id, title, author, rating FROM books WHERE id = ?";

#[async_trait]
impl BookRepositoryPort for SqliteBookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, RepositoryError> {
        let rows: Vec<BookRow> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(row.map(Book::from))
    }

    async fn insert(&self, book: &NewBook) -> Result<Book, RepositoryError> {
        // 未提交的事务在 drop 时回滚
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let result = sqlx::query("INSERT INTO books (title, author, rating) VALUES (?, ?, ?)")
            .bind(book.title.as_str())
            .bind(book.author.as_str())
            .bind(book.rating.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| write_error(e, book.title.as_str()))?;

        tx.commit().await.map_err(database_error)?;

        Ok(book.clone().with_id(BookId::new(result.last_insert_rowid())))
    }

    async fn update_rating(&self, id: BookId, rating: Rating) -> Result<Book, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let result = sqlx::query("UPDATE books SET rating = ? WHERE id = ?")
            .bind(rating.value())
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Book {}", id)));
        }

        let row: BookRow = sqlx::query_as(SELECT_BY_ID)
            .bind(id.value())
            .fetch_one(&mut *tx)
            .await
            .map_err(database_error)?;
        let book = Book::from(row);

        tx.commit().await.map_err(database_error)?;

        Ok(book)
    }

    async fn delete(&self, id: BookId) -> Result<Book, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let row: Option<BookRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.value())
            .fetch_optional(&mut *tx)
            .await
            .map_err(database_error)?;

        let book = row
            .map(Book::from)
            .ok_or_else(|| RepositoryError::NotFound(format!("Book {}", id)))?;

        sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        Ok(book)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(count as usize)
    }
}

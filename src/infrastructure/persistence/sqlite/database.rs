//! SQLite Database - 数据库连接和建表

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            max_connections: 5,
        }
    }

    /// 内存数据库，每个连接是独立的库，所以只允许一个连接
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// PRAGMA 通过连接选项设置，池中每个连接都会生效
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        // WAL 模式，允许并发读写
        .journal_mode(SqliteJournalMode::Wal)
        // 遇到锁时等待而不是立即失败
        .busy_timeout(Duration::from_millis(5000))
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "SQLite pool created with WAL mode and busy_timeout=5000ms"
    );

    Ok(pool)
}

/// 建表（幂等）
///
/// rating 的区间约束在存储层同样生效，绕过校验层的写入也无法落库
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL UNIQUE CHECK (length(title) BETWEEN 1 AND 250),
            author TEXT NOT NULL CHECK (length(author) BETWEEN 1 AND 250),
            rating REAL NOT NULL CHECK (rating >= 0 AND rating <= 10)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> DbPool {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_in_memory_db() {
        let pool = memory_pool().await;
        // 重复执行不报错
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_rating_check_constraint() {
        let pool = memory_pool().await;

        let result = sqlx::query("INSERT INTO books (title, author, rating) VALUES (?, ?, ?)")
            .bind("Dune")
            .bind("Frank Herbert")
            .bind(10.5_f64)
            .execute(&pool)
            .await;
        assert!(result.is_err());

        let result = sqlx::query("INSERT INTO books (title, author, rating) VALUES (?, ?, ?)")
            .bind("Dune")
            .bind("Frank Herbert")
            .bind(10.0_f64)
            .execute(&pool)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_file_backed_db() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::new(dir.path().join("books.db"));

        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}

//! Bookshelf - 个人藏书管理
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Book Context: Book 实体、值对象、表单校验
//!
//! 应用层 (application/):
//! - Ports: BookRepositoryPort
//! - Commands: 新增书籍、修改评分、删除书籍
//! - Queries: 书籍列表、书籍详情
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API
//! - Persistence: SQLite

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

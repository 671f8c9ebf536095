//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Book Context: 藏书管理（实体、值对象、输入校验）

pub mod book;

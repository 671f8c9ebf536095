//! Book Context - 藏书限界上下文
//!
//! 职责:
//! - Book 实体与值对象
//! - 表单输入校验（纯函数，无副作用）

mod entities;
mod errors;
mod validation;
mod value_objects;

pub use entities::{Book, NewBook};
pub use errors::{Field, ValidationError};
pub use validation::{
    validate_new_book, validate_rating, validate_required_text, BookForm,
};
pub use value_objects::{Author, BookId, Rating, Title, MAX_TEXT_LEN};

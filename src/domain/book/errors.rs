//! Book Context - Errors

use std::fmt;

use thiserror::Error;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Rating,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Rating => "rating",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 校验错误
///
/// Display 文本直接面向用户
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Book {0} is required.")]
    MissingField(Field),

    #[error("Book {0} must be at most 250 characters.")]
    TooLong(Field),

    #[error("Invalid rating. Please enter a number (e.g., 8.5).")]
    InvalidFormat(Field),

    #[error("Rating must be a number between 0 and 10.")]
    OutOfRange(Field),
}

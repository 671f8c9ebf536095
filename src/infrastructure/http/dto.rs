//! Data Transfer Objects

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::outcome::Flash;
use crate::domain::book::Book;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    /// 面向用户的消息（success / warning / danger）
    pub messages: Vec<Flash>,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            messages: Vec::new(),
            data: Some(data),
        }
    }

    /// 附加消息
    pub fn with_messages(mut self, messages: impl IntoIterator<Item = Flash>) -> Self {
        self.messages.extend(messages);
        self
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

/// 表单字段的原始值
///
/// 客户端可以发送字符串或数字，统一按文本交给校验层
fn raw_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddBookRequest {
    #[serde(deserialize_with = "raw_text")]
    pub title: String,
    #[serde(deserialize_with = "raw_text")]
    pub author: String,
    #[serde(deserialize_with = "raw_text")]
    pub rating: String,
}

#[derive(Debug, Deserialize)]
pub struct EditRatingRequest {
    pub id: i64,
    #[serde(default, deserialize_with = "raw_text")]
    pub rating: String,
}

#[derive(Debug, Deserialize)]
pub struct BookIdRequest {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub rating: f64,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id().value(),
            title: book.title().as_str().to_string(),
            author: book.author().as_str().to_string(),
            rating: book.rating().value(),
        }
    }
}

/// 删除书籍响应
#[derive(Debug, Serialize)]
pub struct DeleteBookResponse {
    pub id: i64,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_accepts_numbers_and_missing_fields() {
        let req: AddBookRequest =
            serde_json::from_str(r#"{"title": "Dune", "rating": 9.5}"#).unwrap();
        assert_eq!(req.title, "Dune");
        assert_eq!(req.author, "");
        assert_eq!(req.rating, "9.5");
    }

    #[test]
    fn test_edit_request_null_rating() {
        let req: EditRatingRequest =
            serde_json::from_str(r#"{"id": 3, "rating": null}"#).unwrap();
        assert_eq!(req.id, 3);
        assert_eq!(req.rating, "");
    }
}

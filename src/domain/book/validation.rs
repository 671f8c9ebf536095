//! Book Context - 输入校验
//!
//! 纯函数，在任何存储操作之前拒绝非法输入。
//! 一次提交中的多个字段错误会全部收集后一起返回。

use serde::Deserialize;

use super::{Author, Field, NewBook, Rating, Title, ValidationError, MAX_TEXT_LEN};

/// 原始表单输入（字段名 -> 原始字符串）
///
/// 缺失的字段按空字符串处理
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub rating: String,
}

/// 必填文本校验，返回去除首尾空白后的文本
pub fn validate_required_text(field: Field, value: &str) -> Result<&str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong(field));
    }
    Ok(value)
}

/// 评分校验：解析为浮点数并检查 [0, 10] 区间
pub fn validate_rating(raw: &str) -> Result<Rating, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField(Field::Rating));
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidFormat(Field::Rating))?;
    Rating::new(value)
}

/// 校验完整的新增表单
///
/// 不短路：返回所有字段上的全部错误
pub fn validate_new_book(form: &BookForm) -> Result<NewBook, Vec<ValidationError>> {
    let title = Title::new(&form.title);
    let author = Author::new(&form.author);
    let rating = validate_rating(&form.rating);

    match (title, author, rating) {
        (Ok(title), Ok(author), Ok(rating)) => Ok(NewBook {
            title,
            author,
            rating,
        }),
        (title, author, rating) => Err([title.err(), author.err(), rating.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

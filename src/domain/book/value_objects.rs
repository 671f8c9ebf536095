//! Book Context - Value Objects

use serde::{Deserialize, Serialize};

use super::validation::validate_required_text;
use super::{Field, ValidationError};

/// 文本字段（title / author）的最大字符数
pub const MAX_TEXT_LEN: usize = 250;

/// 书籍唯一标识（由数据库分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 书名
///
/// 不变量:
/// - 非空（去除首尾空白后）
/// - 不超过 250 字符
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl AsRef<str>) -> Result<Self, ValidationError> {
        validate_required_text(Field::Title, title.as_ref()).map(|t| Self(t.to_string()))
    }

    /// 从存储恢复，不重新校验（库中可能有外部写入的旧数据）
    pub(crate) fn from_persisted(title: String) -> Self {
        Self(title)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 作者
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Author(String);

impl Author {
    pub fn new(author: impl AsRef<str>) -> Result<Self, ValidationError> {
        validate_required_text(Field::Author, author.as_ref()).map(|a| Self(a.to_string()))
    }

    pub(crate) fn from_persisted(author: String) -> Self {
        Self(author)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 评分 (0.0 - 10.0，闭区间)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 10.0;

    pub fn new(value: f64) -> Result<Self, ValidationError> {
        // NaN 不落在任何区间内
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange(Field::Rating));
        }
        Ok(Self(value))
    }

    pub(crate) fn from_persisted(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

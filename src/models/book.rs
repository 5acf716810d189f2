//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Book record as stored and as returned on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Caller-supplied identifier, unique and immutable
    #[serde(rename = "bookID")]
    pub book_id: String,
    #[serde(rename = "bookDescription")]
    pub description: String,
    #[serde(rename = "bookTitle")]
    pub title: String,
    #[serde(rename = "bookAuthor")]
    pub author: String,
}

/// Create book request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    /// Required; an empty value is rejected
    #[serde(rename = "bookID")]
    pub book_id: Option<String>,
    #[serde(rename = "bookDescription")]
    pub description: Option<String>,
    #[serde(rename = "bookTitle")]
    pub title: Option<String>,
    #[serde(rename = "bookAuthor")]
    pub author: Option<String>,
}

/// Update book request.
///
/// Each field is either absent (`None`, the stored value is kept) or present
/// (`Some`, the stored value is replaced, an empty string included). A JSON
/// `null` counts as absent. Any `bookID` in the body is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    #[serde(rename = "bookDescription")]
    pub description: Option<String>,
    #[serde(rename = "bookTitle")]
    pub title: Option<String>,
    #[serde(rename = "bookAuthor")]
    pub author: Option<String>,
}

impl Book {
    /// Build a record for `book_id`, defaulting unsupplied fields to empty
    pub fn new(book_id: String, data: CreateBook) -> Self {
        Self {
            book_id,
            description: data.description.unwrap_or_default(),
            title: data.title.unwrap_or_default(),
            author: data.author.unwrap_or_default(),
        }
    }

    /// Merge the fields present in `data`; `book_id` is never touched
    pub fn apply(&mut self, data: UpdateBook) {
        if let Some(description) = data.description {
            self.description = description;
        }
        if let Some(title) = data.title {
            self.title = title;
        }
        if let Some(author) = data.author {
            self.author = author;
        }
    }
}

use serde::{Deserialize, Serialize};

/// One catalog record. Immutable once parsed; the detail view takes it by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "itemId")]
    pub id: i64,

    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "coverSmallUrl", default)]
    pub cover_url: String,
}

/// Wire envelope shared by both catalog endpoints: `{"books": [...]}`.
#[derive(Debug, Deserialize)]
pub struct BookListResponse {
    #[serde(default)]
    pub books: Vec<Book>,
}

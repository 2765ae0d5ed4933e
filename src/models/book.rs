//! Book model and related types.
//!
//! Wire format uses camelCase field names (`pageCount`, `readPage`,
//! `insertedAt`, `updatedAt`) to stay compatible with the published
//! API contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Full book record as stored in the catalog.
///
/// `id` and `inserted_at` are assigned at creation and never change.
/// `finished` is derived from `read_page == page_count` on every
/// create and update; it is never accepted from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Short book representation for lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Client payload for create and update operations.
///
/// `name` stays optional here so that a missing name is rejected by
/// the store with its own validation error rather than by the JSON
/// deserializer. All other absent fields take their default value,
/// matching the reference behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub name: Option<String>,
    #[serde(default)]
    pub year: i32,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

/// List filter parameters. At most one filter is applied, in the
/// order `name`, `reading`, `finished`.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    /// Case-insensitive substring match against the book name
    pub name: Option<String>,
    /// 0 or 1, matched against the `reading` flag
    pub reading: Option<u8>,
    /// 0 or 1, matched against the derived `finished` flag
    pub finished: Option<u8>,
}

/// Catalog counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookStats {
    /// Number of books in the catalog
    pub total: usize,
    /// Books currently flagged as being read
    pub reading: usize,
    /// Books whose read page count has reached the page count
    pub finished: usize,
}

//! Data models for the bookshelf catalog

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookDraft, BookQuery, BookStats, BookSummary};

//! Catalog service
//!
//! Wraps the book store behind a single lock and translates store
//! failures into API errors with operation-specific messages. The
//! lock is never held across an await point; every store operation
//! is a short synchronous computation, so one `RwLock` gives the
//! strict sequential consistency the API promises (an add is
//! immediately visible to a subsequent list).

use std::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDraft, BookQuery, BookStats, BookSummary},
    store::{BookStore, StoreError},
};

pub struct CatalogService {
    store: RwLock<BookStore>,
}

impl CatalogService {
    pub fn new(store: BookStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Add a book to the catalog and return its new id
    pub fn add_book(&self, draft: BookDraft) -> AppResult<String> {
        let mut store = self.store.write().map_err(poisoned)?;
        let id = store.add(draft).map_err(|e| match e {
            StoreError::MissingName => AppError::Validation(
                "Failed to add book. Please provide a book name".to_string(),
            ),
            StoreError::PageOverflow => AppError::Validation(
                "Failed to add book. readPage must not be greater than pageCount".to_string(),
            ),
            _ => AppError::Internal("Book could not be added".to_string()),
        })?;
        tracing::info!(book_id = %id, "book added");
        Ok(id)
    }

    /// List book summaries, optionally filtered
    pub fn list_books(&self, query: &BookQuery) -> AppResult<Vec<BookSummary>> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store.list(query))
    }

    /// Get the full record for a book id
    pub fn get_book(&self, id: &str) -> AppResult<Book> {
        let store = self.store.read().map_err(poisoned)?;
        store
            .get(id)
            .cloned()
            .map_err(|_| AppError::NotFound("Book not found".to_string()))
    }

    /// Update a book in place
    pub fn update_book(&self, id: &str, draft: BookDraft) -> AppResult<()> {
        let mut store = self.store.write().map_err(poisoned)?;
        store.update(id, draft).map_err(|e| match e {
            StoreError::MissingName => AppError::Validation(
                "Failed to update book. Please provide a book name".to_string(),
            ),
            StoreError::PageOverflow => AppError::Validation(
                "Failed to update book. readPage must not be greater than pageCount".to_string(),
            ),
            StoreError::NotFound => {
                AppError::NotFound("Failed to update book. Id not found".to_string())
            }
            StoreError::Inconsistent => {
                AppError::Internal("Book could not be updated".to_string())
            }
        })?;
        tracing::info!(book_id = %id, "book updated");
        Ok(())
    }

    /// Delete a book
    pub fn delete_book(&self, id: &str) -> AppResult<()> {
        let mut store = self.store.write().map_err(poisoned)?;
        store.remove(id).map_err(|_| {
            AppError::NotFound("Failed to delete book. Id not found".to_string())
        })?;
        tracing::info!(book_id = %id, "book deleted");
        Ok(())
    }

    /// Catalog counters
    pub fn stats(&self) -> AppResult<BookStats> {
        let store = self.store.read().map_err(poisoned)?;
        Ok(store.stats())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> AppError {
    AppError::Internal("Book store lock poisoned".to_string())
}

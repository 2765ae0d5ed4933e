//! In-memory book store
//!
//! The store owns the full, insertion-ordered collection of book
//! records and implements every catalog rule: field validation,
//! `finished` derivation, filter semantics, and identity lookup.
//! Operations are synchronous in-memory computations; callers are
//! responsible for serializing access (see `services::catalog`).

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Book, BookDraft, BookQuery, BookStats, BookSummary};

/// Source of fresh record identifiers. Injectable so tests can use
/// deterministic ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Source of timestamps. Injectable so tests can control time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production id generator: random UUID v4, hyphen-free
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Production clock: UTC wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Store-level failure. All variants are terminal and leave the
/// collection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("book name is required")]
    MissingName,
    #[error("readPage must not be greater than pageCount")]
    PageOverflow,
    #[error("book not found")]
    NotFound,
    #[error("book missing after insert")]
    Inconsistent,
}

pub struct BookStore {
    books: IndexMap<String, Book>,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::with_capabilities(Box::new(UuidIds), Box::new(SystemClock))
    }

    /// Build a store with explicit id and clock sources
    pub fn with_capabilities(ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        Self {
            books: IndexMap::new(),
            ids,
            clock,
        }
    }

    /// Validate a draft and extract its name. Checks run in a fixed
    /// order: name presence first, then the page invariant.
    fn validated_name(draft: &BookDraft) -> Result<String, StoreError> {
        let name = draft.name.clone().ok_or(StoreError::MissingName)?;
        if draft.read_page > draft.page_count {
            return Err(StoreError::PageOverflow);
        }
        Ok(name)
    }

    /// Add a new book and return its freshly assigned id.
    ///
    /// The record is appended to the end of the collection with
    /// `inserted_at == updated_at` and `finished` derived from the
    /// page counters.
    pub fn add(&mut self, draft: BookDraft) -> Result<String, StoreError> {
        let name = Self::validated_name(&draft)?;
        let id = self.ids.generate();
        let now = self.clock.now();

        let book = Book {
            id: id.clone(),
            name,
            year: draft.year,
            author: draft.author,
            summary: draft.summary,
            publisher: draft.publisher,
            page_count: draft.page_count,
            read_page: draft.read_page,
            finished: draft.read_page == draft.page_count,
            reading: draft.reading,
            inserted_at: now,
            updated_at: now,
        };
        self.books.insert(id.clone(), book);

        // Defensive: unreachable unless the collection itself misbehaves
        if !self.books.contains_key(&id) {
            return Err(StoreError::Inconsistent);
        }
        Ok(id)
    }

    /// List book summaries in store order, optionally narrowed by at
    /// most one filter. Filter priority: `name` substring, then
    /// `reading`, then `finished`.
    ///
    /// Known quirk carried over from the reference behavior: a
    /// `finished` value of 0 is treated as "no filter", so callers
    /// cannot select only unfinished books through this parameter.
    pub fn list(&self, query: &BookQuery) -> Vec<BookSummary> {
        let books = self.books.values();

        if let Some(needle) = &query.name {
            let needle = needle.to_lowercase();
            books
                .filter(|b| b.name.to_lowercase().contains(&needle))
                .map(BookSummary::from)
                .collect()
        } else if let Some(reading) = query.reading {
            books
                .filter(|b| b.reading == (reading != 0))
                .map(BookSummary::from)
                .collect()
        } else if query.finished.is_some_and(|v| v != 0) {
            books
                .filter(|b| b.finished)
                .map(BookSummary::from)
                .collect()
        } else {
            books.map(BookSummary::from).collect()
        }
    }

    pub fn get(&self, id: &str) -> Result<&Book, StoreError> {
        self.books.get(id).ok_or(StoreError::NotFound)
    }

    /// Replace every field of the identified book except `id` and
    /// `inserted_at`. Validation runs before the existence check, so
    /// a malformed payload against an unknown id reports the
    /// validation error, not `NotFound`.
    pub fn update(&mut self, id: &str, draft: BookDraft) -> Result<(), StoreError> {
        let name = Self::validated_name(&draft)?;
        let now = self.clock.now();

        let book = self.books.get_mut(id).ok_or(StoreError::NotFound)?;
        book.name = name;
        book.year = draft.year;
        book.author = draft.author;
        book.summary = draft.summary;
        book.publisher = draft.publisher;
        book.page_count = draft.page_count;
        book.read_page = draft.read_page;
        book.finished = draft.read_page == draft.page_count;
        book.reading = draft.reading;
        book.updated_at = now;
        Ok(())
    }

    /// Remove the identified book, preserving the relative order of
    /// the remaining records.
    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        self.books
            .shift_remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    pub fn stats(&self) -> BookStats {
        BookStats {
            total: self.books.len(),
            reading: self.books.values().filter(|b| b.reading).count(),
            finished: self.books.values().filter(|b| b.finished).count(),
        }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

    /// Deterministic ids: "book-1", "book-2", ...
    struct SequentialIds(AtomicU64);

    impl SequentialIds {
        fn new() -> Self {
            Self(AtomicU64::new(0))
        }
    }

    impl IdGenerator for SequentialIds {
        fn generate(&self) -> String {
            format!("book-{}", self.0.fetch_add(1, Ordering::Relaxed) + 1)
        }
    }

    /// Clock advancing one second per call
    struct SteppingClock(AtomicI64);

    impl SteppingClock {
        fn new() -> Self {
            Self(AtomicI64::new(0))
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            let step = self.0.fetch_add(1, Ordering::Relaxed);
            Utc.timestamp_opt(1_600_000_000 + step, 0).unwrap()
        }
    }

    fn test_store() -> BookStore {
        BookStore::with_capabilities(
            Box::new(SequentialIds::new()),
            Box::new(SteppingClock::new()),
        )
    }

    fn draft(name: &str, page_count: u32, read_page: u32, reading: bool) -> BookDraft {
        BookDraft {
            name: Some(name.to_string()),
            year: 2020,
            author: Some("An Author".to_string()),
            summary: Some("A summary".to_string()),
            publisher: Some("A Publisher".to_string()),
            page_count,
            read_page,
            reading,
        }
    }

    #[test]
    fn add_assigns_id_and_derives_finished() {
        let mut store = test_store();

        let id = store.add(draft("Dicoding", 100, 100, false)).unwrap();
        let book = store.get(&id).unwrap();
        assert_eq!(book.id, "book-1");
        assert!(book.finished);
        assert_eq!(book.inserted_at, book.updated_at);

        let id = store.add(draft("Belajar", 200, 50, true)).unwrap();
        assert!(!store.get(&id).unwrap().finished);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_rejects_missing_name() {
        let mut store = test_store();
        let mut d = draft("x", 10, 0, false);
        d.name = None;
        assert_eq!(store.add(d), Err(StoreError::MissingName));
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_page_overflow() {
        let mut store = test_store();
        assert_eq!(
            store.add(draft("Overread", 100, 101, false)),
            Err(StoreError::PageOverflow)
        );
        assert!(store.is_empty());
    }

    #[test]
    fn missing_name_wins_over_page_overflow() {
        let mut store = test_store();
        let mut d = draft("x", 100, 101, false);
        d.name = None;
        assert_eq!(store.add(d), Err(StoreError::MissingName));
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = test_store();
        assert_eq!(store.get("nope").err(), Some(StoreError::NotFound));
    }

    #[test]
    fn update_replaces_all_but_id_and_inserted_at() {
        let mut store = test_store();
        let id = store.add(draft("Original", 100, 10, true)).unwrap();
        let before = store.get(&id).unwrap().clone();

        store
            .update(
                &id,
                BookDraft {
                    name: Some("Revised".to_string()),
                    year: 2024,
                    author: None,
                    summary: None,
                    publisher: Some("New Publisher".to_string()),
                    page_count: 300,
                    read_page: 300,
                    reading: false,
                },
            )
            .unwrap();

        let after = store.get(&id).unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.inserted_at, before.inserted_at);
        assert_eq!(after.name, "Revised");
        assert_eq!(after.year, 2024);
        assert_eq!(after.author, None);
        assert_eq!(after.summary, None);
        assert_eq!(after.publisher.as_deref(), Some("New Publisher"));
        assert_eq!(after.page_count, 300);
        assert_eq!(after.read_page, 300);
        assert!(after.finished);
        assert!(!after.reading);
        assert!(after.updated_at > before.updated_at);
    }

    #[test]
    fn update_validation_failure_leaves_record_unchanged() {
        let mut store = test_store();
        let id = store.add(draft("Stable", 100, 10, false)).unwrap();
        let before = store.get(&id).unwrap().clone();

        assert_eq!(
            store.update(&id, draft("Stable", 100, 150, false)),
            Err(StoreError::PageOverflow)
        );
        let mut nameless = draft("x", 10, 0, false);
        nameless.name = None;
        assert_eq!(store.update(&id, nameless), Err(StoreError::MissingName));

        assert_eq!(store.get(&id).unwrap(), &before);
    }

    #[test]
    fn update_checks_validation_before_existence() {
        let mut store = test_store();
        // Malformed payload against a nonexistent id reports the
        // validation error, not NotFound.
        assert_eq!(
            store.update("missing", draft("x", 10, 20, false)),
            Err(StoreError::PageOverflow)
        );
        let mut nameless = draft("x", 10, 0, false);
        nameless.name = None;
        assert_eq!(store.update("missing", nameless), Err(StoreError::MissingName));
        // A well-formed payload against a nonexistent id is NotFound.
        assert_eq!(
            store.update("missing", draft("x", 10, 0, false)),
            Err(StoreError::NotFound)
        );
    }

    #[test]
    fn remove_preserves_order_of_remainder() {
        let mut store = test_store();
        let a = store.add(draft("A", 10, 0, false)).unwrap();
        let b = store.add(draft("B", 10, 0, false)).unwrap();
        let c = store.add(draft("C", 10, 0, false)).unwrap();

        store.remove(&b).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&b).err(), Some(StoreError::NotFound));
        assert_eq!(store.remove(&b), Err(StoreError::NotFound));

        let ids: Vec<String> = store
            .list(&BookQuery::default())
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn list_without_filter_returns_all_in_insertion_order() {
        let mut store = test_store();
        for name in ["First", "Second", "Third"] {
            store.add(draft(name, 10, 0, false)).unwrap();
        }
        let names: Vec<String> = store
            .list(&BookQuery::default())
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn list_projects_id_name_publisher() {
        let mut store = test_store();
        let id = store.add(draft("Projected", 10, 0, false)).unwrap();
        let summaries = store.list(&BookQuery::default());
        assert_eq!(
            summaries,
            vec![BookSummary {
                id,
                name: "Projected".to_string(),
                publisher: Some("A Publisher".to_string()),
            }]
        );
    }

    #[test]
    fn list_filters_by_name_substring_case_insensitive() {
        let mut store = test_store();
        store.add(draft("Dicoding Indonesia", 10, 0, false)).unwrap();
        store.add(draft("Belajar Rust", 10, 0, false)).unwrap();

        let hits = store.list(&BookQuery {
            name: Some("dico".to_string()),
            ..Default::default()
        });
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Dicoding Indonesia");

        let misses = store.list(&BookQuery {
            name: Some("python".to_string()),
            ..Default::default()
        });
        assert!(misses.is_empty());
    }

    #[test]
    fn list_filters_by_reading_flag_both_ways() {
        let mut store = test_store();
        store.add(draft("Dicoding", 100, 100, false)).unwrap();
        store.add(draft("Belajar", 200, 50, true)).unwrap();

        let reading = store.list(&BookQuery {
            reading: Some(1),
            ..Default::default()
        });
        assert_eq!(reading.len(), 1);
        assert_eq!(reading[0].name, "Belajar");

        let not_reading = store.list(&BookQuery {
            reading: Some(0),
            ..Default::default()
        });
        assert_eq!(not_reading.len(), 1);
        assert_eq!(not_reading[0].name, "Dicoding");
    }

    #[test]
    fn finished_filter_zero_is_treated_as_absent() {
        let mut store = test_store();
        store.add(draft("Done", 100, 100, false)).unwrap();
        store.add(draft("Ongoing", 200, 50, true)).unwrap();

        let finished = store.list(&BookQuery {
            finished: Some(1),
            ..Default::default()
        });
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].name, "Done");

        // finished=0 falls through to "no filter"
        let all = store.list(&BookQuery {
            finished: Some(0),
            ..Default::default()
        });
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn name_filter_takes_priority_over_flags() {
        let mut store = test_store();
        store.add(draft("Dicoding", 100, 100, false)).unwrap();
        store.add(draft("Belajar", 200, 50, true)).unwrap();

        let hits = store.list(&BookQuery {
            name: Some("belajar".to_string()),
            reading: Some(0),
            finished: Some(1),
        });
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Belajar");
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut store = test_store();
        let id = store.add(draft("Dicoding", 100, 100, false)).unwrap();
        store.remove(&id).unwrap();
        assert_eq!(store.get(&id).err(), Some(StoreError::NotFound));
    }

    #[test]
    fn stats_count_total_reading_finished() {
        let mut store = test_store();
        store.add(draft("Done", 100, 100, false)).unwrap();
        store.add(draft("Ongoing", 200, 50, true)).unwrap();
        store.add(draft("Fresh", 300, 0, false)).unwrap();

        assert_eq!(
            store.stats(),
            BookStats {
                total: 3,
                reading: 1,
                finished: 1,
            }
        );
    }
}

//! Repository layer for book persistence

pub mod memory;
pub mod postgres;

pub use memory::MemoryBooksRepository;
pub use postgres::PgBooksRepository;

use async_trait::async_trait;

use crate::{error::AppResult, models::Book};

/// Storage contract for the book catalog.
///
/// Implementations persist books keyed by ISBN. Insert of an existing ISBN
/// fails with `Conflict`; update of a missing ISBN fails with `NotFound`;
/// delete of a missing ISBN is a no-op.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksRepository: Send + Sync {
    /// All current records, order unspecified
    async fn get_all(&self) -> AppResult<Vec<Book>>;

    /// The record with the given ISBN, if present
    async fn get_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// Persist a new record
    async fn insert(&self, book: &Book) -> AppResult<Book>;

    /// Replace all fields of the record matching `book.isbn`
    async fn update(&self, book: &Book) -> AppResult<Book>;

    /// Remove the record with the given ISBN
    async fn delete(&self, isbn: &str) -> AppResult<()>;
}

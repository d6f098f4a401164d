//! In-memory books repository.
//!
//! Keeps the catalog in a `HashMap` keyed by ISBN. Used by the test suite and
//! when the server is configured with `database.backend = "memory"`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

use super::BooksRepository;

#[derive(Default)]
pub struct MemoryBooksRepository {
    books: RwLock<HashMap<String, Book>>,
}

impl MemoryBooksRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BooksRepository for MemoryBooksRepository {
    async fn get_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn get_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        Ok(self.books.read().await.get(isbn).cloned())
    }

    async fn insert(&self, book: &Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if books.contains_key(&book.isbn) {
            return Err(AppError::Conflict(format!(
                "Book with ISBN {} already exists",
                book.isbn
            )));
        }
        books.insert(book.isbn.clone(), book.clone());
        Ok(book.clone())
    }

    async fn update(&self, book: &Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if !books.contains_key(&book.isbn) {
            return Err(AppError::NotFound(format!(
                "Book with ISBN {} not found",
                book.isbn
            )));
        }
        books.insert(book.isbn.clone(), book.clone());
        Ok(book.clone())
    }

    async fn delete(&self, isbn: &str) -> AppResult<()> {
        self.books.write().await.remove(isbn);
        Ok(())
    }
}

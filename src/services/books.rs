//! Book catalog service.
//!
//! Pure delegation to the repository; decouples the HTTP boundary from the
//! storage backend. Reads surface a missing record as `None`, which the API
//! layer translates to 404.

use std::sync::Arc;

use crate::{error::AppResult, models::Book, repository::BooksRepository};

#[derive(Clone)]
pub struct BooksService {
    repository: Arc<dyn BooksRepository>,
}

impl BooksService {
    pub fn new(repository: Arc<dyn BooksRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_books(&self) -> AppResult<Vec<Book>> {
        self.repository.get_all().await
    }

    pub async fn get_book_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        self.repository.get_by_isbn(isbn).await
    }

    pub async fn insert_book(&self, book: &Book) -> AppResult<Book> {
        self.repository.insert(book).await
    }

    pub async fn update_book(&self, book: &Book) -> AppResult<Book> {
        self.repository.update(book).await
    }

    pub async fn delete_book(&self, isbn: &str) -> AppResult<()> {
        self.repository.delete(isbn).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockBooksRepository;
    use mockall::predicate::eq;

    fn dune() -> Book {
        Book {
            isbn: "111".to_string(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            cover_image_url: None,
            edition: 1,
        }
    }

    #[tokio::test]
    async fn get_book_by_isbn_delegates_to_repository() {
        let mut repo = MockBooksRepository::new();
        repo.expect_get_by_isbn()
            .with(eq("111"))
            .times(1)
            .returning(|_| Ok(Some(dune())));

        let service = BooksService::new(Arc::new(repo));

        let found = service.get_book_by_isbn("111").await.unwrap();
        assert_eq!(found, Some(dune()));
    }

    #[tokio::test]
    async fn missing_book_surfaces_as_none() {
        let mut repo = MockBooksRepository::new();
        repo.expect_get_by_isbn().returning(|_| Ok(None));

        let service = BooksService::new(Arc::new(repo));

        assert_eq!(service.get_book_by_isbn("999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn insert_passes_the_book_through_unchanged() {
        let mut repo = MockBooksRepository::new();
        repo.expect_insert()
            .with(eq(dune()))
            .times(1)
            .returning(|book| Ok(book.clone()));

        let service = BooksService::new(Arc::new(repo));

        let created = service.insert_book(&dune()).await.unwrap();
        assert_eq!(created, dune());
    }

    #[tokio::test]
    async fn delete_delegates_to_repository() {
        let mut repo = MockBooksRepository::new();
        repo.expect_delete()
            .with(eq("111"))
            .times(1)
            .returning(|_| Ok(()));

        let service = BooksService::new(Arc::new(repo));

        service.delete_book("111").await.unwrap();
    }
}

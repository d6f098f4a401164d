//! Business logic services

pub mod books;
pub mod gemini;
pub mod summary;

use std::sync::Arc;

use crate::{config::AiConfig, error::AppResult, repository::BooksRepository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub summary: summary::SummaryService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Arc<dyn BooksRepository>, ai_config: &AiConfig) -> AppResult<Self> {
        Ok(Self {
            books: books::BooksService::new(repository),
            summary: summary::SummaryService::new(ai_config)?,
        })
    }
}

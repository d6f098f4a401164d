//! Book summary service.
//!
//! Builds a fixed prompt from a book's title and author and forwards it to
//! the generative-language API. Title and author are embedded verbatim.

use crate::{
    config::AiConfig,
    error::AppResult,
    services::gemini::GeminiClient,
};

#[derive(Clone)]
pub struct SummaryService {
    client: GeminiClient,
}

impl SummaryService {
    pub fn new(config: &AiConfig) -> AppResult<Self> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }

    /// Generate a prose summary for the given title and author
    pub async fn generate_summary(&self, title: &str, author: &str) -> AppResult<String> {
        tracing::debug!(title, author, "Generating book summary");
        self.client.generate_content(&build_prompt(title, author)).await
    }
}

fn build_prompt(title: &str, author: &str) -> String {
    format!(
        "You are a book summarization expert. Please provide a concise summary of the book based on the title and author provided.\n\n\
         Title: {}\n\
         Author: {}\n\n\
         Summary: ",
        title, author
    )
}

//! Book (catalog entry) model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A catalog entry, uniquely identified by its ISBN.
///
/// The ISBN is caller-supplied and never regenerated; updates are a full
/// replace of all fields for the matching ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema, Validate)]
pub struct Book {
    /// Unique identifier, primary key
    #[validate(length(min = 1, message = "isbn must not be empty"))]
    pub isbn: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    /// Optional URL of the cover image
    #[serde(rename = "coverImageUrl", default)]
    pub cover_image_url: Option<String>,
    pub edition: i32,
}

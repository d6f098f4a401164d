//! AI book summary endpoint

use axum::extract::{Path, State};

use crate::{error::AppResult, AppState};

/// Generate a summary for a book.
///
/// A missing book answers 200 with the literal body `Book not found`,
/// matching the behavior the frontend expects.
#[utoipa::path(
    get,
    path = "/books/{isbn}/summary",
    tag = "summary",
    params(
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Plain-text summary, or `Book not found`", body = String),
        (status = 502, description = "Generative API unreachable")
    )
)]
pub async fn get_book_summary(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<String> {
    let Some(book) = state.services.books.get_book_by_isbn(&isbn).await? else {
        return Ok("Book not found".to_string());
    };

    state
        .services
        .summary
        .generate_summary(&book.title, &book.author)
        .await
}

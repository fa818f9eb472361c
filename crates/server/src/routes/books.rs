use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use models::book::Book;

use crate::errors::ApiError;

use super::{pretty_json, ServerState};

/// Full catalog in listing format.
#[utoipa::path(get, path = "/", tag = "books", responses((status = 200, description = "Full catalog keyed by ISBN")))]
pub async fn list(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let books = state.catalog.list_all().await;
    pretty_json(&books)
}

/// Book by exact ISBN. An unknown ISBN answers 200 with an empty body on
/// this surface.
#[utoipa::path(get, path = "/isbn/{isbn}", tag = "books", params(("isbn" = String, Path, description = "Catalog key")), responses((status = 200, description = "The book, or an empty body for an unknown ISBN", body = crate::openapi::BookDoc)))]
pub async fn by_isbn(State(state): State<ServerState>, Path(isbn): Path<String>) -> Response {
    match state.catalog.get_by_isbn(&isbn).await {
        Some(book) => Json(book).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

#[utoipa::path(get, path = "/author/{author}", tag = "books", params(("author" = String, Path, description = "Exact author name")), responses((status = 200, description = "Matching books, possibly empty", body = [crate::openapi::BookDoc])))]
pub async fn by_author(
    State(state): State<ServerState>,
    Path(author): Path<String>,
) -> Json<Vec<Book>> {
    Json(state.catalog.get_by_author(&author).await)
}

#[utoipa::path(get, path = "/title/{title}", tag = "books", params(("title" = String, Path, description = "Exact title")), responses((status = 200, description = "Matching books, possibly empty", body = [crate::openapi::BookDoc])))]
pub async fn by_title(
    State(state): State<ServerState>,
    Path(title): Path<String>,
) -> Json<Vec<Book>> {
    Json(state.catalog.get_by_title(&title).await)
}

/// Reviews of one book; an unknown ISBN is a 404 with a message payload.
#[utoipa::path(get, path = "/review/{isbn}", tag = "books", params(("isbn" = String, Path, description = "Catalog key")), responses((status = 200, description = "Reviewer-to-text mapping"), (status = 404, description = "Unknown ISBN", body = crate::openapi::MessageDoc)))]
pub async fn reviews(
    State(state): State<ServerState>,
    Path(isbn): Path<String>,
) -> Result<Json<BTreeMap<String, String>>, ApiError> {
    let reviews = state.catalog.reviews(&isbn).await?;
    Ok(Json(reviews))
}

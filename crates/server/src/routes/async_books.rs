use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use models::book::Book;

use crate::errors::ApiError;

use super::{pretty_json, ServerState};

/// Full catalog via the deferred surface; failures map to a 500 payload.
#[utoipa::path(get, path = "/async/books", tag = "books", responses((status = 200, description = "Full catalog keyed by ISBN"), (status = 500, description = "Retrieval failure", body = crate::openapi::MessageDoc)))]
pub async fn list(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let books = state.catalog.fetch_all().await?;
    pretty_json(&books)
}

#[utoipa::path(get, path = "/async/isbn/{isbn}", tag = "books", params(("isbn" = String, Path, description = "Catalog key")), responses((status = 200, description = "The book", body = crate::openapi::BookDoc), (status = 404, description = "Unknown ISBN", body = crate::openapi::MessageDoc)))]
pub async fn by_isbn(
    State(state): State<ServerState>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, ApiError> {
    Ok(Json(state.catalog.fetch_by_isbn(&isbn).await?))
}

#[utoipa::path(get, path = "/async/author/{author}", tag = "books", params(("author" = String, Path, description = "Exact author name")), responses((status = 200, description = "Matching books", body = [crate::openapi::BookDoc]), (status = 404, description = "No matches", body = crate::openapi::MessageDoc)))]
pub async fn by_author(
    State(state): State<ServerState>,
    Path(author): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(state.catalog.fetch_by_author(&author).await?))
}

#[utoipa::path(get, path = "/async/title/{title}", tag = "books", params(("title" = String, Path, description = "Exact title")), responses((status = 200, description = "Matching books", body = [crate::openapi::BookDoc]), (status = 404, description = "No matches", body = crate::openapi::MessageDoc)))]
pub async fn by_title(
    State(state): State<ServerState>,
    Path(title): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(state.catalog.fetch_by_title(&title).await?))
}

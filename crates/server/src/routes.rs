use std::sync::Arc;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::catalog::errors::CatalogError;
use service::catalog::service::CatalogService;
use service::users::service::RegistrationService;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

pub mod async_books;
pub mod books;
pub mod register;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService>,
    pub registry: Arc<RegistrationService>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Serialize with four-space indentation, the listing format clients expect.
pub(crate) fn pretty_json(value: &impl Serialize) -> Result<Response, ApiError> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut ser)
        .map_err(|_| ApiError::Catalog(CatalogError::Retrieval))?;
    let body = String::from_utf8(buf).map_err(|_| ApiError::Catalog(CatalogError::Retrieval))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Build the full application router: both catalog surfaces, registration,
/// health, and the API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let docs = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    // Plain catalog surface: absence is an empty success
    let catalog = Router::new()
        .route("/", get(books::list))
        .route("/isbn/:isbn", get(books::by_isbn))
        .route("/author/:author", get(books::by_author))
        .route("/title/:title", get(books::by_title))
        .route("/review/:isbn", get(books::reviews));

    // Deferred catalog surface: absence rejects with a message payload
    let deferred = Router::new()
        .route("/async/books", get(async_books::list))
        .route("/async/isbn/:isbn", get(async_books::by_isbn))
        .route("/async/author/:author", get(async_books::by_author))
        .route("/async/title/:title", get(async_books::by_title));

    let users = Router::new().route("/register", post(register::register));

    // Compose
    Router::new()
        .merge(catalog)
        .merge(deferred)
        .merge(users)
        .route("/health", get(health))
        .merge(docs)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}

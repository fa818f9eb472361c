use std::collections::BTreeMap;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct RegisterRequest { pub username: String, pub password: String }

#[derive(utoipa::ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(utoipa::ToSchema)]
pub struct BookDoc {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub reviews: BTreeMap<String, String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::books::list,
        crate::routes::books::by_isbn,
        crate::routes::books::by_author,
        crate::routes::books::by_title,
        crate::routes::books::reviews,
        crate::routes::async_books::list,
        crate::routes::async_books::by_isbn,
        crate::routes::async_books::by_author,
        crate::routes::async_books::by_title,
        crate::routes::register::register,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            MessageDoc,
            BookDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "books"),
        (name = "users")
    )
)]
pub struct ApiDoc;

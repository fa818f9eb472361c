use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

use super::ServerState;

#[derive(Debug, Default, Deserialize)]
pub struct RegisterInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Register a new account. The contract answers 404 for both missing
/// credentials and duplicates, each with its own message.
#[utoipa::path(post, path = "/register", tag = "users", request_body = crate::openapi::RegisterRequest, responses((status = 200, description = "Registered", body = crate::openapi::MessageDoc), (status = 404, description = "Duplicate username or unusable credentials", body = crate::openapi::MessageDoc)))]
pub async fn register(
    State(state): State<ServerState>,
    body: Option<Json<RegisterInput>>,
) -> Result<Json<MessageResponse>, ApiError> {
    // A missing or non-JSON body registers nobody, same as empty fields.
    let input = body.map(|Json(input)| input).unwrap_or_default();
    state.registry.register(&input.username, &input.password).await?;
    Ok(Json(MessageResponse {
        message: "User successfully registered. Now you can login".to_string(),
    }))
}

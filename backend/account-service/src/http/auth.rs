/// Registration and credential-login handlers
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::AppState;
use crate::error::Result;
use crate::models::AccountRead;

/// Registration payload
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 256))]
    pub password: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub phone_number: Option<String>,
}

/// Credential login payload
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 256))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AccountRead>)> {
    payload.validate()?;

    let account = state
        .service
        .create(
            &payload.email,
            &payload.password,
            &payload.name,
            payload.phone_number.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// POST /auth/token
///
/// Token issuance is a side call made only after authentication succeeds.
pub async fn token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequest>,
) -> Result<Json<TokenResponse>> {
    payload.validate()?;

    let account = state
        .service
        .authenticate(&payload.email, &payload.password)
        .await?;

    let access_token = state.tokens.issue(&account.email)?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

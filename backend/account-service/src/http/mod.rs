/// HTTP boundary layer (axum)
///
/// Translates requests into calls on the account lifecycle service and maps
/// each typed domain error onto a transport status. The service itself knows
/// nothing about transport codes.
pub mod accounts;
pub mod auth;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::error::{AccountError, Result};
use crate::models::Account;
use crate::security::TokenIssuer;
use crate::services::AccountService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: AccountService,
    pub tokens: TokenIssuer,
}

/// Build the router with all API endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/auth/register", post(auth::register))
        .route("/auth/token", post(auth::token))
        .route(
            "/users/me/:public_id",
            get(accounts::read_account)
                .put(accounts::update_account)
                .delete(accounts::delete_account),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe (no auth required)
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Simple confirmation payload
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

/// The account resolved from the request's bearer token.
///
/// The token subject is the account email; a token whose subject no longer
/// resolves to an account is rejected the same way as an undecodable one.
pub struct CurrentAccount(pub Account);

#[async_trait]
impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = AccountError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AccountError::InvalidToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AccountError::InvalidToken)?;

        let subject = state.tokens.subject(token)?;

        let account = match state.service.get_by_email(&subject).await {
            Ok(account) => account,
            Err(AccountError::AccountNotFound) => return Err(AccountError::InvalidToken),
            Err(err) => return Err(err),
        };

        Ok(CurrentAccount(account))
    }
}

/// Self-service routes only operate on the caller's own account
pub(crate) fn require_own_account(public_id: &str, current: &Account) -> Result<()> {
    if public_id != current.public_id {
        return Err(AccountError::Forbidden);
    }

    Ok(())
}

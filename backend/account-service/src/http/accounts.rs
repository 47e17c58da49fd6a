/// Self-service account handlers (read, update, delete)
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use super::{require_own_account, AppState, CurrentAccount, Message};
use crate::error::Result;
use crate::models::{AccountPatch, AccountRead};

/// Distinguish an absent key from an explicit null: an absent key stays the
/// outer `None` (via `default`), while a present key (null or value) becomes
/// `Some(inner)`.
fn double_option<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Partial-update payload.
///
/// A key that is absent leaves the field untouched; an explicit
/// `"phone_number": null` clears the stored number. `current_password` and
/// `password` must be supplied together to change the password.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone_number: Option<Option<String>>,
    pub current_password: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateAccountRequest> for AccountPatch {
    fn from(payload: UpdateAccountRequest) -> Self {
        AccountPatch {
            name: payload.name,
            email: payload.email,
            phone_number: payload.phone_number,
            current_password: payload.current_password,
            new_password: payload.password,
        }
    }
}

/// GET /users/me/{public_id}
pub async fn read_account(
    State(state): State<AppState>,
    Path(public_id): Path<String>,
    CurrentAccount(current): CurrentAccount,
) -> Result<Json<AccountRead>> {
    require_own_account(&public_id, &current)?;

    let account = state.service.get_by_public_id(&public_id).await?;

    Ok(Json(account.into()))
}

/// PUT /users/me/{public_id}
pub async fn update_account(
    State(state): State<AppState>,
    Path(public_id): Path<String>,
    CurrentAccount(current): CurrentAccount,
    Json(payload): Json<UpdateAccountRequest>,
) -> Result<Json<AccountRead>> {
    require_own_account(&public_id, &current)?;
    payload.validate()?;

    let account = state.service.update(&public_id, payload.into()).await?;

    Ok(Json(account.into()))
}

/// DELETE /users/me/{public_id}
pub async fn delete_account(
    State(state): State<AppState>,
    Path(public_id): Path<String>,
    CurrentAccount(current): CurrentAccount,
) -> Result<Json<Message>> {
    require_own_account(&public_id, &current)?;

    state.service.delete(&public_id).await?;

    Ok(Json(Message {
        message: "Account deleted.".to_string(),
    }))
}

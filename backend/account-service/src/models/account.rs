use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Account - the persisted identity record.
///
/// `id` is the store-assigned primary key and never leaves the service;
/// `public_id` is the externally visible handle, a ULID assigned once at
/// insert. Timestamps are stamped by the store on insert/update.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: i64,
    pub public_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field values for a new account; `public_id` and timestamps are assigned
/// by the store at insert
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password_hash: String,
}

/// Partial update for an account.
///
/// `None` leaves a field untouched. The nullable `phone_number` carries one
/// extra level: `Some(None)` clears the stored value, `Some(Some(v))`
/// replaces it. The two password fields are consumed by the password-change
/// gate and never merged directly.
#[derive(Debug, Default, Clone)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

impl AccountPatch {
    /// True when either password field was supplied
    pub fn wants_password_change(&self) -> bool {
        self.current_password.is_some() || self.new_password.is_some()
    }

    /// Merge the non-password fields into `account`; absent fields are left
    /// untouched
    pub fn apply_to(&self, account: &mut Account) {
        if let Some(name) = &self.name {
            account.name = name.clone();
        }
        if let Some(email) = &self.email {
            account.email = email.clone();
        }
        if let Some(phone_number) = &self.phone_number {
            account.phone_number = phone_number.clone();
        }
    }
}

/// External account view; never carries the internal id or the password hash
#[derive(Debug, Serialize)]
pub struct AccountRead {
    pub public_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountRead {
    fn from(account: Account) -> Self {
        Self {
            public_id: account.public_id,
            name: account.name,
            email: account.email,
            phone_number: account.phone_number,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Account lifecycle orchestration: create, read, update, delete, authenticate
use std::sync::Arc;

use tracing::{info, warn};

use crate::db::AccountStore;
use crate::error::{AccountError, Result};
use crate::models::{Account, AccountPatch, NewAccount};
use crate::security::{hash_password, verify_password};

/// Orchestrates account operations against the store.
///
/// Every failure is a typed domain error; store and hasher failures never
/// leak to callers in raw form. Uniqueness checks and the following write are
/// two sequential store calls, so the store's unique constraints remain the
/// backstop for concurrent writers (see `db::AccountStore`).
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Create a new account with a freshly hashed password.
    ///
    /// Fails with `EmailAlreadyExists`/`PhoneAlreadyExists` when another
    /// account already holds the email or the (optional) phone number.
    pub async fn create(
        &self,
        email: &str,
        password: &str,
        name: &str,
        phone_number: Option<&str>,
    ) -> Result<Account> {
        if self.store.find_by_email(email).await?.is_some() {
            return Err(AccountError::EmailAlreadyExists);
        }

        if let Some(phone) = phone_number {
            if self.store.find_by_phone_number(phone).await?.is_some() {
                return Err(AccountError::PhoneAlreadyExists);
            }
        }

        let password_hash = hash_password(password)?;

        let account = self
            .store
            .insert(NewAccount {
                name: name.to_string(),
                email: email.to_string(),
                phone_number: phone_number.map(str::to_string),
                password_hash,
            })
            .await?;

        info!(
            account_id = %account.public_id,
            email = %mask_email(&account.email),
            "Account created"
        );

        Ok(account)
    }

    pub async fn get_by_public_id(&self, public_id: &str) -> Result<Account> {
        self.store
            .find_by_public_id(public_id)
            .await?
            .ok_or(AccountError::AccountNotFound)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Account> {
        self.store
            .find_by_email(email)
            .await?
            .ok_or(AccountError::AccountNotFound)
    }

    /// Apply a partial update to the account identified by `public_id`.
    ///
    /// A changed email or phone number is checked for uniqueness before any
    /// mutation. A password change is all-or-nothing: both the current and
    /// the new password must be supplied and non-empty, and the current one
    /// must verify against the stored hash. Fields absent from the patch are
    /// left untouched.
    pub async fn update(&self, public_id: &str, patch: AccountPatch) -> Result<Account> {
        let mut account = self.get_by_public_id(public_id).await?;

        if let Some(email) = patch.email.as_deref() {
            if email != account.email && self.store.find_by_email(email).await?.is_some() {
                return Err(AccountError::EmailAlreadyExists);
            }
        }

        if let Some(Some(phone)) = patch.phone_number.as_ref().map(|p| p.as_deref()) {
            if account.phone_number.as_deref() != Some(phone)
                && self.store.find_by_phone_number(phone).await?.is_some()
            {
                return Err(AccountError::PhoneAlreadyExists);
            }
        }

        if patch.wants_password_change() {
            let (current, new) = match (
                patch.current_password.as_deref(),
                patch.new_password.as_deref(),
            ) {
                (Some(current), Some(new)) if !current.is_empty() && !new.is_empty() => {
                    (current, new)
                }
                _ => return Err(AccountError::PasswordChangeIncomplete),
            };

            if !verify_password(current, &account.password_hash)? {
                warn!(
                    account_id = %account.public_id,
                    "Password change rejected: current password mismatch"
                );
                return Err(AccountError::InvalidCurrentPassword);
            }

            account.password_hash = hash_password(new)?;
        }

        patch.apply_to(&mut account);

        let updated = self.store.update(&account).await?;

        info!(account_id = %updated.public_id, "Account updated");

        Ok(updated)
    }

    /// Hard-delete the account identified by `public_id`
    pub async fn delete(&self, public_id: &str) -> Result<()> {
        let account = self.get_by_public_id(public_id).await?;

        self.store.delete(&account).await?;

        info!(account_id = %account.public_id, "Account deleted");

        Ok(())
    }

    /// Verify credentials and return the matching account.
    ///
    /// An unknown email and a wrong password answer the same
    /// `InvalidCredentials` error so the outcome cannot be used to enumerate
    /// registered emails.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Account> {
        let account = match self.store.find_by_email(email).await? {
            Some(account) => account,
            None => {
                warn!(email = %mask_email(email), "Authentication failed: unknown email");
                return Err(AccountError::InvalidCredentials);
            }
        };

        if !verify_password(password, &account.password_hash)? {
            warn!(
                account_id = %account.public_id,
                "Authentication failed: password mismatch"
            );
            return Err(AccountError::InvalidCredentials);
        }

        Ok(account)
    }
}

/// Mask an email for logging
pub(crate) fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let local = &email[..at_pos];
        let domain = &email[at_pos..];
        if local.len() <= 2 {
            format!("**{}", domain)
        } else {
            format!("{}***{}", &local[..1], domain)
        }
    } else {
        "***@***".to_string()
    }
}

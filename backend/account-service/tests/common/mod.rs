/// Shared test fixtures: an in-memory account store.
///
/// Mirrors the Postgres adapter's contract, including unique-constraint
/// enforcement at write time, so lifecycle logic can be exercised without a
/// running database.
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use ulid::Ulid;

use account_service::db::AccountStore;
use account_service::error::{AccountError, Result};
use account_service::models::{Account, NewAccount};
use account_service::services::AccountService;

#[derive(Default)]
struct State {
    rows: Vec<Account>,
    next_id: i64,
}

#[derive(Default)]
pub struct MemoryAccountStore {
    state: Mutex<State>,
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_public_id(&self, public_id: &str) -> Result<Option<Account>> {
        let state = self.state.lock().await;
        Ok(state
            .rows
            .iter()
            .find(|a| a.public_id == public_id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let state = self.state.lock().await;
        Ok(state.rows.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_phone_number(&self, phone_number: &str) -> Result<Option<Account>> {
        let state = self.state.lock().await;
        Ok(state
            .rows
            .iter()
            .find(|a| a.phone_number.as_deref() == Some(phone_number))
            .cloned())
    }

    async fn insert(&self, account: NewAccount) -> Result<Account> {
        let mut state = self.state.lock().await;

        // Unique-constraint backstop, as in the accounts table
        if state.rows.iter().any(|a| a.email == account.email) {
            return Err(AccountError::EmailAlreadyExists);
        }
        if let Some(phone) = &account.phone_number {
            if state
                .rows
                .iter()
                .any(|a| a.phone_number.as_ref() == Some(phone))
            {
                return Err(AccountError::PhoneAlreadyExists);
            }
        }

        state.next_id += 1;
        let now = Utc::now();
        let row = Account {
            id: state.next_id,
            public_id: Ulid::new().to_string(),
            name: account.name,
            email: account.email,
            phone_number: account.phone_number,
            password_hash: account.password_hash,
            created_at: now,
            updated_at: now,
        };
        state.rows.push(row.clone());

        Ok(row)
    }

    async fn update(&self, account: &Account) -> Result<Account> {
        let mut state = self.state.lock().await;

        if state
            .rows
            .iter()
            .any(|a| a.id != account.id && a.email == account.email)
        {
            return Err(AccountError::EmailAlreadyExists);
        }
        if let Some(phone) = &account.phone_number {
            if state
                .rows
                .iter()
                .any(|a| a.id != account.id && a.phone_number.as_ref() == Some(phone))
            {
                return Err(AccountError::PhoneAlreadyExists);
            }
        }

        let Some(row) = state.rows.iter_mut().find(|a| a.id == account.id) else {
            return Err(AccountError::AccountNotFound);
        };

        row.name = account.name.clone();
        row.email = account.email.clone();
        row.phone_number = account.phone_number.clone();
        row.password_hash = account.password_hash.clone();
        row.updated_at = Utc::now();

        Ok(row.clone())
    }

    async fn delete(&self, account: &Account) -> Result<()> {
        let mut state = self.state.lock().await;
        state.rows.retain(|a| a.id != account.id);
        Ok(())
    }
}

pub fn account_service() -> AccountService {
    AccountService::new(Arc::new(MemoryAccountStore::default()))
}

/// Postgres-backed account store
use sqlx::PgPool;
use ulid::Ulid;

use super::AccountStore;
use crate::error::{AccountError, Result};
use crate::models::{Account, NewAccount};

// Constraint names from migrations/0001_create_accounts.sql
const EMAIL_UNIQUE_CONSTRAINT: &str = "accounts_email_key";
const PHONE_UNIQUE_CONSTRAINT: &str = "accounts_phone_number_key";

#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Translate a unique-constraint violation into the matching domain error.
///
/// Two concurrent writers can both pass the service-level uniqueness check
/// before either commits; the table constraint catches the loser and its
/// violation must read the same as the check failing up front.
fn map_unique_violation(err: sqlx::Error) -> AccountError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            match db_err.constraint() {
                Some(EMAIL_UNIQUE_CONSTRAINT) => return AccountError::EmailAlreadyExists,
                Some(PHONE_UNIQUE_CONSTRAINT) => return AccountError::PhoneAlreadyExists,
                _ => {}
            }
        }
    }

    AccountError::from(err)
}

#[async_trait::async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_public_id(&self, public_id: &str) -> Result<Option<Account>> {
        let account =
            sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE public_id = $1")
                .bind(public_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(account)
    }

    async fn find_by_phone_number(&self, phone_number: &str) -> Result<Option<Account>> {
        let account =
            sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE phone_number = $1")
                .bind(phone_number)
                .fetch_optional(&self.pool)
                .await?;

        Ok(account)
    }

    async fn insert(&self, account: NewAccount) -> Result<Account> {
        let public_id = Ulid::new().to_string();

        let created = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (public_id, name, email, phone_number, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&public_id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.phone_number)
        .bind(&account.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(created)
    }

    async fn update(&self, account: &Account) -> Result<Account> {
        let updated = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET name = $2,
                email = $3,
                phone_number = $4,
                password_hash = $5,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(account.id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.phone_number)
        .bind(&account.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::RowNotFound => AccountError::AccountNotFound,
            err => map_unique_violation(err),
        })?;

        Ok(updated)
    }

    async fn delete(&self, account: &Account) -> Result<()> {
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(account.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

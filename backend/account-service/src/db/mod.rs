/// Account persistence: store contract and Postgres implementation
pub mod postgres;

pub use postgres::PgAccountStore;

use crate::error::Result;
use crate::models::{Account, NewAccount};

/// Persistence gateway for accounts.
///
/// `insert` assigns `public_id` and both timestamps; `update` re-stamps
/// `updated_at`. Both must surface a unique-constraint violation on email or
/// phone number as the matching domain error, since the service-level
/// uniqueness checks and the write are two separate calls and the store is
/// the backstop for the race between them.
#[async_trait::async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_public_id(&self, public_id: &str) -> Result<Option<Account>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>>;

    async fn find_by_phone_number(&self, phone_number: &str) -> Result<Option<Account>>;

    async fn insert(&self, account: NewAccount) -> Result<Account>;

    async fn update(&self, account: &Account) -> Result<Account>;

    async fn delete(&self, account: &Account) -> Result<()>;
}

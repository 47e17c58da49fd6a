/// Service layer for the account lifecycle
///
/// Orchestrates create/read/update/delete/authenticate against the account
/// store, enforcing uniqueness and password-change invariants.
pub mod accounts;

pub use accounts::AccountService;

/// Data models for accounts
pub mod account;

pub use account::{Account, AccountPatch, AccountRead, NewAccount};

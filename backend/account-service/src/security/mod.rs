/// Security primitives for the account service
///
/// - Password hashing and verification (Argon2id)
/// - Access-token issuance and verification (HS256 via jsonwebtoken)
pub mod password;
pub mod token;

pub use password::{hash_password, verify_password};
pub use token::TokenIssuer;

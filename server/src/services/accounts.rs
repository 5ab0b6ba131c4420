//! Signup and login against the user store.
//!
//! Passwords are stored as `sha256(salt || password)` with a random 16-byte
//! salt per account. Error messages are the user-facing flash texts.

use rand::Rng;
use sha2::{Digest, Sha256};

use super::session::bytes_to_hex;
use super::store::{Store, StoreError, UserRecord};

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Please fill in every field.")]
    MissingField,
    #[error("Passwords do not match. Please try again.")]
    PasswordMismatch,
    #[error("Username already exists. Please choose another.")]
    UsernameTaken,
    #[error("Email is already registered. Please log in or use a different email.")]
    EmailTaken,
    #[error("Invalid username or password.")]
    InvalidCredentials,
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl AccountError {
    /// Whether the message is safe to show the visitor as-is.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

/// Form fields of a signup request.
#[derive(Debug, Clone, Default)]
pub struct Signup {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

fn verify_password(record: &UserRecord, password: &str) -> bool {
    hash_password(&record.salt, password) == record.password_hash
}

/// Field checks that need no store access. Returns the trimmed email and
/// username.
///
/// # Errors
///
/// `MissingField` for a blank email, username, or password, and
/// `PasswordMismatch` when the confirmation differs.
pub fn validate_signup(form: &Signup) -> Result<(String, String), AccountError> {
    let email = form.email.trim();
    let username = form.username.trim();
    if email.is_empty() || username.is_empty() || form.password.is_empty() {
        return Err(AccountError::MissingField);
    }
    if form.password != form.confirm_password {
        return Err(AccountError::PasswordMismatch);
    }
    Ok((email.to_owned(), username.to_owned()))
}

/// Register a new account.
///
/// # Errors
///
/// Validation failures, a taken username or email, or a store write error.
pub async fn signup(store: &Store, form: &Signup) -> Result<String, AccountError> {
    let (email, username) = validate_signup(form)?;
    let salt = generate_salt();
    let record = UserRecord { email, password_hash: hash_password(&salt, &form.password), salt };
    match store.insert_user(&username, record).await {
        Ok(()) => {
            tracing::info!(%username, "account created");
            Ok(username)
        }
        Err(StoreError::UsernameTaken(_)) => Err(AccountError::UsernameTaken),
        Err(StoreError::EmailTaken) => Err(AccountError::EmailTaken),
        Err(e) => Err(e.into()),
    }
}

/// Check credentials, returning the canonical username.
///
/// # Errors
///
/// `InvalidCredentials` for an unknown user or wrong password.
pub async fn login(store: &Store, username: &str, password: &str) -> Result<String, AccountError> {
    let username = username.trim();
    match store.find_user(username).await {
        Some(record) if verify_password(&record, password) => Ok(username.to_owned()),
        _ => Err(AccountError::InvalidCredentials),
    }
}

#[cfg(test)]
#[path = "accounts_test.rs"]
mod tests;

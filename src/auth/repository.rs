use super::user::UserRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Email already registered")]
    EmailTaken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("session rejected: {0}")]
    Session(String),

    #[error("password hashing failed")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("user store request failed")]
    Backend(#[from] reqwest::Error),

    #[error("user store returned an unexpected response: {0}")]
    Protocol(String),
}

/// Narrow contract to the external identity datastore.
///
/// The application only ever looks users up by email (login, duplicate
/// check), by id (session restoration), or inserts a new row. Everything
/// else about the datastore is its own business.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, IdentityError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, IdentityError>;

    /// Creates a user row. Fails with [`IdentityError::EmailTaken`] when
    /// the email is already present.
    async fn insert(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, IdentityError>;
}

use crate::auth::{IdentityError, UserRecord, UserRepository};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

/// In-memory stand-in for the external user datastore. Mirrors its
/// contract, including the duplicate-email failure on insert.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn new() -> InMemoryUserRepository {
        InMemoryUserRepository::default()
    }

    /// Seeds one user, for tests that start from a registered account.
    pub fn with_user(self, email: &str, password_hash: &str) -> InMemoryUserRepository {
        {
            let mut rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
            let id = rows.len() as i64 + 1;
            rows.push(UserRecord {
                id,
                email: email.to_string(),
                password_hash: password_hash.to_string(),
            });
        }
        self
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, IdentityError> {
        Ok(self
            .rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, IdentityError> {
        Ok(self
            .rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn insert(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, IdentityError> {
        let mut rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        if rows.iter().any(|u| u.email == email) {
            return Err(IdentityError::EmailTaken);
        }
        let record = UserRecord {
            id: rows.len() as i64 + 1,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        rows.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_find_round_trips() {
        let repo = InMemoryUserRepository::new();
        let created = repo.insert("a@example.com", "hash").await.unwrap();

        let by_email = repo.find_by_email("a@example.com").await.unwrap().unwrap();
        assert_eq!(by_email, created);

        let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id, created);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_without_a_new_row() {
        let repo = InMemoryUserRepository::new();
        repo.insert("a@example.com", "hash").await.unwrap();

        let result = repo.insert("a@example.com", "other").await;
        assert!(matches!(result, Err(IdentityError::EmailTaken)));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn unknown_lookups_return_none() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_by_email("missing@example.com").await.unwrap().is_none());
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }
}

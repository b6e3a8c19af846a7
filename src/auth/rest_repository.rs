use super::repository::{IdentityError, UserRepository};
use super::user::UserRecord;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Client for the hosted user datastore, a PostgREST-style row API:
/// `GET /users?email=eq.{email}` filters rows, `POST /users` with
/// `Prefer: return=representation` inserts and echoes the created row.
pub struct RestUserRepository {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestUserRepository {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> RestUserRepository {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        RestUserRepository {
            client: Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    async fn fetch_one(
        &self,
        column: &str,
        value: String,
    ) -> Result<Option<UserRecord>, IdentityError> {
        let rows: Vec<UserRecord> = self
            .client
            .get(self.users_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[(column, format!("eq.{value}")), ("select", "*".to_string())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(rows.into_iter().next())
    }
}

#[async_trait]
impl UserRepository for RestUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, IdentityError> {
        self.fetch_one("email", email.to_string()).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, IdentityError> {
        self.fetch_one("id", id.to_string()).await
    }

    async fn insert(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, IdentityError> {
        let response = self
            .client
            .post(self.users_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({
                "email": email,
                "password": password_hash,
            }))
            .send()
            .await?;

        if response.status() == StatusCode::CONFLICT {
            return Err(IdentityError::EmailTaken);
        }

        let rows: Vec<UserRecord> = response.error_for_status()?.json().await?;
        rows.into_iter().next().ok_or_else(|| {
            IdentityError::Protocol("insert returned no representation".to_string())
        })
    }
}

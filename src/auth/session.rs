use super::repository::IdentityError;
use super::user::UserRecord;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE: &str = "segview_session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id, resolved back to a [`UserRecord`] on each request.
    pub sub: i64,
    pub email: String,
    pub exp: i64,
}

/// Issues and verifies signed, expiring session tokens (HS256 JWT). The
/// token is the entire session: no server-side session table exists.
pub struct SessionManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(secret: &str, ttl_hours: i64) -> SessionManager {
        SessionManager {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours),
        }
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }

    pub fn issue(&self, user: &UserRecord) -> Result<String, IdentityError> {
        let claims = SessionClaims {
            sub: user.id,
            email: user.email.clone(),
            exp: (Utc::now() + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| IdentityError::Session(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<SessionClaims, IdentityError> {
        decode::<SessionClaims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| IdentityError::Session(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserRecord {
        UserRecord {
            id: 7,
            email: "a@example.com".to_string(),
            password_hash: "unused".to_string(),
        }
    }

    #[test]
    fn issue_then_verify_round_trips_identity() {
        let sessions = SessionManager::new("secret", 1);
        let token = sessions.issue(&user()).unwrap();
        let claims = sessions.verify(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "a@example.com");
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let token = SessionManager::new("secret-a", 1).issue(&user()).unwrap();
        assert!(SessionManager::new("secret-b", 1).verify(&token).is_err());
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        let sessions = SessionManager::new("secret", 1);
        let mut token = sessions.issue(&user()).unwrap();
        token.push('x');
        assert!(sessions.verify(&token).is_err());
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let sessions = SessionManager::new("secret", -2);
        let token = sessions.issue(&user()).unwrap();
        assert!(sessions.verify(&token).is_err());
    }
}

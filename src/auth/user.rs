use serde::Deserialize;

/// Plain identity record as stored in the user datastore. Deliberately
/// free of any session-protocol concerns; the session layer wraps this
/// rather than extending it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    /// Salted bcrypt hash. The datastore column is named `password` for
    /// compatibility with the existing schema, but only hashes are stored.
    #[serde(rename = "password")]
    pub password_hash: String,
}

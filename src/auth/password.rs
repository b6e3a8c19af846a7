use super::repository::IdentityError;
use bcrypt::DEFAULT_COST;

/// Hashes a plaintext password with a fresh salt.
pub fn hash_password(plain: &str) -> Result<String, IdentityError> {
    Ok(bcrypt::hash(plain, DEFAULT_COST)?)
}

/// Verifies a plaintext password against a stored salted hash. Plaintext
/// is never compared to plaintext.
pub fn verify_password(plain: &str, password_hash: &str) -> Result<bool, IdentityError> {
    Ok(bcrypt::verify(plain, password_hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests hash at the minimum cost to keep them fast; the production
    // path uses DEFAULT_COST.
    #[test]
    fn verifies_the_original_password() {
        let hash = bcrypt::hash("hunter2", 4).unwrap();
        assert!(verify_password("hunter2", &hash).unwrap());
    }

    #[test]
    fn rejects_a_wrong_password() {
        let hash = bcrypt::hash("hunter2", 4).unwrap();
        assert!(!verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = bcrypt::hash("hunter2", 4).unwrap();
        let b = bcrypt::hash("hunter2", 4).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("hunter2", "not-a-bcrypt-hash").is_err());
    }
}

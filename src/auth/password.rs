use anyhow::{Context, Result};

pub fn hash_password(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost).context("Failed to hash password")
}

/// A malformed stored hash counts as a mismatch.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    bcrypt::verify(password, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password_only() {
        let hashed = hash_password("s3cret", 4).unwrap();
        assert!(verify_password("s3cret", &hashed));
        assert!(!verify_password("wrong", &hashed));
    }

    #[test]
    fn malformed_hash_does_not_verify() {
        assert!(!verify_password("s3cret", "not-a-bcrypt-hash"));
    }
}

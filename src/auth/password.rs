//! Password hashing
//!
//! Passwords are stored as bcrypt hashes (`$2b$<cost>$<salt+digest>`), each
//! with its own random salt.

pub use bcrypt::BcryptError;

/// Work factor; tests use the minimum so they stay fast
const COST: u32 = if cfg!(test) { 4 } else { bcrypt::DEFAULT_COST };

/// Hash a password with a fresh random salt
///
/// # Errors
///
/// Returns `BcryptError` if the hashing backend fails.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, COST)
}

/// Check a password against a stored hash
///
/// Malformed stored hashes never verify.
#[must_use]
pub fn verify_password(password: &str, stored: &str) -> bool {
    bcrypt::verify(password, stored).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let stored = hash_password("hunter22").unwrap();
        assert!(verify_password("hunter22", &stored));
        assert!(!verify_password("hunter23", &stored));
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("same", &a));
        assert!(verify_password("same", &b));
    }

    #[test]
    fn stored_form_is_bcrypt() {
        let stored = hash_password("pw").unwrap();
        assert!(stored.starts_with("$2"));
        assert_eq!(stored.len(), 60);
        assert!(!stored.contains("pw"));
    }

    #[test]
    fn malformed_hashes_never_verify() {
        assert!(!verify_password("pw", ""));
        assert!(!verify_password("pw", "no-separator"));
        assert!(!verify_password("pw", "zz$zz"));
        assert!(!verify_password("pw", "00$00"));
        assert!(!verify_password("pw", "$2b$04$tooshort"));
    }
}

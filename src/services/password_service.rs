//! Salted one-way password digests.
//!
//! Registration never keeps a submitted password: the digest produced here
//! is the only form in which the secret may outlive its request. The salt
//! is random per call, so identical passwords produce unrelated digests.

use base64::{Engine as _, engine::general_purpose};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Digest format tag, kept in the stored string so the scheme can be
/// swapped later without guessing at old entries.
const SCHEME: &str = "sha256";

/// Derive a salted digest of `password` as `sha256$<salt>$<digest>`.
pub fn salted_digest(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    let digest = digest_with_salt(&salt, password);
    format!("{}${}${}", SCHEME, salt, digest)
}

/// SHA-256 over `salt:password`, base64-encoded.
fn digest_with_salt(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    general_purpose::STANDARD.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_never_contains_plaintext() {
        let hashed = salted_digest("super_secret_password123");
        assert!(!hashed.contains("super_secret_password123"));
    }

    #[test]
    fn same_password_salts_differently() {
        assert_ne!(salted_digest("abc"), salted_digest("abc"));
    }

    #[test]
    fn digest_is_deterministic_for_fixed_salt() {
        let d1 = digest_with_salt("salt", "abc");
        let d2 = digest_with_salt("salt", "abc");
        assert_eq!(d1, d2);
        assert_ne!(d1, digest_with_salt("salt", "xyz"));
    }

    #[test]
    fn rendered_form_has_scheme_and_salt() {
        let hashed = salted_digest("abc");
        let mut parts = hashed.split('$');
        assert_eq!(parts.next(), Some("sha256"));
        assert_eq!(parts.next().map(str::len), Some(32));
        assert!(parts.next().is_some());
    }
}

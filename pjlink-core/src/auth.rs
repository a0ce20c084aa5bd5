//! PJLink authentication digest
//!
//! When the projector greets with `PJLINK 1 <seed>`, every command sent on that
//! connection is prefixed with the MD5 digest of the seed followed by the
//! password, rendered as 32 lowercase hex characters.

use md5::{Digest, Md5};

/// Length of the hex-encoded digest prefix
pub const DIGEST_LEN: usize = 32;

/// Compute the authentication digest for `seed` and `password`
///
/// # Examples
///
/// ```
/// use pjlink_core::auth;
///
/// let digest = auth::digest("abcdef12", "JBMIAProjectorLink");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn digest(seed: &str, password: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(seed.as_bytes());
    hasher.update(password.as_bytes());

    hex::encode(hasher.finalize())
}

/// Digest prefix to send, if authentication applies
///
/// Either side being empty means no authentication was requested or no
/// credential is configured.
pub fn prefix(seed: &str, password: &str) -> Option<String> {
    if seed.is_empty() || password.is_empty() {
        None
    } else {
        Some(digest(seed, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_digest_known_value() {
        assert_eq!(
            digest("abcdef12", "JBMIAProjectorLink"),
            "9129d6dfa4652890f63c27b5e0c53c1f"
        );
    }

    #[test]
    fn test_digest_is_lowercase_hex() {
        let d = digest("Mzmqb5rE", "JBMIAProjectorLink");
        assert_eq!(d, "74cd9a99c82c2a9277157194d58158e5");
        assert!(d.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_digest_is_plain_concatenation() {
        assert_eq!(digest("abc", "def"), digest("abcd", "ef"));
        assert_ne!(digest("abc", "def"), digest("def", "abc"));
    }

    #[test]
    fn test_prefix_requires_both() {
        assert_eq!(prefix("", "secret"), None);
        assert_eq!(prefix("abcdef12", ""), None);
        assert_eq!(prefix("", ""), None);
        assert_eq!(prefix("abcdef12", "JBMIAProjectorLink").map(|d| d.len()), Some(DIGEST_LEN));
    }
}

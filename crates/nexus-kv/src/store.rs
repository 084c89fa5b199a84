//! The key-value storage trait shared by all backends.

use crate::{Error, Result};
use async_trait::async_trait;

/// Maximum length of a slot key in bytes.
pub const MAX_KEY_LENGTH: usize = 128;

/// A local key-value area made of named text slots.
///
/// Implementations must be `Send + Sync` so a single handle can be shared as
/// `Arc<dyn KeyValueStore>`. All methods take `&self`; backends use interior
/// mutability where they need it.
///
/// # Consistency
///
/// `set` replaces the whole value of a slot. A `get` issued after `set`
/// returns observes either the previous value or the new one in full, never a
/// partial write.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `None` if the slot has never been written or was removed.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the slot. Removing a missing slot succeeds.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Returns `true` if the slot currently holds a value.
    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

/// Validate a slot key.
///
/// Keys double as file names for [`FileStore`](crate::FileStore), so they are
/// restricted to `[A-Za-z0-9_.-]`, must be non-empty, at most
/// [`MAX_KEY_LENGTH`] bytes and may not start with a dot.
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] describing the first rule the key breaks.
pub fn validate_key(key: &str) -> Result<()> {
    let invalid = |reason| {
        Err(Error::InvalidKey {
            key: key.to_string(),
            reason,
        })
    };

    if key.is_empty() {
        return invalid("key cannot be empty");
    }

    if key.len() > MAX_KEY_LENGTH {
        return invalid("key is longer than 128 bytes");
    }

    if key.starts_with('.') {
        return invalid("key cannot start with a dot");
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return invalid("key may only contain letters, digits, '_', '-' and '.'");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("issues")]
    #[case::default_slot("nexus_issues_db_v1")]
    #[case::dotted("issues.v2")]
    #[case::hyphen("my-slot")]
    #[case::digits("42")]
    fn valid_keys_are_accepted(#[case] key: &str) {
        assert!(validate_key(key).is_ok());
    }

    #[rstest]
    #[case::empty("", "empty")]
    #[case::leading_dot(".hidden", "dot")]
    #[case::slash("a/b", "only contain")]
    #[case::backslash("a\\b", "only contain")]
    #[case::space("a b", "only contain")]
    #[case::parent("..", "dot")]
    fn invalid_keys_are_rejected(#[case] key: &str, #[case] expected: &str) {
        let err = validate_key(key).unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "expected '{expected}' in '{err}'"
        );
    }

    #[test]
    fn overlong_key_is_rejected() {
        let key = "k".repeat(MAX_KEY_LENGTH + 1);
        assert!(matches!(validate_key(&key), Err(Error::InvalidKey { .. })));

        let key = "k".repeat(MAX_KEY_LENGTH);
        assert!(validate_key(&key).is_ok());
    }
}

//! Hash-based ID generation for nexus issues.
//!
//! IDs are short base36 tokens derived from a SHA-256 digest of the issue's
//! content, the current time and a process-wide sequence number, so two
//! issues created in the same nanosecond with the same text still get
//! different inputs.
//!
//! # Features
//!
//! - **Fixed length**: 9 characters, growing to 12 only if every nonce collides
//! - **Collision resistant**: IDs already present in the collection are
//!   registered up front and skipped with nonce retry
//! - **Format**: lowercase alphanumeric (e.g., `"k3x9a0q2m"`)
//!
//! # Example
//!
//! ```
//! use nexus::id_generation::IdGenerator;
//!
//! let mut generator = IdGenerator::with_existing(["1", "2"]);
//! let id = generator.generate("My Issue Title", "Issue description").unwrap();
//!
//! assert_eq!(id.len(), 9);
//! assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
//! ```

use chrono::Utc;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::{debug, warn};

const BASE36_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const MAX_NONCE: u32 = 100;

/// Length of a freshly generated ID
pub const ID_LENGTH: usize = 9;

/// Length used once all nonces at [`ID_LENGTH`] have collided
pub const EXTENDED_ID_LENGTH: usize = 12;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Errors that can occur during ID generation
#[derive(Debug, Error)]
pub enum IdGenerationError {
    /// Unable to generate a unique ID after exhausting all nonces and length increases
    #[error("Unable to generate unique ID after {attempts} attempts")]
    CollisionExhausted {
        /// Number of candidates tried
        attempts: u32,
    },

    /// Invalid length parameter
    #[error("ID length must be between 1 and {EXTENDED_ID_LENGTH}")]
    InvalidLength,
}

/// Hash-based ID generator with collision detection
///
/// A generator is meant to live for one operation: build it from the IDs in
/// the current collection, generate, and drop it.
#[derive(Debug, Default)]
pub struct IdGenerator {
    existing_ids: HashSet<String>,
}

impl IdGenerator {
    /// Create a generator that knows about no existing IDs
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator that avoids every ID in `ids`
    pub fn with_existing<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            existing_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Register an existing ID to prevent collisions
    pub fn register_id(&mut self, id: impl Into<String>) {
        self.existing_ids.insert(id.into());
    }

    /// Generate a new unique ID
    ///
    /// The returned ID is registered, so calling `generate` repeatedly on one
    /// generator never yields the same ID twice.
    ///
    /// # Errors
    ///
    /// Returns an error if unable to generate a unique ID after trying all nonces.
    pub fn generate(&mut self, title: &str, description: &str) -> Result<String, IdGenerationError> {
        let entropy = current_entropy();
        self.generate_from_entropy(title, description, entropy)
    }

    fn generate_from_entropy(
        &mut self,
        title: &str,
        description: &str,
        entropy: u128,
    ) -> Result<String, IdGenerationError> {
        for nonce in 0..MAX_NONCE {
            let id = hash_id(title, description, entropy, nonce, ID_LENGTH)?;

            if !self.existing_ids.contains(&id) {
                if nonce > 0 {
                    debug!(nonce, "Generated unique ID after {} collision retries", nonce);
                }
                self.existing_ids.insert(id.clone());
                return Ok(id);
            }
        }

        warn!(
            max_nonce = MAX_NONCE,
            "All nonces exhausted, increasing ID length to {}", EXTENDED_ID_LENGTH
        );
        let longer_id = hash_id(title, description, entropy, 0, EXTENDED_ID_LENGTH)?;
        if self.existing_ids.insert(longer_id.clone()) {
            return Ok(longer_id);
        }

        Err(IdGenerationError::CollisionExhausted {
            attempts: MAX_NONCE + 1,
        })
    }
}

/// Time plus a process-wide sequence number, mixed into every hash.
fn current_entropy() -> u128 {
    let nanos = Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_else(|| Utc::now().timestamp_micros().saturating_mul(1000));
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    (u128::from(nanos.unsigned_abs()) << 64) | u128::from(sequence)
}

fn hash_id(
    title: &str,
    description: &str,
    entropy: u128,
    nonce: u32,
    length: usize,
) -> Result<String, IdGenerationError> {
    let content = format!("{title}|{description}|{entropy}|{nonce}");

    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let hash_bytes = hasher.finalize();

    encode_base36(&hash_bytes[..8], length)
}

/// Encode bytes as a base36 string of exactly `length` characters
///
/// Only the first 8 bytes contribute (they are folded into a `u64`), which
/// carries enough information for up to [`EXTENDED_ID_LENGTH`] characters.
///
/// # Errors
///
/// Returns an error if `length` is 0 or larger than [`EXTENDED_ID_LENGTH`].
fn encode_base36(bytes: &[u8], length: usize) -> Result<String, IdGenerationError> {
    if length == 0 || length > EXTENDED_ID_LENGTH {
        return Err(IdGenerationError::InvalidLength);
    }

    let mut n: u64 = 0;
    for &byte in bytes.iter().take(8) {
        n = n.wrapping_shl(8).wrapping_add(u64::from(byte));
    }

    let mut result = Vec::with_capacity(length);
    while result.len() < length {
        // n % 36 < 36, always a valid index
        #[allow(clippy::cast_possible_truncation)]
        let remainder = (n % 36) as usize;
        result.push(BASE36_CHARS[remainder]);
        n /= 36;
    }
    result.reverse();

    Ok(result.into_iter().map(char::from).collect())
}

/**
 * Password Hashing
 *
 * bcrypt-based one-way transform from a plaintext password to a stored
 * digest, and the matching verifier.
 *
 * # Digest Format
 *
 * The digest is the standard modular-crypt bcrypt string
 * (`$2b$<cost>$<22 char salt><31 char hash>`), so the salt and work factor
 * travel with it and verification needs nothing else.
 *
 * # Blocking
 *
 * Both operations cost roughly `2^cost` Blowfish key setups. Async callers
 * should go through `hash_blocking` / `verify_blocking`, which move the work
 * onto tokio's blocking pool.
 */

use bcrypt::BcryptError;

/// Password hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a freshly generated salt.
    ///
    /// Inputs of 72 bytes or more are rejected rather than silently
    /// truncated; the request layer enforces the same limit first.
    pub fn hash(&self, plaintext: &str) -> Result<String, BcryptError> {
        bcrypt::non_truncating_hash(plaintext, self.cost)
    }

    /// Check a plaintext password against a stored digest.
    ///
    /// A malformed or corrupt digest is a failed verification, not an error.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match bcrypt::verify(plaintext, digest) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Stored password digest could not be parsed: {}", e);
                false
            }
        }
    }

    /// `hash` on the blocking thread pool
    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, HashTaskError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await?
            .map_err(HashTaskError::from)
    }

    /// `verify` on the blocking thread pool
    pub async fn verify_blocking(
        &self,
        plaintext: String,
        digest: String,
    ) -> Result<bool, HashTaskError> {
        let hasher = *self;
        Ok(tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest)).await?)
    }
}

/// Failure of an offloaded hashing task
#[derive(Debug, thiserror::Error)]
pub enum HashTaskError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

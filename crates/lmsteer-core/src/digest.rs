//! Content digests for rule lists and steering configs
//!
//! Both digests are SHA-256 over the canonical JSON encoding, hex encoded.
//! They are order-sensitive: the same rules in a different order resolve
//! differently, so they must digest differently.

use sha2::{Digest, Sha256};

use crate::errors::Result;
use crate::model::{Rule, SteeringConfig};

/// Digest of an ordered rule list (ids included)
///
/// # Errors
///
/// Returns `SteerError::Serialization` if JSON encoding fails.
pub fn compute_rules_digest(rules: &[Rule]) -> Result<String> {
    let canonical = serde_json::to_string(rules)?;
    Ok(hash_string(&canonical))
}

/// Digest of a steering config
///
/// Used to tell whether re-resolving after an edit changed anything.
///
/// # Errors
///
/// Returns `SteerError::Serialization` if JSON encoding fails.
pub fn compute_config_digest(config: &SteeringConfig) -> Result<String> {
    let canonical = serde_json::to_string(config)?;
    Ok(hash_string(&canonical))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

impl SteeringConfig {
    /// See [`compute_config_digest`]
    ///
    /// # Errors
    ///
    /// Returns `SteerError::Serialization` if JSON encoding fails.
    pub fn digest(&self) -> Result<String> {
        compute_config_digest(self)
    }
}

//! Snapshot - Save/Load Generator State
//!
//! Captures everything needed to resume a generator mid-sequence.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator continues the exact sequence
//! - **Non-zero state**: an all-zero state word set is rejected on restore

use super::error::PrngError;
use serde::{Deserialize, Serialize};

/// Complete generator state snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Seed the state was originally derived from
    pub seed: u64,

    /// State words `[s0, s1, s2, s3]`
    pub state: [u64; 4],

    /// Output counter
    pub counter: u64,
}

impl GeneratorSnapshot {
    /// Check the snapshot can drive a generator
    pub fn validate(&self) -> Result<(), PrngError> {
        if self.state == [0; 4] {
            return Err(PrngError::InvalidSnapshot(
                "state words are all zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, PrngError> {
        serde_json::to_string(self).map_err(|e| {
            PrngError::SerializationError(format!("Snapshot serialization failed: {}", e))
        })
    }

    /// Deserialize from JSON and validate
    pub fn from_json(json: &str) -> Result<Self, PrngError> {
        let snapshot: Self = serde_json::from_str(json).map_err(|e| {
            PrngError::SerializationError(format!("Snapshot deserialization failed: {}", e))
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

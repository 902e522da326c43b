//! Reproducible record of a rendered noise sequence.
//!
//! A [`Seed`] captures everything needed to recreate a run: engine name,
//! frame dimensions, parameters, noise seed, and step count.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Reproducible record of a rendered noise sequence.
///
/// Two identical `Seed` values fed to the same engine produce bit-identical
/// frames, since the noise path uses integer arithmetic only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seed {
    pub engine: String,
    pub width: usize,
    pub height: usize,
    pub params: serde_json::Value,
    pub seed: u32,
    pub steps: usize,
}

impl Seed {
    /// Creates a new Seed with default params (`{}`) and steps (`0`).
    pub fn new(engine: &str, width: usize, height: usize, seed: u32) -> Self {
        Self {
            engine: engine.to_string(),
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            steps: 0,
        }
    }

    /// Validates that the seed has non-zero dimensions and that
    /// `width * height` does not overflow.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(EngineError::InvalidDimensions)?;
        Ok(())
    }
}

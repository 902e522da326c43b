//! Saving and replaying [`Seed`] files.
//!
//! A seed file is the pretty-printed JSON form of a [`Seed`]. Replaying it
//! rebuilds the engine and runs the recorded number of steps, yielding the
//! exact frame that was saved.

use crate::EngineKind;
use fixnoise_core::error::EngineError;
use fixnoise_core::{Engine, Seed};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Writes `seed` to `path` as pretty-printed JSON.
///
/// Returns `EngineError::Io` on serialization or write failure.
pub fn save_seed(seed: &Seed, path: &Path) -> Result<(), EngineError> {
    let json = serde_json::to_string_pretty(seed).map_err(|e| EngineError::Io(e.to_string()))?;
    fs::write(path, json).map_err(|e| EngineError::Io(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), engine = %seed.engine, "saved seed");
    Ok(())
}

/// Reads a seed file and validates its dimensions.
///
/// Returns `EngineError::Io` if the file cannot be read or parsed and
/// `EngineError::InvalidDimensions` if the recorded frame is empty.
pub fn load_seed(path: &Path) -> Result<Seed, EngineError> {
    let text =
        fs::read_to_string(path).map_err(|e| EngineError::Io(format!("{}: {e}", path.display())))?;
    let seed: Seed = serde_json::from_str(&text)
        .map_err(|e| EngineError::Io(format!("{}: {e}", path.display())))?;
    seed.validate()?;
    Ok(seed)
}

/// Builds the engine a seed describes and runs its recorded steps.
pub fn run(seed: &Seed) -> Result<EngineKind, EngineError> {
    seed.validate()?;
    let mut engine =
        EngineKind::from_name(&seed.engine, seed.width, seed.height, seed.seed, &seed.params)?;
    (0..seed.steps).try_for_each(|_| engine.step())?;
    debug!(engine = %seed.engine, steps = seed.steps, "replayed seed");
    Ok(engine)
}

#![deny(unsafe_code)]
//! Engine registry: maps engine names to implementations, converts frames
//! for display, and saves/replays [`Seed`](fixnoise_core::Seed) files.
//!
//! This crate sits between `fixnoise-core` (which defines the `Engine` trait)
//! and the engine crates (`fixnoise-fractal`). The CLI depends on this crate
//! to avoid duplicating dispatch logic.

pub mod pixel;
pub mod replay;

use fixnoise_core::error::EngineError;
use fixnoise_core::frame::Frame;
use fixnoise_core::sampler::ComputeInfo;
use fixnoise_core::Engine;
use serde_json::Value;

/// All available engine names.
const ENGINE_NAMES: &[&str] = &["fractal"];

/// Enumeration of all available engines.
///
/// Wraps each engine implementation and delegates `Engine` trait methods.
/// Use [`EngineKind::from_name`] for string-based construction (CLI, replay).
pub enum EngineKind {
    /// Animated fixed-point fractal gradient noise.
    Fractal(fixnoise_fractal::FractalEngine),
}

impl EngineKind {
    /// Constructs an engine by name.
    ///
    /// Returns `EngineError::UnknownEngine` if the name is not recognized.
    pub fn from_name(
        name: &str,
        width: usize,
        height: usize,
        seed: u32,
        params: &Value,
    ) -> Result<Self, EngineError> {
        match name {
            "fractal" => Ok(EngineKind::Fractal(
                fixnoise_fractal::FractalEngine::from_json(width, height, seed, params)?,
            )),
            _ => Err(EngineError::UnknownEngine(name.to_string())),
        }
    }

    /// Returns a slice of all recognized engine names.
    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }
}

impl Engine for EngineKind {
    fn step(&mut self) -> Result<(), EngineError> {
        match self {
            EngineKind::Fractal(e) => e.step(),
        }
    }

    fn frame(&self) -> &Frame {
        match self {
            EngineKind::Fractal(e) => e.frame(),
        }
    }

    fn params(&self) -> Value {
        match self {
            EngineKind::Fractal(e) => e.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            EngineKind::Fractal(e) => e.param_schema(),
        }
    }

    fn compute_info(&self) -> ComputeInfo {
        match self {
            EngineKind::Fractal(e) => e.compute_info(),
        }
    }
}

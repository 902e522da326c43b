#![deny(unsafe_code)]
//! Core types for the fixnoise deterministic noise generator.
//!
//! Provides fixed-point helpers (`SCALE`, `lerp`, `isqrt`), the seeded
//! `GradientField`, the multi-octave `FractalSampler` with its running
//! `ComputeInfo`, the `Frame` buffer handed to viewers, the `Engine` trait,
//! the `Seed` replay record, and parameter helpers.

pub mod engine;
pub mod error;
pub mod fixed;
pub mod frame;
pub mod gradient;
pub mod params;
pub mod sampler;
pub mod seed;

pub use engine::Engine;
pub use error::EngineError;
pub use fixed::{FixedScalar, SCALE};
pub use frame::Frame;
pub use gradient::{Gradient, GradientField};
pub use sampler::{ComputeInfo, FractalSampler, NoiseParams};
pub use seed::Seed;

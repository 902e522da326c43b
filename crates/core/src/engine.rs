//! The `Engine` trait that drives a frame buffer over time.
//!
//! The trait is object-safe so engines can be used as `dyn Engine` by the
//! registry and the CLI.

use crate::error::EngineError;
use crate::frame::Frame;
use crate::sampler::ComputeInfo;
use serde_json::Value;

/// A step-based producer of [`Frame`]s.
///
/// Each `step()` renders the next frame; a viewer reads it through
/// [`frame`](Engine::frame) and maps values in `[0, SCALE]` to pixels.
///
/// This trait is **object-safe**: you can use `Box<dyn Engine>` or `&dyn Engine`
/// for runtime polymorphism.
pub trait Engine {
    /// Render the next frame.
    fn step(&mut self) -> Result<(), EngineError>;

    /// The most recently rendered frame.
    fn frame(&self) -> &Frame;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;

    /// Running range of values produced so far.
    ///
    /// Engines without a sampler report [`ComputeInfo::EMPTY`].
    fn compute_info(&self) -> ComputeInfo {
        ComputeInfo::EMPTY
    }
}

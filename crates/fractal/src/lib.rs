#![deny(unsafe_code)]
//! Animated fractal gradient-noise engine.
//!
//! Fills a `width × height` [`Frame`] from a [`FractalSampler`], sampling
//! pixel `(px, py)` at `sample(px, py, z)`. Pixel indices are used directly
//! as fixed-point coordinates, so `scale` sets the feature size: with
//! `scale = 8` one lattice cell spans 128 pixels. Each `step()` advances a
//! frame counter and moves `z` forward by `z_step`, animating the field.

use fixnoise_core::error::EngineError;
use fixnoise_core::fixed::{FixedScalar, SCALE};
use fixnoise_core::frame::Frame;
use fixnoise_core::params::param_i64;
use fixnoise_core::sampler::{ComputeInfo, FractalSampler, NoiseParams, MAX_OCTAVES};
use fixnoise_core::Engine;
use serde_json::{json, Value};
use tracing::{debug, trace};

/// Default z advance per frame, in unscaled fixed-point units.
const DEFAULT_Z_STEP: i32 = 16;
/// Default spatial frequency for rendered frames.
const DEFAULT_SCALE: i32 = 8;

/// Parameters for the fractal engine: the sampler configuration plus the
/// per-frame z advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractalParams {
    pub noise: NoiseParams,
    /// Added to `z` on every step. Zero freezes the animation.
    pub z_step: i32,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            noise: NoiseParams {
                scale: DEFAULT_SCALE,
                ..NoiseParams::default()
            },
            z_step: DEFAULT_Z_STEP,
        }
    }
}

impl FractalParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    ///
    /// Reads `scale`, `octaves`, `min`, `max` and `z_step`.
    pub fn from_json(params: &Value) -> Self {
        let mut noise = NoiseParams::from_json(params);
        if params.get("scale").is_none() {
            noise.scale = DEFAULT_SCALE;
        }
        let z_step = i32::try_from(param_i64(params, "z_step", i64::from(DEFAULT_Z_STEP)))
            .unwrap_or(DEFAULT_Z_STEP);
        Self { noise, z_step }
    }
}

/// Fractal noise engine rendering one frame per step.
pub struct FractalEngine {
    sampler: FractalSampler,
    frame: Frame,
    z_step: i32,
    frame_index: usize,
}

impl FractalEngine {
    /// Creates an engine and renders frame 0 (`z = 0`).
    ///
    /// Returns `EngineError::InvalidDimensions` for an empty frame and
    /// `EngineError::InvalidParam` if the noise parameters are out of range
    /// or the frame is too large for `scale` and `octaves` without integer
    /// overflow.
    pub fn new(
        width: usize,
        height: usize,
        seed: u32,
        params: FractalParams,
    ) -> Result<Self, EngineError> {
        params.noise.validate()?;

        let far_x = i32::try_from(width.saturating_sub(1)).unwrap_or(i32::MAX);
        let far_y = i32::try_from(height.saturating_sub(1)).unwrap_or(i32::MAX);
        if !params.noise.fits(far_x, far_y, 0) {
            return Err(EngineError::InvalidParam {
                name: "scale".into(),
                reason: format!(
                    "{width}x{height} frame overflows scale {} with {} octaves",
                    params.noise.scale, params.noise.octaves
                ),
            });
        }
        let frame = Frame::new(width, height)?;

        debug!(width, height, seed, z_step = params.z_step, "created fractal engine");
        let mut engine = Self {
            sampler: FractalSampler::with_params(seed, params.noise),
            frame,
            z_step: params.z_step,
            frame_index: 0,
        };
        engine.render(0);
        Ok(engine)
    }

    /// Creates a fractal engine from a JSON params object.
    pub fn from_json(
        width: usize,
        height: usize,
        seed: u32,
        json_params: &Value,
    ) -> Result<Self, EngineError> {
        Self::new(width, height, seed, FractalParams::from_json(json_params))
    }

    /// Index of the frame currently held; `0` before the first step.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// The z coordinate of the current frame.
    pub fn z(&self) -> FixedScalar {
        self.z_for(self.frame_index).unwrap_or(FixedScalar::MAX)
    }

    fn z_for(&self, index: usize) -> Option<FixedScalar> {
        i64::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(i64::from(self.z_step)))
            .and_then(|z| FixedScalar::try_from(z).ok())
    }

    fn render(&mut self, z: FixedScalar) {
        let width = self.frame.width();
        let sampler = &mut self.sampler;
        for (i, cell) in self.frame.data_mut().iter_mut().enumerate() {
            let px = (i % width) as FixedScalar;
            let py = (i / width) as FixedScalar;
            *cell = sampler.sample(px, py, z);
        }
    }
}

impl Engine for FractalEngine {
    /// Advances the frame counter and renders the frame at the new `z`.
    ///
    /// Returns `EngineError::InvalidParam` once `z` leaves the range the
    /// sampler can evaluate without overflow; the current frame is kept.
    fn step(&mut self) -> Result<(), EngineError> {
        let next = self.frame_index + 1;
        let z = self
            .z_for(next)
            .filter(|&z| self.sampler.params().fits(0, 0, z))
            .ok_or_else(|| EngineError::InvalidParam {
                name: "z_step".into(),
                reason: format!("frame {next} leaves the safe z range"),
            })?;

        self.render(z);
        self.frame_index = next;
        trace!(frame = next, z, "rendered frame");
        Ok(())
    }

    fn frame(&self) -> &Frame {
        &self.frame
    }

    fn params(&self) -> Value {
        let p = self.sampler.params();
        json!({
            "scale": p.scale,
            "octaves": p.octaves,
            "min": p.min,
            "max": p.max,
            "z_step": self.z_step,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "scale": {
                "type": "integer",
                "default": DEFAULT_SCALE,
                "min": 1,
                "description": "Spatial frequency multiplier; one lattice cell spans SCALE / scale pixels"
            },
            "octaves": {
                "type": "integer",
                "default": 1,
                "min": 1,
                "max": MAX_OCTAVES,
                "description": "Number of fractal layers summed"
            },
            "min": {
                "type": "integer",
                "default": 0,
                "min": 0,
                "max": SCALE,
                "description": "Normalized values at or below this render as 0"
            },
            "max": {
                "type": "integer",
                "default": SCALE,
                "min": 0,
                "max": SCALE,
                "description": "Normalized values at or above this render as SCALE"
            },
            "z_step": {
                "type": "integer",
                "default": DEFAULT_Z_STEP,
                "description": "z advance per step()"
            }
        })
    }

    fn compute_info(&self) -> ComputeInfo {
        self.sampler.compute_info()
    }
}

//! Fractal gradient-noise sampler.
//!
//! [`FractalSampler`] evaluates single-octave gradient noise by blending the
//! eight corner contributions of a [`GradientField`] cell, sums several
//! octaves, and remaps the sum into a configured `[min, max]` window. All
//! arithmetic is integer fixed-point, so for a fixed seed and
//! [`NoiseParams`] the output is a pure function of the query point.
//!
//! # Precondition
//!
//! `|scale * x * 2^(octaves - 1)|`, the same for `y`, and `|scale * z|` must
//! stay below `i32::MAX - SCALE`. Exceeding it is not reported as an error:
//! debug builds assert, release builds wrap and return a wrong but bounded
//! value.

use crate::error::EngineError;
use crate::fixed::{lattice_floor, lerp, FixedScalar, SCALE};
use crate::gradient::GradientField;
use crate::params::{param_i64, param_u32};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Highest octave count accepted by [`NoiseParams::validate`].
pub const MAX_OCTAVES: u32 = 16;

/// Default spatial frequency multiplier.
const DEFAULT_SCALE: i32 = 1;
/// Default number of summed octaves.
const DEFAULT_OCTAVES: u32 = 1;
/// Default lower edge of the output window.
const DEFAULT_MIN: FixedScalar = 0;
/// Default upper edge of the output window.
const DEFAULT_MAX: FixedScalar = SCALE;

/// Per-call sampler configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseParams {
    /// Spatial frequency multiplier applied to every axis.
    pub scale: i32,
    /// Number of fractal layers summed.
    pub octaves: u32,
    /// Normalized values at or below this collapse to `0`.
    pub min: FixedScalar,
    /// Normalized values at or above this collapse to `SCALE`.
    pub max: FixedScalar,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            octaves: DEFAULT_OCTAVES,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl NoiseParams {
    pub fn new(scale: i32, octaves: u32, min: FixedScalar, max: FixedScalar) -> Self {
        Self {
            scale,
            octaves,
            min,
            max,
        }
    }

    /// Extracts parameters from a JSON object, falling back to defaults.
    ///
    /// Values that do not fit the target integer type also fall back.
    pub fn from_json(params: &Value) -> Self {
        let int = |name: &str, default: i32| {
            i32::try_from(param_i64(params, name, i64::from(default))).unwrap_or(default)
        };
        Self {
            scale: int("scale", DEFAULT_SCALE),
            octaves: param_u32(params, "octaves", DEFAULT_OCTAVES),
            min: int("min", DEFAULT_MIN),
            max: int("max", DEFAULT_MAX),
        }
    }

    /// Checks the parameters a caller may legitimately choose.
    ///
    /// Returns `EngineError::InvalidParam` if `scale < 1` or `octaves` is
    /// outside `1..=MAX_OCTAVES`. Any `min`/`max` pair is accepted.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.scale < 1 {
            return Err(EngineError::InvalidParam {
                name: "scale".into(),
                reason: format!("must be at least 1, got {}", self.scale),
            });
        }
        if !(1..=MAX_OCTAVES).contains(&self.octaves) {
            return Err(EngineError::InvalidParam {
                name: "octaves".into(),
                reason: format!("must be in 1..={MAX_OCTAVES}, got {}", self.octaves),
            });
        }
        Ok(())
    }

    /// Whether a query point satisfies the overflow precondition.
    pub fn fits(&self, x: FixedScalar, y: FixedScalar, z: FixedScalar) -> bool {
        let limit = i64::from(i32::MAX - SCALE);
        let within = |coord: FixedScalar, factor: Option<i64>| {
            factor
                .and_then(|f| i64::from(coord).checked_mul(f))
                .is_some_and(|v| v.abs() <= limit)
        };
        let spatial = 1i64
            .checked_shl(self.octaves.saturating_sub(1))
            .filter(|&m| m > 0)
            .and_then(|m| m.checked_mul(i64::from(self.scale)));
        let temporal = Some(i64::from(self.scale));
        within(x, spatial) && within(y, spatial) && within(z, temporal)
    }
}

/// Running range of every value a sampler has returned.
///
/// Starts empty and only ever widens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeInfo {
    pub min: FixedScalar,
    pub max: FixedScalar,
}

impl ComputeInfo {
    /// The state before any sample has been observed.
    pub const EMPTY: Self = Self {
        min: FixedScalar::MAX,
        max: FixedScalar::MIN,
    };

    /// True until the first value is observed.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Widens the range to include `value`.
    pub fn observe(&mut self, value: FixedScalar) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }
}

impl Default for ComputeInfo {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Clamp-and-remap of a normalized value against the `[min, max]` window.
///
/// Values at or below `min` become `0`, values at or above `max` become
/// `SCALE`. In between, the value is stretched by `(v - min) * SCALE /
/// (SCALE - min)`, whose denominator ignores `max`. The result
/// is clamped to `[0, SCALE]`, and a non-positive denominator yields `SCALE`.
pub fn remap(value: FixedScalar, min: FixedScalar, max: FixedScalar) -> FixedScalar {
    if value <= min {
        return 0;
    }
    if value >= max {
        return SCALE;
    }
    let span = i64::from(SCALE) - i64::from(min);
    if span <= 0 {
        return SCALE;
    }
    let stretched = (i64::from(value) - i64::from(min)) * i64::from(SCALE) / span;
    stretched.clamp(0, i64::from(SCALE)) as FixedScalar
}

/// Multi-octave fixed-point gradient noise with a configurable output window.
///
/// Holds one piece of mutable state, the running [`ComputeInfo`]. Use one
/// sampler per thread; sampling takes `&mut self`.
#[derive(Debug, Clone)]
pub struct FractalSampler {
    field: GradientField,
    params: NoiseParams,
    info: ComputeInfo,
}

impl FractalSampler {
    /// Creates a sampler with default parameters and empty statistics.
    pub fn new(seed: u32) -> Self {
        Self {
            field: GradientField::new(seed),
            params: NoiseParams::default(),
            info: ComputeInfo::EMPTY,
        }
    }

    /// Creates a sampler and applies `params`.
    pub fn with_params(seed: u32, params: NoiseParams) -> Self {
        let mut sampler = Self::new(seed);
        sampler.configure(params);
        sampler
    }

    /// Replaces the configuration used by subsequent calls.
    ///
    /// Never fails; run [`NoiseParams::validate`] at the input boundary.
    pub fn configure(&mut self, params: NoiseParams) {
        debug_assert!(params.octaves >= 1, "octaves must be at least 1");
        debug!(
            seed = self.field.seed(),
            scale = params.scale,
            octaves = params.octaves,
            min = params.min,
            max = params.max,
            "configured sampler"
        );
        self.params = params;
    }

    pub fn params(&self) -> NoiseParams {
        self.params
    }

    pub fn seed(&self) -> u32 {
        self.field.seed()
    }

    pub fn field(&self) -> &GradientField {
        &self.field
    }

    /// Range of every value returned by [`sample`](Self::sample) so far.
    pub fn compute_info(&self) -> ComputeInfo {
        self.info
    }

    /// Fractal noise at `(x, y, z)`, in `[0, SCALE]`.
    ///
    /// Octave `i` samples at `scale * 2^i` along x and y but at `scale`
    /// along z, and contributes `1 / 2^i` of its amplitude. The sum is
    /// normalized with `(sum + SCALE) / 2` and then [`remap`]ped.
    pub fn sample(&mut self, x: FixedScalar, y: FixedScalar, z: FixedScalar) -> FixedScalar {
        debug_assert!(
            self.params.fits(x, y, z),
            "({x}, {y}, {z}) overflows scale {} with {} octaves",
            self.params.scale,
            self.params.octaves
        );
        let scale = self.params.scale;
        let mut sum: FixedScalar = 0;
        for i in 0..self.params.octaves {
            let multiplier = 1 << i;
            let n = self.raw_value(scale * x * multiplier, scale * y * multiplier, scale * z);
            sum += n / multiplier;
        }

        let normalized = (sum + SCALE) / 2;
        let value = remap(normalized, self.params.min, self.params.max);
        self.info.observe(value);
        value
    }

    /// Single-octave noise at an already scaled point.
    ///
    /// Trilinear blend (x, then y, then z) of the eight corner
    /// contributions of the lattice cell containing the point. Equals the
    /// `(X0, Y0, Z0)` corner contribution exactly at a lattice point.
    pub fn raw_value(&self, x: FixedScalar, y: FixedScalar, z: FixedScalar) -> FixedScalar {
        let (x0, y0, z0) = (lattice_floor(x), lattice_floor(y), lattice_floor(z));
        let (x1, y1, z1) = (x0 + SCALE, y0 + SCALE, z0 + SCALE);
        let (wx, wy, wz) = (x - x0, y - y0, z - z0);

        let corner = |cx, cy, cz| self.field.dot_grid_gradient(cx, cy, cz, x, y, z);

        // lower z face
        let l0 = lerp(corner(x0, y0, z0), corner(x1, y0, z0), wx);
        let l1 = lerp(corner(x0, y1, z0), corner(x1, y1, z0), wx);
        let lower = lerp(l0, l1, wy);

        // upper z face
        let u0 = lerp(corner(x0, y0, z1), corner(x1, y0, z1), wx);
        let u1 = lerp(corner(x0, y1, z1), corner(x1, y1, z1), wx);
        let upper = lerp(u0, u1, wy);

        lerp(lower, upper, wz)
    }
}

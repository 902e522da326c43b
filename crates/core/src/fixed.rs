//! Fixed-point scalar arithmetic.
//!
//! Real numbers are represented as `i32` values scaled by [`SCALE`], so `1.0`
//! is `1024`. Only integer operations are used, which makes every result
//! bit-identical across platforms.

/// Fixed-point scaling factor: the integer representation of `1.0`.
pub const SCALE: i32 = 1024;

/// A real number scaled by [`SCALE`].
pub type FixedScalar = i32;

/// Fixed-point linear interpolation between `a` and `b` with weight `w`.
///
/// Computes `a - a*w/SCALE + b*w/SCALE` with truncating division. For
/// `w` in `[0, SCALE)` the result stays within one unit of
/// `[min(a, b), max(a, b)]`; `w = 0` returns `a` exactly.
pub fn lerp(a: FixedScalar, b: FixedScalar, w: FixedScalar) -> FixedScalar {
    debug_assert!(
        (0..SCALE).contains(&w),
        "lerp weight {w} outside [0, {SCALE})"
    );
    a - (a * w / SCALE) + (b * w / SCALE)
}

/// Snaps a coordinate down to the lattice point at or below it.
///
/// Uses floor semantics, so `-1` maps to `-SCALE` rather than `0`.
pub fn lattice_floor(coord: FixedScalar) -> FixedScalar {
    coord.div_euclid(SCALE) * SCALE
}

/// Integer square root: the largest `r` with `r * r <= value`.
///
/// Digit-by-digit method over base-4 probe bits; no floating point.
pub fn isqrt(value: u64) -> u64 {
    let mut rem = value;
    let mut root = 0u64;
    let mut bit = 1u64 << 62;

    while bit > rem {
        bit >>= 2;
    }
    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    root
}

/// Converts a value in `[0, SCALE]` to an 8-bit channel (`v * 255 / SCALE`).
///
/// Values outside the range are clamped first.
pub fn to_u8(value: FixedScalar) -> u8 {
    (value.clamp(0, SCALE) * 255 / SCALE) as u8
}

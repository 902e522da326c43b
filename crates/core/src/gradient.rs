//! Seeded lattice gradients with no stored state.
//!
//! A [`GradientField`] maps every lattice point to one of a fixed set of
//! edge-diagonal directions by hashing the cell indices with the instance
//! seed. Nothing is cached: the same `(seed, X, Y, Z)` always hashes to the
//! same table slot, so the field is reproducible without any mutable state.

use crate::fixed::{isqrt, FixedScalar, SCALE};

/// Per-axis hash multipliers. Large odd primes keep the axes decorrelated.
const PRIME_X: i32 = 501_125_321;
const PRIME_Y: i32 = 1_136_930_381;
const PRIME_Z: i32 = 1_720_413_743;

/// Odd multiplier for the avalanche step.
const AVALANCHE: u32 = 0x27d4_eb2d;

/// Mask selecting one of the 64 four-wide table slots.
const SLOT_MASK: u32 = 63 << 2;

/// Candidate gradient directions, four entries per slot: `(x, y, z, 0)`.
///
/// The twelve cube-edge directions repeated to fill 64 slots; the final row
/// mixes four of them. Every slot has magnitude `√2`.
#[rustfmt::skip]
const GRADIENTS_3D: [i8; 256] = [
    0, 1, 1, 0,  0,-1, 1, 0,  0, 1,-1, 0,  0,-1,-1, 0,
    1, 0, 1, 0, -1, 0, 1, 0,  1, 0,-1, 0, -1, 0,-1, 0,
    1, 1, 0, 0, -1, 1, 0, 0,  1,-1, 0, 0, -1,-1, 0, 0,
    0, 1, 1, 0,  0,-1, 1, 0,  0, 1,-1, 0,  0,-1,-1, 0,
    1, 0, 1, 0, -1, 0, 1, 0,  1, 0,-1, 0, -1, 0,-1, 0,
    1, 1, 0, 0, -1, 1, 0, 0,  1,-1, 0, 0, -1,-1, 0, 0,
    0, 1, 1, 0,  0,-1, 1, 0,  0, 1,-1, 0,  0,-1,-1, 0,
    1, 0, 1, 0, -1, 0, 1, 0,  1, 0,-1, 0, -1, 0,-1, 0,
    1, 1, 0, 0, -1, 1, 0, 0,  1,-1, 0, 0, -1,-1, 0, 0,
    0, 1, 1, 0,  0,-1, 1, 0,  0, 1,-1, 0,  0,-1,-1, 0,
    1, 0, 1, 0, -1, 0, 1, 0,  1, 0,-1, 0, -1, 0,-1, 0,
    1, 1, 0, 0, -1, 1, 0, 0,  1,-1, 0, 0, -1,-1, 0, 0,
    0, 1, 1, 0,  0,-1, 1, 0,  0, 1,-1, 0,  0,-1,-1, 0,
    1, 0, 1, 0, -1, 0, 1, 0,  1, 0,-1, 0, -1, 0,-1, 0,
    1, 1, 0, 0, -1, 1, 0, 0,  1,-1, 0, 0, -1,-1, 0, 0,
    1, 1, 0, 0,  0,-1, 1, 0, -1, 1, 0, 0,  0,-1,-1, 0,
];

/// A fixed-point gradient vector with components in `{-SCALE, 0, SCALE}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gradient {
    pub x: FixedScalar,
    pub y: FixedScalar,
    pub z: FixedScalar,
}

impl Gradient {
    /// Dot product with an offset vector, accumulated in 64 bits.
    pub fn dot(&self, dx: FixedScalar, dy: FixedScalar, dz: FixedScalar) -> i64 {
        i64::from(dx) * i64::from(self.x)
            + i64::from(dy) * i64::from(self.y)
            + i64::from(dz) * i64::from(self.z)
    }

    /// Squared length in fixed-point units squared.
    pub fn magnitude_squared(&self) -> u64 {
        self.dot(self.x, self.y, self.z).unsigned_abs()
    }

    /// Length in fixed-point units, rounded down.
    pub fn magnitude(&self) -> u64 {
        isqrt(self.magnitude_squared())
    }
}

/// Deterministic gradient lookup for integer lattice points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientField {
    seed: u32,
}

impl GradientField {
    /// Creates a gradient field for `seed`.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// The seed this field hashes with.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Hashes grid-cell indices (not lattice coordinates) with the seed.
    ///
    /// Prime products wrap in 32 bits; the avalanche step spreads low-bit
    /// correlations before the result is masked.
    pub fn hash(&self, ix: i32, iy: i32, iz: i32) -> u32 {
        let mut h = self.seed
            ^ ix.wrapping_mul(PRIME_X) as u32
            ^ iy.wrapping_mul(PRIME_Y) as u32
            ^ iz.wrapping_mul(PRIME_Z) as u32;
        h = h.wrapping_mul(AVALANCHE);
        h ^ (h >> 15)
    }

    /// The gradient assigned to the lattice point `(x, y, z)`.
    ///
    /// Coordinates are reduced to cell indices with floor division by
    /// [`SCALE`], so any integer input is valid.
    pub fn gradient_at(&self, x: FixedScalar, y: FixedScalar, z: FixedScalar) -> Gradient {
        let h = self.hash(
            x.div_euclid(SCALE),
            y.div_euclid(SCALE),
            z.div_euclid(SCALE),
        );
        let i = (h & SLOT_MASK) as usize;
        Gradient {
            x: i32::from(GRADIENTS_3D[i]) * SCALE,
            y: i32::from(GRADIENTS_3D[i + 1]) * SCALE,
            z: i32::from(GRADIENTS_3D[i + 2]) * SCALE,
        }
    }

    /// Contribution of corner `(cx, cy, cz)` to the point `(x, y, z)`:
    /// the corner gradient dotted with the corner-to-point offset, scaled
    /// back down by [`SCALE`].
    pub fn dot_grid_gradient(
        &self,
        cx: FixedScalar,
        cy: FixedScalar,
        cz: FixedScalar,
        x: FixedScalar,
        y: FixedScalar,
        z: FixedScalar,
    ) -> FixedScalar {
        let g = self.gradient_at(cx, cy, cz);
        (g.dot(x - cx, y - cy, z - cz) / i64::from(SCALE)) as FixedScalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIAGONAL: u64 = 2 * (SCALE as u64) * (SCALE as u64);

    #[test]
    fn every_table_slot_is_an_edge_diagonal() {
        for slot in GRADIENTS_3D.chunks_exact(4) {
            let g = Gradient {
                x: i32::from(slot[0]) * SCALE,
                y: i32::from(slot[1]) * SCALE,
                z: i32::from(slot[2]) * SCALE,
            };
            assert_eq!(slot[3], 0, "padding entry must be zero: {slot:?}");
            assert_eq!(g.magnitude_squared(), DIAGONAL, "slot {slot:?}");
        }
    }

    #[test]
    fn gradient_magnitude_is_root_two_scale() {
        let field = GradientField::new(7);
        let g = field.gradient_at(3 * SCALE, -5 * SCALE, 11 * SCALE);
        assert_eq!(g.magnitude(), 1448);
    }

    #[test]
    fn same_inputs_produce_same_gradient() {
        let a = GradientField::new(1234);
        let b = GradientField::new(1234);
        for i in -20..20 {
            let (x, y, z) = (i * SCALE, (i * 3) * SCALE, (7 - i) * SCALE);
            assert_eq!(a.gradient_at(x, y, z), b.gradient_at(x, y, z));
        }
    }

    #[test]
    fn points_inside_a_cell_share_the_cell_gradient() {
        let field = GradientField::new(99);
        let corner = field.gradient_at(2 * SCALE, 4 * SCALE, -3 * SCALE);
        let inside = field.gradient_at(2 * SCALE + 500, 4 * SCALE + 1023, -3 * SCALE + 1);
        assert_eq!(corner, inside);
    }

    #[test]
    fn negative_coordinates_use_floor_cells() {
        let field = GradientField::new(5);
        // -1 lies in cell -1, not cell 0.
        assert_eq!(field.gradient_at(-1, 0, 0), field.gradient_at(-SCALE, 0, 0));
        assert_eq!(field.hash(-1, 0, 0), {
            let h = 5u32 ^ (-1i32).wrapping_mul(PRIME_X) as u32;
            let h = h.wrapping_mul(AVALANCHE);
            h ^ (h >> 15)
        });
    }

    #[test]
    fn seed_changes_the_field() {
        let a = GradientField::new(1);
        let b = GradientField::new(2);
        let differs = (0..64).any(|i| {
            let p = (i * SCALE, (i / 8) * SCALE, 0);
            a.gradient_at(p.0, p.1, p.2) != b.gradient_at(p.0, p.1, p.2)
        });
        assert!(differs, "different seeds should not yield identical fields");
    }

    #[test]
    fn hash_of_origin_is_seed_avalanche() {
        let field = GradientField::new(0);
        assert_eq!(field.hash(0, 0, 0), 0);
        let field = GradientField::new(1);
        let h = AVALANCHE;
        assert_eq!(field.hash(0, 0, 0), h ^ (h >> 15));
    }

    #[test]
    fn hash_reference_values() {
        assert_eq!(GradientField::new(0).hash(1, 0, 0), 343_662_242);
        assert_eq!(GradientField::new(42).hash(3, -5, 11), 2_514_866_982);
        assert_eq!(GradientField::new(7).hash(-1, 2, -3), 309_904_340);
    }

    #[test]
    fn gradient_reference_values() {
        let g = |seed, x, y, z| {
            let g = GradientField::new(seed).gradient_at(x, y, z);
            (g.x / SCALE, g.y / SCALE, g.z / SCALE)
        };
        assert_eq!(g(0, 0, 0, 0), (0, 1, 1));
        assert_eq!(g(0, SCALE, 0, 0), (1, 0, 1));
        assert_eq!(g(42, 3 * SCALE, -5 * SCALE, 11 * SCALE), (-1, 1, 0));
        assert_eq!(g(7, -1, 2 * SCALE, -3000), (-1, 0, 1));
        assert_eq!(g(1234, 5000, 6000, 7000), (-1, 0, -1));
    }

    #[test]
    fn dot_grid_gradient_is_zero_at_its_own_corner() {
        let field = GradientField::new(42);
        for i in -5..5 {
            let c = (i * SCALE, (2 * i) * SCALE, (i + 1) * SCALE);
            assert_eq!(field.dot_grid_gradient(c.0, c.1, c.2, c.0, c.1, c.2), 0);
        }
    }

    #[test]
    fn dot_grid_gradient_matches_manual_dot() {
        let field = GradientField::new(42);
        let (cx, cy, cz) = (SCALE, 0, SCALE);
        let (x, y, z) = (SCALE + 300, 700, SCALE + 10);
        let g = field.gradient_at(cx, cy, cz);
        let expected = (i64::from(300 * g.x) + i64::from(700 * g.y) + i64::from(10 * g.z))
            / i64::from(SCALE);
        assert_eq!(
            field.dot_grid_gradient(cx, cy, cz, x, y, z),
            expected as FixedScalar
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn gradients_are_unit_components_and_non_zero(
                seed: u32,
                x: i32,
                y: i32,
                z: i32,
            ) {
                let g = GradientField::new(seed).gradient_at(x, y, z);
                for c in [g.x, g.y, g.z] {
                    prop_assert!(c == -SCALE || c == 0 || c == SCALE, "component {c}");
                }
                prop_assert_eq!(g.magnitude_squared(), DIAGONAL);
            }

            #[test]
            fn gradient_lookup_is_deterministic(seed: u32, x: i32, y: i32, z: i32) {
                let a = GradientField::new(seed).gradient_at(x, y, z);
                let b = GradientField::new(seed).gradient_at(x, y, z);
                prop_assert_eq!(a, b);
            }

            #[test]
            fn corner_contribution_is_bounded(
                seed: u32,
                cell in -1000_i32..1000,
                dx in 0_i32..=SCALE,
                dy in 0_i32..=SCALE,
                dz in 0_i32..=SCALE,
            ) {
                let field = GradientField::new(seed);
                let c = cell * SCALE;
                let v = field.dot_grid_gradient(c, c, c, c + dx, c + dy, c + dz);
                prop_assert!((-2 * SCALE..=2 * SCALE).contains(&v), "dot = {v}");
            }
        }
    }
}

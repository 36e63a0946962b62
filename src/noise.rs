// SPDX-License-Identifier: MPL-2.0
//! Seeded 2-D value noise backing the Noise screen.
//!
//! A lattice of pseudo-random values is hashed from a seed and sampled with
//! smoothstep interpolation between the four surrounding lattice points.
//! The field is deterministic for a given seed, so the screen renders the
//! same pattern until it is reseeded.

/// Smooth noise field over the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoiseField {
    seed: u64,
}

impl NoiseField {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Lattice value in `[0, 1)` at integer coordinates.
    fn lattice(&self, x: i64, y: i64) -> f32 {
        // SplitMix64-style mix of (seed, x, y).
        let mut h = self
            .seed
            .wrapping_add((x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
            .wrapping_add((y as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F));
        h ^= h >> 30;
        h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
        h ^= h >> 27;
        h = h.wrapping_mul(0x94D0_49BB_1331_11EB);
        h ^= h >> 31;
        (h >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Samples the field at `(x, y)`; the result lies in `[0, 1]`.
    #[must_use]
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let x0 = x.floor();
        let y0 = y.floor();
        let tx = smoothstep(x - x0);
        let ty = smoothstep(y - y0);
        let (xi, yi) = (x0 as i64, y0 as i64);

        let v00 = self.lattice(xi, yi);
        let v10 = self.lattice(xi + 1, yi);
        let v01 = self.lattice(xi, yi + 1);
        let v11 = self.lattice(xi + 1, yi + 1);

        let top = v00 + (v10 - v00) * tx;
        let bottom = v01 + (v11 - v01) * tx;
        top + (bottom - top) * ty
    }
}

/// Hermite interpolation weight for `t` in `[0, 1]`.
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

//! Multi-octave noise field over OpenSimplex noise.
//!
//! Each octave doubles the sampling frequency and halves the contribution of
//! the previous one, producing smooth fields with finer detail layered on top.

use noise::{NoiseFn, OpenSimplex};

/// Octave count used when none is given.
pub const DEFAULT_DEPTH: u32 = 4;

/// A deterministic 2D scalar field built from summed octaves of OpenSimplex noise.
///
/// The same `(seed, depth, x, y)` always yields the same value, across calls,
/// instances and processes.
#[derive(Clone)]
pub struct NoiseField {
    noise: OpenSimplex,
    seed: u32,
    depth: u32,
}

impl NoiseField {
    /// Create a field with the default depth of [`DEFAULT_DEPTH`] octaves.
    pub fn new(seed: u32) -> Self {
        Self::with_depth(seed, DEFAULT_DEPTH)
    }

    /// Create a field with an explicit octave count.
    ///
    /// A depth of 0 is accepted and yields a field that is 0 everywhere.
    pub fn with_depth(seed: u32, depth: u32) -> Self {
        Self {
            noise: OpenSimplex::new(seed),
            seed,
            depth,
        }
    }

    /// Sample the field at `(x, y)`.
    ///
    /// Octave `i` samples the primitive at `(x * 2^i, y * 2^i)`, remaps the
    /// `[-1, 1]` result to `[0, 1]` and divides it by `2^i`. The octave sum is
    /// halved. With the default depth the result lies roughly in `[0, 0.9375]`;
    /// see [`NoiseField::max_value`].
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut sum = 0.0;

        for i in 0..self.depth {
            let factor = 2f64.powi(i as i32);
            let raw = self.noise.get([x * factor, y * factor]);
            sum += (raw + 1.0) / 2.0 / factor;
        }

        sum / 2.0
    }

    /// Theoretical ceiling of [`NoiseField::sample`]: every octave at its maximum.
    ///
    /// The octave weights are not re-normalised, so this is below 1 for any depth.
    pub fn max_value(&self) -> f64 {
        let mut sum = 0.0;
        for i in 0..self.depth {
            sum += 1.0 / 2f64.powi(i as i32);
        }
        sum / 2.0
    }

    /// Seed the underlying noise primitive was built from.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Number of octaves summed per sample.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("seed", &self.seed)
            .field("depth", &self.depth)
            .finish()
    }
}

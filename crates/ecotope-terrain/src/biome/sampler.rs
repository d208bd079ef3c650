//! Environment sampler: four independent [`NoiseField`]s producing an
//! [`EnvironmentSample`] for any 2D world coordinate.
//!
//! Raw field values are mapped onto a signed scale centred on 0 before they
//! reach a biome, see [`to_signal_scale`].

use super::EnvironmentSample;
use crate::NoiseField;

/// Seed offsets keeping the four signals decorrelated under one world seed.
const HEAT_SEED_OFFSET: u32 = 0;
const MOISTURE_SEED_OFFSET: u32 = 0xDEAD_BEEF;
const GROUND_HARDNESS_SEED_OFFSET: u32 = 0x5EED_0001;
const HEIGHT_SEED_OFFSET: u32 = 0x9E37_79B9;

/// Maps a raw [`NoiseField`] value onto the signed signal scale.
///
/// `ceiling` is the field's [`NoiseField::max_value`]. Half the ceiling maps to
/// 0, zero maps to -1 and the ceiling maps to 1. A field without octaves has a
/// ceiling of 0 and maps to 0.
pub fn to_signal_scale(value: f64, ceiling: f64) -> f64 {
    if ceiling == 0.0 {
        return 0.0;
    }
    2.0 * value / ceiling - 1.0
}

/// Samples the four environmental signals at 2D world points.
pub struct EnvironmentSampler {
    heat: NoiseField,
    moisture: NoiseField,
    ground_hardness: NoiseField,
    height: NoiseField,
    /// Multiplier applied to world coordinates before sampling. Lower values
    /// produce broader biome zones.
    pub frequency: f64,
}

impl EnvironmentSampler {
    /// Creates a sampler whose four fields derive their seeds from `seed`.
    pub fn new(seed: u32, depth: u32, frequency: f64) -> Self {
        tracing::debug!(seed, depth, frequency, "building environment sampler");
        Self {
            heat: NoiseField::with_depth(seed.wrapping_add(HEAT_SEED_OFFSET), depth),
            moisture: NoiseField::with_depth(seed.wrapping_add(MOISTURE_SEED_OFFSET), depth),
            ground_hardness: NoiseField::with_depth(
                seed.wrapping_add(GROUND_HARDNESS_SEED_OFFSET),
                depth,
            ),
            height: NoiseField::with_depth(seed.wrapping_add(HEIGHT_SEED_OFFSET), depth),
            frequency,
        }
    }

    /// Samples every signal at world coordinate `(x, y)` on the signed scale.
    pub fn sample(&self, x: f64, y: f64) -> EnvironmentSample {
        let nx = x * self.frequency;
        let ny = y * self.frequency;
        let signal = |field: &NoiseField| to_signal_scale(field.sample(nx, ny), field.max_value());
        EnvironmentSample {
            heat: signal(&self.heat),
            moisture: signal(&self.moisture),
            ground_hardness: signal(&self.ground_hardness),
            height: signal(&self.height),
        }
    }

    /// Raw field values at `(x, y)`, before mapping onto the signed scale.
    pub fn sample_raw(&self, x: f64, y: f64) -> EnvironmentSample {
        let nx = x * self.frequency;
        let ny = y * self.frequency;
        EnvironmentSample {
            heat: self.heat.sample(nx, ny),
            moisture: self.moisture.sample(nx, ny),
            ground_hardness: self.ground_hardness.sample(nx, ny),
            height: self.height.sample(nx, ny),
        }
    }

    /// The field backing the heat signal.
    pub fn heat_field(&self) -> &NoiseField {
        &self.heat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampler_deterministic() {
        let a = EnvironmentSampler::new(42, 4, 0.01);
        let b = EnvironmentSampler::new(42, 4, 0.01);

        for &(x, y) in &[(0.0, 0.0), (150.0, -75.0), (1234.5, 987.6)] {
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
    }

    #[test]
    fn test_signals_are_decorrelated() {
        let sampler = EnvironmentSampler::new(7, 4, 0.05);
        let mut distinct = 0;
        for i in 0..32 {
            let s = sampler.sample(i as f64 * 13.0 + 0.5, i as f64 * 7.0 + 0.25);
            if s.heat != s.moisture
                && s.moisture != s.ground_hardness
                && s.ground_hardness != s.height
            {
                distinct += 1;
            }
        }
        assert!(distinct > 24, "signals track each other too closely: {distinct}/32");
    }

    #[test]
    fn test_heat_matches_direct_field() {
        let sampler = EnvironmentSampler::new(3, 4, 0.5);
        let field = NoiseField::with_depth(3, 4);
        let raw = field.sample(2.5, 3.5);

        assert_eq!(sampler.sample_raw(5.0, 7.0).heat, raw);
        assert_eq!(
            sampler.sample(5.0, 7.0).heat,
            to_signal_scale(raw, field.max_value())
        );
        assert_eq!(sampler.heat_field().seed(), 3);
    }

    #[test]
    fn test_signal_scale_is_centred_on_half_ceiling() {
        let ceiling = NoiseField::new(0).max_value();
        assert_eq!(to_signal_scale(ceiling / 2.0, ceiling), 0.0);
        assert_eq!(to_signal_scale(0.0, ceiling), -1.0);
        assert_eq!(to_signal_scale(ceiling, ceiling), 1.0);
        assert_eq!(to_signal_scale(0.3, 0.0), 0.0);
    }

    #[test]
    fn test_origin_maps_to_zero_for_default_depth() {
        // Every seed yields half the ceiling at the origin.
        for seed in [0, 1, 42, u32::MAX] {
            let sample = EnvironmentSampler::new(seed, 4, 0.01).sample(0.0, 0.0);
            assert_eq!(sample, EnvironmentSample::default(), "seed {seed}");
        }
    }

    #[test]
    fn test_samples_straddle_zero() {
        let sampler = EnvironmentSampler::new(2024, 4, 0.02);
        let heats: Vec<f64> = (0..400)
            .map(|i| sampler.sample((i % 20) as f64 * 17.0, (i / 20) as f64 * 11.0).heat)
            .collect();

        assert!(heats.iter().any(|&h| h < -0.1), "no cold samples");
        assert!(heats.iter().any(|&h| h > 0.1), "no hot samples");
        assert!(heats.iter().all(|&h| (-1.1..=1.1).contains(&h)));
    }

    #[test]
    fn test_zero_depth_samples_zero() {
        let sampler = EnvironmentSampler::new(9, 0, 1.0);
        assert_eq!(sampler.sample(4.0, 5.0), EnvironmentSample::default());
    }
}

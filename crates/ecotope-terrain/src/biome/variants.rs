//! Built-in biome variants.
//!
//! Signals are expected on the signed scale produced by
//! [`EnvironmentSampler`](super::EnvironmentSampler): roughly `[-1, 1]`, with 0
//! at the field's midpoint. Every range straddles 0 and every optimum sits at or
//! below it, where the tent score peaks. On each signal a variant with a higher
//! optimum carries a tighter upper bound, so at its own optimum every variant
//! outscores the others.
//!
//! Each variant owns its profile and palette and decides on its own which
//! palette entry a sample maps to.

use super::{
    Biome, BiomeCategory, BiomeColorSet, BiomeProfile, Color, EnvironmentSample, ScoringConfig,
    ValueRange, ValueRangeSet,
};

// ---------------------------------------------------------------------------
// Ocean
// ---------------------------------------------------------------------------

/// Open water below sea level.
#[derive(Clone, Debug)]
pub struct Ocean {
    profile: BiomeProfile,
    colors: BiomeColorSet,
}

impl Ocean {
    pub fn new() -> Self {
        Self {
            profile: BiomeProfile::new(
                ValueRangeSet {
                    heat: ValueRange::new(-0.8, 0.55, -0.5),
                    moisture: ValueRange::new(-0.4, 0.12, -0.1),
                    ground_hardness: ValueRange::new(-1.05, 0.7, -0.75),
                    height: ValueRange::new(-1.2, 0.9, -0.9),
                },
                ScoringConfig {
                    heat: 0.05,
                    moisture: 0.15,
                    ground_hardness: 0.05,
                    height: 0.75,
                },
                BiomeCategory::Aquatic,
            ),
            colors: BiomeColorSet {
                optimal: Color::rgb(20, 50, 180),
                too_cold: Color::rgb(170, 200, 230),
                too_hot: Color::rgb(30, 110, 160),
                too_dry: Color::rgb(60, 90, 150),
                too_moist: Color::rgb(10, 30, 120),
            },
        }
    }
}

impl Default for Ocean {
    fn default() -> Self {
        Self::new()
    }
}

impl Biome for Ocean {
    fn name(&self) -> &str {
        "ocean"
    }

    fn profile(&self) -> &BiomeProfile {
        &self.profile
    }

    fn colors(&self) -> &BiomeColorSet {
        &self.colors
    }

    /// Only temperature tints water: sea ice when cold, shallow turquoise when hot.
    fn color_from_values(&self, sample: &EnvironmentSample) -> Color {
        let heat = self.profile.ranges.heat;
        if sample.heat < heat.min {
            self.colors.too_cold
        } else if sample.heat > heat.max {
            self.colors.too_hot
        } else {
            self.colors.optimal
        }
    }
}

// ---------------------------------------------------------------------------
// Beach
// ---------------------------------------------------------------------------

/// Narrow sandy strip just above sea level.
#[derive(Clone, Debug)]
pub struct Beach {
    profile: BiomeProfile,
    colors: BiomeColorSet,
}

impl Beach {
    pub fn new() -> Self {
        Self {
            profile: BiomeProfile::new(
                ValueRangeSet {
                    heat: ValueRange::new(-0.45, 0.12, -0.15),
                    moisture: ValueRange::new(-0.6, 0.3, -0.3),
                    ground_hardness: ValueRange::new(-0.95, 0.55, -0.65),
                    height: ValueRange::new(-0.9, 0.55, -0.6),
                },
                ScoringConfig {
                    heat: 0.1,
                    moisture: 0.1,
                    ground_hardness: 0.2,
                    height: 0.6,
                },
                BiomeCategory::Coastal,
            ),
            colors: BiomeColorSet {
                optimal: Color::rgb(230, 210, 140),
                too_cold: Color::rgb(190, 185, 170),
                too_hot: Color::rgb(240, 200, 110),
                too_dry: Color::rgb(245, 225, 160),
                too_moist: Color::rgb(170, 150, 100),
            },
        }
    }
}

impl Default for Beach {
    fn default() -> Self {
        Self::new()
    }
}

impl Biome for Beach {
    fn name(&self) -> &str {
        "beach"
    }

    fn profile(&self) -> &BiomeProfile {
        &self.profile
    }

    fn colors(&self) -> &BiomeColorSet {
        &self.colors
    }

    /// Wet sand darkens first; heat only matters once moisture is in range.
    fn color_from_values(&self, sample: &EnvironmentSample) -> Color {
        let ranges = &self.profile.ranges;
        if sample.moisture > ranges.moisture.max {
            self.colors.too_moist
        } else if sample.moisture < ranges.moisture.min {
            self.colors.too_dry
        } else if sample.heat < ranges.heat.min {
            self.colors.too_cold
        } else if sample.heat > ranges.heat.max {
            self.colors.too_hot
        } else {
            self.colors.optimal
        }
    }
}

// ---------------------------------------------------------------------------
// Grassland
// ---------------------------------------------------------------------------

/// Temperate plains.
#[derive(Clone, Debug)]
pub struct Grassland {
    profile: BiomeProfile,
    colors: BiomeColorSet,
}

impl Grassland {
    pub fn new() -> Self {
        Self {
            profile: BiomeProfile::new(
                ValueRangeSet {
                    heat: ValueRange::new(-0.6, 0.3, -0.3),
                    moisture: ValueRange::new(-0.7, 0.4, -0.4),
                    ground_hardness: ValueRange::new(-0.7, 0.3, -0.4),
                    height: ValueRange::new(-0.65, 0.3, -0.35),
                },
                ScoringConfig::UNIFORM,
                BiomeCategory::Grassland,
            ),
            colors: BiomeColorSet {
                optimal: Color::rgb(100, 180, 60),
                too_cold: Color::rgb(140, 160, 110),
                too_hot: Color::rgb(180, 170, 60),
                too_dry: Color::rgb(170, 160, 90),
                too_moist: Color::rgb(60, 150, 70),
            },
        }
    }
}

impl Default for Grassland {
    fn default() -> Self {
        Self::new()
    }
}

impl Biome for Grassland {
    fn name(&self) -> &str {
        "grassland"
    }

    fn profile(&self) -> &BiomeProfile {
        &self.profile
    }

    fn colors(&self) -> &BiomeColorSet {
        &self.colors
    }

    /// Picks the signal that overshoots its bound the most, heat before moisture on ties.
    fn color_from_values(&self, sample: &EnvironmentSample) -> Color {
        let ranges = &self.profile.ranges;
        let cold = ranges.heat.min - sample.heat;
        let hot = sample.heat - ranges.heat.max;
        let dry = ranges.moisture.min - sample.moisture;
        let moist = sample.moisture - ranges.moisture.max;

        let candidates = [
            (cold, self.colors.too_cold),
            (hot, self.colors.too_hot),
            (dry, self.colors.too_dry),
            (moist, self.colors.too_moist),
        ];

        let mut best = (0.0, self.colors.optimal);
        for (excess, color) in candidates {
            if excess > best.0 {
                best = (excess, color);
            }
        }
        best.1
    }
}

// ---------------------------------------------------------------------------
// Forest
// ---------------------------------------------------------------------------

/// Temperate broadleaf forest.
#[derive(Clone, Debug)]
pub struct Forest {
    profile: BiomeProfile,
    colors: BiomeColorSet,
}

impl Forest {
    pub fn new() -> Self {
        Self {
            profile: BiomeProfile::new(
                ValueRangeSet {
                    heat: ValueRange::new(-0.7, 0.4, -0.4),
                    moisture: ValueRange::new(-0.5, 0.2, -0.2),
                    ground_hardness: ValueRange::new(-0.6, 0.2, -0.3),
                    height: ValueRange::new(-0.55, 0.2, -0.25),
                },
                ScoringConfig {
                    heat: 0.3,
                    moisture: 0.4,
                    ground_hardness: 0.1,
                    height: 0.2,
                },
                BiomeCategory::Forest,
            ),
            colors: BiomeColorSet {
                optimal: Color::rgb(30, 120, 30),
                too_cold: Color::rgb(40, 90, 60),
                too_hot: Color::rgb(90, 120, 30),
                too_dry: Color::rgb(110, 110, 50),
                too_moist: Color::rgb(20, 90, 50),
            },
        }
    }
}

impl Default for Forest {
    fn default() -> Self {
        Self::new()
    }
}

impl Biome for Forest {
    fn name(&self) -> &str {
        "forest"
    }

    fn profile(&self) -> &BiomeProfile {
        &self.profile
    }

    fn colors(&self) -> &BiomeColorSet {
        &self.colors
    }

    /// Drought shows before temperature stress.
    fn color_from_values(&self, sample: &EnvironmentSample) -> Color {
        let ranges = &self.profile.ranges;
        if sample.moisture < ranges.moisture.min {
            self.colors.too_dry
        } else if sample.heat < ranges.heat.min {
            self.colors.too_cold
        } else if sample.heat > ranges.heat.max {
            self.colors.too_hot
        } else if sample.moisture > ranges.moisture.max {
            self.colors.too_moist
        } else {
            self.colors.optimal
        }
    }
}

// ---------------------------------------------------------------------------
// Desert
// ---------------------------------------------------------------------------

/// Hot, arid lowland.
#[derive(Clone, Debug)]
pub struct Desert {
    profile: BiomeProfile,
    colors: BiomeColorSet,
}

impl Desert {
    pub fn new() -> Self {
        Self {
            profile: BiomeProfile::new(
                ValueRangeSet {
                    heat: ValueRange::new(-0.35, 0.05, -0.05),
                    moisture: ValueRange::new(-1.15, 0.9, -0.85),
                    ground_hardness: ValueRange::new(-0.8, 0.4, -0.5),
                    height: ValueRange::new(-0.75, 0.4, -0.45),
                },
                ScoringConfig {
                    heat: 0.45,
                    moisture: 0.4,
                    ground_hardness: 0.1,
                    height: 0.05,
                },
                BiomeCategory::Desert,
            ),
            colors: BiomeColorSet {
                optimal: Color::rgb(220, 190, 80),
                too_cold: Color::rgb(190, 170, 130),
                too_hot: Color::rgb(235, 160, 60),
                too_dry: Color::rgb(240, 215, 120),
                too_moist: Color::rgb(160, 160, 80),
            },
        }
    }
}

impl Default for Desert {
    fn default() -> Self {
        Self::new()
    }
}

impl Biome for Desert {
    fn name(&self) -> &str {
        "desert"
    }

    fn profile(&self) -> &BiomeProfile {
        &self.profile
    }

    fn colors(&self) -> &BiomeColorSet {
        &self.colors
    }

    /// Scrub appears as soon as moisture passes the optimum; sand bleaches when hotter than optimum.
    fn color_from_values(&self, sample: &EnvironmentSample) -> Color {
        let ranges = &self.profile.ranges;
        if sample.heat < ranges.heat.min {
            self.colors.too_cold
        } else if sample.moisture > ranges.moisture.optimum {
            self.colors.too_moist
        } else if sample.moisture < ranges.moisture.min {
            self.colors.too_dry
        } else if sample.heat > ranges.heat.optimum {
            self.colors.too_hot
        } else {
            self.colors.optimal
        }
    }
}

// ---------------------------------------------------------------------------
// Tundra
// ---------------------------------------------------------------------------

/// Cold, treeless plain.
#[derive(Clone, Debug)]
pub struct Tundra {
    profile: BiomeProfile,
    colors: BiomeColorSet,
}

impl Tundra {
    pub fn new() -> Self {
        Self {
            profile: BiomeProfile::new(
                ValueRangeSet {
                    heat: ValueRange::new(-1.1, 0.9, -0.8),
                    moisture: ValueRange::new(-0.9, 0.7, -0.6),
                    ground_hardness: ValueRange::new(-0.5, 0.12, -0.2),
                    height: ValueRange::new(-0.45, 0.12, -0.15),
                },
                ScoringConfig {
                    heat: 0.6,
                    moisture: 0.1,
                    ground_hardness: 0.2,
                    height: 0.1,
                },
                BiomeCategory::Tundra,
            ),
            colors: BiomeColorSet {
                optimal: Color::rgb(200, 210, 220),
                too_cold: Color::rgb(240, 245, 250),
                too_hot: Color::rgb(150, 160, 120),
                too_dry: Color::rgb(180, 175, 165),
                too_moist: Color::rgb(160, 180, 190),
            },
        }
    }
}

impl Default for Tundra {
    fn default() -> Self {
        Self::new()
    }
}

impl Biome for Tundra {
    fn name(&self) -> &str {
        "tundra"
    }

    fn profile(&self) -> &BiomeProfile {
        &self.profile
    }

    fn colors(&self) -> &BiomeColorSet {
        &self.colors
    }

    /// Anything colder than the optimum reads as permafrost.
    fn color_from_values(&self, sample: &EnvironmentSample) -> Color {
        let ranges = &self.profile.ranges;
        if sample.heat < ranges.heat.optimum {
            self.colors.too_cold
        } else if sample.heat > ranges.heat.max {
            self.colors.too_hot
        } else if sample.moisture > ranges.moisture.max {
            self.colors.too_moist
        } else if sample.moisture < ranges.moisture.min {
            self.colors.too_dry
        } else {
            self.colors.optimal
        }
    }
}

// ---------------------------------------------------------------------------
// Mountains
// ---------------------------------------------------------------------------

/// High, rocky terrain.
#[derive(Clone, Debug)]
pub struct Mountains {
    profile: BiomeProfile,
    colors: BiomeColorSet,
}

impl Mountains {
    pub fn new() -> Self {
        Self {
            profile: BiomeProfile::new(
                ValueRangeSet {
                    heat: ValueRange::new(-0.95, 0.7, -0.65),
                    moisture: ValueRange::new(-0.8, 0.55, -0.5),
                    ground_hardness: ValueRange::new(-0.35, 0.05, -0.05),
                    height: ValueRange::new(-0.35, 0.05, -0.05),
                },
                ScoringConfig {
                    heat: 0.05,
                    moisture: 0.05,
                    ground_hardness: 0.3,
                    height: 0.6,
                },
                BiomeCategory::Mountain,
            ),
            colors: BiomeColorSet {
                optimal: Color::rgb(130, 110, 90),
                too_cold: Color::rgb(245, 245, 250),
                too_hot: Color::rgb(150, 100, 70),
                too_dry: Color::rgb(150, 130, 110),
                too_moist: Color::rgb(100, 110, 100),
            },
        }
    }
}

impl Default for Mountains {
    fn default() -> Self {
        Self::new()
    }
}

impl Biome for Mountains {
    fn name(&self) -> &str {
        "mountains"
    }

    fn profile(&self) -> &BiomeProfile {
        &self.profile
    }

    fn colors(&self) -> &BiomeColorSet {
        &self.colors
    }

    /// Snow caps above the preferred height or below the heat range.
    fn color_from_values(&self, sample: &EnvironmentSample) -> Color {
        let ranges = &self.profile.ranges;
        if sample.height > ranges.height.optimum || sample.heat < ranges.heat.min {
            self.colors.too_cold
        } else if sample.heat > ranges.heat.max {
            self.colors.too_hot
        } else if sample.moisture > ranges.moisture.max {
            self.colors.too_moist
        } else if sample.moisture < ranges.moisture.min {
            self.colors.too_dry
        } else {
            self.colors.optimal
        }
    }
}

// ---------------------------------------------------------------------------
// Swamp
// ---------------------------------------------------------------------------

/// Waterlogged lowland.
#[derive(Clone, Debug)]
pub struct Swamp {
    profile: BiomeProfile,
    colors: BiomeColorSet,
}

impl Swamp {
    pub fn new() -> Self {
        Self {
            profile: BiomeProfile::new(
                ValueRangeSet {
                    heat: ValueRange::new(-0.5, 0.2, -0.2),
                    moisture: ValueRange::new(-0.35, 0.05, -0.05),
                    ground_hardness: ValueRange::new(-1.15, 0.9, -0.85),
                    height: ValueRange::new(-1.0, 0.7, -0.7),
                },
                ScoringConfig {
                    heat: 0.1,
                    moisture: 0.5,
                    ground_hardness: 0.25,
                    height: 0.15,
                },
                BiomeCategory::Wetland,
            ),
            colors: BiomeColorSet {
                optimal: Color::rgb(60, 90, 50),
                too_cold: Color::rgb(90, 110, 100),
                too_hot: Color::rgb(80, 100, 30),
                too_dry: Color::rgb(110, 100, 60),
                too_moist: Color::rgb(40, 70, 70),
            },
        }
    }
}

impl Default for Swamp {
    fn default() -> Self {
        Self::new()
    }
}

impl Biome for Swamp {
    fn name(&self) -> &str {
        "swamp"
    }

    fn profile(&self) -> &BiomeProfile {
        &self.profile
    }

    fn colors(&self) -> &BiomeColorSet {
        &self.colors
    }

    /// Hard ground reads as dried-out marsh regardless of moisture.
    fn color_from_values(&self, sample: &EnvironmentSample) -> Color {
        let ranges = &self.profile.ranges;
        if sample.moisture < ranges.moisture.min
            || sample.ground_hardness > ranges.ground_hardness.max
        {
            self.colors.too_dry
        } else if sample.moisture > ranges.moisture.max {
            self.colors.too_moist
        } else if sample.heat < ranges.heat.min {
            self.colors.too_cold
        } else if sample.heat > ranges.heat.max {
            self.colors.too_hot
        } else {
            self.colors.optimal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<Box<dyn Biome>> {
        vec![
            Box::new(Ocean::new()),
            Box::new(Beach::new()),
            Box::new(Grassland::new()),
            Box::new(Forest::new()),
            Box::new(Desert::new()),
            Box::new(Tundra::new()),
            Box::new(Mountains::new()),
            Box::new(Swamp::new()),
        ]
    }

    fn optimum_of(biome: &dyn Biome) -> EnvironmentSample {
        let ranges = &biome.profile().ranges;
        EnvironmentSample::new(
            ranges.heat.optimum,
            ranges.moisture.optimum,
            ranges.ground_hardness.optimum,
            ranges.height.optimum,
        )
    }

    #[test]
    fn test_profiles_are_well_formed() {
        for biome in all_variants() {
            let profile = biome.profile();
            assert!(
                (profile.scoring.weight_sum() - 1.0).abs() < 1e-9,
                "{} weights sum to {}",
                biome.name(),
                profile.scoring.weight_sum()
            );

            let ranges = [
                profile.ranges.heat,
                profile.ranges.moisture,
                profile.ranges.ground_hardness,
                profile.ranges.height,
            ];
            for range in ranges {
                assert!(
                    range.min < 0.0 && range.max > 0.0,
                    "{}: range does not straddle zero",
                    biome.name()
                );
                assert!(range.optimum <= 0.0, "{}: optimum above zero", biome.name());
                assert!(
                    range.min <= range.optimum && range.optimum <= range.max,
                    "{}: optimum outside range",
                    biome.name()
                );
            }
        }
    }

    #[test]
    fn test_optimum_is_in_range_and_optimal_color() {
        for biome in all_variants() {
            let sample = optimum_of(biome.as_ref());
            assert!(biome.values_in_range(&sample).is_in_range());
            assert!(biome.values_within_bounds(&sample).is_in_range());
            assert_eq!(
                biome.color_from_values(&sample),
                biome.colors().optimal,
                "{} should be optimal at its own optimum",
                biome.name()
            );
        }
    }

    #[test]
    fn test_scores_are_finite_across_signal_scale() {
        for biome in all_variants() {
            for step in -10..=10 {
                let v = step as f64 / 10.0;
                let score = biome.matching_score(&EnvironmentSample::new(v, v, v, v));
                assert!(score.is_finite(), "{} produced {score}", biome.name());
            }
        }
    }

    #[test]
    fn test_ocean_colors_follow_heat() {
        let ocean = Ocean::new();
        let mut sample = optimum_of(&ocean);
        sample.heat = -0.9;
        assert_eq!(ocean.color_from_values(&sample), ocean.colors().too_cold);
        sample.heat = 0.6;
        assert_eq!(ocean.color_from_values(&sample), ocean.colors().too_hot);
        sample.heat = -0.5;
        sample.moisture = -1.0;
        assert_eq!(ocean.color_from_values(&sample), ocean.colors().optimal);
    }

    #[test]
    fn test_grassland_picks_largest_excess() {
        let grassland = Grassland::new();
        let mut sample = optimum_of(&grassland);
        sample.heat = 0.35; // 0.05 above max
        sample.moisture = 0.8; // 0.4 above max
        assert_eq!(
            grassland.color_from_values(&sample),
            grassland.colors().too_moist
        );

        sample.moisture = -0.4;
        assert_eq!(grassland.color_from_values(&sample), grassland.colors().too_hot);
    }

    #[test]
    fn test_desert_moisture_past_optimum_is_scrub() {
        let desert = Desert::new();
        let mut sample = optimum_of(&desert);
        sample.moisture = -0.8;
        assert_eq!(desert.color_from_values(&sample), desert.colors().too_moist);
        sample.moisture = -1.2;
        assert_eq!(desert.color_from_values(&sample), desert.colors().too_dry);
        sample.heat = -0.4;
        assert_eq!(desert.color_from_values(&sample), desert.colors().too_cold);
    }

    #[test]
    fn test_mountains_snow_caps() {
        let mountains = Mountains::new();
        let mut sample = optimum_of(&mountains);
        sample.height = 0.1;
        assert_eq!(mountains.color_from_values(&sample), mountains.colors().too_cold);
    }

    #[test]
    fn test_swamp_hard_ground_is_dry() {
        let swamp = Swamp::new();
        let mut sample = optimum_of(&swamp);
        sample.ground_hardness = 0.95;
        assert_eq!(swamp.color_from_values(&sample), swamp.colors().too_dry);
    }

    #[test]
    fn test_variant_categories() {
        assert_eq!(Ocean::new().category(), BiomeCategory::Aquatic);
        assert_eq!(Beach::new().category(), BiomeCategory::Coastal);
        assert_eq!(Swamp::new().category(), BiomeCategory::Wetland);
        assert_eq!(Mountains::new().category(), BiomeCategory::Mountain);
    }

    #[test]
    fn test_each_variant_outscores_the_rest_at_its_optimum() {
        let variants = all_variants();
        for biome in &variants {
            let sample = optimum_of(biome.as_ref());
            let own = biome.matching_score(&sample);
            for other in variants.iter().filter(|o| o.name() != biome.name()) {
                let theirs = other.matching_score(&sample);
                assert!(
                    own > theirs + 0.1,
                    "{} ({own}) should beat {} ({theirs}) at its own optimum",
                    biome.name(),
                    other.name()
                );
            }
        }
    }

    #[test]
    fn test_score_peaks_at_the_optimum() {
        for biome in all_variants() {
            let optimum = optimum_of(biome.as_ref());
            let peak = biome.matching_score(&optimum);
            for delta in [-0.2, -0.05, -0.01, 0.01, 0.05, 0.2] {
                let mut nearby = optimum;
                nearby.heat += delta;
                nearby.moisture += delta;
                nearby.ground_hardness += delta;
                nearby.height += delta;
                let score = biome.matching_score(&nearby);
                assert!(
                    score < peak,
                    "{}: score {score} at offset {delta} exceeds peak {peak}",
                    biome.name()
                );
            }
        }
    }
}

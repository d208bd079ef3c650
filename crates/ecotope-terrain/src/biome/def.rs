//! Biome definition: the shared profile every variant carries and the
//! [`Biome`] trait the classifier queries.

use serde::{Deserialize, Serialize};

use super::{BiomeColorSet, Color, EnvironmentSample, RangeCheck, ScoringConfig, ValueRangeSet};

/// Broad kind a biome belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BiomeCategory {
    Aquatic,
    Coastal,
    Grassland,
    Forest,
    Desert,
    Tundra,
    Mountain,
    Wetland,
}

/// Preferred ranges, scoring weights and category of one biome.
///
/// Built once per variant and never mutated. Malformed profiles (weights not
/// summing to 1, optimum outside `[min, max]`, zero bounds) are accepted as
/// given and simply produce odd scores.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiomeProfile {
    pub ranges: ValueRangeSet,
    pub scoring: ScoringConfig,
    pub category: BiomeCategory,
}

impl BiomeProfile {
    /// Creates a profile.
    pub const fn new(
        ranges: ValueRangeSet,
        scoring: ScoringConfig,
        category: BiomeCategory,
    ) -> Self {
        Self {
            ranges,
            scoring,
            category,
        }
    }

    /// Weighted sum of the four per-signal scores.
    ///
    /// Not normalised: the result is only meaningful for ranking biomes
    /// against each other.
    pub fn matching_score(&self, sample: &EnvironmentSample) -> f64 {
        let ranges = &self.ranges;
        let weights = &self.scoring;

        let heat = ranges.heat.score(sample.heat) * weights.heat;
        let moisture = ranges.moisture.score(sample.moisture) * weights.moisture;
        let ground_hardness =
            ranges.ground_hardness.score(sample.ground_hardness) * weights.ground_hardness;
        let height = ranges.height.score(sample.height) * weights.height;

        heat + moisture + ground_hardness + height
    }

    /// Permissive check: each signal must satisfy `value >= min || value <= max`.
    pub fn values_in_range(&self, sample: &EnvironmentSample) -> RangeCheck {
        let ranges = &self.ranges;
        RangeCheck::from_passed(
            ranges.heat.admits(sample.heat)
                && ranges.moisture.admits(sample.moisture)
                && ranges.ground_hardness.admits(sample.ground_hardness)
                && ranges.height.admits(sample.height),
        )
    }

    /// Strict check: each signal must lie inside `[min, max]`.
    ///
    /// Not used by [`BiomeProfile::values_in_range`]; offered for callers that
    /// want interval semantics.
    pub fn values_within_bounds(&self, sample: &EnvironmentSample) -> RangeCheck {
        let ranges = &self.ranges;
        RangeCheck::from_passed(
            ranges.heat.contains(sample.heat)
                && ranges.moisture.contains(sample.moisture)
                && ranges.ground_hardness.contains(sample.ground_hardness)
                && ranges.height.contains(sample.height),
        )
    }
}

/// A concrete biome variant.
///
/// Implementors supply their profile, palette and color rule; scoring and range
/// checks are provided on top of the profile.
pub trait Biome: Send + Sync {
    /// Unique, human-readable name (e.g. `"desert"`).
    fn name(&self) -> &str;

    /// Ranges, weights and category.
    fn profile(&self) -> &BiomeProfile;

    /// Palette the variant draws from.
    fn colors(&self) -> &BiomeColorSet;

    /// Display color for a sample, chosen by the variant's own rule.
    fn color_from_values(&self, sample: &EnvironmentSample) -> Color;

    /// Kind of biome, taken from the profile.
    fn category(&self) -> BiomeCategory {
        self.profile().category
    }

    /// See [`BiomeProfile::matching_score`].
    fn matching_score(&self, sample: &EnvironmentSample) -> f64 {
        self.profile().matching_score(sample)
    }

    /// See [`BiomeProfile::values_in_range`].
    fn values_in_range(&self, sample: &EnvironmentSample) -> RangeCheck {
        self.profile().values_in_range(sample)
    }

    /// See [`BiomeProfile::values_within_bounds`].
    fn values_within_bounds(&self, sample: &EnvironmentSample) -> RangeCheck {
        self.profile().values_within_bounds(sample)
    }
}

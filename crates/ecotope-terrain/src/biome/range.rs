//! Environmental samples, per-signal value ranges and scoring weights.

use serde::{Deserialize, Serialize};

/// The four environmental signals evaluated at a single world point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSample {
    /// Heat signal.
    pub heat: f64,
    /// Moisture signal.
    pub moisture: f64,
    /// Ground hardness signal.
    pub ground_hardness: f64,
    /// Height signal.
    pub height: f64,
}

impl EnvironmentSample {
    /// Creates a sample from its four signals.
    pub fn new(heat: f64, moisture: f64, ground_hardness: f64, height: f64) -> Self {
        Self {
            heat,
            moisture,
            ground_hardness,
            height,
        }
    }
}

/// Preferred band of one signal: `min`, `max` and the `optimum` between them.
///
/// `optimum` is expected to lie in `[min, max]`, and neither bound should be 0
/// when the range is used for scoring. Neither is checked.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Preferred value, splitting the two scoring slopes.
    pub optimum: f64,
}

impl ValueRange {
    /// Creates a range from `(min, max, optimum)`.
    pub const fn new(min: f64, max: f64, optimum: f64) -> Self {
        Self { min, max, optimum }
    }

    /// Permissive membership test: `value >= min || value <= max`.
    ///
    /// Only fails when `value` falls strictly between an inverted pair of
    /// bounds (`max < value < min`).
    pub fn admits(&self, value: f64) -> bool {
        value >= self.min || value <= self.max
    }

    /// Strict membership test: `min <= value && value <= max`.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Linear score of `value` against this range.
    ///
    /// Below the optimum the slope is `1 / |min|`, at or above it `-1 / |max|`;
    /// both lines pass through 1 at `value == 0`. The score is taken at
    /// `value` itself, not at its distance from the optimum. A zero bound on
    /// the evaluated side produces a non-finite score.
    pub fn score(&self, value: f64) -> f64 {
        if value < self.optimum {
            (1.0 / self.min.abs()) * value + 1.0
        } else {
            -(1.0 / self.max.abs()) * value + 1.0
        }
    }
}

/// One [`ValueRange`] per environmental signal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRangeSet {
    pub heat: ValueRange,
    pub moisture: ValueRange,
    pub ground_hardness: ValueRange,
    pub height: ValueRange,
}

/// Relevance weight of each signal in a biome's matching score.
///
/// The weights are meant to be non-negative and sum to 1. This is a caller
/// precondition; nothing normalises or rejects other values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub heat: f64,
    pub moisture: f64,
    pub ground_hardness: f64,
    pub height: f64,
}

impl ScoringConfig {
    /// Equal weight for every signal.
    pub const UNIFORM: Self = Self {
        heat: 0.25,
        moisture: 0.25,
        ground_hardness: 0.25,
        height: 0.25,
    };

    /// Sum of the four weights, for callers that want to verify the precondition.
    pub fn weight_sum(&self) -> f64 {
        self.heat + self.moisture + self.ground_hardness + self.height
    }
}

/// Outcome of a range check against a biome's [`ValueRangeSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeCheck {
    /// Every signal passed.
    InRange,
    /// At least one signal failed.
    OutOfRange,
}

impl RangeCheck {
    /// Integer sentinel reported for out-of-range samples.
    pub const OUT_OF_RANGE_SENTINEL: i32 = -1;

    /// Returns `Some(-1)` when out of range and `None` otherwise.
    pub fn sentinel(self) -> Option<i32> {
        match self {
            RangeCheck::InRange => None,
            RangeCheck::OutOfRange => Some(Self::OUT_OF_RANGE_SENTINEL),
        }
    }

    /// Returns `true` for [`RangeCheck::InRange`].
    pub fn is_in_range(self) -> bool {
        self == RangeCheck::InRange
    }

    pub(crate) fn from_passed(passed: bool) -> Self {
        if passed {
            RangeCheck::InRange
        } else {
            RangeCheck::OutOfRange
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_is_inclusive_or() {
        let inverted = ValueRange::new(5.0, 3.0, 4.0);
        assert!(!inverted.admits(4.0));
        assert!(inverted.admits(6.0));
        assert!(inverted.admits(2.0));
        assert!(inverted.admits(5.0));
        assert!(inverted.admits(3.0));

        // An ordinary range admits everything, including values outside it.
        let ordinary = ValueRange::new(0.0, 1.0, 0.5);
        assert!(ordinary.admits(-100.0));
        assert!(ordinary.admits(100.0));
    }

    #[test]
    fn test_contains_is_closed_interval() {
        let range = ValueRange::new(0.0, 1.0, 0.5);
        assert!(range.contains(0.0));
        assert!(range.contains(1.0));
        assert!(!range.contains(-0.01));
        assert!(!range.contains(1.01));
    }

    #[test]
    fn test_score_tent_peaks_at_zero_for_symmetric_range() {
        let range = ValueRange::new(-10.0, 10.0, 0.0);
        assert_eq!(range.score(0.0), 1.0);
        assert_eq!(range.score(-10.0), 0.0);
        assert_eq!(range.score(10.0), 0.0);
        assert_eq!(range.score(-5.0), 0.5);
        assert_eq!(range.score(5.0), 0.5);
    }

    #[test]
    fn test_score_uses_value_not_distance_from_optimum() {
        let range = ValueRange::new(2.0, 8.0, 5.0);
        // Below the optimum: value / |min| + 1.
        assert_eq!(range.score(4.0), 3.0);
        // At or above: -value / |max| + 1.
        assert_eq!(range.score(5.0), 1.0 - 5.0 / 8.0);
        assert_eq!(range.score(8.0), 0.0);
    }

    #[test]
    fn test_score_zero_bound_is_not_finite() {
        let zero_min = ValueRange::new(0.0, 10.0, 5.0);
        assert!(!zero_min.score(1.0).is_finite());

        let zero_max = ValueRange::new(-10.0, 0.0, -5.0);
        assert!(!zero_max.score(1.0).is_finite());
        assert!(zero_max.score(0.0).is_nan());
    }

    #[test]
    fn test_range_check_sentinel() {
        assert_eq!(RangeCheck::InRange.sentinel(), None);
        assert_eq!(RangeCheck::OutOfRange.sentinel(), Some(-1));
        assert!(RangeCheck::from_passed(true).is_in_range());
        assert!(!RangeCheck::from_passed(false).is_in_range());
    }

    #[test]
    fn test_uniform_weights_sum_to_one() {
        assert_eq!(ScoringConfig::UNIFORM.weight_sum(), 1.0);
    }
}

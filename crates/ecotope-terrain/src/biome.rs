//! Biome model: value ranges, scoring, built-in variants, catalog and
//! noise-driven environment sampling.
//!
//! A biome is scored against the four environmental signals of a point
//! (heat, moisture, ground hardness, height). Ranking the scores is up to the
//! caller.

mod color;
mod def;
mod range;
mod registry;
mod sampler;
mod variants;

pub use color::{BiomeColorSet, Color};
pub use def::{Biome, BiomeCategory, BiomeProfile};
pub use range::{EnvironmentSample, RangeCheck, ScoringConfig, ValueRange, ValueRangeSet};
pub use registry::{BiomeCatalog, BiomeId, CatalogError};
pub use sampler::{EnvironmentSampler, to_signal_scale};
pub use variants::{Beach, Desert, Forest, Grassland, Mountains, Ocean, Swamp, Tundra};

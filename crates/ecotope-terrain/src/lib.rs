//! Procedural biome classification: multi-octave noise fields and biome
//! matching scores over heat, moisture, ground hardness and height.

mod noise_field;

pub mod biome;

pub use biome::{
    Biome, BiomeCatalog, BiomeCategory, BiomeColorSet, BiomeId, BiomeProfile, CatalogError,
    Color, EnvironmentSample, EnvironmentSampler, RangeCheck, ScoringConfig, ValueRange,
    ValueRangeSet, to_signal_scale,
};
pub use noise_field::{DEFAULT_DEPTH, NoiseField};

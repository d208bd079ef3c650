//! Display colors and per-biome color palettes.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the color as an `[r, g, b]` array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The five colors a biome variant chooses from when coloring a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiomeColorSet {
    /// Conditions match the biome.
    pub optimal: Color,
    /// Heat below the biome's range.
    pub too_cold: Color,
    /// Heat above the biome's range.
    pub too_hot: Color,
    /// Moisture below the biome's range.
    pub too_dry: Color,
    /// Moisture above the biome's range.
    pub too_moist: Color,
}

//! Biome catalog: maps [`BiomeId`] to a boxed [`Biome`] with name-based lookup.

use hashbrown::HashMap;

use super::{
    Beach, Biome, Desert, EnvironmentSample, Forest, Grassland, Mountains, Ocean, Swamp, Tundra,
};

/// Unique identifier for a catalog entry, assigned in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BiomeId(pub u16);

/// Errors that can occur when registering biomes.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A biome with this name is already registered.
    #[error("duplicate biome name: {0}")]
    DuplicateName(String),
}

/// Immutable-after-setup collection of candidate biomes.
///
/// The catalog only enumerates and scores candidates; choosing among them is
/// left to the caller.
pub struct BiomeCatalog {
    biomes: Vec<Box<dyn Biome>>,
    name_to_id: HashMap<String, BiomeId>,
}

impl BiomeCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            biomes: Vec::new(),
            name_to_id: HashMap::new(),
        }
    }

    /// Catalog holding every built-in variant.
    ///
    /// # Panics
    ///
    /// Panics if two built-in variants share a name.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        let builtins: [Box<dyn Biome>; 8] = [
            Box::new(Ocean::new()),
            Box::new(Beach::new()),
            Box::new(Grassland::new()),
            Box::new(Forest::new()),
            Box::new(Desert::new()),
            Box::new(Tundra::new()),
            Box::new(Mountains::new()),
            Box::new(Swamp::new()),
        ];
        for biome in builtins {
            catalog
                .register(biome)
                .expect("built-in biome names are distinct");
        }
        catalog
    }

    /// Registers a biome, returning its assigned [`BiomeId`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateName`] if a biome with the same name exists.
    pub fn register(&mut self, biome: Box<dyn Biome>) -> Result<BiomeId, CatalogError> {
        let name = biome.name().to_owned();
        if self.name_to_id.contains_key(&name) {
            return Err(CatalogError::DuplicateName(name));
        }
        let id = BiomeId(self.biomes.len() as u16);
        tracing::debug!(biome = %name, id = id.0, category = ?biome.category(), "registered biome");
        self.name_to_id.insert(name, id);
        self.biomes.push(biome);
        Ok(id)
    }

    /// Returns the biome for the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn get(&self, id: BiomeId) -> &dyn Biome {
        self.biomes[id.0 as usize].as_ref()
    }

    /// Looks up a biome ID by name.
    pub fn lookup_by_name(&self, name: &str) -> Option<BiomeId> {
        self.name_to_id.get(name).copied()
    }

    /// Iterates over all entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (BiomeId, &dyn Biome)> {
        self.biomes
            .iter()
            .enumerate()
            .map(|(i, biome)| (BiomeId(i as u16), biome.as_ref()))
    }

    /// Matching score of every entry for `sample`, in registration order.
    pub fn scores(&self, sample: &EnvironmentSample) -> Vec<(BiomeId, f64)> {
        self.iter()
            .map(|(id, biome)| (id, biome.matching_score(sample)))
            .collect()
    }

    /// Returns the number of registered biomes.
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    /// Returns `true` if no biomes are registered.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}

impl Default for BiomeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

use crate::types::{PresetName, PresetTable};
use crate::Error;
use flate2::read::GzDecoder;
use log::{debug, warn};

/// A fixed, compiled-in table of gzip-compressed datasets, keyed by identifier.
///
/// Each component type owns one registry (see `CANONICAL_PRESET_REGISTRY` and
/// `FREQUENCY_PRESET_REGISTRY`). Registries are never mutated at runtime.
#[derive(Clone, Copy)]
pub struct PresetRegistry {
    kind: &'static str,
    presets: PresetTable,
}

impl PresetRegistry {
    /// Creates a registry over `presets`, which must be sorted by identifier.
    pub const fn new(kind: &'static str, presets: PresetTable) -> Self {
        PresetRegistry { kind, presets }
    }

    /// Identifiers of every preset in this registry, in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let presets: PresetTable = self.presets;

        presets.iter().map(|(name, _)| *name)
    }

    pub fn contains(&self, name: &PresetName) -> bool {
        self.find(name).is_some()
    }

    /// Opens a decompressing stream over the preset named `name`.
    ///
    /// Lookup is exact and case-sensitive, and the identifier carries no file extension.
    ///
    /// # Errors
    ///
    /// Returns `Error::PresetNotFound` if no preset with that identifier exists.
    pub fn open(&self, name: &PresetName) -> Result<GzDecoder<&'static [u8]>, Error> {
        match self.find(name) {
            Some(compressed_bytes) => {
                debug!(
                    "Opening {} preset {:?} ({} compressed bytes)",
                    self.kind,
                    name,
                    compressed_bytes.len()
                );

                Ok(GzDecoder::new(compressed_bytes))
            }
            None => {
                warn!("Unknown {} preset requested: {:?}", self.kind, name);

                Err(Error::PresetNotFound(name.to_string()))
            }
        }
    }

    fn find(&self, name: &PresetName) -> Option<&'static [u8]> {
        self.presets
            .binary_search_by(|(identifier, _)| (*identifier).cmp(name))
            .ok()
            .map(|index| self.presets[index].1)
    }
}

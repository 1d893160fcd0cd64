mod config;
pub use config::{DEFAULT_CANONICAL_RESOLVER_CONFIG, DEFAULT_FREQUENCY_LIST_CONFIG};
mod constants;
pub use constants::{CANONICAL_PRESET_REGISTRY, FREQUENCY_PRESET_REGISTRY};
pub mod models;
pub use models::{
    CanonicalResolver, CanonicalResolverConfig, Error, FrequencyList, FrequencyListConfig,
    PresetRegistry,
};
pub mod types;
pub use types::{Alias, CanonicalName, Frequency, Name, NameRef, PresetName};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

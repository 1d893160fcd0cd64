pub mod canonical_resolver;
pub use canonical_resolver::CanonicalResolver;

pub mod config;
pub use config::{CanonicalResolverConfig, FrequencyListConfig};

pub mod error;
pub use error::Error;

pub mod frequency_list;
pub use frequency_list::FrequencyList;

pub mod preset_registry;
pub use preset_registry::PresetRegistry;

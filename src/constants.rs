use crate::models::PresetRegistry;

// Generated by the build script from `presets/`
mod embedded {
    include!(concat!(env!("OUT_DIR"), "/preset_registry.rs"));
}

/// Embedded alias datasets for `CanonicalResolver::from_preset`.
pub const CANONICAL_PRESET_REGISTRY: PresetRegistry =
    PresetRegistry::new("canonical", embedded::CANONICAL_PRESETS);

/// Embedded frequency datasets for `FrequencyList::from_preset`.
pub const FREQUENCY_PRESET_REGISTRY: PresetRegistry =
    PresetRegistry::new("frequency", embedded::FREQUENCY_PRESETS);

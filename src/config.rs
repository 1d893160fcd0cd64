use crate::models::{CanonicalResolverConfig, FrequencyListConfig};

pub const DEFAULT_CANONICAL_RESOLVER_CONFIG: &CanonicalResolverConfig =
    &CanonicalResolverConfig {
        delimiter: ',',
        skip_empty_lines: true,
    };

pub const DEFAULT_FREQUENCY_LIST_CONFIG: &FrequencyListConfig = &FrequencyListConfig {
    delimiter: b',',
    quote: b'"',
};

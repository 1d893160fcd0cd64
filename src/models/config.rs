/// Parsing options for the line-oriented canonical name format.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalResolverConfig {
    /// Separates the canonical name from its aliases, and aliases from each other.
    pub delimiter: char,
    /// When `false`, an empty line is rejected as a record with a single field.
    pub skip_empty_lines: bool,
}

/// Parsing options for the two-column frequency CSV format.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyListConfig {
    /// Separates the name column from the frequency column.
    pub delimiter: u8,
    /// Encloses fields that contain the delimiter.
    pub quote: u8,
}

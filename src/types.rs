// Types listed here are either shared across multiple files and/or exposed via the library.

/// A name as it appears in a dataset, taken verbatim (no case or whitespace normalization).
pub type Name = String;

/// Borrowed view of a `Name`.
pub type NameRef = str;

/// The designated preferred form that aliases resolve to.
pub type CanonicalName = String;

/// An alternate spelling, variant or nickname that resolves to exactly one `CanonicalName`.
pub type Alias = String;

/// Relative frequency (likeliness) of a name within a dataset.
pub type Frequency = f32;

/// Identifier of an embedded dataset, without file extension (e.g. `"NICKNAMES"`).
pub type PresetName = str;

/// A static table of `(identifier, gzip-compressed bytes)` pairs, sorted by identifier.
pub type PresetTable = &'static [(&'static str, &'static [u8])];

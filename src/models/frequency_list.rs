use crate::config::DEFAULT_FREQUENCY_LIST_CONFIG;
use crate::constants::FREQUENCY_PRESET_REGISTRY;
use crate::types::{Frequency, Name, NameRef, PresetName};
use crate::{Error, FrequencyListConfig};
use csv::ReaderBuilder;
use log::info;
use std::io::Read;

/// A list of names ranked by frequency, most frequent first.
///
/// The order is taken from the input as-is; it is neither verified nor re-sorted.
#[derive(Debug, Clone)]
pub struct FrequencyList {
    names: Vec<Name>,
    freqs: Vec<Frequency>,
}

impl FrequencyList {
    /// Creates a frequency list from one of the embedded frequency presets.
    ///
    /// The identifier is the preset file name without its `.csv` suffix, e.g.
    /// `"US_FIRST_NAME"`.
    ///
    /// # Errors
    ///
    /// Returns `Error::PresetNotFound` for an unknown identifier, otherwise any error of
    /// [`FrequencyList::from_reader`].
    pub fn from_preset(preset: &PresetName) -> Result<Self, Error> {
        let reader = FREQUENCY_PRESET_REGISTRY.open(preset)?;

        Self::from_reader(reader)
    }

    /// Creates a frequency list from headerless CSV data.
    ///
    /// Every row must have exactly two columns: the name, and its frequency as a 32-bit float.
    /// Rows must already be ordered with the highest frequency first.
    ///
    /// # Errors
    ///
    /// Returns `Error::IoError` if the reader fails and `Error::FormatError` for a row with a
    /// column count other than two, a frequency that is not a number, or malformed CSV.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Self::from_reader_with_custom_config(DEFAULT_FREQUENCY_LIST_CONFIG, reader)
    }

    /// Same as [`FrequencyList::from_reader`], with the CSV delimiter and quote character
    /// taken from `config`.
    pub fn from_reader_with_custom_config<R: Read>(
        config: &FrequencyListConfig,
        reader: R,
    ) -> Result<Self, Error> {
        let mut names: Vec<Name> = Vec::new();
        let mut freqs: Vec<Frequency> = Vec::new();

        // Column counts are validated per row below, with a more useful message than the
        // reader's own length check
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(config.delimiter)
            .quote(config.quote)
            .from_reader(reader);

        for (row_index, record) in reader.records().enumerate() {
            let record = record?;
            let row_number = row_index + 1;

            if record.len() != 2 {
                return Err(Error::FormatError(format!(
                    "invalid number of columns on row {}: expected 2, found {} (row: {:?})",
                    row_number,
                    record.len(),
                    record.iter().collect::<Vec<_>>()
                )));
            }

            let freq = record[1].parse::<Frequency>().map_err(|err| {
                Error::FormatError(format!(
                    "invalid frequency {:?} for {:?} on row {}: {}",
                    &record[1], &record[0], row_number, err
                ))
            })?;

            names.push(record[0].to_string());
            freqs.push(freq);
        }

        info!("Loaded {} ranked names", names.len());

        Ok(FrequencyList { names, freqs })
    }

    /// Returns the `n` most frequent names.
    ///
    /// If `n` exceeds the number of names, the whole list is returned. `n == 0` yields an
    /// empty slice; negative counts are not representable as a `usize`.
    pub fn top(&self, n: usize) -> &[Name] {
        &self.names[..n.min(self.names.len())]
    }

    /// Returns the frequency of `name`, or `0.0` if the name is not in the list.
    ///
    /// Matching is exact and case-sensitive. If a name occurs more than once, the first
    /// occurrence wins.
    pub fn frequency(&self, name: &NameRef) -> Frequency {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map_or(0.0, |index| self.freqs[index])
    }

    pub fn names(&self) -> &[Name] {
        &self.names
    }

    pub fn frequencies(&self) -> &[Frequency] {
        &self.freqs
    }

    /// Iterates over `(name, frequency)` pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&NameRef, Frequency)> {
        self.names
            .iter()
            .map(|name| name.as_str())
            .zip(self.freqs.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

use crate::config::DEFAULT_CANONICAL_RESOLVER_CONFIG;
use crate::constants::CANONICAL_PRESET_REGISTRY;
use crate::types::{Alias, CanonicalName, NameRef, PresetName};
use crate::{CanonicalResolverConfig, Error};
use log::{debug, info};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

/// Maps aliases of a name to one designated canonical form.
///
/// Names that are not registered as an alias are their own canonical form. Resolution is a
/// single lookup: a canonical name that is itself registered as an alias elsewhere is not
/// resolved any further.
#[derive(Debug, Clone)]
pub struct CanonicalResolver {
    aliases: HashMap<Alias, CanonicalName>,
}

impl CanonicalResolver {
    /// Creates a resolver from one of the embedded canonical presets.
    ///
    /// The identifier is the preset file name without its `.txt` suffix, e.g. `"NICKNAMES"`.
    ///
    /// # Errors
    ///
    /// Returns `Error::PresetNotFound` for an unknown identifier, otherwise any error of
    /// [`CanonicalResolver::from_reader`].
    pub fn from_preset(preset: &PresetName) -> Result<Self, Error> {
        let reader = CANONICAL_PRESET_REGISTRY.open(preset)?;

        Self::from_reader(reader)
    }

    /// Creates a resolver from line-oriented text.
    ///
    /// Every line must contain at least two comma-separated names. The first name is the
    /// canonical name and all further names are aliases that resolve to it. When an alias
    /// appears on more than one line, the last line wins.
    ///
    /// # Errors
    ///
    /// Returns `Error::IoError` if the reader fails and `Error::FormatError` if a line has
    /// fewer than two names or is not valid UTF-8. No resolver is returned in either case.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        Self::from_reader_with_custom_config(DEFAULT_CANONICAL_RESOLVER_CONFIG, reader)
    }

    /// Same as [`CanonicalResolver::from_reader`], with the delimiter and empty-line handling
    /// taken from `config`.
    pub fn from_reader_with_custom_config<R: Read>(
        config: &CanonicalResolverConfig,
        reader: R,
    ) -> Result<Self, Error> {
        let mut aliases: HashMap<Alias, CanonicalName> = HashMap::new();
        let mut reader = BufReader::new(reader);
        let mut buf: Vec<u8> = Vec::new();
        let mut line_number: usize = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            // Accept both `\n` and `\r\n` terminators
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }

            let line = std::str::from_utf8(&buf).map_err(|err| {
                Error::FormatError(format!(
                    "invalid UTF-8 on line {}: {} (line: {:?})",
                    line_number,
                    err,
                    String::from_utf8_lossy(&buf)
                ))
            })?;

            if line.is_empty() && config.skip_empty_lines {
                debug!("Skipping empty line {}", line_number);
                continue;
            }

            let names: Vec<&NameRef> = line.split(config.delimiter).collect();
            if names.len() < 2 {
                return Err(Error::FormatError(format!(
                    "invalid number of entries on line {}: expected at least 2, found {} (line: {:?})",
                    line_number,
                    names.len(),
                    line
                )));
            }

            let canonical_name = names[0];
            for alias in &names[1..] {
                aliases.insert(alias.to_string(), canonical_name.to_string());
            }
        }

        info!("Loaded {} canonical name aliases", aliases.len());

        Ok(CanonicalResolver { aliases })
    }

    /// Returns the canonical name for `name`, or `name` itself if it is not a known alias.
    pub fn resolve<'a>(&'a self, name: &'a NameRef) -> &'a NameRef {
        self.aliases
            .get(name)
            .map(|canonical_name| canonical_name.as_str())
            .unwrap_or(name)
    }

    pub fn contains_alias(&self, name: &NameRef) -> bool {
        self.aliases.contains_key(name)
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

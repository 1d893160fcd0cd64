use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The underlying stream could not be read.
    IoError(std::io::Error),
    /// The input violated the expected format.
    FormatError(String),
    /// The requested preset identifier is not part of the registry.
    PresetNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(err) => write!(f, "IO Error: {}", err),
            Error::FormatError(msg) => write!(f, "Format Error: {}", msg),
            Error::PresetNotFound(name) => write!(f, "Preset Not Found: {}", name),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        // Only genuine read failures are I/O errors; malformed CSV is a format problem
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io_err) => Error::IoError(io_err),
                other => Error::FormatError(format!("{:?}", other)),
            }
        } else {
            Error::FormatError(err.to_string())
        }
    }
}

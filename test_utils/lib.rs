use name_presets::{CanonicalResolver, FrequencyList};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub mod constants;
use constants::{CANONICAL_FIXTURE_FILE_PATH, FREQUENCY_FIXTURE_FILE_PATH};

/// A reader whose every read fails, for exercising I/O error propagation.
pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "simulated read failure"))
    }
}

/// A reader that yields `data` and then fails instead of reporting end of stream.
pub struct TruncatedReader<'a> {
    data: &'a [u8],
}

impl<'a> TruncatedReader<'a> {
    pub fn new(data: &'a str) -> Self {
        TruncatedReader {
            data: data.as_bytes(),
        }
    }
}

impl Read for TruncatedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stream ended unexpectedly",
            ));
        }

        let len = buf.len().min(self.data.len());
        buf[..len].copy_from_slice(&self.data[..len]);
        self.data = &self.data[len..];
        Ok(len)
    }
}

pub fn open_test_file(file_path: &Path) -> File {
    File::open(file_path)
        .unwrap_or_else(|err| panic!("Failed to open test file {:?}: {}", file_path, err))
}

pub fn canonical_test_fixture() -> CanonicalResolver {
    CanonicalResolver::from_reader(open_test_file(&CANONICAL_FIXTURE_FILE_PATH))
        .expect("Failed to load canonical fixture")
}

pub fn frequency_test_fixture() -> FrequencyList {
    FrequencyList::from_reader(open_test_file(&FREQUENCY_FIXTURE_FILE_PATH))
        .expect("Failed to load frequency fixture")
}

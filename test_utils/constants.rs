use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static CANONICAL_FIXTURE_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "matrix_aliases.txt"));

pub static FREQUENCY_FIXTURE_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "matrix_frequencies.csv"));

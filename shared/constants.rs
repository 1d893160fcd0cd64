use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Relative to the package root, which is the working directory of the build script
pub static PRESETS_DIRECTORY: LazyLock<PathBuf> = LazyLock::new(|| define_path!("presets"));

pub static CANONICAL_PRESETS_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("presets", "canonical"));

pub static FREQUENCY_PRESETS_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("presets", "common"));

pub static CANONICAL_PRESET_EXTENSION: &str = "txt";

pub static FREQUENCY_PRESET_EXTENSION: &str = "csv";

pub static COMPRESSED_PRESET_EXTENSION: &str = "gz";

pub static PRESET_REGISTRY_FILE_NAME: &str = "preset_registry.rs";

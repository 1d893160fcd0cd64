#[path = "shared/constants.rs"]
mod constants;
use constants::{
    CANONICAL_PRESETS_DIRECTORY, CANONICAL_PRESET_EXTENSION, COMPRESSED_PRESET_EXTENSION,
    FREQUENCY_PRESETS_DIRECTORY, FREQUENCY_PRESET_EXTENSION, PRESETS_DIRECTORY,
    PRESET_REGISTRY_FILE_NAME,
};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if a preset is added, removed or edited
    println!("cargo:rerun-if-changed={}", PRESETS_DIRECTORY.display());
    println!(
        "cargo:rerun-if-changed={}",
        CANONICAL_PRESETS_DIRECTORY.display()
    );
    println!(
        "cargo:rerun-if-changed={}",
        FREQUENCY_PRESETS_DIRECTORY.display()
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    let canonical_presets = compress_presets(
        &CANONICAL_PRESETS_DIRECTORY,
        CANONICAL_PRESET_EXTENSION,
        &out_dir.join("canonical"),
    )?;

    let frequency_presets = compress_presets(
        &FREQUENCY_PRESETS_DIRECTORY,
        FREQUENCY_PRESET_EXTENSION,
        &out_dir.join("common"),
    )?;

    let mut code = String::new();
    write_registry_table(&mut code, "CANONICAL_PRESETS", &canonical_presets)?;
    write_registry_table(&mut code, "FREQUENCY_PRESETS", &frequency_presets)?;

    fs::write(out_dir.join(PRESET_REGISTRY_FILE_NAME), code)?;

    Ok(())
}

/// Gzip every preset with the given extension into `output_dir`.
///
/// Returns `(identifier, compressed file path)` pairs sorted by identifier, where the
/// identifier is the file name without its extension.
fn compress_presets(
    input_dir: &Path,
    extension: &str,
    output_dir: &Path,
) -> Result<Vec<(String, PathBuf)>, Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let mut presets = Vec::new();

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();

        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }

        let Some(identifier) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        println!("cargo:rerun-if-changed={}", path.display());

        let compressed_path = output_dir.join(format!(
            "{}.{}.{}",
            identifier, extension, COMPRESSED_PRESET_EXTENSION
        ));

        let mut input_file = File::open(&path)?;
        let mut encoder = GzEncoder::new(File::create(&compressed_path)?, Compression::best());
        io::copy(&mut input_file, &mut encoder)?;
        encoder.finish()?;

        presets.push((identifier.to_string(), compressed_path));
    }

    presets.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(presets)
}

fn write_registry_table(
    code: &mut String,
    table_name: &str,
    presets: &[(String, PathBuf)],
) -> std::fmt::Result {
    writeln!(code, "pub(crate) const {}: &[(&str, &[u8])] = &[", table_name)?;
    for (identifier, compressed_path) in presets {
        // Debug formatting yields a valid, escaped string literal
        writeln!(
            code,
            "    ({:?}, include_bytes!({:?})),",
            identifier,
            compressed_path.display().to_string()
        )?;
    }
    writeln!(code, "];")
}

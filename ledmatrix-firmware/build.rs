//! Build script for ledmatrix-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates matrix.toml at compile time and embeds it as postcard bytes

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use ledmatrix_core::config::{ConfigError, MatrixConfig, MAX_CHAR_WIDTH, MAX_INTENSITY};
use ledmatrix_core::{MAX_DEVICES, MAX_TEXT_LEN};

/// Config file, relative to the crate root
const CONFIG_FILE: &str = "matrix.toml";

/// Encoded config picked up by `src/config/loader.rs`
const CONFIG_BLOB: &str = "matrix.bin";

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    setup_linker(&out_dir);
    embed_config(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate matrix.toml, then write it to OUT_DIR as postcard
fn embed_config(out_dir: &Path) {
    println!("cargo:rerun-if-changed={}", CONFIG_FILE);

    let config_path = Path::new(CONFIG_FILE);

    if !config_path.exists() {
        fail(
            "matrix.toml not found!",
            &[
                "The firmware requires a matrix.toml configuration file.".to_string(),
                "Please create one in the ledmatrix-firmware directory.".to_string(),
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read matrix.toml", &[format!("Error: {}", e)]),
    };

    let config: MatrixConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            let lines: Vec<String> = e.to_string().lines().map(str::to_string).collect();
            fail("Invalid matrix.toml", &lines);
        }
    };

    if let Err(e) = config.validate() {
        fail("Invalid value in matrix.toml", &[describe(e, &config)]);
    }

    let bytes = match postcard::to_stdvec(&config) {
        Ok(bytes) => bytes,
        Err(e) => fail("Failed to encode matrix.toml", &[format!("Error: {}", e)]),
    };
    fs::write(out_dir.join(CONFIG_BLOB), &bytes).unwrap();

    println!(
        "cargo:warning=matrix.toml validated successfully ({} devices, {} bytes)",
        config.devices,
        bytes.len()
    );
}

/// Explain a validation error in terms of the offending key
fn describe(error: ConfigError, config: &MatrixConfig) -> String {
    match error {
        ConfigError::InvalidDeviceCount => format!(
            "devices = {} (must be 1-{})",
            config.devices, MAX_DEVICES
        ),
        ConfigError::InvalidCharWidth => format!(
            "char_width = {} (must be 1-{})",
            config.char_width, MAX_CHAR_WIDTH
        ),
        ConfigError::InvalidIntensity => format!(
            "intensity = {} (must be 0-{})",
            config.intensity, MAX_INTENSITY
        ),
        ConfigError::TextTooLong => format!(
            "text or next_text is longer than {} characters",
            MAX_TEXT_LEN
        ),
        ConfigError::InvalidFrameInterval => "frame_ms must be greater than 0".to_string(),
    }
}

/// Abort the build with a boxed error message
fn fail(title: &str, details: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        format_error_lines(details)
    );
}

/// Format error message lines with box drawing
fn format_error_lines(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.clone()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

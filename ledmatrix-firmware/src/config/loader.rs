//! Embedded configuration
//!
//! Decodes the config blob written by build.rs. Falls back to defaults if
//! the blob does not decode or fails validation.

use defmt::*;

use ledmatrix_core::config::{ConfigError, MatrixConfig};

/// matrix.toml, encoded with postcard at build time
static EMBEDDED_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/matrix.bin"));

/// Config loading errors
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadError {
    /// Deserialization failed
    Deserialize,
    /// Decoded config is out of range
    Invalid(ConfigError),
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Invalid(e)
    }
}

/// Decode and validate a postcard-encoded config
pub fn decode(bytes: &[u8]) -> Result<MatrixConfig, LoadError> {
    let config: MatrixConfig = postcard::from_bytes(bytes).map_err(|_| LoadError::Deserialize)?;
    config.validate()?;
    Ok(config)
}

/// Load the embedded configuration
///
/// Returns the default configuration if the embedded one is unusable.
pub fn load_config() -> MatrixConfig {
    match decode(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Loaded config: {} devices, width {}, scroll {}, {} ms/frame",
                config.devices, config.char_width, config.scroll, config.frame_ms
            );
            config
        }
        Err(e) => {
            warn!("Embedded config unusable ({}), using defaults", e);
            MatrixConfig::default()
        }
    }
}

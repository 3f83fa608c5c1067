//! Configuration loading
//!
//! The matrix configuration is validated by the build script and embedded
//! in the firmware as postcard bytes.

pub mod loader;

pub use loader::{load_config, LoadError};

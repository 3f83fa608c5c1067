//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware build script
//! parses `matrix.toml` into these and embeds them as postcard binary data.

pub mod types;

pub use types::*;

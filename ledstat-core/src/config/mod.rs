//! Configuration types
//!
//! Layout configuration that tells the canvas where each picture goes.
//! Stored either as TOML text or as postcard binary data.

pub mod layout;

pub use layout::*;

//! Layout loading
//!
//! A layout is normally written by hand as TOML:
//!
//! ```toml
//! [[plugins]]
//! name = "time"
//! pos_x = 1
//! pos_y = 4
//! ```
//!
//! It can also be stored as compact postcard binary data. `load_layout`
//! accepts either form, trying TOML first.

use ledstat_core::config::LayoutConfig;

/// Layout loading errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Text is not a valid TOML layout
    Toml,
    /// Bytes are not a valid postcard layout
    Postcard,
    /// Output buffer too small for the encoded layout
    BufferTooSmall,
}

/// Parse a TOML layout
pub fn parse_layout_toml(input: &str) -> Result<LayoutConfig, ConfigError> {
    toml::from_str(input).map_err(|_e| {
        #[cfg(feature = "defmt")]
        defmt::debug!("TOML layout rejected: {}", defmt::Debug2Format(&_e));
        ConfigError::Toml
    })
}

/// Decode a postcard layout
pub fn decode_layout(bytes: &[u8]) -> Result<LayoutConfig, ConfigError> {
    postcard::from_bytes(bytes).map_err(|_| ConfigError::Postcard)
}

/// Encode a layout as postcard into `buffer`
///
/// Returns the number of bytes written
pub fn encode_layout(layout: &LayoutConfig, buffer: &mut [u8]) -> Result<usize, ConfigError> {
    postcard::to_slice(layout, buffer)
        .map(|used| used.len())
        .map_err(|_| ConfigError::BufferTooSmall)
}

/// Load a layout from TOML text, falling back to postcard binary data
pub fn load_layout(bytes: &[u8]) -> Result<LayoutConfig, ConfigError> {
    if let Ok(text) = core::str::from_utf8(bytes) {
        match parse_layout_toml(text) {
            Ok(layout) => return Ok(layout),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Layout is not TOML, trying postcard");
            }
        }
    }
    decode_layout(bytes)
}

//! Renderer metadata
//!
//! Every picture carries a static `{ name, width, height }` descriptor.
//! The canvas uses it to reserve space on the matrix before the picture is
//! ever drawn.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Longest picture name accepted by the layout configuration
pub const MAX_NAME_LEN: usize = 16;

/// Static description of a picture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RendererMetadata {
    /// Identifier used by layouts to refer to the picture
    pub name: &'static str,
    /// Columns
    pub width: usize,
    /// Rows
    pub height: usize,
}

impl RendererMetadata {
    pub const fn new(name: &'static str, width: usize, height: usize) -> Self {
        Self {
            name,
            width,
            height,
        }
    }

    /// Number of bytes one drawn picture occupies
    pub const fn picture_len(&self) -> usize {
        self.width * self.height
    }
}

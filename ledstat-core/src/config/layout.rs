//! Layout configuration type definitions

use heapless::{String, Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use crate::metadata::MAX_NAME_LEN;

/// Maximum pictures per layout
pub const MAX_PICTURES: usize = 8;

/// Where one picture is placed on the matrix
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PluginPlacement {
    /// Picture name, matches `RendererMetadata::name`
    pub name: String<MAX_NAME_LEN>,
    /// Column of the picture's left edge
    pub pos_x: usize,
    /// Row of the picture's top edge
    pub pos_y: usize,
}

impl PluginPlacement {
    /// Create a placement; names longer than `MAX_NAME_LEN` are truncated
    pub fn new(name: &str, pos_x: usize, pos_y: usize) -> Self {
        let mut label = String::new();
        for c in name.chars() {
            if label.push(c).is_err() {
                break;
            }
        }
        Self {
            name: label,
            pos_x,
            pos_y,
        }
    }
}

/// Complete layout of the matrix
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutConfig {
    /// Pictures in the order they are added to the canvas
    pub plugins: Vec<PluginPlacement, MAX_PICTURES>,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout matching the stock time, battery and CPU arrangement
    pub fn standard() -> Self {
        let mut plugins = Vec::new();
        // Capacity is larger than three
        let _ = plugins.push(PluginPlacement::new("time", 1, 4));
        let _ = plugins.push(PluginPlacement::new("battery", 2, 12));
        let _ = plugins.push(PluginPlacement::new("cpu", 2, 24));
        Self { plugins }
    }

    /// Look up a placement by picture name
    pub fn placement(&self, name: &str) -> Option<&PluginPlacement> {
        self.plugins.iter().find(|p| p.name.as_str() == name)
    }
}

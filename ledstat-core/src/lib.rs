//! Board-agnostic core types for LED matrix indicator pictures
//!
//! This crate contains everything the renderers and the matrix canvas
//! share without depending on any particular picture:
//!
//! - Fixed-size pixel frames and the two canonical intensity levels
//! - Binary-coded-decimal helpers (digit split, bit planes)
//! - Renderer metadata descriptors
//! - Metric-source and picture traits
//! - Layout configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bcd;
pub mod config;
pub mod frame;
pub mod metadata;
pub mod traits;

pub use frame::{compose, Coord, Frame, DIM, LIT, UNSET};
pub use metadata::RendererMetadata;

//! LED matrix canvas for indicator pictures
//!
//! This crate provides:
//! - `Matrix`, the 9x34 brightness grid of the whole panel
//! - `Canvas`, which reserves space for each picture and paints them all
//!   into one matrix
//! - `PictureSet` for looking pictures up by name, with `Indicators`
//!   bundling the stock clock, battery and CPU pictures
//! - Layout loading from TOML text or postcard binary data
//!
//! # Architecture
//!
//! The host samples its metrics through the traits in ledstat-core. A
//! `LayoutConfig` names the pictures and their positions; the canvas checks
//! that they fit and do not overlap once, then `paint` is called every
//! refresh to produce the full matrix.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod canvas;
pub mod indicators;
pub mod layout;

pub use canvas::{Canvas, CanvasError, Matrix, PictureSet, Slot, MATRIX_HEIGHT, MATRIX_WIDTH};
pub use indicators::Indicators;
pub use layout::{decode_layout, encode_layout, load_layout, parse_layout_toml, ConfigError};

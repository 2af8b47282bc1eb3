//! Matrix canvas
//!
//! Reserves a rectangle of the LED matrix for every picture and paints all
//! pictures into one matrix. Reservations are validated once when a
//! picture is added, so painting only fails if a picture misbehaves.

use heapless::Vec;

use ledstat_core::config::{LayoutConfig, MAX_PICTURES};
use ledstat_core::traits::Picture;
use ledstat_core::{Coord, Frame, RendererMetadata};

/// Matrix columns
pub const MATRIX_WIDTH: usize = 9;

/// Matrix rows
pub const MATRIX_HEIGHT: usize = 34;

/// Brightness of every LED on the panel
pub type Matrix = Frame<MATRIX_WIDTH, MATRIX_HEIGHT>;

/// Canvas errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanvasError {
    /// A picture with the same name is already placed
    DuplicateIdentifier,
    /// The picture would overlap another one
    SpaceTaken,
    /// The picture would extend past the matrix edge
    OutOfBounds,
    /// No room for more pictures
    Full,
    /// No picture with the requested name
    UnknownPicture,
    /// A picture drew a different number of pixels than its metadata says
    SizeMismatch,
}

/// Pictures addressable by name
pub trait PictureSet {
    /// Descriptor of the named picture
    fn metadata(&self, name: &str) -> Option<RendererMetadata>;

    /// The named picture, ready to draw
    fn picture_mut(&mut self, name: &str) -> Option<&mut dyn Picture>;
}

impl<'p> PictureSet for [&'p mut dyn Picture] {
    fn metadata(&self, name: &str) -> Option<RendererMetadata> {
        self.iter().map(|p| p.metadata()).find(|m| m.name == name)
    }

    fn picture_mut(&mut self, name: &str) -> Option<&mut dyn Picture> {
        self.iter_mut()
            .find(|p| p.metadata().name == name)
            .map(|p| &mut **p as &mut dyn Picture)
    }
}

/// Rectangle reserved for one picture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slot {
    pub metadata: RendererMetadata,
    /// Column of the left edge
    pub pos_x: usize,
    /// Row of the top edge
    pub pos_y: usize,
}

impl Slot {
    // Saturates so positions decoded from a layout cannot overflow
    fn end_x(&self) -> usize {
        self.pos_x.saturating_add(self.metadata.width)
    }

    fn end_y(&self) -> usize {
        self.pos_y.saturating_add(self.metadata.height)
    }

    /// True if the rectangle lies entirely on the matrix
    pub fn fits(&self) -> bool {
        let fits_x = self
            .pos_x
            .checked_add(self.metadata.width)
            .is_some_and(|end| end <= MATRIX_WIDTH);
        let fits_y = self
            .pos_y
            .checked_add(self.metadata.height)
            .is_some_and(|end| end <= MATRIX_HEIGHT);
        fits_x && fits_y
    }

    /// True if the two rectangles share at least one cell
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.pos_x < other.end_x()
            && other.pos_x < self.end_x()
            && self.pos_y < other.end_y()
            && other.pos_y < self.end_y()
    }

    /// Matrix coordinate of picture pixel `index`, only valid once `fits` holds
    fn coord(&self, index: usize) -> Coord {
        Coord::new(
            self.pos_y + index / self.metadata.width,
            self.pos_x + index % self.metadata.width,
        )
    }
}

/// Pictures placed on the matrix
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    slots: Vec<Slot, MAX_PICTURES>,
}

impl Canvas {
    /// Create an empty canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a canvas from a layout, looking pictures up in `pictures`
    pub fn from_layout<P>(layout: &LayoutConfig, pictures: &P) -> Result<Self, CanvasError>
    where
        P: PictureSet + ?Sized,
    {
        let mut canvas = Self::new();
        for placement in layout.plugins.iter() {
            let metadata = match pictures.metadata(&placement.name) {
                Some(metadata) => metadata,
                None => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("No picture named {=str}", placement.name.as_str());
                    return Err(CanvasError::UnknownPicture);
                }
            };
            canvas.add(metadata, placement.pos_x, placement.pos_y)?;
        }
        Ok(canvas)
    }

    /// Reserve space for a picture with its top-left corner at `(pos_x, pos_y)`
    pub fn add(
        &mut self,
        metadata: RendererMetadata,
        pos_x: usize,
        pos_y: usize,
    ) -> Result<(), CanvasError> {
        let slot = Slot {
            metadata,
            pos_x,
            pos_y,
        };

        let result = if self.slots.iter().any(|s| s.metadata.name == metadata.name) {
            Err(CanvasError::DuplicateIdentifier)
        } else if !slot.fits() {
            Err(CanvasError::OutOfBounds)
        } else if !self.is_space_vacant(&slot) {
            Err(CanvasError::SpaceTaken)
        } else {
            self.slots.push(slot).map_err(|_| CanvasError::Full)
        };

        #[cfg(feature = "defmt")]
        if let Err(e) = result {
            defmt::warn!("Cannot place {=str} at ({}, {}): {}", metadata.name, pos_x, pos_y, e);
        }

        result
    }

    /// True if no placed picture shares a cell with `slot`
    pub fn is_space_vacant(&self, slot: &Slot) -> bool {
        !self.slots.iter().any(|s| s.overlaps(slot))
    }

    /// Matrix with 1 on every reserved cell and 0 elsewhere
    pub fn occupancy(&self) -> Matrix {
        let mut matrix = Matrix::new();
        for slot in self.slots.iter() {
            for index in 0..slot.metadata.picture_len() {
                matrix.set(slot.coord(index), 1);
            }
        }
        matrix
    }

    /// Placed pictures, in the order they were added
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Draw every picture into a fresh matrix
    ///
    /// Cells outside all reserved rectangles stay 0 (LED off).
    pub fn paint<P>(&self, pictures: &mut P) -> Result<Matrix, CanvasError>
    where
        P: PictureSet + ?Sized,
    {
        let mut matrix = Matrix::new();
        for slot in self.slots.iter() {
            let picture = pictures
                .picture_mut(slot.metadata.name)
                .ok_or(CanvasError::UnknownPicture)?;
            let pixels = picture.draw();
            if pixels.len() != slot.metadata.picture_len() {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "{=str} drew {} pixels, expected {}",
                    slot.metadata.name,
                    pixels.len(),
                    slot.metadata.picture_len()
                );
                return Err(CanvasError::SizeMismatch);
            }
            for (index, &value) in pixels.iter().enumerate() {
                matrix.set(slot.coord(index), value);
            }
        }
        Ok(matrix)
    }
}

//! Core domain types for pixcraft.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGB colour values
//! - `Image` - row-major RGB buffers
//! - `Palette` - ordered colour lists with letter codes
//! - `ArtworkConfig` - sanitized guide settings

mod colour;
mod config;
mod buffer;
mod palette;

pub use buffer::Image;
pub use colour::Colour;
pub use config::{
    ArtworkConfig, CellSpec, OutputSize, RenderStyle, ALLOWED_COLOUR_COUNTS, CELL_SIZE_RANGE,
    GRID_RANGE,
};
pub use palette::{letter_code, Palette};

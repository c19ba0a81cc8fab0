//! Row-major RGB image buffer.

use std::path::Path;

use image::RgbImage;

use crate::error::{CraftError, Result};

use super::Colour;

/// An RGB image stored row-major (`pixels[y * width + x]`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl Image {
    /// Create an image filled with a single colour.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![colour; width as usize * height as usize],
        }
    }

    /// Create an image from row-major pixels.
    ///
    /// Returns `None` if the pixel count does not match the dimensions.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Colour>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Colour) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Decode encoded image bytes (PNG, JPEG, ...). Alpha is discarded.
    pub fn decode(bytes: &[u8]) -> std::result::Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::from(&decoded.to_rgb8()))
    }

    /// Read and decode an image file.
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| CraftError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::decode(&bytes).map_err(|e| CraftError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Set a pixel; positions outside the image are ignored.
    pub fn put(&mut self, x: u32, y: u32, colour: Colour) {
        if x < self.width && y < self.height {
            self.pixels[y as usize * self.width as usize + x as usize] = colour;
        }
    }

    /// Fill a rectangle, clipped to the image bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, colour: Colour) {
        let max_x = x.saturating_add(w).min(self.width);
        let max_y = y.saturating_add(h).min(self.height);
        for py in y..max_y {
            for px in x..max_x {
                self.pixels[py as usize * self.width as usize + px as usize] = colour;
            }
        }
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Convert to an `image` crate buffer for encoding.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(self.get(x, y).unwrap_or_default().to_rgb())
        })
    }
}

impl From<&RgbImage> for Image {
    fn from(img: &RgbImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            pixels: img.pixels().map(|p| Colour::from(p.0)).collect(),
        }
    }
}

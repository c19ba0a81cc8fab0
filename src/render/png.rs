//! PNG output for preview images.
//!
//! Converts images to PNG files with optional integer scaling.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{CraftError, Result};
use crate::types::Image;

/// Write an image to a PNG file.
///
/// # Arguments
///
/// * `image` - The image to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(image: &Image, path: &Path, scale: u32) -> Result<()> {
    let img = scale_image(image, scale);

    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| CraftError::Write {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}

/// Nearest-neighbour upscale into an `image` crate buffer.
fn scale_image(image: &Image, scale: u32) -> RgbImage {
    let scale = scale.max(1); // Minimum scale of 1

    let width = image.width() * scale;
    let height = image.height() * scale;

    ImageBuffer::from_fn(width, height, |x, y| {
        let colour = image.get(x / scale, y / scale).unwrap_or_default();
        Rgb(colour.to_rgb())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_simple() {
        let img = Image::from_pixels(
            2,
            2,
            vec![Colour::BLACK, Colour::WHITE, Colour::WHITE, Colour::BLACK],
        )
        .unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&img, &path, 1).unwrap();

        assert!(path.exists());

        // Read back and verify
        let read = image::open(&path).unwrap().to_rgb8();
        assert_eq!(read.width(), 2);
        assert_eq!(read.height(), 2);
        assert_eq!(read.get_pixel(0, 0).0, [0, 0, 0]); // Black
        assert_eq!(read.get_pixel(1, 0).0, [255, 255, 255]); // White
    }

    #[test]
    fn test_write_png_scaled() {
        let img =
            Image::from_pixels(2, 1, vec![Colour::rgb(255, 0, 0), Colour::rgb(0, 255, 0)]).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&img, &path, 2).unwrap();

        let read = image::open(&path).unwrap().to_rgb8();
        assert_eq!(read.width(), 4);
        assert_eq!(read.height(), 2);

        assert_eq!(read.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(read.get_pixel(1, 1).0, [255, 0, 0]);
        assert_eq!(read.get_pixel(2, 0).0, [0, 255, 0]);
        assert_eq!(read.get_pixel(3, 1).0, [0, 255, 0]);
    }

    #[test]
    fn test_write_png_scale_zero_treated_as_one() {
        let img = Image::filled(1, 1, Colour::BLACK);

        let dir = tempdir().unwrap();
        let path = dir.path().join("zero.png");

        write_png(&img, &path, 0).unwrap();

        let read = image::open(&path).unwrap().to_rgb8();
        assert_eq!(read.width(), 1);
        assert_eq!(read.height(), 1);
    }

    #[test]
    fn test_write_png_bad_directory() {
        let img = Image::filled(1, 1, Colour::BLACK);
        let err = write_png(&img, Path::new("/nonexistent/dir/out.png"), 1).unwrap_err();
        assert!(matches!(err, CraftError::Write { .. }));
    }
}

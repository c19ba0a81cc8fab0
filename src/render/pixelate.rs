//! Block-averaging pixelation.

use crate::types::{Colour, Image};

use super::grid::CellLayout;

/// Average every pixel in a rectangle, clipped to the image.
///
/// Channels are averaged independently with truncating integer division.
/// A rectangle with no pixels inside the image averages to black.
pub fn average_block(image: &Image, x: u32, y: u32, w: u32, h: u32) -> Colour {
    let max_x = x.saturating_add(w).min(image.width());
    let max_y = y.saturating_add(h).min(image.height());

    let mut total = [0u64; 3];
    let mut count = 0u64;

    for py in y..max_y {
        for px in x..max_x {
            if let Some(c) = image.get(px, py) {
                total[0] += c.r as u64;
                total[1] += c.g as u64;
                total[2] += c.b as u64;
                count += 1;
            }
        }
    }

    if count == 0 {
        return Colour::BLACK;
    }

    Colour::rgb(
        (total[0] / count) as u8,
        (total[1] / count) as u8,
        (total[2] / count) as u8,
    )
}

/// Pixelate with fixed-size cells. Edge cells are clipped to the image.
///
/// The result has the same dimensions as the input; each cell region is
/// filled flat with its average colour.
pub fn pixelate(image: &Image, cell_width: u32, cell_height: u32) -> Image {
    let layout = CellLayout::fixed(image.width(), image.height(), cell_width, cell_height);
    pixelate_layout(image, &layout)
}

/// Pixelate into a fixed number of columns and rows.
pub fn pixelate_grid(image: &Image, columns: u32, rows: u32) -> Image {
    let layout = CellLayout::grid(image.width(), image.height(), columns, rows);
    pixelate_layout(image, &layout)
}

/// Pixelate using an explicit layout.
pub fn pixelate_layout(image: &Image, layout: &CellLayout) -> Image {
    let mut result = Image::filled(image.width(), image.height(), Colour::BLACK);

    for row in 0..layout.rows() {
        for column in 0..layout.columns() {
            let (x, y, w, h) = layout.cell_rect(column, row);
            if w == 0 || h == 0 {
                continue;
            }
            let colour = average_block(image, x, y, w, h);
            result.fill_rect(x, y, w, h, colour);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> Image {
        Image::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Colour::WHITE
            } else {
                Colour::BLACK
            }
        })
    }

    #[test]
    fn test_average_block_truncates() {
        let img = Image::from_pixels(
            2,
            1,
            vec![Colour::rgb(0, 10, 255), Colour::rgb(1, 11, 254)],
        )
        .unwrap();
        assert_eq!(average_block(&img, 0, 0, 2, 1), Colour::rgb(0, 10, 254));
    }

    #[test]
    fn test_average_block_empty_is_black() {
        let img = Image::filled(4, 4, Colour::WHITE);
        assert_eq!(average_block(&img, 10, 10, 4, 4), Colour::BLACK);
        assert_eq!(average_block(&img, 0, 0, 0, 4), Colour::BLACK);
    }

    #[test]
    fn test_pixelate_solid_is_unchanged() {
        let img = Image::filled(100, 100, Colour::rgb(255, 0, 0));
        assert_eq!(pixelate(&img, 10, 10), img);
    }

    #[test]
    fn test_pixelate_checker_averages() {
        let img = checker(4, 4);
        let result = pixelate(&img, 2, 2);
        // Two white and two black pixels per cell
        assert!(result.pixels().iter().all(|&c| c == Colour::rgb(127, 127, 127)));
    }

    #[test]
    fn test_pixelate_clips_edge_cells() {
        let mut img = Image::filled(3, 1, Colour::BLACK);
        img.put(2, 0, Colour::WHITE);
        let result = pixelate(&img, 2, 2);

        assert_eq!(result.size(), (3, 1));
        assert_eq!(result.get(0, 0), Some(Colour::BLACK));
        assert_eq!(result.get(1, 0), Some(Colour::BLACK));
        // The clipped edge cell only contains the white pixel
        assert_eq!(result.get(2, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_pixelate_does_not_mutate_input() {
        let img = checker(6, 6);
        let copy = img.clone();
        let _ = pixelate(&img, 3, 3);
        assert_eq!(img, copy);
    }

    #[test]
    fn test_pixelate_empty_image() {
        let img = Image::default();
        let result = pixelate(&img, 10, 10);
        assert!(result.is_empty());
        assert_eq!(result.size(), (0, 0));
    }

    #[test]
    fn test_pixelate_grid_reaches_image_edge() {
        // 23 pixels into 10 columns: cells are 2 wide, the last one 5 wide
        let img = Image::from_fn(23, 10, |x, _| {
            if x >= 18 {
                Colour::WHITE
            } else {
                Colour::BLACK
            }
        });
        let result = pixelate_grid(&img, 10, 10);

        // No pixel is left unfilled at the right edge
        assert_eq!(result.get(22, 5), Some(Colour::WHITE));
        assert_eq!(result.get(18, 0), Some(Colour::WHITE));
        assert_eq!(result.get(17, 0), Some(Colour::BLACK));
    }
}

//! Title, legend and grid page layouts.

use crate::artwork::Artwork;
use crate::types::{ArtworkConfig, CellSpec, Colour, Palette};

use super::content::ContentProgram;
use super::tiles::PageTile;
use super::writer::{PAGE_HEIGHT, PAGE_WIDTH};

const MM_TO_POINTS: f32 = 72.0 / 25.4;

/// Page margin on every side.
pub const MARGIN: f32 = 20.0 * MM_TO_POINTS;

/// Space reserved above the grid for the sheet header.
const GRID_HEADER: f32 = 30.0;

/// Cells at or below this size get no letter code.
const LABEL_THRESHOLD: f32 = 10.0;

const SWATCH_WIDTH: f32 = 20.0;
const SWATCH_HEIGHT: f32 = 15.0;
const LEGEND_ROW: f32 = 22.0;
const LEGEND_COLUMN_WIDTH: f32 = 260.0;

/// Vertical space kept free under the legend entries for the stick count
/// and the instructions.
const LEGEND_FOOTER: f32 = 140.0;

/// Largest area the title page thumbnail may cover.
const THUMBNAIL_MAX: (f32, f32) = (PAGE_WIDTH - 2.0 * MARGIN, 420.0);

/// Resource name of the title page thumbnail.
pub const THUMBNAIL_NAME: &str = "Im1";

/// Title page: guide title and the configuration used.
///
/// With `thumbnail` set, draws the thumbnail image resource below the text,
/// sized to keep the grid's aspect ratio.
pub fn title_page(
    config: &ArtworkConfig,
    artwork: &Artwork,
    page_count: usize,
    thumbnail: bool,
) -> ContentProgram {
    let mut program = ContentProgram::new();
    let top = PAGE_HEIGHT - MARGIN;
    program.fill_colour(Colour::BLACK);
    program.text(MARGIN, top - 24.0, 24.0, config.title());

    let (columns, rows) = artwork.grid_size();
    let cells = match config.cells() {
        CellSpec::CellSize(size) => format!("Cell size: {} px", size),
        CellSpec::Grid { columns, rows } => format!("Grid: {} x {} cells", columns, rows),
    };
    let lines = [
        cells,
        format!("Colours: {}", config.colour_count()),
        format!("Style: {}", config.style().label()),
        format!("Output: {}", config.output_size()),
        format!("Grid size: {} x {} cells", columns, rows),
        format!("Pages: {}", page_count),
    ];
    let text_top = top - 60.0;
    program.text_lines(MARGIN, text_top, 12.0, 18.0, &lines);

    if thumbnail && columns > 0 && rows > 0 {
        let (max_w, max_h) = THUMBNAIL_MAX;
        let scale = (max_w / columns as f32).min(max_h / rows as f32);
        let (w, h) = (columns as f32 * scale, rows as f32 * scale);
        let x = MARGIN + (max_w - w) / 2.0;
        let y = text_top - 18.0 * lines.len() as f32 - 20.0 - h;
        program.image(THUMBNAIL_NAME, x, y, w, h);
    }

    program
}

/// Legend page: one swatch per palette entry with its code, RGB value and
/// cell count, followed by building instructions.
pub fn legend_page(config: &ArtworkConfig, artwork: &Artwork) -> ContentProgram {
    let mut program = ContentProgram::new();
    let top = PAGE_HEIGHT - MARGIN;
    program.fill_colour(Colour::BLACK);
    program.text(MARGIN, top - 18.0, 18.0, "Materials & Legend");

    let entries_top = top - 50.0;
    let entries_bottom = MARGIN + LEGEND_FOOTER;
    let mut x = MARGIN;
    let mut y = entries_top;
    let mut lowest = entries_top;

    for entry in artwork.legend() {
        if y - SWATCH_HEIGHT < entries_bottom {
            x += LEGEND_COLUMN_WIDTH;
            y = entries_top;
        }

        program.fill_colour(entry.colour);
        program.fill_rect(x, y - SWATCH_HEIGHT, SWATCH_WIDTH, SWATCH_HEIGHT);
        program.stroke_colour(Colour::BLACK);
        program.line_width(1.0);
        program.stroke_rect(x, y - SWATCH_HEIGHT, SWATCH_WIDTH, SWATCH_HEIGHT);

        let c = entry.colour;
        program.fill_colour(Colour::BLACK);
        program.text(
            x + 30.0,
            y - 12.0,
            11.0,
            format!(
                "{} = RGB({},{},{}) - {} pcs",
                entry.code, c.r, c.g, c.b, entry.count
            ),
        );

        y -= LEGEND_ROW;
        lowest = lowest.min(y);
    }

    let mut y = lowest;
    if config.style().is_embossed() {
        y -= 10.0;
        let total = artwork.cells().indices().len();
        program.text(
            MARGIN,
            y,
            12.0,
            format!("3D style: {} sticks needed", total),
        );
        y -= 20.0;
    }

    y -= 30.0;
    program.text(MARGIN, y, 14.0, "Instructions:");
    y -= 25.0;
    let step_three = if config.style().is_embossed() {
        "3. For 3D: place a stick under each cell."
    } else {
        "3. Lay out the matching materials following the legend."
    };
    program.text_lines(
        MARGIN,
        y,
        11.0,
        16.0,
        &[
            "1. Use the grid on the following pages as a template.",
            "2. Each cell shows its colour code (e.g. A, B, C...).",
            step_three,
        ],
    );

    program
}

/// Grid page for one tile: every owned cell as a filled, bordered square,
/// labelled with its code when large enough to read.
pub fn grid_page(artwork: &Artwork, tile: &PageTile) -> ContentProgram {
    let mut program = ContentProgram::new();
    program.fill_colour(Colour::BLACK);

    let header = if tile.is_empty() {
        format!("Grid sheet {}/{}", tile.index + 1, tile.total)
    } else {
        format!(
            "Grid sheet {}/{} (columns {}-{}, rows {}-{})",
            tile.index + 1,
            tile.total,
            tile.x + 1,
            tile.end_x(),
            tile.y + 1,
            tile.end_y()
        )
    };
    program.text(MARGIN, PAGE_HEIGHT - MARGIN, 10.0, header);

    if tile.is_empty() {
        program.text(
            MARGIN,
            PAGE_HEIGHT - MARGIN - GRID_HEADER,
            10.0,
            "This sheet has no cells.",
        );
        return program;
    }

    let avail_w = PAGE_WIDTH - 2.0 * MARGIN;
    let avail_h = PAGE_HEIGHT - 2.0 * MARGIN - GRID_HEADER;
    let cell = (avail_w / tile.width as f32).min(avail_h / tile.height as f32);
    let start_x = MARGIN + (avail_w - cell * tile.width as f32) / 2.0;
    let start_y = PAGE_HEIGHT - MARGIN - GRID_HEADER;

    let palette = artwork.palette();
    let codes: Vec<String> = (0..palette.len()).map(Palette::code).collect();
    let label_size = (cell * 0.6).min(8.0);

    for gy in 0..tile.height {
        for gx in 0..tile.width {
            let Some(index) = artwork.cells().get(tile.x + gx, tile.y + gy) else {
                continue;
            };
            let colour = palette.get(index).unwrap_or(Colour::BLACK);
            let x = start_x + gx as f32 * cell;
            let y = start_y - (gy + 1) as f32 * cell;

            program.fill_colour(colour);
            program.fill_rect(x, y, cell, cell);
            program.stroke_colour(Colour::GREY);
            program.stroke_rect(x, y, cell, cell);

            if cell > LABEL_THRESHOLD {
                let ink = if colour.brightness() > 128 {
                    Colour::BLACK
                } else {
                    Colour::WHITE
                };
                let code = codes.get(index).map(String::as_str).unwrap_or("?");
                program.fill_colour(ink);
                program.text(x + cell * 0.2, y + cell * 0.3, label_size, code);
            }
        }
    }

    program
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::content::Op;
    use crate::document::tiles::plan_tiles;
    use crate::types::{Image, OutputSize, RenderStyle};
    use pretty_assertions::assert_eq;

    fn texts(program: &ContentProgram) -> Vec<&str> {
        program
            .ops()
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn filled_rects(program: &ContentProgram) -> Vec<(f32, f32, f32, f32)> {
        program
            .ops()
            .iter()
            .filter_map(|op| match *op {
                Op::FillRect { x, y, w, h } => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }

    fn solid_red() -> (ArtworkConfig, Artwork) {
        let image = Image::filled(100, 100, Colour::rgb(255, 0, 0));
        let config = ArtworkConfig::new().with_cell_size(10).with_colour_count(8);
        let artwork = Artwork::prepare(&image, &config);
        (config, artwork)
    }

    fn many_colours(count: u32) -> (ArtworkConfig, Artwork) {
        let image = Image::from_fn(64, 64, |x, y| {
            Colour::rgb((x * 4) as u8, (y * 4) as u8, ((x * y) % 256) as u8)
        });
        let config = ArtworkConfig::new().with_grid(64, 64).with_colour_count(count);
        let artwork = Artwork::prepare(&image, &config);
        (config, artwork)
    }

    #[test]
    fn test_margin_is_twenty_mm() {
        assert!((MARGIN - 56.69).abs() < 0.01);
    }

    #[test]
    fn test_title_page_lines() {
        let (config, artwork) = solid_red();
        let program = title_page(&config, &artwork, 3, false);

        assert_eq!(
            texts(&program),
            vec![
                "Pixel Art Building Guide",
                "Cell size: 10 px",
                "Colours: 8",
                "Style: 2D",
                "Output: A4",
                "Grid size: 10 x 10 cells",
                "Pages: 3",
            ]
        );
        assert!(program.image_names().is_empty());
    }

    #[test]
    fn test_title_page_thumbnail_fits_page() {
        let (config, artwork) = solid_red();
        let program = title_page(&config, &artwork, 3, true);

        let image = program.ops().iter().find_map(|op| match *op {
            Op::Image { x, y, w, h, .. } => Some((x, y, w, h)),
            _ => None,
        });
        let (x, y, w, h) = image.expect("thumbnail drawn");
        assert!((w - h).abs() < 0.01, "square grid keeps its aspect");
        assert!(x >= MARGIN && x + w <= PAGE_WIDTH - MARGIN + 0.01);
        assert!(y >= MARGIN);
    }

    #[test]
    fn test_legend_solid_red() {
        let (config, artwork) = solid_red();
        let program = legend_page(&config, &artwork);
        let lines = texts(&program);

        assert_eq!(lines[0], "Materials & Legend");
        assert_eq!(lines[1], "A = RGB(255,0,0) - 100 pcs");
        assert_eq!(lines[2], "Instructions:");
        assert_eq!(
            lines.last(),
            Some(&"3. Lay out the matching materials following the legend.")
        );

        let swatches = filled_rects(&program);
        assert_eq!(swatches.len(), 1);
        let (x, _, w, h) = swatches[0];
        assert_eq!((x, w, h), (MARGIN, SWATCH_WIDTH, SWATCH_HEIGHT));
    }

    #[test]
    fn test_legend_embossed_adds_stick_count() {
        let (config, artwork) = solid_red();
        let config = config.with_style(RenderStyle::Embossed);
        let program = legend_page(&config, &artwork);
        let lines = texts(&program);

        assert!(lines.contains(&"3D style: 100 sticks needed"));
        assert_eq!(lines.last(), Some(&"3. For 3D: place a stick under each cell."));
    }

    #[test]
    fn test_legend_flows_into_second_column() {
        let (config, artwork) = many_colours(32);
        let program = legend_page(&config, &artwork);

        let swatches = filled_rects(&program);
        assert_eq!(swatches.len(), 32);
        assert!(swatches.iter().any(|&(x, ..)| x > MARGIN));
        for &(_, y, _, _) in &swatches {
            assert!(y >= MARGIN + LEGEND_FOOTER - LEGEND_ROW);
        }

        let counted: usize = texts(&program)
            .iter()
            .filter_map(|t| t.strip_suffix(" pcs"))
            .filter_map(|t| t.rsplit(' ').next())
            .map(|n| n.parse::<usize>().unwrap())
            .sum();
        assert_eq!(counted, 64 * 64);
    }

    #[test]
    fn test_grid_page_solid_red() {
        let (_, artwork) = solid_red();
        let tiles = plan_tiles(10, 10, OutputSize::A4);
        let program = grid_page(&artwork, &tiles[0]);

        let cells = filled_rects(&program);
        assert_eq!(cells.len(), 100);
        let size = cells[0].2;
        assert!(cells.iter().all(|&(_, _, w, h)| w == size && h == size));

        let lines = texts(&program);
        assert_eq!(lines[0], "Grid sheet 1/1 (columns 1-10, rows 1-10)");
        // Large cells are labelled; red is dark so labels are white
        assert_eq!(lines.iter().filter(|t| **t == "A").count(), 100);
        assert!(program.ops().contains(&Op::FillColour(Colour::WHITE)));
    }

    #[test]
    fn test_grid_page_centres_horizontally() {
        let (_, artwork) = solid_red();
        let tile = plan_tiles(10, 10, OutputSize::A4)[0];
        let cells = filled_rects(&grid_page(&artwork, &tile));

        let left = cells.iter().map(|c| c.0).fold(f32::MAX, f32::min);
        let right = cells.iter().map(|c| c.0 + c.2).fold(f32::MIN, f32::max);
        assert!(((left - MARGIN) - (PAGE_WIDTH - MARGIN - right)).abs() < 0.01);
    }

    #[test]
    fn test_grid_page_small_cells_unlabelled() {
        let (_, artwork) = many_colours(8);
        let tile = plan_tiles(64, 64, OutputSize::A4)[0];
        let program = grid_page(&artwork, &tile);

        assert_eq!(filled_rects(&program).len(), 64 * 64);
        // Header only: 64 cells across leaves each under the label threshold
        assert_eq!(texts(&program).len(), 1);
    }

    #[test]
    fn test_grid_page_tile_header() {
        let (_, artwork) = many_colours(8);
        let tiles = plan_tiles(64, 64, OutputSize::A3);
        let program = grid_page(&artwork, &tiles[3]);

        assert_eq!(
            texts(&program)[0],
            "Grid sheet 4/4 (columns 33-64, rows 33-64)"
        );
        assert_eq!(filled_rects(&program).len(), 32 * 32);
    }

    #[test]
    fn test_grid_page_empty_tile() {
        let (_, artwork) = solid_red();
        let tile = PageTile {
            x: 10,
            y: 10,
            width: 0,
            height: 0,
            index: 24,
            total: 25,
        };
        let program = grid_page(&artwork, &tile);
        assert!(filled_rects(&program).is_empty());
        assert_eq!(texts(&program), vec!["Grid sheet 25/25", "This sheet has no cells."]);
    }
}

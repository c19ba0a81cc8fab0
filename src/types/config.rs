//! Artwork configuration.
//!
//! Every setter sanitizes its input: cell and grid sizes are clamped into
//! range, and colour counts outside {8, 16, 32} are refused so the previous
//! value stays in effect. An `ArtworkConfig` therefore never holds an
//! out-of-range value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest and largest allowed cell size in source pixels.
pub const CELL_SIZE_RANGE: (u32, u32) = (2, 50);

/// Smallest and largest allowed grid dimension in cells.
pub const GRID_RANGE: (u32, u32) = (10, 200);

/// Palette sizes a guide may use.
pub const ALLOWED_COLOUR_COUNTS: [u32; 3] = [8, 16, 32];

/// How the image is divided into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSpec {
    /// Square cells of a fixed size in source pixels.
    CellSize(u32),
    /// A fixed number of columns and rows.
    Grid { columns: u32, rows: u32 },
}

/// Render style of the finished piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RenderStyle {
    /// Flat mosaic ("2D").
    #[default]
    Flat,
    /// Raised cells built on sticks ("3D").
    Embossed,
}

impl RenderStyle {
    pub fn is_embossed(self) -> bool {
        self == RenderStyle::Embossed
    }

    /// Short label used in documents.
    pub fn label(self) -> &'static str {
        match self {
            RenderStyle::Flat => "2D",
            RenderStyle::Embossed => "3D",
        }
    }
}

impl FromStr for RenderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" | "2d" => Ok(RenderStyle::Flat),
            "embossed" | "3d" => Ok(RenderStyle::Embossed),
            other => Err(format!(
                "Invalid style '{}' (expected 'flat', '2d', 'embossed' or '3d')",
                other
            )),
        }
    }
}

impl TryFrom<String> for RenderStyle {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RenderStyle> for String {
    fn from(style: RenderStyle) -> Self {
        style.to_string()
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Flat => write!(f, "flat"),
            RenderStyle::Embossed => write!(f, "embossed"),
        }
    }
}

/// Physical output size. A4 is the base sheet every guide is printed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputSize {
    #[default]
    A4,
    A3,
    A2,
    A1,
    A0,
}

impl OutputSize {
    /// The base sheet size.
    pub const BASE: OutputSize = OutputSize::A4;

    /// All sizes, smallest first.
    pub const ALL: [OutputSize; 5] = [
        OutputSize::A4,
        OutputSize::A3,
        OutputSize::A2,
        OutputSize::A1,
        OutputSize::A0,
    ];

    /// Width and height in millimetres (portrait).
    pub const fn dimensions_mm(self) -> (u32, u32) {
        match self {
            OutputSize::A4 => (210, 297),
            OutputSize::A3 => (297, 420),
            OutputSize::A2 => (420, 594),
            OutputSize::A1 => (594, 841),
            OutputSize::A0 => (841, 1189),
        }
    }

    pub const fn width_mm(self) -> u32 {
        self.dimensions_mm().0
    }

    pub const fn height_mm(self) -> u32 {
        self.dimensions_mm().1
    }

    /// Number of base sheets needed across and down.
    pub fn sheets(self) -> (u32, u32) {
        if self == Self::BASE {
            return (1, 1);
        }
        let (base_w, base_h) = Self::BASE.dimensions_mm();
        let (w, h) = self.dimensions_mm();
        (w.div_ceil(base_w), h.div_ceil(base_h))
    }

    /// Total number of base sheets.
    pub fn sheet_count(self) -> u32 {
        let (x, y) = self.sheets();
        x * y
    }
}

impl FromStr for OutputSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a4" => Ok(OutputSize::A4),
            "a3" => Ok(OutputSize::A3),
            "a2" => Ok(OutputSize::A2),
            "a1" => Ok(OutputSize::A1),
            "a0" => Ok(OutputSize::A0),
            other => Err(format!(
                "Invalid output size '{}' (expected a4, a3, a2, a1 or a0)",
                other
            )),
        }
    }
}

impl TryFrom<String> for OutputSize {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OutputSize> for String {
    fn from(size: OutputSize) -> Self {
        size.to_string()
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputSize::A4 => "A4",
            OutputSize::A3 => "A3",
            OutputSize::A2 => "A2",
            OutputSize::A1 => "A1",
            OutputSize::A0 => "A0",
        };
        write!(f, "{}", name)
    }
}

/// Settings for one guide.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkConfig {
    cells: CellSpec,
    colour_count: u32,
    style: RenderStyle,
    output_size: OutputSize,
    title: String,
    thumbnail: bool,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            cells: CellSpec::Grid {
                columns: 50,
                rows: 50,
            },
            colour_count: 16,
            style: RenderStyle::Flat,
            output_size: OutputSize::A4,
            title: "Pixel Art Building Guide".to_string(),
            thumbnail: false,
        }
    }
}

impl ArtworkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> CellSpec {
        self.cells
    }

    /// Use square cells of `size` source pixels, clamped to [2, 50].
    pub fn set_cell_size(&mut self, size: u32) {
        self.cells = CellSpec::CellSize(clamp(size, CELL_SIZE_RANGE));
    }

    /// Use a fixed grid, each dimension clamped to [10, 200].
    pub fn set_grid(&mut self, columns: u32, rows: u32) {
        self.cells = CellSpec::Grid {
            columns: clamp(columns, GRID_RANGE),
            rows: clamp(rows, GRID_RANGE),
        };
    }

    pub fn colour_count(&self) -> u32 {
        self.colour_count
    }

    /// Set the palette size. Returns `false` and keeps the previous value
    /// when `count` is not 8, 16 or 32.
    pub fn set_colour_count(&mut self, count: u32) -> bool {
        if ALLOWED_COLOUR_COUNTS.contains(&count) {
            self.colour_count = count;
            true
        } else {
            false
        }
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    pub fn output_size(&self) -> OutputSize {
        self.output_size
    }

    pub fn set_output_size(&mut self, size: OutputSize) {
        self.output_size = size;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Whether the title page carries a preview image.
    pub fn thumbnail(&self) -> bool {
        self.thumbnail
    }

    pub fn set_thumbnail(&mut self, thumbnail: bool) {
        self.thumbnail = thumbnail;
    }

    /// Builder-style variant of [`set_cell_size`](Self::set_cell_size).
    pub fn with_cell_size(mut self, size: u32) -> Self {
        self.set_cell_size(size);
        self
    }

    /// Builder-style variant of [`set_grid`](Self::set_grid).
    pub fn with_grid(mut self, columns: u32, rows: u32) -> Self {
        self.set_grid(columns, rows);
        self
    }

    /// Builder-style variant of [`set_colour_count`](Self::set_colour_count).
    pub fn with_colour_count(mut self, count: u32) -> Self {
        self.set_colour_count(count);
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_output_size(mut self, size: OutputSize) -> Self {
        self.output_size = size;
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: bool) -> Self {
        self.thumbnail = thumbnail;
        self
    }
}

fn clamp(value: u32, (min, max): (u32, u32)) -> u32 {
    value.clamp(min, max)
}

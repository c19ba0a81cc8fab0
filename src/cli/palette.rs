//! Palette command implementation.
//!
//! Prints the reduced palette of an image with legend codes and cell
//! counts, as text or JSON.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::artwork::Artwork;
use crate::error::{CraftError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::Image;

use super::options::GuideArgs;

/// Print the reduced palette of an image
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Image to sample
    #[arg(required = true)]
    pub file: PathBuf,

    /// Emit JSON on stdout
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub guide: GuideArgs,
}

/// Machine-readable palette listing.
#[derive(Debug, Serialize)]
pub struct PaletteReport {
    pub columns: u32,
    pub rows: u32,
    pub colours: Vec<PaletteEntry>,
}

#[derive(Debug, Serialize)]
pub struct PaletteEntry {
    pub code: String,
    pub hex: String,
    pub rgb: [u8; 3],
    pub count: usize,
}

impl PaletteReport {
    pub fn from_artwork(artwork: &Artwork) -> Self {
        let (columns, rows) = artwork.grid_size();
        let colours = artwork
            .legend()
            .into_iter()
            .map(|entry| PaletteEntry {
                code: entry.code,
                hex: entry.colour.to_string(),
                rgb: entry.colour.to_rgb(),
                count: entry.count,
            })
            .collect();
        Self {
            columns,
            rows,
            colours,
        }
    }

    /// One line per colour: code, hex, RGB and cell count.
    pub fn to_lines(&self) -> Vec<String> {
        self.colours
            .iter()
            .map(|c| {
                format!(
                    "{:<3} {}  rgb({},{},{})  {}",
                    c.code, c.hex, c.rgb[0], c.rgb[1], c.rgb[2], c.count
                )
            })
            .collect()
    }
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = args.guide.resolve(&cwd, printer)?;

    let image = Image::open(&args.file)?;
    let artwork = Artwork::prepare(&image, &config);
    let report = PaletteReport::from_artwork(&artwork);

    printer.status(
        "Sampled",
        &format!(
            "{} from {}",
            plural(report.colours.len(), "colour", "colours"),
            display_path(&args.file)
        ),
    );

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| CraftError::Parse {
            message: format!("Failed to encode palette: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for line in report.to_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}

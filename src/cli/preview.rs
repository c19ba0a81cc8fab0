//! Preview command implementation.
//!
//! Writes the reduced image as a PNG so settings can be checked before
//! printing a guide.

use std::path::PathBuf;

use clap::Args;

use crate::artwork::Artwork;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;
use crate::types::Image;

use super::options::GuideArgs;

/// Write a PNG preview of the reduced image
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Image to preview
    #[arg(required = true)]
    pub input: PathBuf,

    /// PNG file to write
    #[arg(long, short, required = true)]
    pub output: PathBuf,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,

    #[command(flatten)]
    pub guide: GuideArgs,
}

pub fn run(args: PreviewArgs, printer: &Printer) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = args.guide.resolve(&cwd, printer)?;

    printer.detail("Loading", &display_path(&args.input));
    let image = Image::open(&args.input)?;
    let artwork = Artwork::prepare(&image, &config);

    let preview = artwork.display_image(&config);
    write_png(&preview, &args.output, args.scale)?;

    printer.success(
        "Previewed",
        &format!(
            "{} ({} style, {})",
            display_path(&args.output),
            config.style().label(),
            plural(artwork.palette().len(), "colour", "colours")
        ),
    );

    Ok(())
}

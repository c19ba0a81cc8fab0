pub mod build;
pub mod completions;
pub mod options;
pub mod palette;
pub mod preview;

use clap::{Parser, Subcommand};

/// pixcraft - Pixel art building guide generator
#[derive(Parser, Debug)]
#[command(name = "pixcraft")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print detail lines while working
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build PDF building guides from images
    Build(build::BuildArgs),

    /// Write a PNG preview of the reduced image
    Preview(preview::PreviewArgs),

    /// Print the reduced palette of an image
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

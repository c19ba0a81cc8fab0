use clap::Parser;
use miette::Result;
use pixcraft::cli::{Cli, Commands};
use pixcraft::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.verbose);

    match cli.command {
        Commands::Build(args) => pixcraft::cli::build::run(args, &printer)?,
        Commands::Preview(args) => pixcraft::cli::preview::run(args, &printer)?,
        Commands::Palette(args) => pixcraft::cli::palette::run(args, &printer)?,
        Commands::Completions(args) => pixcraft::cli::completions::run(args)?,
    }

    Ok(())
}

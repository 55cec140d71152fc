use clap::Parser;
use color_eyre::eyre::Result;

use fusion_scrape::cli::{self, Args};

fn main() -> Result<()> {
    color_eyre::install()?;
    cli::run(Args::parse())?;
    Ok(())
}

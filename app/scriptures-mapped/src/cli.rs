use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scriptures-mapped", about = "The Scriptures, Mapped")]
pub struct Cli {
    /// Content service to read from instead of the configured one.
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the view for one location fragment.
    Show(ShowArgs),
    /// Read location fragments from stdin, one per line.
    Browse,
}

#[derive(Args)]
pub struct ShowArgs {
    /// `volume`, `volume:book` or `0:book:chapter`; empty for the home view.
    #[arg(default_value = "")]
    pub fragment: String,
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,
}

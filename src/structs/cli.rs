use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "gap-analyzer")]
#[clap(about = "Repository feature-gap analyzer", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ~/gap-analyzer/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

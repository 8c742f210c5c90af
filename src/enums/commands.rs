use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::feature_category::FeatureCategory;
use crate::enums::output_format::OutputFormat;
use crate::enums::priority::Priority;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Fetch a scan (GitHub or JSON file) and print the feature-gap report
    Analyze {
        /// Configured repository to scan; every enabled repository when omitted
        #[clap(short, long, conflicts_with = "input")]
        repo: Option<String>,
        /// Read the scan result from a JSON file ("-" for stdin) instead of GitHub
        #[clap(short, long)]
        input: Option<PathBuf>,
        #[clap(short, long)]
        format: Option<OutputFormat>,
        /// Write the report to this file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
        /// Only display features in this category
        #[clap(long)]
        category: Option<FeatureCategory>,
        /// Only display features with this priority
        #[clap(long)]
        priority: Option<Priority>,
    },
    /// Serve the analyzer over HTTP (POST /analyze)
    Serve {
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Check the configuration file for problems
    Validate,
    /// List the known-gap catalog entries in effect
    Catalog,
}

//! [Command-line interface](Cli) (CLI) of the main binary.

use crate::Verbosity;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ----------------------------------------------------------------------------
// CLI Entry Point
// ----------------------------------------------------------------------------

/// The command-line interface (CLI).
///
/// Parses user input from the command-line in the main function, via the
/// `parse` function from [`clap::Parser`].
///
/// ```rust
/// use clap::Parser;
/// let input = ["viroplot", "--input", "virus_abundance.tsv", "--output-dir", "virus_results"];
/// let args = viroplot::Cli::parse_from(input);
/// ```
#[derive(Debug, Deserialize, Parser, Serialize)]
#[clap(name = "viroplot", author, version)]
#[clap(about = "Render abundance charts and a summary report from a virome profiling table.")]
pub struct Cli {
    /// Input abundance table.
    ///
    /// Tab-separated, no header, three positional columns:
    /// abundance (int), virus name (string), percentage (float).
    #[clap(short = 'i', long, default_value = "virus_abundance.tsv")]
    #[clap(help = "Input abundance table (tsv).")]
    pub input: PathBuf,

    /// Output directory for the charts and the summary report.
    ///
    /// If the directory does not exist, it will be created.
    #[clap(short = 'o', long, default_value = "virus_results")]
    #[clap(help = "Output directory for charts and the summary report.")]
    pub output_dir: PathBuf,

    /// Set the output [Verbosity] level.
    #[clap(short = 'v', long)]
    #[clap(value_enum, default_value_t = Verbosity::default())]
    #[clap(help = "Set the output verbosity level.")]
    pub verbosity: Verbosity,
}

impl Default for Cli {
    fn default() -> Self {
        Cli {
            input: PathBuf::from("virus_abundance.tsv"),
            output_dir: PathBuf::from("virus_results"),
            verbosity: Verbosity::default(),
        }
    }
}

//! `viroplot` renders abundance charts and a summary report from virome profiling tables.
//!
//! The input is a headerless, tab-separated table of sequence-abundance rows
//! (`abundance`, `virus_name`, `percentage`), typically produced by an upstream
//! annotation step. From it, `viroplot` emits:
//!
//! 1. A horizontal bar chart of the top 10 most abundant viral species
//!    (`top10_virus_abundance.pdf` / `.png`).
//! 1. A pie chart of bacteriophage vs. other-virus abundance share
//!    (`virus_type_proportion.pdf` / `.png`).
//! 1. A plain-text statistics report (`visualization_summary.txt`).
//!
//! The pipeline is fully sequential: load, rank, aggregate, render, report.

pub mod abundance;
pub mod cli;
pub mod plot;
pub mod report;
pub mod run;
pub mod utils;

#[doc(inline)]
pub use crate::abundance::{AbundanceRecord, AbundanceTable, TypeTotals, VirusType};
#[doc(inline)]
pub use crate::cli::Cli;
#[doc(inline)]
pub use crate::run::run;
#[doc(inline)]
pub use crate::utils::verbosity::Verbosity;

//! The visualization pipeline: load, rank, aggregate, render, report.

use crate::abundance::{AbundanceTable, TypeTotals, TOP_N};
use crate::{cli, plot, report};
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use itertools::Itertools;
use log::info;

#[cfg(test)]
mod tests;

/// Output chart basenames and the report file name, fixed within the
/// output directory.
pub const BAR_CHART: &str = "top10_virus_abundance";
pub const PIE_CHART: &str = "virus_type_proportion";
pub const SUMMARY: &str = "visualization_summary.txt";

/// Run the full pipeline: read the abundance table, render both charts
/// (pdf + png each), and write the summary report.
pub fn run(args: &cli::Cli) -> Result<(), Report> {
    // ------------------------------------------------------------------------
    // Load

    info!("Reading abundance table: {:?}", args.input);
    let table = AbundanceTable::read(&args.input)?;
    info!("Loaded {} records.", table.records.len());

    // ------------------------------------------------------------------------
    // Rank and aggregate

    let top = table.top(TOP_N);
    let totals = TypeTotals::from_records(&table.records);

    let output_dir = &args.output_dir;
    std::fs::create_dir_all(output_dir)
        .wrap_err_with(|| eyre!("Failed to create output directory: {output_dir:?}"))?;

    // ------------------------------------------------------------------------
    // Render

    info!("Rendering top {} abundance bar chart.", top.len());
    let bar_scene = plot::BarChart::new(top).scene();
    let mut outputs = plot::render_chart(&bar_scene, plot::bar::TITLE, output_dir, BAR_CHART)?;

    info!("Rendering virus type proportion pie chart.");
    let pie_scene = plot::PieChart::new(&totals).scene();
    outputs.extend(plot::render_chart(&pie_scene, plot::pie::TITLE, output_dir, PIE_CHART)?);

    // ------------------------------------------------------------------------
    // Report

    info!("Writing summary report.");
    outputs.push(report::write(&table, top, &totals, output_dir)?);

    info!("Done. Outputs:\n{}", outputs.iter().map(|p| format!("  - {}", p.display())).join("\n"));
    Ok(())
}

//! Plain-text statistics report accompanying the charts.

use crate::abundance::{AbundanceRecord, AbundanceTable, TypeTotals};
use crate::run::{BAR_CHART, PIE_CHART, SUMMARY};
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use indoc::formatdoc;
use itertools::Itertools;
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests;

/// Write the summary report into `output_dir` and return its path.
pub fn write(
    table: &AbundanceTable,
    top: &[AbundanceRecord],
    totals: &TypeTotals,
    output_dir: &Path,
) -> Result<PathBuf, Report> {
    let path = output_dir.join(SUMMARY);
    let text = render(table, top, totals);
    std::fs::write(&path, text).wrap_err_with(|| eyre!("Failed to write report: {path:?}"))?;
    Ok(path)
}

/// The report body: data overview, type distribution, top species, and the
/// chart files the run produced.
pub fn render(table: &AbundanceTable, top: &[AbundanceRecord], totals: &TypeTotals) -> String {
    let type_lines = totals
        .summary()
        .into_iter()
        .map(|(virus_type, total, percentage)| {
            format!("   - {virus_type}: {total} ({percentage:.1}%)")
        })
        .join("\n");

    let top_lines = top
        .iter()
        .enumerate()
        .map(|(i, record)| format!("   {}. {}: {}", i + 1, record.virus_name, record.abundance))
        .join("\n");

    formatdoc! {"
        Virome Visualization Summary
        ============================

        1. Data overview:
           - Total viral species: {num_records}
           - Top {num_top} species are shown in the bar chart

        2. Viral type distribution:
        {type_lines}

        3. Top {num_top} most abundant species:
        {top_lines}

        4. Output charts:
           - Abundance bar chart: {BAR_CHART}.pdf/png
           - Type proportion pie chart: {PIE_CHART}.pdf/png
        ",
        num_records = table.records.len(),
        num_top = top.len(),
    }
}

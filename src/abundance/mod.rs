//! Viral abundance records: loading, ranking, and type aggregation.

use crate::utils;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use color_eyre::Help;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};


/// Number of records that feed the bar chart.
pub const TOP_N: usize = 10;

// ----------------------------------------------------------------------------
// VirusType
// ----------------------------------------------------------------------------

/// Coarse viral classification, derived from the species name.
///
/// A species is a [`Bacteriophage`](VirusType::Bacteriophage) iff its name
/// case-insensitively contains the substring `"phage"`. This is a
/// naming-convention check, not a biological classification.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize, strum::Display,
)]
pub enum VirusType {
    #[strum(to_string = "Bacteriophage")]
    Bacteriophage,
    #[strum(to_string = "Other Viruses")]
    OtherViruses,
}

impl VirusType {
    /// Classify a species by its name.
    ///
    /// ```rust
    /// use viroplot::VirusType;
    ///
    /// assert_eq!(VirusType::from_name("Escherichia Phage T4"), VirusType::Bacteriophage);
    /// assert_eq!(VirusType::from_name("Crassvirus"), VirusType::OtherViruses);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().contains("phage") {
            true => VirusType::Bacteriophage,
            false => VirusType::OtherViruses,
        }
    }
}

// ----------------------------------------------------------------------------
// AbundanceRecord
// ----------------------------------------------------------------------------

/// One row of the input abundance table.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AbundanceRecord {
    /// Sequence abundance (read/contig count mapped to this species).
    pub abundance: u64,
    /// Viral species name, as reported by the upstream annotation.
    pub virus_name: String,
    /// Pre-computed percentage from the upstream annotation.
    ///
    /// Carried through from the input but not used by any output; the type
    /// proportions below are recomputed from `abundance`.
    pub percentage: f64,
}

impl AbundanceRecord {
    pub fn virus_type(&self) -> VirusType {
        VirusType::from_name(&self.virus_name)
    }
}

// ----------------------------------------------------------------------------
// AbundanceTable
// ----------------------------------------------------------------------------

/// The full input table, in file order. Loaded once, immutable afterwards.
#[derive(Clone, Debug, Default)]
pub struct AbundanceTable {
    pub records: Vec<AbundanceRecord>,
    pub path: PathBuf,
}

impl AbundanceTable {
    /// Read an abundance table from a headerless delimited file.
    ///
    /// The delimiter is looked up from the file extension
    /// ([`utils::get_delimiter`]). Columns are positional: abundance,
    /// virus name, percentage. Blank lines are skipped.
    pub fn read<P>(path: &P) -> Result<AbundanceTable, Report>
    where
        P: AsRef<Path> + Debug,
    {
        let path = path.as_ref();
        if !path.exists() {
            return Err(eyre!("Abundance table was not found: {path:?}")
                .suggestion("Check the path, or rerun the annotation step that produces it."));
        }

        let delim = utils::get_delimiter(&path)?;
        let file = File::open(path).wrap_err_with(|| eyre!("Failed to read file: {path:?}"))?;

        let mut records = Vec::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line.wrap_err_with(|| eyre!("Failed to read line from: {path:?}"))?;
            if line.trim().is_empty() {
                continue;
            }
            let record = Self::parse_row(&line, delim)
                .wrap_err_with(|| eyre!("Malformed row on line {}: {path:?}", i + 1))?;
            records.push(record);
        }

        Ok(AbundanceTable { records, path: path.to_path_buf() })
    }

    fn parse_row(line: &str, delim: char) -> Result<AbundanceRecord, Report> {
        let fields = line.split(delim).collect_vec();
        let [abundance, virus_name, percentage] = fields[..] else {
            return Err(eyre!("Expected 3 columns, found {}.", fields.len()));
        };
        Ok(AbundanceRecord {
            abundance: abundance
                .trim()
                .parse()
                .wrap_err_with(|| eyre!("Abundance is not an integer: {abundance:?}"))?,
            virus_name: virus_name.trim().to_string(),
            percentage: percentage
                .trim()
                .parse()
                .wrap_err_with(|| eyre!("Percentage is not a number: {percentage:?}"))?,
        })
    }

    /// The first `n` records in file order.
    ///
    /// The upstream producer emits rows sorted by descending abundance, so
    /// these are the top species. No sorting happens here. Tables with fewer
    /// than `n` rows return all of them.
    pub fn top(&self, n: usize) -> &[AbundanceRecord] {
        &self.records[0..self.records.len().min(n)]
    }
}

// ----------------------------------------------------------------------------
// TypeTotals
// ----------------------------------------------------------------------------

/// Summed abundance per [`VirusType`], over every record of the table.
///
/// Only types that actually occur in the input appear in the map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeTotals {
    pub totals: BTreeMap<VirusType, u64>,
}

impl TypeTotals {
    pub fn from_records(records: &[AbundanceRecord]) -> Self {
        let mut totals: BTreeMap<VirusType, u64> = BTreeMap::new();
        records.iter().for_each(|r| *totals.entry(r.virus_type()).or_default() += r.abundance);
        TypeTotals { totals }
    }

    /// Summed abundance across all types.
    pub fn grand_total(&self) -> u64 {
        self.totals.values().sum()
    }

    /// Percentage of the grand total held by `virus_type`.
    ///
    /// Types absent from the input report 0.0, as does everything when the
    /// grand total itself is 0.
    pub fn percentage(&self, virus_type: VirusType) -> f64 {
        let grand_total = self.grand_total();
        if grand_total == 0 {
            return 0.0;
        }
        let total = self.totals.get(&virus_type).copied().unwrap_or_default();
        (total as f64 / grand_total as f64) * 100.0
    }

    /// (type, abundance, percentage) triples, in [`VirusType`] order.
    pub fn summary(&self) -> Vec<(VirusType, u64, f64)> {
        self.totals.iter().map(|(&t, &total)| (t, total, self.percentage(t))).collect_vec()
    }
}

use crate::abundance::{AbundanceRecord, AbundanceTable, TypeTotals, TOP_N};
use crate::report;

use color_eyre::eyre::{Report, Result};

fn table(rows: &[(&str, u64)]) -> AbundanceTable {
    let records = rows
        .iter()
        .map(|&(virus_name, abundance)| AbundanceRecord {
            abundance,
            virus_name: virus_name.to_string(),
            percentage: 0.0,
        })
        .collect();
    AbundanceTable { records, ..Default::default() }
}

#[test]
fn render_sections() {
    let table = table(&[("Phage_A", 120), ("Virus_B", 80)]);
    let top = table.top(TOP_N);
    let totals = TypeTotals::from_records(&table.records);

    let observed = report::render(&table, top, &totals);

    assert!(observed.contains("Total viral species: 2"));
    assert!(observed.contains("Top 2 species are shown in the bar chart"));
    assert!(observed.contains("- Bacteriophage: 120 (60.0%)"));
    assert!(observed.contains("- Other Viruses: 80 (40.0%)"));
    assert!(observed.contains("1. Phage_A: 120"));
    assert!(observed.contains("2. Virus_B: 80"));
    assert!(observed.contains("top10_virus_abundance.pdf/png"));
    assert!(observed.contains("virus_type_proportion.pdf/png"));
}

#[test]
fn render_lists_at_most_ten() {
    let rows = (0..15u64).map(|i| (format!("Virus_{i}"), 100 - i)).collect::<Vec<_>>();
    let rows = rows.iter().map(|(n, a)| (n.as_str(), *a)).collect::<Vec<_>>();
    let table = table(&rows);
    let top = table.top(TOP_N);
    let totals = TypeTotals::from_records(&table.records);

    let observed = report::render(&table, top, &totals);

    assert!(observed.contains("Total viral species: 15"));
    assert!(observed.contains("10. Virus_9: 91"));
    assert!(!observed.contains("11. Virus_10"));
}

#[test]
fn write_report_file() -> Result<(), Report> {
    let dir = tempfile::TempDir::new()?;
    let table = table(&[("Phage_A", 120), ("Virus_B", 80)]);
    let top = table.top(TOP_N);
    let totals = TypeTotals::from_records(&table.records);

    let path = report::write(&table, top, &totals, dir.path())?;
    assert_eq!(path, dir.path().join("visualization_summary.txt"));

    let text = std::fs::read_to_string(&path)?;
    assert!(text.starts_with("Virome Visualization Summary"));
    Ok(())
}

use crate::abundance::{AbundanceRecord, TypeTotals, VirusType, TOP_N};
use crate::plot::scene::Primitive;
use crate::plot::{self, BarChart, PieChart};

use color_eyre::eyre::{Report, Result};
use itertools::Itertools;

fn record(virus_name: &str, abundance: u64) -> AbundanceRecord {
    AbundanceRecord { abundance, virus_name: virus_name.to_string(), percentage: 0.0 }
}

// ----------------------------------------------------------------------------
// Bar chart layout

#[test]
fn bar_chart_full_table() {
    let records = (0..12u64).map(|i| record(&format!("Virus_{i}"), 120 - i)).collect_vec();
    let chart = BarChart::new(&records[0..TOP_N.min(records.len())]);

    assert_eq!(chart.bars.len(), 10);
    // input order, top to bottom
    let names = chart.bars.iter().map(|b| b.name.as_str()).collect_vec();
    assert_eq!(names[0], "Virus_0");
    assert_eq!(names[9], "Virus_9");
    assert!(chart.bars.windows(2).all(|w| w[0].y < w[1].y));
    // the first (highest) record draws the longest bar
    assert!(chart.bars.windows(2).all(|w| w[0].w >= w[1].w));
}

#[test]
fn bar_chart_short_table() {
    let records = vec![record("Phage_A", 3), record("Virus_B", 2), record("Virus_C", 1)];
    let chart = BarChart::new(&records);
    assert_eq!(chart.bars.len(), 3);
}

#[test]
fn bar_chart_scene_labels() {
    let records = vec![record("Phage_A", 120), record("Virus_B", 80)];
    let scene = BarChart::new(&records).scene();

    // one polygon per bar
    assert_eq!(scene.num_polygons(), 2);

    let texts = scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect_vec();
    assert!(texts.contains(&plot::bar::TITLE));
    assert!(texts.contains(&plot::bar::X_LABEL));
    assert!(texts.contains(&"Phage_A"));
    assert!(texts.contains(&"120"));
}

// ----------------------------------------------------------------------------
// Pie chart layout

#[test]
fn pie_chart_two_types() {
    let records = vec![record("Phage_A", 120), record("Virus_B", 80)];
    let chart = PieChart::new(&TypeTotals::from_records(&records));

    assert_eq!(chart.wedges.len(), 2);
    assert_eq!(chart.wedges[0].virus_type, VirusType::Bacteriophage);
    assert_eq!(chart.wedges[1].virus_type, VirusType::OtherViruses);

    let sweep_sum: f32 = chart.wedges.iter().map(|w| w.sweep_deg).sum();
    assert!((sweep_sum - 360.0).abs() < 1e-3);

    // wedges start at 12 o'clock and only the first is exploded
    assert_eq!(chart.wedges[0].start_deg, 90.0);
    assert!(chart.wedges[0].offset != (0.0, 0.0));
    assert_eq!(chart.wedges[1].offset, (0.0, 0.0));
}

#[test]
fn pie_chart_single_type() {
    let records = vec![record("Phage_A", 50)];
    let chart = PieChart::new(&TypeTotals::from_records(&records));

    assert_eq!(chart.wedges.len(), 1);
    assert!((chart.wedges[0].sweep_deg - 360.0).abs() < 1e-3);
}

#[test]
fn pie_chart_scene_labels() {
    let records = vec![record("Phage_A", 120), record("Virus_B", 80)];
    let scene = PieChart::new(&TypeTotals::from_records(&records)).scene();

    let texts = scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect_vec();
    assert!(texts.contains(&plot::pie::TITLE));
    assert!(texts.contains(&"60.0%"));
    assert!(texts.contains(&"40.0%"));
    assert!(texts.contains(&"Bacteriophage"));
    assert!(texts.contains(&"Other Viruses"));
}

// ----------------------------------------------------------------------------
// Backends

#[test]
fn render_chart_writes_pdf_and_png() -> Result<(), Report> {
    let dir = tempfile::TempDir::new()?;
    let records = vec![record("Phage_A", 120), record("Virus_B", 80)];
    let scene = BarChart::new(&records).scene();

    let observed = plot::render_chart(&scene, plot::bar::TITLE, dir.path(), "bar")?;
    let expected = vec![dir.path().join("bar.pdf"), dir.path().join("bar.png")];
    assert_eq!(expected, observed);
    for path in &observed {
        assert!(path.exists());
        assert!(std::fs::metadata(path)?.len() > 0);
    }
    Ok(())
}

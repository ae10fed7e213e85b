use crate::cli::Cli;
use crate::run;

use color_eyre::eyre::{Report, Result};

#[test]
fn pipeline_end_to_end() -> Result<(), Report> {
    let dir = tempfile::TempDir::new()?;
    let input = dir.path().join("virus_abundance.tsv");
    std::fs::write(&input, "120\tPhage_A\t5.0\n80\tVirus_B\t3.0\n")?;

    let output_dir = dir.path().join("virus_results");
    let args = Cli { input, output_dir: output_dir.clone(), ..Default::default() };
    run::run(&args)?;

    let expected = [
        "top10_virus_abundance.pdf",
        "top10_virus_abundance.png",
        "virus_type_proportion.pdf",
        "virus_type_proportion.png",
        "visualization_summary.txt",
    ];
    for name in expected {
        let path = output_dir.join(name);
        assert!(path.exists(), "missing output: {path:?}");
    }

    let summary = std::fs::read_to_string(output_dir.join("visualization_summary.txt"))?;
    assert!(summary.contains("- Bacteriophage: 120 (60.0%)"));
    assert!(summary.contains("- Other Viruses: 80 (40.0%)"));
    assert!(summary.contains("1. Phage_A: 120"));
    assert!(summary.contains("2. Virus_B: 80"));
    Ok(())
}

#[test]
fn pipeline_missing_input() -> Result<(), Report> {
    let dir = tempfile::TempDir::new()?;
    let output_dir = dir.path().join("virus_results");
    let args = Cli {
        input: dir.path().join("no_such_table.tsv"),
        output_dir: output_dir.clone(),
        ..Default::default()
    };

    assert!(run::run(&args).is_err());
    // failure happens before any artifact is written
    assert!(!output_dir.exists());
    Ok(())
}

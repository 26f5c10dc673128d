use anyhow::Result;
use contractor_pricing::{BatchEngine, LocalStorage, OutputFormat, PricingConfig};
use tempfile::TempDir;

const JOBS: &str = "\
job,labor_hours,hourly_rate,materials_cost,subcontractor_cost,equipment_cost
Deck,40,35,\"$2,000\",0,500
Fence,,,850,,
Patch,abc,50,-100,0,0
";

#[test]
fn test_batch_csv_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("jobs.csv"), JOBS)?;

    let storage = LocalStorage::new(temp_dir.path());
    let engine = BatchEngine::new(storage, PricingConfig::default());
    let summary = engine.run("jobs.csv", "out/quotes.csv", OutputFormat::Csv)?;

    assert_eq!(summary.rows, 3);

    let mut reader = csv::Reader::from_path(temp_dir.path().join("out/quotes.csv"))?;
    let headers = reader.headers()?.clone();
    let price_index = headers
        .iter()
        .position(|h| h == "total_job_price")
        .unwrap();

    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "Deck");

    // Percentages come from the default config: 35% burden, 15% overhead, 10% profit.
    let deck_price: f64 = rows[0][price_index].parse()?;
    assert!((deck_price - 5553.35).abs() < 1e-6);

    // 850 * 1.15 * 1.10
    let fence_price: f64 = rows[1][price_index].parse()?;
    assert!((fence_price - 1075.25).abs() < 1e-6);

    // Unreadable hours coerce to 0, leaving only the negative materials.
    let patch_price: f64 = rows[2][price_index].parse()?;
    assert!((patch_price - (-126.5)).abs() < 1e-6);

    let expected_total = deck_price + fence_price + patch_price;
    assert!((summary.total_price - expected_total).abs() < 1e-6);

    Ok(())
}

#[test]
fn test_batch_json_uses_configured_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("jobs.csv"),
        "job,materials_cost\nRoof,1000\n",
    )?;

    let config = PricingConfig::from_toml_str(
        r#"
[defaults]
labor_burden_percent = 30
overhead_percent = 20
profit_percent = 0

[output]
currency_symbol = "£"
"#,
    )?;

    let engine = BatchEngine::new(LocalStorage::new(temp_dir.path()), config);
    engine.run("jobs.csv", "quotes.json", OutputFormat::Json)?;

    let report: serde_json::Value =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join("quotes.json"))?)?;
    assert_eq!(report["currency_symbol"], "£");
    assert_eq!(report["totals"]["jobs"], 1);
    assert_eq!(report["quotes"][0]["job"], "Roof");
    assert_eq!(report["quotes"][0]["overhead_percent"], 20.0);
    assert_eq!(report["quotes"][0]["total_job_price"], 1200.0);
    assert!(report["generated_at"].is_string());

    Ok(())
}

#[test]
fn test_batch_missing_input_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let engine = BatchEngine::new(LocalStorage::new(temp_dir.path()), PricingConfig::default());

    let err = engine
        .run("missing.csv", "quotes.csv", OutputFormat::Csv)
        .unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!(!temp_dir.path().join("quotes.csv").exists());

    Ok(())
}

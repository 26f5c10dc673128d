#![cfg(feature = "cli")]

use anyhow::Result;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_contractor-pricing"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_full_margin_json_is_a_sentinel() -> Result<()> {
    let output = run_cli(&["margin", "--cost", "1000", "--percent", "100", "--json"])?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    assert!(!stdout.contains("inf") && !stdout.contains("NaN"), "{}", stdout);

    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["valid"], false);
    assert!(value["reason"].as_str().unwrap().contains("100.0%"));
    Ok(())
}

#[test]
fn test_full_margin_text_has_no_number() -> Result<()> {
    let output = run_cli(&[
        "convert", "--mode", "margin", "--cost", "1000", "--percent", "150",
    ])?;
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("No valid price"));
    assert!(!stdout.contains("inf") && !stdout.contains("NaN"));
    Ok(())
}

#[test]
fn test_unreachable_target_and_break_even_json() -> Result<()> {
    for args in [
        vec![
            "target",
            "--direct-costs",
            "5000",
            "--overhead-percent",
            "70",
            "--net-profit-percent",
            "30",
            "--json",
        ],
        vec![
            "break-even",
            "--fixed-costs",
            "10000",
            "--gross-margin-percent",
            "0",
            "--json",
        ],
    ] {
        let output = run_cli(&args)?;
        assert_eq!(output.status.code(), Some(0));
        let value: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
        assert_eq!(value["valid"], false, "{:?}", args);
    }
    Ok(())
}

#[test]
fn test_margin_json_result() -> Result<()> {
    let output = run_cli(&["margin", "--cost", "1000", "--percent", "30", "--json"])?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
    let price = value["selling_price"].as_f64().unwrap();
    assert!((price - 1428.571_428_571_428_6).abs() < 1e-6);
    Ok(())
}

//! Custom assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that an `analyze` result holds the expected number of diagnostics.
pub fn assert_diagnostic_count(json: &Value, expected: usize) -> Result<()> {
    let diagnostics = json["content"]["diagnostics"]
        .as_array()
        .context("Expected 'content.diagnostics' array in JSON")?;

    if diagnostics.len() != expected {
        anyhow::bail!("Expected {} diagnostics, got {}", expected, diagnostics.len());
    }

    Ok(())
}

/// Assert the exact origin sequence (`rule id` or `custom`) of an `analyze` result.
pub fn assert_origins(json: &Value, expected: &[&str]) -> Result<()> {
    let diagnostics = json["content"]["diagnostics"]
        .as_array()
        .context("Expected 'content.diagnostics' array in JSON")?;

    let origins: Vec<&str> = diagnostics
        .iter()
        .enumerate()
        .map(|(i, d)| {
            d["origin"]
                .as_str()
                .with_context(|| format!("Diagnostic {} missing origin", i))
        })
        .collect::<Result<_>>()?;

    if origins != expected {
        anyhow::bail!("Expected origins {:?}, got {:?}", expected, origins);
    }

    Ok(())
}

/// Assert that a `custom list` result holds exactly these labels, in order.
pub fn assert_custom_labels(json: &Value, expected: &[&str]) -> Result<()> {
    let rules = json["content"]["rules"]
        .as_array()
        .context("Expected 'content.rules' array in JSON")?;

    let labels: Vec<&str> = rules.iter().filter_map(|r| r["label"].as_str()).collect();

    if labels != expected {
        anyhow::bail!("Expected labels {:?}, got {:?}", expected, labels);
    }

    Ok(())
}

//! Report command implementation.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;

use super::sweep::SweepRecord;

/// Valid-read statistics of one product across trials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    /// The product.
    pub product: u64,
    /// Trials that factored it.
    pub trials: usize,
    /// Mean valid percentage.
    pub mean: f64,
    /// Lowest valid percentage.
    pub min: f64,
    /// Highest valid percentage.
    pub max: f64,
}

/// The worst product of one trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialSummary {
    /// Trial id.
    pub id: String,
    /// Placement origin of the trial.
    pub origin: String,
    /// Lowest valid percentage over the trial's products.
    pub min_valid: f64,
}

/// Summary of a sweep directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    /// Per product, ascending by product.
    pub products: Vec<ProductSummary>,
    /// Per trial, ascending by `min_valid`.
    pub trials: Vec<TrialSummary>,
}

/// Read every `trial-*.json` record in `dir`, oldest first.
pub fn load_records(dir: &Path) -> Result<Vec<SweepRecord>> {
    if !dir.is_dir() {
        anyhow::bail!("Directory not found: {}", dir.display());
    }

    let mut records = Vec::new();
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        let is_record = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("trial-") && n.ends_with(".json"));
        if !is_record {
            continue;
        }
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let record: SweepRecord = serde_json::from_str(&source)
            .with_context(|| format!("Invalid trial record: {}", path.display()))?;
        records.push(record);
    }
    records.sort_by(|a, b| a.started_at.cmp(&b.started_at).then_with(|| a.id.cmp(&b.id)));
    Ok(records)
}

/// Aggregate valid percentages per product and per trial.
pub fn summarize(records: &[SweepRecord]) -> SweepReport {
    let mut per_product: BTreeMap<u64, Vec<f64>> = BTreeMap::new();
    let mut trials = Vec::with_capacity(records.len());

    for record in records {
        let mut min_valid = f64::INFINITY;
        for run in &record.runs {
            let valid = run.valid_percentage();
            per_product.entry(run.product).or_default().push(valid);
            min_valid = min_valid.min(valid);
        }
        if record.runs.is_empty() {
            continue;
        }
        trials.push(TrialSummary {
            id: record.id.clone(),
            origin: record.placement.origin.to_string(),
            min_valid,
        });
    }

    let products = per_product
        .into_iter()
        .map(|(product, values)| {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            ProductSummary {
                product,
                trials: values.len(),
                mean: values.iter().sum::<f64>() / values.len() as f64,
                min,
                max,
            }
        })
        .collect();

    trials.sort_by(|a, b| a.min_valid.total_cmp(&b.min_valid));
    SweepReport { products, trials }
}

/// Execute the report command.
pub fn execute(dir: &Path, format: &str) -> Result<()> {
    let records = load_records(dir)?;
    if records.is_empty() {
        anyhow::bail!("No trial records in {}", dir.display());
    }
    let report = summarize(&records);

    match format.to_lowercase().as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "table" => print_table(&report, records.len()),
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    }
    Ok(())
}

fn print_table(report: &SweepReport, num_records: usize) {
    println!(
        "{} {} trial record(s)\n",
        style("✓").green().bold(),
        num_records
    );
    println!(
        "  {:>7}  {:>6}  {:>8}  {:>8}  {:>8}",
        "product", "trials", "mean %", "min %", "max %"
    );
    for p in &report.products {
        println!(
            "  {:>7}  {:>6}  {:>8.2}  {:>8.2}  {:>8.2}",
            style(p.product).cyan(),
            p.trials,
            p.mean,
            p.min,
            p.max
        );
    }

    println!("\n  Trials by worst product:");
    for t in &report.trials {
        println!(
            "  {:>8.2}%  origin {:<8}  {}",
            t.min_valid,
            t.origin,
            style(&t.id).dim()
        );
    }
}

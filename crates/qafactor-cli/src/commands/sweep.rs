//! Sweep command implementation.
//!
//! Every trial searches a placement (or reuses the given one), factors each
//! product on it and writes one `trial-<timestamp>-<uuid>.json` record.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use qafactor_embed::{Placement, WorkingOffsets};
use qafactor_factor::{DecodedResult, FactorOutput, Timing};

use super::common::{RunFile, create_factorer, load_placement, load_run_file, write_json};

/// One product factored within a trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRun {
    /// The product.
    pub product: u64,
    /// Reads requested.
    pub num_reads: u32,
    /// Reads with a broken chain.
    pub chain_breaks: u64,
    /// Decoded pairs in order of first appearance.
    pub results: Vec<DecodedResult>,
    /// Stage timings.
    pub timing: Timing,
}

impl ProductRun {
    /// Percentage of reads that decoded to a valid factorization.
    pub fn valid_percentage(&self) -> f64 {
        self.results
            .iter()
            .filter(|r| r.valid)
            .map(|r| r.percentage_of_occurrences)
            .sum()
    }
}

impl From<FactorOutput> for ProductRun {
    fn from(output: FactorOutput) -> Self {
        Self {
            product: output.product,
            num_reads: output.num_reads,
            chain_breaks: output.chain_breaks,
            results: output.results,
            timing: output.timing,
        }
    }
}

/// Everything one sweep trial produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    /// Unique trial id.
    pub id: String,
    /// When the trial started.
    pub started_at: DateTime<Utc>,
    /// Sampler name.
    pub sampler: String,
    /// Placement shared by every product of the trial.
    pub placement: Placement,
    /// Offset range of the placement.
    pub range: f64,
    /// Per-qubit anneal offsets applied to every product.
    pub anneal_offsets: WorkingOffsets,
    /// One entry per product, in request order.
    pub runs: Vec<ProductRun>,
}

impl SweepRecord {
    /// File name of the record.
    pub fn file_name(&self) -> String {
        format!(
            "trial-{}-{}.json",
            self.started_at.format("%Y%m%dT%H%M%S"),
            self.id
        )
    }
}

/// Run file for one trial. The simulator gets a distinct seed per trial.
fn trial_run_file(run: &RunFile, trial: u32) -> RunFile {
    let mut run = run.clone();
    if matches!(run.sampler.name.to_lowercase().as_str(), "simulator" | "sim") {
        let seed = run
            .sampler
            .extra_u64("seed")
            .unwrap_or(0)
            .wrapping_add(u64::from(trial));
        run.sampler.extra.insert("seed".into(), seed.into());
    }
    run
}

/// Execute the sweep command.
pub async fn execute(
    config: Option<&Path>,
    products: &[u64],
    trials: u32,
    output_dir: &Path,
    placement: Option<&Path>,
    reads: Option<u32>,
) -> Result<()> {
    if products.is_empty() {
        anyhow::bail!("At least one product is required");
    }
    // Reject bad products before any trial runs.
    for &product in products {
        qafactor_factor::check_product(product)?;
    }

    let run = load_run_file(config)?;
    let fixed_placement = placement.map(load_placement).transpose()?;

    println!(
        "{} Sweeping {} product(s) over {} trial(s) into {}",
        style("→").cyan().bold(),
        products.len(),
        trials,
        style(output_dir.display()).green()
    );

    let progress = ProgressBar::new(u64::from(trials) * products.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar().template("{bar:40.cyan/blue} {pos}/{len} {msg}")?,
    );

    let mut written: Vec<PathBuf> = Vec::with_capacity(trials as usize);
    for trial in 0..trials {
        let trial_run = trial_run_file(&run, trial);
        let factorer = create_factorer(&trial_run, reads)?;
        let started_at = Utc::now();

        let scored = match &fixed_placement {
            Some(placement) => factorer.evaluate_placement(placement.clone())?,
            None => factorer.search_placement()?.best,
        };

        let mut runs = Vec::with_capacity(products.len());
        for &product in products {
            progress.set_message(format!("trial {} product {product}", trial + 1));
            let output = factorer.factor(product, Some(&scored.placement)).await?;
            runs.push(ProductRun::from(output));
            progress.inc(1);
        }

        let record = SweepRecord {
            id: Uuid::new_v4().to_string(),
            started_at,
            sampler: trial_run.sampler.name.clone(),
            placement: scored.placement,
            range: scored.range,
            anneal_offsets: scored.offsets,
            runs,
        };
        let path = output_dir.join(record.file_name());
        write_json(&path, &record)?;
        info!(trial, origin = %record.placement.origin, path = %path.display(), "wrote trial record");
        written.push(path);
    }
    progress.finish_and_clear();

    println!(
        "{} Wrote {} trial record(s)",
        style("✓").green().bold(),
        written.len()
    );
    for path in &written {
        println!("  {}", style(path.display()).dim());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_seeds_differ() {
        let mut run = RunFile::default();
        run.sampler.extra.insert("seed".into(), 40u64.into());

        assert_eq!(trial_run_file(&run, 0).sampler.extra_u64("seed"), Some(40));
        assert_eq!(trial_run_file(&run, 2).sampler.extra_u64("seed"), Some(42));
    }

    #[test]
    fn test_trial_seed_wraps() {
        let mut run = RunFile::default();
        run.sampler.extra.insert("seed".into(), u64::MAX.into());

        assert_eq!(
            trial_run_file(&run, 0).sampler.extra_u64("seed"),
            Some(u64::MAX)
        );
        assert_eq!(trial_run_file(&run, 1).sampler.extra_u64("seed"), Some(0));
    }

    #[test]
    fn test_file_name() {
        let record = SweepRecord {
            id: "abc".into(),
            started_at: DateTime::parse_from_rfc3339("2024-03-05T07:08:09Z")
                .unwrap()
                .with_timezone(&Utc),
            sampler: "simulator".into(),
            placement: Placement {
                origin: qafactor_embed::TileOffset::new(0, 0),
                embedding: qafactor_embed::Embedding::new(),
            },
            range: 0.0,
            anneal_offsets: WorkingOffsets {
                offsets: Vec::new(),
                scale: 0.0,
                shift: 0.0,
            },
            runs: Vec::new(),
        };
        assert_eq!(record.file_name(), "trial-20240305T070809-abc.json");
    }

    #[tokio::test]
    async fn test_sweep_writes_one_record_per_trial() {
        let dir = tempfile::tempdir().unwrap();
        let run_path = dir.path().join("run.yaml");
        std::fs::write(
            &run_path,
            "factoring:\n  num_reads: 5\nsampler:\n  name: simulator\n  rows: 6\n  cols: 5\n  sweeps: 10\n",
        )
        .unwrap();
        let out = dir.path().join("runs");

        execute(Some(&run_path), &[21, 15], 2, &out, None, None)
            .await
            .unwrap();

        let records = crate::commands::report::load_records(&out).unwrap();
        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.runs.len(), 2);
            assert_eq!(record.runs[0].product, 21);
            assert_eq!(record.runs[1].product, 15);
            assert_eq!(record.runs[0].num_reads, 5);
            // One offset per qubit of the 6x5 device.
            assert_eq!(record.anneal_offsets.offsets.len(), 6 * 5 * 8);
            assert!(record.anneal_offsets.offsets.iter().all(|o| o.is_finite()));
        }
    }

    #[tokio::test]
    async fn test_sweep_rejects_large_product() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute(None, &[21, 99], 1, dir.path(), None, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}

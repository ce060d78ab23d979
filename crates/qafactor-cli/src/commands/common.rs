//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use console::style;
use serde::{Deserialize, Serialize};

use qafactor_adapter_sim::AnnealingSimulator;
use qafactor_embed::Placement;
use qafactor_factor::{FactorOutput, Factorer, FactoringConfig};
use qafactor_hal::{Sampler, SamplerConfig, SamplerFactory};

/// Contents of a YAML run file.
///
/// ```yaml
/// factoring:
///   num_reads: 500
///   offset_strategy: zeroed
/// sampler:
///   name: simulator
///   rows: 16
///   cols: 16
///   seed: 7
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFile {
    /// Pipeline settings.
    #[serde(default)]
    pub factoring: FactoringConfig,
    /// Sampler selection and its settings.
    #[serde(default = "default_sampler")]
    pub sampler: SamplerConfig,
}

impl Default for RunFile {
    fn default() -> Self {
        Self {
            factoring: FactoringConfig::default(),
            sampler: default_sampler(),
        }
    }
}

fn default_sampler() -> SamplerConfig {
    SamplerConfig::new("simulator")
}

/// Load the run file, or defaults when no path is given.
pub fn load_run_file(path: Option<&Path>) -> Result<RunFile> {
    let Some(path) = path else {
        return Ok(RunFile::default());
    };
    if !path.exists() {
        anyhow::bail!("Run file not found: {}", path.display());
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read run file: {}", path.display()))?;
    serde_yaml_ng::from_str(&source)
        .with_context(|| format!("Invalid run file: {}", path.display()))
}

/// Create the sampler named in `config`.
pub fn create_sampler(config: &SamplerConfig) -> Result<Arc<dyn Sampler>> {
    match config.name.to_lowercase().as_str() {
        "simulator" | "sim" => {
            let simulator = AnnealingSimulator::from_config(config.clone())
                .context("Failed to configure the simulator")?;
            Ok(Arc::new(simulator))
        }
        other => {
            anyhow::bail!("Unknown sampler: '{other}'. Available: simulator");
        }
    }
}

/// Build a factorer from the run file, applying a reads override.
pub fn create_factorer(run: &RunFile, reads: Option<u32>) -> Result<Factorer> {
    let mut config = run.factoring.clone();
    if let Some(reads) = reads {
        config.num_reads = reads;
    }
    let sampler = create_sampler(&run.sampler)?;
    Factorer::new(sampler, config).context("Failed to prepare the factoring pipeline")
}

/// Load a placement written by `search`, either bare or inside a search or
/// factor output.
pub fn load_placement(path: &Path) -> Result<Placement> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read placement: {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&source)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    let inner = value.get("placement").cloned().unwrap_or(value);
    serde_json::from_value(inner)
        .with_context(|| format!("No placement found in {}", path.display()))
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Print the decoded results of one factoring request.
pub fn print_results(output: &FactorOutput) {
    println!(
        "\n{} Results for {} ({} reads, {} with broken chains):",
        style("✓").green().bold(),
        style(output.product).cyan(),
        output.num_reads,
        output.chain_breaks
    );

    for result in output.results.iter().take(16) {
        let bar_len = (result.percentage_of_occurrences / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);
        let pair = format!("{} × {}", result.a, result.b);
        let pair = if result.valid {
            style(pair).green().bold()
        } else {
            style(pair).dim()
        };

        println!(
            "  {:>7}: {:>6} ({:>5.2}%) {}",
            pair,
            result.num_of_occurrences,
            result.percentage_of_occurrences,
            style(bar).green()
        );
    }

    if output.results.len() > 16 {
        println!("  ... and {} more pairs", output.results.len() - 16);
    }

    println!(
        "\n  Valid reads:  {}",
        style(format!("{:.2}%", output.valid_percentage())).yellow()
    );
    println!(
        "  Timing:       search {:.3}s, sample {:.3}s, total {:.3}s",
        output.timing.placement_secs, output.timing.sample_secs, output.timing.total_secs
    );
}

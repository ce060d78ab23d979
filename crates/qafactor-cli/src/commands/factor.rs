//! Factor command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use super::common::{create_factorer, load_placement, load_run_file, print_results, write_json};

/// Execute the factor command.
pub async fn execute(
    config: Option<&Path>,
    product: u64,
    placement: Option<&Path>,
    reads: Option<u32>,
    output: Option<&Path>,
) -> Result<()> {
    let run = load_run_file(config)?;
    let factorer = create_factorer(&run, reads)?;
    let placement = placement.map(load_placement).transpose()?;

    println!(
        "{} Factoring {} on {} ({} reads)",
        style("→").cyan().bold(),
        style(product).green(),
        style(&run.sampler.name).yellow(),
        factorer.config().num_reads
    );
    if let Some(placement) = &placement {
        println!("  Reusing placement at origin {}", placement.origin);
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Sampling...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = factorer.factor(product, placement.as_ref()).await;
    spinner.finish_and_clear();
    let result = result?;

    println!(
        "  Placement at origin {}, offset range {:.4}",
        result.placement.origin, result.range
    );
    print_results(&result);

    if let Some(path) = output {
        write_json(path, &result)?;
        println!(
            "\n{} Output written to {}",
            style("✓").green().bold(),
            style(path.display()).green()
        );
    }

    Ok(())
}

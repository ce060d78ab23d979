//! Search command implementation.

use std::path::Path;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use super::common::{create_factorer, load_run_file, write_json};

/// Execute the search command.
pub async fn execute(config: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let run = load_run_file(config)?;
    let factorer = create_factorer(&run, None)?;

    println!(
        "{} Searching placements on {} ({} working qubits, {} strategy)",
        style("→").cyan().bold(),
        style(factorer.topology().shape()).yellow(),
        factorer.topology().qubits().len(),
        run.factoring.offset_strategy
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message("Scoring translations...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let outcome = factorer.search_placement()?;
    spinner.finish_and_clear();

    let best = &outcome.best;
    println!(
        "\n{} Best origin {} with offset range {}",
        style("✓").green().bold(),
        style(best.placement.origin).cyan(),
        style(format!("{:.4}", best.range)).yellow()
    );
    println!(
        "  Candidates: {} evaluated, {} invalid, {} infeasible",
        outcome.stats.evaluated, outcome.stats.invalid, outcome.stats.infeasible
    );
    println!(
        "  Offset map: scale {:.4}, shift {:.4}",
        best.offsets.scale, best.offsets.shift
    );

    println!("\n  Chains:");
    for (variable, chain) in best.placement.embedding.iter() {
        println!("    {:<6} {} qubits", style(variable).cyan(), chain.len());
    }

    if let Some(path) = output {
        write_json(path, best)?;
        println!(
            "\n{} Placement written to {}",
            style("✓").green().bold(),
            style(path.display()).green()
        );
    }

    Ok(())
}

//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - factoring on Chimera annealers with chain-aware anneal offsets",
        style("qafactor").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qafactor-ir           Ising models and sample sets");
    println!("  qafactor-hal          Sampler abstraction");
    println!("  qafactor-embed        Chimera topology, chain offsets, placement search");
    println!("  qafactor-factor       Multiplier model, decoding, factoring pipeline");
    println!("  qafactor-adapter-sim  Simulated-annealing sampler");
    println!("  qafactor-cli          Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/qafactor/qafactor").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}

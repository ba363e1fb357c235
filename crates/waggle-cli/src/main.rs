use anyhow::{Context, Result};
use clap::Parser;
use waggle::prelude::*;

/// Shortest-walk solver for hexagonal honeycombs.
///
/// Prints a single line: the minimum number of hex steps from the start
/// cell to the target cell, or `No` when that walk exceeds the budget or
/// no path exists. Running with no arguments reproduces the canonical
/// puzzle invocation.
#[derive(Parser)]
#[command(name = "waggle-cli", version)]
struct Cli {
    /// Number of cells along one edge of the comb.
    #[arg(long, default_value_t = 6)]
    edge_length: u32,

    /// Maximum number of steps the walk may take.
    #[arg(long, default_value_t = 45)]
    budget: u32,

    /// Identity of the start cell (canonical scan order, 1-based).
    #[arg(long, default_value_t = 1)]
    start: u32,

    /// Identity of the target cell.
    #[arg(long, default_value_t = 45)]
    target: u32,

    /// Identities of blocked cells, comma separated.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [15, 16, 17, 19, 26, 27, 52, 53, 58, 65, 74]
    )]
    blocked: Vec<u32>,
}

/// The printed verdict: the distance when it fits the budget, else `No`.
///
/// Unreachable and over-budget walks print the same text; the library
/// result keeps them distinguishable for callers that care.
fn verdict(distance: Option<u32>, budget: u32) -> String {
    match distance {
        Some(steps) if steps <= budget => steps.to_string(),
        _ => "No".to_string(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CombConfig::new(
        cli.edge_length,
        CellId(cli.start),
        CellId(cli.target),
        cli.blocked.iter().copied().map(CellId),
    );
    let distance = solve(&config).with_context(|| {
        format!(
            "solving edge-{} comb from cell {} to cell {}",
            cli.edge_length, cli.start, cli.target
        )
    })?;
    println!("{}", verdict(distance, cli.budget));
    Ok(())
}

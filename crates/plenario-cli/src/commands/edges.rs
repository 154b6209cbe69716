//! Edges command implementation.

use super::load_builder;
use crate::cli::EdgesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use plenario_domain::Edge;
use plenario_network::NetworkBuilder;

/// Execute the edges command.
pub fn execute_edges(args: EdgesArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let builder = load_builder(&args.input, &config.columns)?;
    let edges = select_edges(&builder, args.lowest, args.highest);

    println!("{}", formatter.format_edges(builder.get_network(), &edges)?);

    Ok(())
}

/// Full ascending list, or one end of it when a limit is given.
pub fn select_edges(
    builder: &NetworkBuilder,
    lowest: Option<usize>,
    highest: Option<usize>,
) -> Vec<&Edge> {
    match (lowest, highest) {
        (Some(n), _) => builder.least_aligned(n),
        (None, Some(n)) => builder.most_aligned(n),
        (None, None) => builder.get_sorted_edges(),
    }
}

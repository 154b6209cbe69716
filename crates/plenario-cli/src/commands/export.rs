//! Export command implementation.

use super::load_builder;
use crate::cli::ExportArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use plenario_network::NodeLinkGraph;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Execute the export command.
pub fn execute_export(args: ExportArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let builder = load_builder(&args.input, &config.columns)?;
    let document = NodeLinkGraph::from_graph(builder.get_network());

    match args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            document.write_json(&mut writer)?;
            writer.flush()?;
            eprintln!(
                "{}",
                formatter.success(&format!(
                    "Wrote {} nodes and {} links to {}",
                    document.nodes.len(),
                    document.links.len(),
                    path.display()
                ))
            );
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            document.write_json(&mut handle)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}

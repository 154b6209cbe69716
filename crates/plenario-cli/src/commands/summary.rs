//! Summary command implementation.

use super::load_builder;
use crate::cli::InputArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the summary command.
pub fn execute_summary(args: InputArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let builder = load_builder(&args, &config.columns)?;
    println!("{}", formatter.format_stats(builder.stats())?);
    Ok(())
}

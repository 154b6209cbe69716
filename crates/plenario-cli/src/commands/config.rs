//! Config command implementation.

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the config command.
pub fn execute_config(args: ConfigArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if args.path {
        let path = Config::path()?;
        println!("{}", path.display());
        if !path.exists() {
            eprintln!("{}", formatter.info("File not found, defaults are in effect"));
        }
        return Ok(());
    }

    print!("{}", config.to_toml()?);
    Ok(())
}

//! Command implementations.

pub mod config;
pub mod edges;
pub mod export;
pub mod summary;

pub use self::config::execute_config;
pub use self::edges::execute_edges;
pub use self::export::execute_export;
pub use self::summary::execute_summary;

use crate::cli::InputArgs;
use crate::error::Result;
use plenario_network::{NetworkBuilder, NetworkConfig, RecordTable, WeightingPolicy};
use std::fs;

/// Read the input records and build the requested network.
pub fn load_builder(args: &InputArgs, columns: &NetworkConfig) -> Result<NetworkBuilder> {
    let json = fs::read_to_string(&args.input)?;
    let table = RecordTable::from_json_records(&json)?;
    tracing::debug!(
        input = %args.input.display(),
        rows = table.row_count(),
        columns = table.columns().len(),
        "records loaded"
    );

    let policy = WeightingPolicy::from_config(args.policy.into(), columns);
    let mut builder = NetworkBuilder::new(table, policy);
    builder.build_network()?;
    Ok(builder)
}

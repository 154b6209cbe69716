//! Network builder: shared node population plus policy dispatch

use crate::config::IdentityColumns;
use crate::error::{NetworkError, Result};
use crate::policy::WeightingPolicy;
use crate::stats::BuildStats;
use crate::table::RecordTable;
use plenario_domain::{Edge, Legislator, LegislatorGraph, LegislatorId};
use std::time::Instant;

/// Builds one alignment network from one record table
///
/// The builder owns both the input table and the output graph. The graph
/// starts empty and is only replaced when `build_network` succeeds, so a
/// failed build never exposes a partially populated graph.
///
/// # Examples
///
/// ```
/// use plenario_network::{NetworkBuilder, RecordTable, WeightingPolicy};
///
/// # fn main() -> Result<(), plenario_network::NetworkError> {
/// let table = RecordTable::from_json_records(r#"[
///     {"id_deputado": 1, "nome_deputado": "A", "siglaPartido_deputado": "PT",
///      "siglaUf_deputado": "SP", "titulo": "FrenteY"},
///     {"id_deputado": 2, "nome_deputado": "B", "siglaPartido_deputado": "PSDB",
///      "siglaUf_deputado": "RJ", "titulo": "FrenteY"}
/// ]"#)?;
///
/// let mut builder = NetworkBuilder::new(table, WeightingPolicy::membership());
/// builder.build_network()?;
///
/// let edges = builder.get_sorted_edges();
/// assert_eq!(edges.len(), 1);
/// assert_eq!(edges[0].weight(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    table: RecordTable,
    policy: WeightingPolicy,
    graph: LegislatorGraph,
    stats: BuildStats,
    built: bool,
}

impl NetworkBuilder {
    /// Create a builder over `table` using `policy`
    pub fn new(table: RecordTable, policy: WeightingPolicy) -> Self {
        Self {
            table,
            policy,
            graph: LegislatorGraph::new(),
            stats: BuildStats::new(),
            built: false,
        }
    }

    /// Builder for a membership table with default column names
    pub fn membership(table: RecordTable) -> Self {
        Self::new(table, WeightingPolicy::membership())
    }

    /// Builder for a vote table with default column names
    pub fn agreement(table: RecordTable) -> Self {
        Self::new(table, WeightingPolicy::agreement())
    }

    /// Populate nodes, then edges
    ///
    /// Fails with `InvalidInput` if a required column is absent and with
    /// `MalformedRow` on the first unusable row. A table with zero rows
    /// yields an empty graph. Each builder builds once; a second call
    /// returns `AlreadyBuilt`.
    pub fn build_network(&mut self) -> Result<()> {
        if self.built {
            return Err(NetworkError::AlreadyBuilt);
        }
        let start = Instant::now();
        self.policy.check_columns(&self.table)?;

        let mut graph = LegislatorGraph::new();
        let mut stats = BuildStats::new();
        stats.policy = Some(self.policy.kind());
        stats.rows_read = self.table.row_count();

        let legislators = populate_nodes(&self.table, self.policy.identity(), &mut graph)?;
        self.policy
            .weigh(&self.table, &legislators, &mut graph, &mut stats)?;

        stats.record_graph(&graph);
        stats.elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            policy = %self.policy.kind(),
            rows = stats.rows_read,
            nodes = stats.nodes,
            edges = stats.edges,
            elapsed_ms = stats.elapsed_ms,
            "network built"
        );

        self.graph = graph;
        self.stats = stats;
        self.built = true;
        Ok(())
    }

    /// The owned graph; empty until `build_network` succeeds
    pub fn get_network(&self) -> &LegislatorGraph {
        &self.graph
    }

    /// All edges ascending by weight, ties in insertion order
    pub fn get_sorted_edges(&self) -> Vec<&Edge> {
        self.graph.sorted_edges()
    }

    /// The `n` highest-weight edges, strongest first
    pub fn most_aligned(&self, n: usize) -> Vec<&Edge> {
        self.get_sorted_edges().into_iter().rev().take(n).collect()
    }

    /// The `n` lowest-weight edges, weakest first
    pub fn least_aligned(&self, n: usize) -> Vec<&Edge> {
        self.get_sorted_edges().into_iter().take(n).collect()
    }

    /// Statistics of the last successful build
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Whether `build_network` has succeeded
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// The weighting policy in use
    pub fn policy(&self) -> &WeightingPolicy {
        &self.policy
    }

    /// The input table
    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    /// Consume the builder and return the graph
    pub fn into_network(self) -> LegislatorGraph {
        self.graph
    }
}

/// Add one node per distinct legislator id, with attributes from the first
/// row seen for that id; returns the ids in first-appearance order
///
/// Fails with `MalformedRow` on any row with a null identity field, even
/// when the id was already seen.
fn populate_nodes(
    table: &RecordTable,
    identity: IdentityColumns<'_>,
    graph: &mut LegislatorGraph,
) -> Result<Vec<LegislatorId>> {
    let id_column = table.require_column(identity.legislator_id)?;
    let name_column = table.require_column(identity.legislator_name)?;
    let party_column = table.require_column(identity.party)?;
    let state_column = table.require_column(identity.state)?;

    let mut order = Vec::new();
    for row in 0..table.row_count() {
        let id = table.legislator_id(row, id_column)?;
        let name = table.text(row, name_column)?;
        let party = table.text(row, party_column)?;
        let state = table.text(row, state_column)?;
        if graph.add_node(Legislator::new(id, name, party, state)) {
            order.push(id);
        }
    }
    Ok(order)
}

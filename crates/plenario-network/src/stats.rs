//! Statistics collected during a build

use crate::policy::PolicyKind;
use plenario_domain::LegislatorGraph;
use serde::Serialize;

/// Statistics collected by one `build_network` pass
///
/// Tracks input size, graph size and how much pairwise work the policy did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Policy that produced the graph (`None` before a build)
    pub policy: Option<PolicyKind>,

    /// Input rows consumed
    pub rows_read: usize,

    /// Distinct groups (membership) or ballots (agreement) seen
    pub events: usize,

    /// Pairs compared by the policy
    pub pair_comparisons: u64,

    /// Nodes in the finished graph
    pub nodes: usize,

    /// Edges in the finished graph
    pub edges: usize,

    /// Edges whose weight is exactly zero
    pub zero_weight_edges: usize,

    /// Nodes without any edge
    pub isolated_nodes: usize,

    /// Wall-clock duration of the build in milliseconds
    pub elapsed_ms: u64,
}

impl BuildStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one pair comparison
    pub fn record_comparison(&mut self) {
        self.pair_comparisons += 1;
    }

    /// Fill the graph-shape counters from a finished graph
    pub fn record_graph(&mut self, graph: &LegislatorGraph) {
        self.nodes = graph.node_count();
        self.edges = graph.edge_count();
        self.zero_weight_edges = graph.edges().filter(|edge| edge.weight() == 0).count();
        self.isolated_nodes = graph.isolated_nodes().len();
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let policy = self
            .policy
            .map(|kind| kind.as_str())
            .unwrap_or("not built");
        let event_label = match self.policy {
            Some(PolicyKind::Agreement) => "Ballots",
            _ => "Groups",
        };

        let lines = vec![
            "Network Build Summary".to_string(),
            "=====================".to_string(),
            format!("Policy: {}", policy),
            format!("Rows read: {}", self.rows_read),
            format!("{}: {}", event_label, self.events),
            format!("Pair comparisons: {}", self.pair_comparisons),
            format!("Nodes: {}", self.nodes),
            format!("Edges: {}", self.edges),
            format!("  Zero-weight: {}", self.zero_weight_edges),
            format!("Isolated nodes: {}", self.isolated_nodes),
            format!("Elapsed: {}ms", self.elapsed_ms),
        ];
        lines.join("\n")
    }
}

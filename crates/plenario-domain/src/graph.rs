//! Undirected legislator graph
//!
//! Adjacency is kept as an insertion-ordered map from [`PairKey`] to
//! [`Edge`], next to an insertion-ordered node map. Both orders are part of
//! the contract: `sorted_edges` breaks weight ties by edge insertion order.

use crate::{Edge, EdgeAttributes, Legislator, LegislatorId, PairKey};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Undirected, simple, weighted graph of legislators
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegislatorGraph {
    nodes: IndexMap<LegislatorId, Legislator>,
    edges: IndexMap<PairKey, Edge>,
}

impl LegislatorGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node; returns `false` and keeps the existing attributes if the
    /// id is already present
    pub fn add_node(&mut self, legislator: Legislator) -> bool {
        if self.nodes.contains_key(&legislator.id) {
            return false;
        }
        self.nodes.insert(legislator.id, legislator);
        true
    }

    /// Whether the graph has a node for `id`
    pub fn contains_node(&self, id: LegislatorId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Get the node for `id`
    pub fn node(&self, id: LegislatorId) -> Option<&Legislator> {
        self.nodes.get(&id)
    }

    /// Iterate nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Legislator> {
        self.nodes.values()
    }

    /// Iterate node ids in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = LegislatorId> + '_ {
        self.nodes.keys().copied()
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has neither nodes nor edges
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Get the edge between `a` and `b`, in either direction
    pub fn edge(&self, a: LegislatorId, b: LegislatorId) -> Option<&Edge> {
        PairKey::new(a, b).and_then(|key| self.edges.get(&key))
    }

    /// Whether an edge joins `a` and `b`
    pub fn has_edge(&self, a: LegislatorId, b: LegislatorId) -> bool {
        self.edge(a, b).is_some()
    }

    /// Weight of the edge between `a` and `b`
    pub fn weight(&self, a: LegislatorId, b: LegislatorId) -> Option<i64> {
        self.edge(a, b).map(Edge::weight)
    }

    /// Get the attributes of the edge between `a` and `b`, creating the edge
    /// with `initial_weight` if it does not exist yet
    ///
    /// Returns `None` (and changes nothing) for a self-loop or when either
    /// endpoint is not a node of the graph.
    pub fn upsert_edge(
        &mut self,
        a: LegislatorId,
        b: LegislatorId,
        initial_weight: i64,
    ) -> Option<&mut EdgeAttributes> {
        let key = PairKey::new(a, b)?;
        if !self.contains_node(a) || !self.contains_node(b) {
            return None;
        }
        let edge = self
            .edges
            .entry(key)
            .or_insert_with(|| Edge::new(a, b, initial_weight));
        Some(&mut edge.attributes)
    }

    /// Create or overwrite the edge between `a` and `b` with `weight`
    ///
    /// Returns `false` for a self-loop or an unknown endpoint.
    pub fn set_edge(&mut self, a: LegislatorId, b: LegislatorId, weight: i64) -> bool {
        match self.upsert_edge(a, b, weight) {
            Some(attributes) => {
                attributes.weight = weight;
                true
            }
            None => false,
        }
    }

    /// Iterate edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Edges sorted ascending by weight, ties kept in insertion order
    pub fn sorted_edges(&self) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.edges.values().collect();
        // sort_by_key is stable
        edges.sort_by_key(|edge| edge.weight());
        edges
    }

    /// Neighbors of `id` with the weight of the connecting edge
    pub fn neighbors(&self, id: LegislatorId) -> Vec<(LegislatorId, i64)> {
        self.edges
            .iter()
            .filter_map(|(key, edge)| key.other(id).map(|other| (other, edge.weight())))
            .collect()
    }

    /// Number of edges incident to `id`
    pub fn degree(&self, id: LegislatorId) -> usize {
        self.edges.keys().filter(|key| key.contains(id)).count()
    }

    /// Nodes without any incident edge, in insertion order
    pub fn isolated_nodes(&self) -> Vec<LegislatorId> {
        let incident: HashSet<LegislatorId> = self
            .edges
            .keys()
            .flat_map(|key| [key.low(), key.high()])
            .collect();
        self.nodes
            .keys()
            .copied()
            .filter(|id| !incident.contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(v: i64) -> LegislatorId {
        LegislatorId::new(v)
    }

    fn graph_with(ids: &[i64]) -> LegislatorGraph {
        let mut graph = LegislatorGraph::new();
        for &v in ids {
            graph.add_node(Legislator::new(id(v), format!("Dep {}", v), "PT", "SP"));
        }
        graph
    }

    #[test]
    fn test_add_node_keeps_first_attributes() {
        let mut graph = LegislatorGraph::new();
        assert!(graph.add_node(Legislator::new(id(1), "First", "PT", "SP")));
        assert!(!graph.add_node(Legislator::new(id(1), "Second", "PL", "RJ")));

        let node = graph.node(id(1)).unwrap();
        assert_eq!(node.name, "First");
        assert_eq!(node.party, "PT");
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_self_loop_is_refused() {
        let mut graph = graph_with(&[1]);
        assert!(graph.upsert_edge(id(1), id(1), 0).is_none());
        assert!(!graph.set_edge(id(1), id(1), 3));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_edge_to_unknown_node_is_refused() {
        let mut graph = graph_with(&[1]);
        assert!(!graph.set_edge(id(1), id(2), 1));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_edges_are_undirected() {
        let mut graph = graph_with(&[1, 2]);
        graph.set_edge(id(2), id(1), 4);
        assert_eq!(graph.weight(id(1), id(2)), Some(4));
        assert_eq!(graph.weight(id(2), id(1)), Some(4));

        // Same pair from the other side updates the existing edge
        graph.set_edge(id(1), id(2), 5);
        assert_eq!(graph.edge_count(), 1);
        let edge = graph.edge(id(1), id(2)).unwrap();
        assert_eq!(edge.source, id(2));
        assert_eq!(edge.weight(), 5);
    }

    #[test]
    fn test_upsert_accumulates() {
        let mut graph = graph_with(&[1, 2]);
        for delta in [1, 1, -1] {
            if let Some(attributes) = graph.upsert_edge(id(1), id(2), 0) {
                attributes.weight += delta;
            }
        }
        assert_eq!(graph.weight(id(1), id(2)), Some(1));
    }

    #[test]
    fn test_sorted_edges_stable_on_ties() {
        let mut graph = graph_with(&[1, 2, 3, 4]);
        graph.set_edge(id(1), id(2), 2);
        graph.set_edge(id(3), id(4), 1);
        graph.set_edge(id(1), id(3), 2);
        graph.set_edge(id(2), id(4), -1);

        let order: Vec<(i64, i64)> = graph
            .sorted_edges()
            .iter()
            .map(|e| (e.source.value(), e.target.value()))
            .collect();
        assert_eq!(order, vec![(2, 4), (3, 4), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_neighbors_degree_and_isolated() {
        let mut graph = graph_with(&[1, 2, 3, 4]);
        graph.set_edge(id(1), id(2), 3);
        graph.set_edge(id(3), id(1), -1);

        let mut neighbors = graph.neighbors(id(1));
        neighbors.sort();
        assert_eq!(neighbors, vec![(id(2), 3), (id(3), -1)]);
        assert_eq!(graph.degree(id(1)), 2);
        assert_eq!(graph.degree(id(4)), 0);
        assert_eq!(graph.isolated_nodes(), vec![id(4)]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = LegislatorGraph::new();
        assert!(graph.is_empty());
        assert!(graph.sorted_edges().is_empty());
        assert!(graph.isolated_nodes().is_empty());
    }
}

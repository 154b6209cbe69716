//! Node-link export of a finished graph
//!
//! The layout follows the node-link JSON convention understood by common
//! graph visualization tools: a `nodes` array with attributes and a `links`
//! array with `source`/`target` ids.

use crate::error::Result;
use plenario_domain::LegislatorGraph;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// One node of the export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLinkNode {
    /// Legislator id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Party acronym
    pub party: String,
    /// State acronym
    pub state: String,
}

/// One link of the export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLinkEdge {
    /// First endpoint id
    pub source: i64,
    /// Second endpoint id
    pub target: i64,
    /// Edge weight
    pub weight: i64,
}

/// Serializable node-link document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLinkGraph {
    /// Always `false`
    pub directed: bool,
    /// Always `false`
    pub multigraph: bool,
    /// Nodes in insertion order
    pub nodes: Vec<NodeLinkNode>,
    /// Links in insertion order
    pub links: Vec<NodeLinkEdge>,
}

impl NodeLinkGraph {
    /// Snapshot a graph
    pub fn from_graph(graph: &LegislatorGraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| NodeLinkNode {
                id: node.id.value(),
                name: node.name.clone(),
                party: node.party.clone(),
                state: node.state.clone(),
            })
            .collect();
        let links = graph
            .edges()
            .map(|edge| NodeLinkEdge {
                source: edge.source.value(),
                target: edge.target.value(),
                weight: edge.weight(),
            })
            .collect();

        Self {
            directed: false,
            multigraph: false,
            nodes,
            links,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty-printed JSON to `writer`
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plenario_domain::{Legislator, LegislatorId};

    #[test]
    fn test_from_graph() {
        let mut graph = LegislatorGraph::new();
        graph.add_node(Legislator::new(LegislatorId::new(1), "A", "PT", "SP"));
        graph.add_node(Legislator::new(LegislatorId::new(2), "B", "PSDB", "RJ"));
        graph.add_node(Legislator::new(LegislatorId::new(3), "C", "PL", "MG"));
        graph.set_edge(LegislatorId::new(2), LegislatorId::new(1), -3);

        let export = NodeLinkGraph::from_graph(&graph);
        assert!(!export.directed);
        assert_eq!(export.nodes.len(), 3);
        assert_eq!(export.nodes[1].party, "PSDB");
        assert_eq!(
            export.links,
            vec![NodeLinkEdge {
                source: 2,
                target: 1,
                weight: -3
            }]
        );
    }

    #[test]
    fn test_json_shape() {
        let mut graph = LegislatorGraph::new();
        graph.add_node(Legislator::new(LegislatorId::new(1), "A", "PT", "SP"));

        let json = NodeLinkGraph::from_graph(&graph).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["directed"], false);
        assert_eq!(value["nodes"][0]["id"], 1);
        assert_eq!(value["nodes"][0]["state"], "SP");
        assert!(value["links"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_write_json() {
        let graph = LegislatorGraph::new();
        let mut buffer = Vec::new();
        NodeLinkGraph::from_graph(&graph).write_json(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"multigraph\": false"));
    }
}

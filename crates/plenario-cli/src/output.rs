//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use plenario_domain::{Edge, LegislatorGraph, LegislatorId};
use plenario_network::BuildStats;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format edges of `graph`, in the order given.
    pub fn format_edges(&self, graph: &LegislatorGraph, edges: &[&Edge]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_edges_json(graph, edges),
            OutputFormat::Table => self.format_edges_table(graph, edges),
            OutputFormat::Quiet => self.format_edges_quiet(edges),
        }
    }

    /// Format build statistics.
    pub fn format_stats(&self, stats: &BuildStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
            OutputFormat::Table => Ok(stats.summary()),
            OutputFormat::Quiet => Ok(format!("{} {}", stats.nodes, stats.edges)),
        }
    }

    fn format_edges_json(&self, graph: &LegislatorGraph, edges: &[&Edge]) -> Result<String> {
        let json_edges: Vec<serde_json::Value> = edges
            .iter()
            .map(|e| {
                serde_json::json!({
                    "source": e.source.value(),
                    "source_name": name_of(graph, e.source),
                    "target": e.target.value(),
                    "target_name": name_of(graph, e.target),
                    "weight": e.weight(),
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_edges)?)
    }

    fn format_edges_table(&self, graph: &LegislatorGraph, edges: &[&Edge]) -> Result<String> {
        if edges.is_empty() {
            return Ok(self.colorize("No edges found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Source", "Name", "Party", "Target", "Name", "Party", "Weight"]);

        for edge in edges {
            let (source_name, source_party) = label_of(graph, edge.source);
            let (target_name, target_party) = label_of(graph, edge.target);
            builder.push_record([
                edge.source.to_string(),
                source_name,
                source_party,
                edge.target.to_string(),
                target_name,
                target_party,
                edge.weight().to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// One `source target weight` line per edge.
    fn format_edges_quiet(&self, edges: &[&Edge]) -> Result<String> {
        let lines: Vec<String> = edges
            .iter()
            .map(|e| format!("{} {} {}", e.source, e.target, e.weight()))
            .collect();
        Ok(lines.join("\n"))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn name_of(graph: &LegislatorGraph, id: LegislatorId) -> String {
    graph
        .node(id)
        .map(|node| node.name.clone())
        .unwrap_or_default()
}

fn label_of(graph: &LegislatorGraph, id: LegislatorId) -> (String, String) {
    graph
        .node(id)
        .map(|node| (node.name.clone(), format!("{}-{}", node.party, node.state)))
        .unwrap_or_default()
}

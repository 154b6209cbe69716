//! Plenario Network
//!
//! Builds legislator alignment networks from flat record tables.
//!
//! # Overview
//!
//! The input is a table of per-legislator event rows (front memberships or
//! roll-call votes) already joined with name, party and state. The output is
//! an undirected weighted [`LegislatorGraph`](plenario_domain::LegislatorGraph).
//!
//! # Architecture
//!
//! ```text
//! RecordTable → NetworkBuilder::build_network → LegislatorGraph → sorted edges / NodeLinkGraph
//! ```
//!
//! Two weighting policies are available:
//!
//! | Policy | Event column | Edge weight | Zero-weight edges |
//! |--------|--------------|-------------|-------------------|
//! | **Membership** | `titulo` | shared groups | never |
//! | **Agreement** | `id` + `tipoVoto` | agreements minus disagreements | kept |
//!
//! # Usage
//!
//! ```no_run
//! use plenario_network::{NetworkBuilder, RecordTable, WeightingPolicy};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let json = std::fs::read_to_string("votos.json")?;
//! let table = RecordTable::from_json_records(&json)?;
//!
//! let mut builder = NetworkBuilder::new(table, WeightingPolicy::agreement());
//! builder.build_network()?;
//!
//! for edge in builder.least_aligned(5) {
//!     println!("{} - {}: {}", edge.source, edge.target, edge.weight());
//! }
//! println!("{}", builder.stats().summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Column names default to the ones written by the enrichment step and can
//! be overridden via TOML:
//!
//! ```toml
//! [membership]
//! legislator_id = "id_deputado"
//! legislator_name = "nome_deputado"
//! party = "siglaPartido_deputado"
//! state = "siglaUf_deputado"
//! group_label = "titulo"
//!
//! [agreement]
//! legislator_id = "id_deputado"
//! legislator_name = "nome"
//! party = "siglaPartido"
//! state = "siglaUf"
//! ballot_id = "id"
//! vote_choice = "tipoVoto"
//! ```

#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod export;
mod policy;
mod stats;
mod table;

pub use builder::NetworkBuilder;
pub use config::{AgreementColumns, IdentityColumns, MembershipColumns, NetworkConfig};
pub use error::{NetworkError, Result};
pub use export::{NodeLinkEdge, NodeLinkGraph, NodeLinkNode};
pub use policy::{combinations, PolicyKind, WeightingPolicy};
pub use stats::BuildStats;
pub use table::{Cell, RecordTable};

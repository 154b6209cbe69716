//! Edge-weighting policies
//!
//! The set of policies is closed, so it is an enum rather than a trait: each
//! variant carries its own column mapping and the builder dispatches with a
//! `match`. Both policies enumerate pairs with [`combinations`], which visits
//! every unordered pair of a slice exactly once.

use crate::config::{AgreementColumns, IdentityColumns, MembershipColumns, NetworkConfig};
use crate::error::{NetworkError, Result};
use crate::stats::BuildStats;
use crate::table::{Cell, RecordTable};
use indexmap::IndexMap;
use plenario_domain::{LegislatorGraph, LegislatorId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Which weighting policy to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Shared front/committee memberships
    Membership,
    /// Signed roll-call agreement
    Agreement,
}

impl PolicyKind {
    /// Lowercase name of the policy
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Membership => "membership",
            PolicyKind::Agreement => "agreement",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "membership" | "frentes" => Ok(PolicyKind::Membership),
            "agreement" | "votes" | "votacoes" => Ok(PolicyKind::Agreement),
            other => Err(NetworkError::Config(format!("Unknown policy '{}'", other))),
        }
    }
}

/// Edge-weighting policy together with the columns it reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeightingPolicy {
    /// Edge weight = number of groups both legislators belong to; pairs
    /// sharing nothing get no edge
    Membership(MembershipColumns),

    /// Edge weight = agreements minus disagreements over every ballot both
    /// legislators voted in
    ///
    /// Edges are created on the first co-vote and never removed, so a pair
    /// whose tally cancels out keeps an edge of weight zero. The membership
    /// policy never produces zero-weight edges. Pairs that never co-vote get
    /// no edge.
    Agreement(AgreementColumns),
}

impl WeightingPolicy {
    /// Membership policy with the default column names
    pub fn membership() -> Self {
        WeightingPolicy::Membership(MembershipColumns::default())
    }

    /// Agreement policy with the default column names
    pub fn agreement() -> Self {
        WeightingPolicy::Agreement(AgreementColumns::default())
    }

    /// Policy of the given kind using the columns from `config`
    pub fn from_config(kind: PolicyKind, config: &NetworkConfig) -> Self {
        match kind {
            PolicyKind::Membership => WeightingPolicy::Membership(config.membership.clone()),
            PolicyKind::Agreement => WeightingPolicy::Agreement(config.agreement.clone()),
        }
    }

    /// Kind of this policy
    pub fn kind(&self) -> PolicyKind {
        match self {
            WeightingPolicy::Membership(_) => PolicyKind::Membership,
            WeightingPolicy::Agreement(_) => PolicyKind::Agreement,
        }
    }

    /// Columns identifying a legislator
    pub fn identity(&self) -> IdentityColumns<'_> {
        match self {
            WeightingPolicy::Membership(columns) => columns.identity(),
            WeightingPolicy::Agreement(columns) => columns.identity(),
        }
    }

    /// Every column the policy reads
    pub fn required_columns(&self) -> Vec<&str> {
        match self {
            WeightingPolicy::Membership(columns) => columns.required(),
            WeightingPolicy::Agreement(columns) => columns.required(),
        }
    }

    /// Fail with `InvalidInput` on the first required column `table` lacks
    pub fn check_columns(&self, table: &RecordTable) -> Result<()> {
        for column in self.required_columns() {
            table.require_column(column)?;
        }
        Ok(())
    }

    /// Add edges to a graph whose nodes are already populated
    ///
    /// `legislators` lists the node ids in first-appearance order.
    pub(crate) fn weigh(
        &self,
        table: &RecordTable,
        legislators: &[LegislatorId],
        graph: &mut LegislatorGraph,
        stats: &mut BuildStats,
    ) -> Result<()> {
        match self {
            WeightingPolicy::Membership(columns) => {
                weigh_memberships(columns, table, legislators, graph, stats)
            }
            WeightingPolicy::Agreement(columns) => weigh_agreements(columns, table, graph, stats),
        }
    }
}

/// Every unordered pair of `items`, each exactly once, in lexicographic
/// order of positions
///
/// ```
/// use plenario_network::combinations;
///
/// let pairs: Vec<_> = combinations(&[1, 2, 3]).collect();
/// assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 3)]);
/// ```
pub fn combinations<T: Copy>(items: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, &a)| items[i + 1..].iter().map(move |&b| (a, b)))
}

fn weigh_memberships(
    columns: &MembershipColumns,
    table: &RecordTable,
    legislators: &[LegislatorId],
    graph: &mut LegislatorGraph,
    stats: &mut BuildStats,
) -> Result<()> {
    let id_column = table.require_column(&columns.legislator_id)?;
    let group_column = table.require_column(&columns.group_label)?;

    // A null label lists the legislator without any group
    let mut memberships: HashMap<LegislatorId, HashSet<String>> = HashMap::new();
    for row in 0..table.row_count() {
        let id = table.legislator_id(row, id_column)?;
        let groups = memberships.entry(id).or_default();
        if let Some(label) = table.cell(row, group_column).and_then(|cell| cell.as_text()) {
            groups.insert(label);
        }
    }
    stats.events = memberships.values().flatten().collect::<HashSet<_>>().len();

    let no_groups = HashSet::new();
    for (a, b) in combinations(legislators) {
        stats.record_comparison();
        let groups_a = memberships.get(&a).unwrap_or(&no_groups);
        let groups_b = memberships.get(&b).unwrap_or(&no_groups);
        let (smaller, larger) = if groups_a.len() <= groups_b.len() {
            (groups_a, groups_b)
        } else {
            (groups_b, groups_a)
        };

        let shared = smaller.iter().filter(|group| larger.contains(*group)).count() as i64;
        if shared > 0 {
            graph.set_edge(a, b, shared);
        }
    }

    tracing::debug!(
        groups = stats.events,
        comparisons = stats.pair_comparisons,
        "weighed memberships"
    );
    Ok(())
}

/// Ballot id as grouped on
///
/// Numeric ids order numerically and before text ids, which order
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum BallotKey {
    Number(i64),
    Text(String),
}

impl BallotKey {
    fn read(table: &RecordTable, row: usize, column: usize) -> Result<Self> {
        match table.cell(row, column) {
            Some(Cell::Integer(v)) => Ok(BallotKey::Number(*v)),
            _ => table.text(row, column).map(BallotKey::Text),
        }
    }
}

impl fmt::Display for BallotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BallotKey::Number(v) => write!(f, "{}", v),
            BallotKey::Text(s) => f.write_str(s),
        }
    }
}

fn weigh_agreements(
    columns: &AgreementColumns,
    table: &RecordTable,
    graph: &mut LegislatorGraph,
    stats: &mut BuildStats,
) -> Result<()> {
    let id_column = table.require_column(&columns.legislator_id)?;
    let ballot_column = table.require_column(&columns.ballot_id)?;
    let choice_column = table.require_column(&columns.vote_choice)?;

    // Ballots are processed in ascending id order; voters keep their
    // first-appearance position inside a ballot
    let mut ballots: BTreeMap<BallotKey, IndexMap<LegislatorId, String>> = BTreeMap::new();
    for row in 0..table.row_count() {
        let id = table.legislator_id(row, id_column)?;
        let ballot = BallotKey::read(table, row, ballot_column)?;
        let choice = table.text(row, choice_column)?;

        let votes = ballots.entry(ballot).or_default();
        if let Some(previous) = votes.insert(id, choice) {
            tracing::warn!(
                row,
                legislator = %id,
                previous = %previous,
                "legislator voted twice in one ballot; keeping the later vote"
            );
        }
    }
    stats.events = ballots.len();

    for (ballot, votes) in &ballots {
        let voters: Vec<LegislatorId> = votes.keys().copied().collect();
        tracing::debug!(ballot = %ballot, voters = voters.len(), "weighing ballot");

        for (a, b) in combinations(&voters) {
            stats.record_comparison();
            let delta = if votes[&a] == votes[&b] { 1 } else { -1 };
            if let Some(attributes) = graph.upsert_edge(a, b, 0) {
                attributes.weight += delta;
            }
        }
    }
    Ok(())
}

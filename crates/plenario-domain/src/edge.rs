//! Edge module (undirected, pairwise links only)

use crate::LegislatorId;

/// Normalized key of an unordered pair of distinct legislators
///
/// `PairKey::new(a, b)` and `PairKey::new(b, a)` are equal, which is what
/// makes the graph undirected: an edge is stored once per pair no matter
/// which direction discovered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    low: LegislatorId,
    high: LegislatorId,
}

impl PairKey {
    /// Build the key for a pair, or `None` for a self-pair
    ///
    /// # Examples
    ///
    /// ```
    /// use plenario_domain::{LegislatorId, PairKey};
    ///
    /// let a = LegislatorId::new(1);
    /// let b = LegislatorId::new(2);
    /// assert_eq!(PairKey::new(a, b), PairKey::new(b, a));
    /// assert!(PairKey::new(a, a).is_none());
    /// ```
    pub fn new(a: LegislatorId, b: LegislatorId) -> Option<Self> {
        if a == b {
            return None;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        Some(Self { low, high })
    }

    /// The smaller id of the pair
    pub fn low(&self) -> LegislatorId {
        self.low
    }

    /// The larger id of the pair
    pub fn high(&self) -> LegislatorId {
        self.high
    }

    /// Whether `id` is one of the two endpoints
    pub fn contains(&self, id: LegislatorId) -> bool {
        self.low == id || self.high == id
    }

    /// The endpoint opposite to `id`, if `id` is an endpoint
    pub fn other(&self, id: LegislatorId) -> Option<LegislatorId> {
        if id == self.low {
            Some(self.high)
        } else if id == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

/// Attributes carried by an edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeAttributes {
    /// Alignment weight; negative values mean net disagreement
    pub weight: i64,
}

/// A weighted undirected edge between two legislators
///
/// `source` and `target` keep the orientation in which the pair was first
/// discovered. They carry no direction semantics; `key()` is the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// First endpoint, as discovered
    pub source: LegislatorId,

    /// Second endpoint, as discovered
    pub target: LegislatorId,

    /// Edge attributes
    pub attributes: EdgeAttributes,
}

impl Edge {
    pub(crate) fn new(source: LegislatorId, target: LegislatorId, weight: i64) -> Self {
        Self {
            source,
            target,
            attributes: EdgeAttributes { weight },
        }
    }

    /// Current weight of the edge
    pub fn weight(&self) -> i64 {
        self.attributes.weight
    }

    /// Normalized pair key of the edge
    pub fn key(&self) -> PairKey {
        let (low, high) = if self.source < self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        };
        PairKey { low, high }
    }

    /// The edge as a `(node_a, node_b, attributes)` triple
    pub fn as_triple(&self) -> (LegislatorId, LegislatorId, EdgeAttributes) {
        (self.source, self.target, self.attributes)
    }
}

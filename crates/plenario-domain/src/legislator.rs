//! Legislator module - the node type of every alignment network

use std::fmt;

/// Stable identity of a legislator
///
/// Wraps the integer id assigned by the data source. Two rows describe the
/// same legislator if and only if their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LegislatorId(i64);

impl LegislatorId {
    /// Create an id from the raw integer value
    ///
    /// # Examples
    ///
    /// ```
    /// use plenario_domain::LegislatorId;
    ///
    /// let id = LegislatorId::new(204554);
    /// assert_eq!(id.value(), 204554);
    /// ```
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for LegislatorId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for LegislatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A legislator node with its display attributes
///
/// Attributes are taken from the first input row observed for the id and are
/// never updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legislator {
    /// Identity key
    pub id: LegislatorId,

    /// Display name
    pub name: String,

    /// Party acronym (e.g. "PT")
    pub party: String,

    /// State acronym (e.g. "SP")
    pub state: String,
}

impl Legislator {
    /// Create a new legislator node
    pub fn new(
        id: LegislatorId,
        name: impl Into<String>,
        party: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            party: party.into(),
            state: state.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(LegislatorId::new(42).to_string(), "42");
        assert_eq!(LegislatorId::new(-7).to_string(), "-7");
    }

    #[test]
    fn test_id_from_i64() {
        let id: LegislatorId = 204554.into();
        assert_eq!(id, LegislatorId::new(204554));
    }

    #[test]
    fn test_legislator_new() {
        let dep = Legislator::new(LegislatorId::new(1), "A", "PT", "SP");
        assert_eq!(dep.name, "A");
        assert_eq!(dep.party, "PT");
        assert_eq!(dep.state, "SP");
    }
}

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Vector;

/// Identifier of one query, e.g. `"Paragraph 3"`.
///
/// Ordered lexically; that order is the deterministic tie-break between
/// queries during arbitration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(String);

impl QueryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier for the passage at zero-based `index` (`"Paragraph {index + 1}"`).
    pub fn paragraph(index: usize) -> Self {
        Self(format!("Paragraph {}", index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for QueryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QueryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for QueryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A query identifier paired with its embedded vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub id: QueryId,
    pub vector: Vector,
}

impl Query {
    pub fn new(id: impl Into<QueryId>, vector: Vector) -> Self {
        Self {
            id: id.into(),
            vector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_ids_are_one_based() {
        assert_eq!(QueryId::paragraph(0).as_str(), "Paragraph 1");
        assert_eq!(QueryId::paragraph(11).to_string(), "Paragraph 12");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&QueryId::from("Paragraph 2")).unwrap();
        assert_eq!(json, "\"Paragraph 2\"");
    }
}

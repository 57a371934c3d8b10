//! Edges between workflow nodes.

use serde::{Deserialize, Serialize};

use super::id::{EdgeId, NodeId};

/// Label that selects a branch out of a condition node.
///
/// Only the exact, case-sensitive names `"yes"` and `"no"` are branch labels.
/// Any other name, including an empty or absent one, is [`EdgeLabel::Untyped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLabel {
    /// Taken when the condition holds.
    Yes,
    /// Taken when the condition does not hold.
    No,
    /// Not a branch label.
    Untyped,
}

impl EdgeLabel {
    /// Parses an optional edge name.
    pub fn parse(name: Option<&str>) -> Self {
        match name {
            Some("yes") => Self::Yes,
            Some("no") => Self::No,
            _ => Self::Untyped,
        }
    }

    /// Returns the branch label for a condition outcome.
    #[inline]
    pub const fn for_outcome(matched: bool) -> Self {
        if matched { Self::Yes } else { Self::No }
    }

    /// Returns the edge name this label is parsed from.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Untyped => "",
        }
    }
}

impl std::fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Edge identifier.
    pub id: EdgeId,
    /// Optional name, used as a branch label on condition edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source node.
    #[serde(rename = "start_node_id")]
    pub from: NodeId,
    /// Target node.
    #[serde(rename = "end_node_id")]
    pub to: NodeId,
}

impl Edge {
    /// Creates an unnamed edge.
    pub fn new(id: impl Into<EdgeId>, from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            from: from.into(),
            to: to.into(),
        }
    }

    /// Sets the edge name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the branch label parsed from the name.
    #[inline]
    pub fn label(&self) -> EdgeLabel {
        EdgeLabel::parse(self.name.as_deref())
    }

    /// Returns whether this edge is a `yes` or `no` branch.
    #[inline]
    pub fn is_branch(&self) -> bool {
        self.label() != EdgeLabel::Untyped
    }

    /// Returns whether the edge connects a node to itself.
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Edge payload stored in the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeData {
    /// Identifier of the stored edge, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EdgeId>,
    /// Edge name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EdgeData {
    /// Returns the branch label parsed from the name.
    #[inline]
    pub fn label(&self) -> EdgeLabel {
        EdgeLabel::parse(self.name.as_deref())
    }
}

impl From<&Edge> for EdgeData {
    fn from(edge: &Edge) -> Self {
        Self {
            id: Some(edge.id),
            name: edge.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing_is_exact() {
        assert_eq!(EdgeLabel::parse(Some("yes")), EdgeLabel::Yes);
        assert_eq!(EdgeLabel::parse(Some("no")), EdgeLabel::No);
        assert_eq!(EdgeLabel::parse(Some("Yes")), EdgeLabel::Untyped);
        assert_eq!(EdgeLabel::parse(Some(" no")), EdgeLabel::Untyped);
        assert_eq!(EdgeLabel::parse(Some("")), EdgeLabel::Untyped);
        assert_eq!(EdgeLabel::parse(None), EdgeLabel::Untyped);
    }

    #[test]
    fn test_edge_helpers() {
        let edge = Edge::new(1, 3, 4).with_name("yes");
        assert!(edge.is_branch());
        assert!(!edge.is_self_loop());
        assert_eq!(EdgeData::from(&edge).label(), EdgeLabel::Yes);
        assert!(Edge::new(2, 5, 5).is_self_loop());
    }

    #[test]
    fn test_edge_serde_uses_endpoint_names() {
        let edge: Edge = serde_json::from_value(serde_json::json!({
            "id": 9,
            "start_node_id": 1,
            "end_node_id": 2,
        }))
        .unwrap();
        assert_eq!(edge.from, NodeId::new(1));
        assert_eq!(edge.to, NodeId::new(2));
        assert_eq!(edge.name, None);
    }
}

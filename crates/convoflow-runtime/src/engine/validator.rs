//! Edge validation rules.

use crate::error::EdgeViolation;
use crate::graph::NodeType;

impl EdgeViolation {
    /// Returns the maximum number of outgoing edges a node type may have.
    pub const fn max_successors(node_type: NodeType) -> usize {
        match node_type {
            NodeType::Start | NodeType::Message => 1,
            NodeType::Condition => 2,
            NodeType::End => 0,
        }
    }
}

/// Decides whether an edge `source -> target` may be added.
///
/// `successors` is the number of outgoing edges the source already has,
/// counted before the insertion. Rules are checked in a fixed order and the
/// first one that matches determines the error.
pub fn validate_edge(
    source: NodeType,
    target: NodeType,
    successors: usize,
) -> Result<(), EdgeViolation> {
    if source == NodeType::Start && successors >= 1 {
        return Err(EdgeViolation::StartFanOut);
    }

    if target == NodeType::Start {
        return Err(EdgeViolation::StartIncoming);
    }

    if source == NodeType::Message && successors >= 1 {
        return Err(EdgeViolation::MessageFanOut);
    }

    if source == NodeType::Condition && successors >= 2 {
        return Err(EdgeViolation::ConditionFanOut);
    }

    if source == NodeType::End {
        return Err(EdgeViolation::EndOutgoing);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_accepts_within_limits() {
        for target in [NodeType::Message, NodeType::Condition, NodeType::End] {
            assert_eq!(validate_edge(NodeType::Start, target, 0), Ok(()));
            assert_eq!(validate_edge(NodeType::Message, target, 0), Ok(()));
            assert_eq!(validate_edge(NodeType::Condition, target, 0), Ok(()));
            assert_eq!(validate_edge(NodeType::Condition, target, 1), Ok(()));
        }
    }

    #[test]
    fn test_rule_order() {
        // A start node with a successor is reported as fan-out even when the
        // target is also a start node.
        assert_eq!(
            validate_edge(NodeType::Start, NodeType::Start, 1),
            Err(EdgeViolation::StartFanOut)
        );
        assert_eq!(
            validate_edge(NodeType::Start, NodeType::Start, 0),
            Err(EdgeViolation::StartIncoming)
        );
        assert_eq!(
            validate_edge(NodeType::End, NodeType::Start, 0),
            Err(EdgeViolation::StartIncoming)
        );
        assert_eq!(
            validate_edge(NodeType::Message, NodeType::Start, 1),
            Err(EdgeViolation::StartIncoming)
        );
    }

    #[test]
    fn test_fan_out_limits() {
        assert_eq!(
            validate_edge(NodeType::Message, NodeType::End, 1),
            Err(EdgeViolation::MessageFanOut)
        );
        assert_eq!(
            validate_edge(NodeType::Condition, NodeType::Message, 2),
            Err(EdgeViolation::ConditionFanOut)
        );
        assert_eq!(
            validate_edge(NodeType::End, NodeType::Message, 0),
            Err(EdgeViolation::EndOutgoing)
        );
    }

    #[test]
    fn test_max_successors_matches_rules() {
        for source in NodeType::iter() {
            let max = EdgeViolation::max_successors(source);
            let target = NodeType::End;
            if max > 0 {
                assert!(validate_edge(source, target, max - 1).is_ok());
            }
            assert!(validate_edge(source, target, max).is_err());
        }
    }
}

//! Identifier types for workflows, nodes and edges.
//!
//! Identifiers are plain integers assigned by the storage layer, wrapped in
//! newtypes so that a node id can never be passed where an edge id is expected.

use std::str::FromStr;

use derive_more::{Debug, Display, From, Into};
use serde::{Deserialize, Serialize};

macro_rules! impl_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[derive(Debug, Display, From, Into)]
        #[debug("{_0}")]
        #[display("{_0}")]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates an identifier from its raw value.
            #[inline]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Returns the raw value.
            #[inline]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(i32::from_str(s)?))
            }
        }
    };
}

impl_id! {
    /// Unique identifier of a workflow.
    WorkflowId
}

impl_id! {
    /// Unique identifier of a node.
    NodeId
}

impl_id! {
    /// Unique identifier of an edge.
    EdgeId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id = NodeId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<NodeId>().unwrap(), id);
        assert!("forty-two".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_id_serde_is_transparent() {
        let id = WorkflowId::from(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: WorkflowId = serde_json::from_str("7").unwrap();
        assert_eq!(back.get(), 7);
    }
}

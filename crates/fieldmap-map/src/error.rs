//! Error types for graph edits.

use std::fmt;

use crate::types::{EdgeId, NodeId};

/// Errors from mapping-graph mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node id does not exist (or was removed).
    NodeNotFound(NodeId),
    /// Edge id does not exist (or was removed).
    EdgeNotFound(EdgeId),
    /// Field index is past the end of the node's field list.
    FieldNotFound { node: NodeId, field: usize },
    /// Connection does not run from a source node to a destination node.
    WrongDirection,
    /// Both ends of a connection are on the same node.
    SameNode(NodeId),
    /// The same two fields are already connected.
    DuplicateEdge(EdgeId),
    /// Fields can only be added to destination nodes.
    NotDestination(NodeId),
    /// Field name is empty after trimming.
    EmptyFieldName,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeNotFound(id) => write!(f, "Node not found: {id}"),
            Self::EdgeNotFound(id) => write!(f, "Connection not found: {id}"),
            Self::FieldNotFound { node, field } => {
                write!(f, "Field {field} not found on node {node}")
            }
            Self::WrongDirection => {
                write!(f, "Connections must go from a Source to a Destination.")
            }
            Self::SameNode(id) => write!(f, "Cannot connect node {id} to itself"),
            Self::DuplicateEdge(id) => write!(f, "Fields are already connected by {id}"),
            Self::NotDestination(id) => {
                write!(f, "Fields can only be added to destination nodes (node {id})")
            }
            Self::EmptyFieldName => write!(f, "Field name cannot be empty"),
        }
    }
}

impl std::error::Error for GraphError {}

//! Node, edge and event types of the mapping graph.

use std::fmt;
use std::path::{Path, PathBuf};

/// Stable identifier of a node. Never reused within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

/// Stable identifier of an edge. Never reused within a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge-{}", self.0)
    }
}

/// Canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A source file; fields come from its header row.
    Source { path: PathBuf },
    /// A destination schema; fields are added by the user.
    Destination,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub title: String,
    pub fields: Vec<String>,
    pub position: Point,
    /// New nodes start collapsed, showing only their header.
    pub collapsed: bool,
}

impl Node {
    pub fn is_source(&self) -> bool {
        matches!(self.kind, NodeKind::Source { .. })
    }

    pub fn is_destination(&self) -> bool {
        matches!(self.kind, NodeKind::Destination)
    }

    pub fn source_path(&self) -> Option<&Path> {
        match &self.kind {
            NodeKind::Source { path } => Some(path),
            NodeKind::Destination => None,
        }
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }
}

/// One end of an edge: a field, addressed by index, on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldAnchor {
    pub node: NodeId,
    pub field: usize,
}

impl FieldAnchor {
    pub const fn new(node: NodeId, field: usize) -> Self {
        Self { node, field }
    }
}

/// A drawn connection from a source field to a destination field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: FieldAnchor,
    pub to: FieldAnchor,
}

impl Edge {
    pub fn touches(&self, node: NodeId) -> bool {
        self.from.node == node || self.to.node == node
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Node(NodeId),
    Edge(EdgeId),
}

/// Change notifications delivered to observers after each mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent {
    NodeAdded(NodeId),
    NodeRemoved(NodeId),
    FieldAdded { node: NodeId, field: usize },
    NodeMoved { node: NodeId, position: Point },
    NodeToggled { node: NodeId, collapsed: bool },
    EdgeAdded(EdgeId),
    EdgeRemoved(EdgeId),
    SelectionChanged(Option<Selection>),
}

/// Receives [`GraphEvent`]s; a renderer subscribes through this.
pub trait GraphObserver {
    fn on_event(&mut self, event: &GraphEvent);
}

impl<F> GraphObserver for F
where
    F: FnMut(&GraphEvent),
{
    fn on_event(&mut self, event: &GraphEvent) {
        self(event);
    }
}

//! The mapping graph: the single owner of nodes, edges and selection.
//!
//! Every edit goes through a method here, and observers are notified after
//! the model has changed. Rendering reads the model; it never stores
//! positions or selection of its own.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use fieldmap_model::FieldMapping;

use crate::error::GraphError;
use crate::types::{
    Edge, EdgeId, FieldAnchor, GraphEvent, GraphObserver, Node, NodeId, NodeKind, Point,
    Selection,
};

/// Prefix for auto-titled destination nodes.
pub const DESTINATION_TITLE_PREFIX: &str = "New Destination";

#[derive(Default)]
pub struct MappingGraph {
    nodes: BTreeMap<NodeId, Node>,
    /// Edges in creation order; this order becomes output column order.
    edges: Vec<Edge>,
    selection: Option<Selection>,
    next_node: u32,
    next_edge: u32,
    destination_count: u32,
    observers: Vec<Box<dyn GraphObserver>>,
}

impl fmt::Debug for MappingGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingGraph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("selection", &self.selection)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl MappingGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; it sees every subsequent event.
    pub fn subscribe(&mut self, observer: impl GraphObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: GraphEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    // --- Queries ---

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges with either end on `node`.
    pub fn edges_touching(&self, node: NodeId) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|edge| edge.touches(node))
            .map(|edge| edge.id)
            .collect()
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    fn require_node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes.get(&id).ok_or(GraphError::NodeNotFound(id))
    }

    fn require_field<'a>(&'a self, anchor: FieldAnchor) -> Result<(&'a Node, &'a str), GraphError> {
        let node = self.require_node(anchor.node)?;
        let field = node.field(anchor.field).ok_or(GraphError::FieldNotFound {
            node: anchor.node,
            field: anchor.field,
        })?;
        Ok((node, field))
    }

    // --- Node edits ---

    fn insert_node(&mut self, kind: NodeKind, title: String, fields: Vec<String>, at: Point) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.nodes.insert(
            id,
            Node {
                id,
                kind,
                title,
                fields,
                position: at,
                collapsed: true,
            },
        );
        debug!(node = %id, "node added");
        self.emit(GraphEvent::NodeAdded(id));
        id
    }

    /// Add a node for an opened source file. The title is the file name.
    pub fn add_source_node(&mut self, path: impl Into<PathBuf>, fields: Vec<String>, at: Point) -> NodeId {
        let path = path.into();
        let title = source_title(&path);
        self.insert_node(NodeKind::Source { path }, title, fields, at)
    }

    /// Add an empty destination node titled `New Destination-<n>`.
    pub fn add_destination_node(&mut self, at: Point) -> NodeId {
        self.destination_count += 1;
        let title = format!("{DESTINATION_TITLE_PREFIX}-{}", self.destination_count);
        self.insert_node(NodeKind::Destination, title, Vec::new(), at)
    }

    /// Append a field to a destination node. The name is trimmed.
    pub fn add_destination_field(&mut self, node: NodeId, name: &str) -> Result<usize, GraphError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GraphError::EmptyFieldName);
        }
        let target = self.nodes.get_mut(&node).ok_or(GraphError::NodeNotFound(node))?;
        if !target.is_destination() {
            return Err(GraphError::NotDestination(node));
        }
        target.fields.push(name.to_string());
        let field = target.fields.len() - 1;
        self.emit(GraphEvent::FieldAdded { node, field });
        Ok(field)
    }

    /// Translate a node by `(dx, dy)`. Connected lines follow via layout.
    pub fn move_node(&mut self, node: NodeId, dx: f32, dy: f32) -> Result<Point, GraphError> {
        let target = self.nodes.get_mut(&node).ok_or(GraphError::NodeNotFound(node))?;
        target.position = target.position.offset(dx, dy);
        let position = target.position;
        self.emit(GraphEvent::NodeMoved { node, position });
        Ok(position)
    }

    pub fn toggle_collapsed(&mut self, node: NodeId) -> Result<bool, GraphError> {
        let target = self.nodes.get_mut(&node).ok_or(GraphError::NodeNotFound(node))?;
        target.collapsed = !target.collapsed;
        let collapsed = target.collapsed;
        self.emit(GraphEvent::NodeToggled { node, collapsed });
        Ok(collapsed)
    }

    /// Remove a node and every edge attached to it.
    pub fn remove_node(&mut self, node: NodeId) -> Result<Node, GraphError> {
        let removed = self.nodes.remove(&node).ok_or(GraphError::NodeNotFound(node))?;
        for edge in self.edges_touching(node) {
            self.remove_edge_entry(edge);
        }
        if self.selection == Some(Selection::Node(node)) {
            self.set_selection(None);
        }
        debug!(node = %node, "node removed");
        self.emit(GraphEvent::NodeRemoved(node));
        Ok(removed)
    }

    // --- Edge edits ---

    /// Connect a source field to a destination field.
    pub fn connect(&mut self, from: FieldAnchor, to: FieldAnchor) -> Result<EdgeId, GraphError> {
        let (source, _) = self.require_field(from)?;
        let (dest, _) = self.require_field(to)?;
        if from.node == to.node {
            return Err(GraphError::SameNode(from.node));
        }
        if !source.is_source() || !dest.is_destination() {
            return Err(GraphError::WrongDirection);
        }
        if let Some(existing) = self
            .edges
            .iter()
            .find(|edge| edge.from == from && edge.to == to)
        {
            return Err(GraphError::DuplicateEdge(existing.id));
        }
        let id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.edges.push(Edge { id, from, to });
        debug!(edge = %id, from = %from.node, to = %to.node, "edge added");
        self.emit(GraphEvent::EdgeAdded(id));
        Ok(id)
    }

    pub fn disconnect(&mut self, edge: EdgeId) -> Result<(), GraphError> {
        if self.remove_edge_entry(edge) {
            Ok(())
        } else {
            Err(GraphError::EdgeNotFound(edge))
        }
    }

    fn remove_edge_entry(&mut self, edge: EdgeId) -> bool {
        let Some(index) = self.edges.iter().position(|entry| entry.id == edge) else {
            return false;
        };
        self.edges.remove(index);
        if self.selection == Some(Selection::Edge(edge)) {
            self.set_selection(None);
        }
        self.emit(GraphEvent::EdgeRemoved(edge));
        true
    }

    // --- Selection ---

    fn set_selection(&mut self, selection: Option<Selection>) {
        if self.selection != selection {
            self.selection = selection;
            self.emit(GraphEvent::SelectionChanged(selection));
        }
    }

    pub fn select_node(&mut self, node: NodeId) -> Result<(), GraphError> {
        self.require_node(node)?;
        self.set_selection(Some(Selection::Node(node)));
        Ok(())
    }

    pub fn select_edge(&mut self, edge: EdgeId) -> Result<(), GraphError> {
        if self.edge(edge).is_none() {
            return Err(GraphError::EdgeNotFound(edge));
        }
        self.set_selection(Some(Selection::Edge(edge)));
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(None);
    }

    /// Delete whatever is selected. Returns what was deleted, if anything.
    pub fn delete_selection(&mut self) -> Option<Selection> {
        let selection = self.selection?;
        match selection {
            Selection::Node(node) => {
                self.remove_node(node).ok()?;
            }
            Selection::Edge(edge) => {
                self.disconnect(edge).ok()?;
            }
        }
        Some(selection)
    }

    // --- Projection ---

    /// The current edges as field mappings, in creation order.
    pub fn mappings(&self) -> Vec<FieldMapping> {
        self.edges
            .iter()
            .filter_map(|edge| self.edge_mapping(edge))
            .collect()
    }

    /// The mapping described by one edge.
    pub fn mapping_for(&self, edge: EdgeId) -> Option<FieldMapping> {
        self.edge(edge).and_then(|edge| self.edge_mapping(edge))
    }

    fn edge_mapping(&self, edge: &Edge) -> Option<FieldMapping> {
        let (source, source_field) = self.require_field(edge.from).ok()?;
        let (_, dest_field) = self.require_field(edge.to).ok()?;
        let path = source.source_path()?;
        Some(FieldMapping::new(path, source_field, dest_field))
    }
}

fn source_title(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

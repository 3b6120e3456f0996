//! Connector-line geometry derived from the graph.
//!
//! Lines are never stored. A renderer asks for [`edge_line`] whenever it
//! draws, so moving or collapsing a node is reflected on the next frame
//! without any bookkeeping.

use crate::graph::MappingGraph;
use crate::types::{EdgeId, FieldAnchor, Node, Point};

pub const NODE_WIDTH: f32 = 220.0;
pub const HEADER_HEIGHT: f32 = 32.0;
pub const FIELD_HEIGHT: f32 = 28.0;

/// Start and end points of a connector line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

/// Which side of the node a handle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

fn handle_point(node: &Node, field: usize, side: Side) -> Point {
    let x = match side {
        Side::Left => node.position.x,
        Side::Right => node.position.x + NODE_WIDTH,
    };
    // A collapsed node hides its fields; lines attach to the header.
    let y = if node.collapsed {
        node.position.y + HEADER_HEIGHT / 2.0
    } else {
        node.position.y + HEADER_HEIGHT + FIELD_HEIGHT * field as f32 + FIELD_HEIGHT / 2.0
    };
    Point::new(x, y)
}

fn anchor_point(graph: &MappingGraph, anchor: FieldAnchor, side: Side) -> Option<Point> {
    let node = graph.node(anchor.node)?;
    Some(handle_point(node, anchor.field, side))
}

/// Endpoints of `edge`: source handles on the right, destination on the left.
pub fn edge_line(graph: &MappingGraph, edge: EdgeId) -> Option<Line> {
    let edge = graph.edge(edge)?;
    Some(Line {
        start: anchor_point(graph, edge.from, Side::Right)?,
        end: anchor_point(graph, edge.to, Side::Left)?,
    })
}

/// Every edge with its current line, in creation order.
pub fn all_lines(graph: &MappingGraph) -> Vec<(EdgeId, Line)> {
    graph
        .edges()
        .iter()
        .filter_map(|edge| edge_line(graph, edge.id).map(|line| (edge.id, line)))
        .collect()
}

/// Height of a node as drawn.
pub fn node_height(node: &Node) -> f32 {
    if node.collapsed {
        HEADER_HEIGHT
    } else {
        HEADER_HEIGHT + FIELD_HEIGHT * node.fields.len() as f32
    }
}

#![deny(unsafe_code)]

//! UI-independent model of the mapping canvas.
//!
//! Nodes are source files or destination schemas, edges connect one source
//! field to one destination field, and [`layout`] projects the model into
//! line geometry for whatever renderer is attached.

pub mod error;
pub mod graph;
pub mod layout;
pub mod types;

pub use error::GraphError;
pub use graph::{DESTINATION_TITLE_PREFIX, MappingGraph};
pub use layout::{Line, all_lines, edge_line, node_height};
pub use types::{
    Edge, EdgeId, FieldAnchor, GraphEvent, GraphObserver, Node, NodeId, NodeKind, Point,
    Selection,
};

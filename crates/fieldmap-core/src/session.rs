//! Session controller: one mapping graph, one workbench, one status line.

use std::fmt;

use tracing::debug;

use fieldmap_map::{EdgeId, FieldAnchor, GraphError, MappingGraph, NodeId, Point};
use fieldmap_model::{CellValue, OpenSourceResponse, PreviewRequest, PreviewResponse, TransferResponse};

use crate::dialog::FileDialog;
use crate::workbench::Workbench;

pub const EMPTY_GRAPH_MESSAGE: &str =
    "No fields have been mapped. Please connect fields to run a transfer.";

/// The status line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ready,
    Info(String),
    Success(String),
    Error(String),
}

impl Status {
    pub fn message(&self) -> &str {
        match self {
            Self::Ready => "Ready",
            Self::Info(message) | Self::Success(message) | Self::Error(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Info messages stay until replaced; the others revert to `Ready`.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Error(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Preview shown after a connection is drawn.
///
/// Both columns carry the same values since a transfer copies them verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionPreview {
    pub source_field: String,
    pub dest_field: String,
    pub values: Vec<CellValue>,
}

impl ConnectionPreview {
    pub fn headers(&self) -> [String; 2] {
        [
            format!("Source: {}", self.source_field),
            format!("Destination: {}", self.dest_field),
        ]
    }

    pub fn rows(&self) -> impl Iterator<Item = [&CellValue; 2]> + '_ {
        self.values.iter().map(|value| [value, value])
    }
}

/// A new edge plus its preview, when the preview could be read.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub edge: EdgeId,
    pub preview: Option<ConnectionPreview>,
}

#[derive(Debug, Default)]
pub struct Session {
    graph: MappingGraph,
    workbench: Workbench,
    status: Status,
}

impl Session {
    pub fn new(workbench: Workbench) -> Self {
        Self {
            graph: MappingGraph::new(),
            workbench,
            status: Status::Ready,
        }
    }

    pub fn graph(&self) -> &MappingGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut MappingGraph {
        &mut self.graph
    }

    pub fn workbench(&self) -> &Workbench {
        &self.workbench
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Put a transient status back to `Ready`.
    pub fn reset_status(&mut self) {
        if self.status.is_transient() {
            self.status = Status::Ready;
        }
    }

    fn set_status(&mut self, status: Status) {
        debug!(status = %status, "status changed");
        self.status = status;
    }

    /// Open a source through `dialog` and place it on the canvas.
    ///
    /// Returns `None` on cancel (status untouched) or on a read failure.
    pub fn add_source(&mut self, dialog: &mut dyn FileDialog, at: Point) -> Option<NodeId> {
        match self.workbench.open_source(dialog)? {
            OpenSourceResponse::Opened(source) => {
                let node = self.graph.add_source_node(source.path, source.fields, at);
                let title = self
                    .graph
                    .node(node)
                    .map(|node| node.title.clone())
                    .unwrap_or_default();
                self.set_status(Status::Success(format!("Added source: {title}")));
                Some(node)
            }
            OpenSourceResponse::Failed { error } => {
                self.set_status(Status::Error(format!("Error adding source: {error}")));
                None
            }
        }
    }

    pub fn add_destination(&mut self, at: Point) -> NodeId {
        let node = self.graph.add_destination_node(at);
        self.set_status(Status::Info("New destination created in the panel.".to_string()));
        node
    }

    /// Connect two fields and preview the source column.
    ///
    /// A rejected connection sets an error status and returns the error. A
    /// failed preview keeps the edge and reports through the status line.
    pub fn connect(&mut self, from: FieldAnchor, to: FieldAnchor) -> Result<Connection, GraphError> {
        let edge = match self.graph.connect(from, to) {
            Ok(edge) => edge,
            Err(error) => {
                self.set_status(Status::Error(error.to_string()));
                return Err(error);
            }
        };
        let Some(mapping) = self.graph.mapping_for(edge) else {
            return Ok(Connection { edge, preview: None });
        };

        let request = PreviewRequest::new(mapping.source_path(), mapping.source_field());
        let preview = match self.workbench.preview_field(&request) {
            PreviewResponse::Data { data } => Some(ConnectionPreview {
                source_field: mapping.source_field().to_string(),
                dest_field: mapping.dest_field().to_string(),
                values: data,
            }),
            PreviewResponse::Failed { error } => {
                self.set_status(Status::Error(format!("Preview Error: {error}")));
                None
            }
        };
        Ok(Connection { edge, preview })
    }

    /// Transfer the graph's current mappings.
    ///
    /// An empty graph is refused here without reaching the workbench.
    pub fn run_transfer(&mut self, dialog: &mut dyn FileDialog) -> Option<TransferResponse> {
        if !self.graph.has_edges() {
            self.set_status(Status::Error(EMPTY_GRAPH_MESSAGE.to_string()));
            return None;
        }
        self.set_status(Status::Info("Running transfer...".to_string()));
        let response = self.workbench.run_transfer(&self.graph.mappings(), dialog);
        let status = if response.is_success() {
            Status::Success(response.message().to_string())
        } else {
            Status::Error(format!("Error: {}", response.message()))
        };
        self.set_status(status);
        Some(response)
    }
}

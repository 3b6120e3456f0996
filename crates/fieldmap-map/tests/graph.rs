//! Tests for mapping-graph edits, projection and events.

use std::cell::RefCell;
use std::rc::Rc;

use fieldmap_map::{
    FieldAnchor, GraphError, GraphEvent, MappingGraph, NodeId, Point, Selection, all_lines,
    edge_line, node_height,
};
use fieldmap_map::layout::{FIELD_HEIGHT, HEADER_HEIGHT};
use fieldmap_model::FieldMapping;

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

/// A source with `[ID, Name, Value]` and a destination with two fields.
fn sample_graph() -> (MappingGraph, NodeId, NodeId) {
    let mut graph = MappingGraph::new();
    let source = graph.add_source_node(
        "/data/source.xlsx",
        fields(&["ID", "Name", "Value"]),
        Point::new(0.0, 0.0),
    );
    let dest = graph.add_destination_node(Point::new(400.0, 0.0));
    graph.add_destination_field(dest, "Customer Name").unwrap();
    graph.add_destination_field(dest, "  Amount  ").unwrap();
    (graph, source, dest)
}

#[test]
fn connecting_fields_yields_mappings_in_edge_order() {
    let (mut graph, source, dest) = sample_graph();
    graph
        .connect(FieldAnchor::new(source, 2), FieldAnchor::new(dest, 1))
        .unwrap();
    graph
        .connect(FieldAnchor::new(source, 1), FieldAnchor::new(dest, 0))
        .unwrap();

    assert_eq!(
        graph.mappings(),
        vec![
            FieldMapping::new("/data/source.xlsx", "Value", "Amount"),
            FieldMapping::new("/data/source.xlsx", "Name", "Customer Name"),
        ]
    );
}

#[test]
fn connections_must_run_source_to_destination() {
    let (mut graph, source, dest) = sample_graph();
    let result = graph.connect(FieldAnchor::new(dest, 0), FieldAnchor::new(source, 1));
    assert_eq!(result, Err(GraphError::WrongDirection));
    assert_eq!(
        GraphError::WrongDirection.to_string(),
        "Connections must go from a Source to a Destination."
    );

    let other_source = graph.add_source_node("/data/b.xlsx", fields(&["X"]), Point::default());
    let result = graph.connect(FieldAnchor::new(source, 0), FieldAnchor::new(other_source, 0));
    assert_eq!(result, Err(GraphError::WrongDirection));
    assert!(!graph.has_edges());
}

#[test]
fn self_and_duplicate_connections_are_rejected() {
    let (mut graph, source, dest) = sample_graph();
    assert_eq!(
        graph.connect(FieldAnchor::new(source, 0), FieldAnchor::new(source, 1)),
        Err(GraphError::SameNode(source))
    );

    let edge = graph
        .connect(FieldAnchor::new(source, 1), FieldAnchor::new(dest, 0))
        .unwrap();
    assert_eq!(
        graph.connect(FieldAnchor::new(source, 1), FieldAnchor::new(dest, 0)),
        Err(GraphError::DuplicateEdge(edge))
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let (mut graph, source, dest) = sample_graph();
    assert_eq!(
        graph.connect(FieldAnchor::new(source, 9), FieldAnchor::new(dest, 0)),
        Err(GraphError::FieldNotFound {
            node: source,
            field: 9
        })
    );
}

#[test]
fn destination_fields_are_trimmed_and_validated() {
    let (mut graph, source, dest) = sample_graph();
    assert_eq!(graph.node(dest).unwrap().fields, vec!["Customer Name", "Amount"]);
    assert_eq!(
        graph.add_destination_field(dest, "   "),
        Err(GraphError::EmptyFieldName)
    );
    assert_eq!(
        graph.add_destination_field(source, "Extra"),
        Err(GraphError::NotDestination(source))
    );
}

#[test]
fn removing_a_node_removes_its_edges() {
    let (mut graph, source, dest) = sample_graph();
    graph
        .connect(FieldAnchor::new(source, 1), FieldAnchor::new(dest, 0))
        .unwrap();
    graph
        .connect(FieldAnchor::new(source, 2), FieldAnchor::new(dest, 1))
        .unwrap();

    graph.remove_node(dest).unwrap();

    assert!(graph.edges().is_empty());
    assert!(graph.mappings().is_empty());
    assert!(graph.node(source).is_some());
}

#[test]
fn delete_selection_removes_selected_edge_only() {
    let (mut graph, source, dest) = sample_graph();
    let first = graph
        .connect(FieldAnchor::new(source, 1), FieldAnchor::new(dest, 0))
        .unwrap();
    let second = graph
        .connect(FieldAnchor::new(source, 2), FieldAnchor::new(dest, 1))
        .unwrap();

    graph.select_edge(first).unwrap();
    assert_eq!(graph.delete_selection(), Some(Selection::Edge(first)));

    assert_eq!(graph.edges().len(), 1);
    assert_eq!(graph.edges()[0].id, second);
    assert_eq!(graph.selection(), None);
    assert_eq!(graph.delete_selection(), None);
}

#[test]
fn delete_selection_on_node_cascades() {
    let (mut graph, source, dest) = sample_graph();
    graph
        .connect(FieldAnchor::new(source, 1), FieldAnchor::new(dest, 0))
        .unwrap();
    graph.select_node(source).unwrap();

    assert_eq!(graph.delete_selection(), Some(Selection::Node(source)));
    assert!(graph.node(source).is_none());
    assert!(!graph.has_edges());
}

#[test]
fn moving_a_node_moves_only_its_lines() {
    let (mut graph, source, dest) = sample_graph();
    let other = graph.add_source_node("/data/b.xlsx", fields(&["X"]), Point::new(0.0, 300.0));
    let dest2 = graph.add_destination_node(Point::new(400.0, 300.0));
    graph.add_destination_field(dest2, "Y").unwrap();

    let moved = graph
        .connect(FieldAnchor::new(source, 1), FieldAnchor::new(dest, 0))
        .unwrap();
    let still = graph
        .connect(FieldAnchor::new(other, 0), FieldAnchor::new(dest2, 0))
        .unwrap();
    let moved_before = edge_line(&graph, moved).unwrap();
    let still_before = edge_line(&graph, still).unwrap();

    graph.move_node(source, 15.0, -5.0).unwrap();

    let moved_after = edge_line(&graph, moved).unwrap();
    assert_eq!(moved_after.start.x, moved_before.start.x + 15.0);
    assert_eq!(moved_after.start.y, moved_before.start.y - 5.0);
    assert_eq!(moved_after.end, moved_before.end);
    assert_eq!(edge_line(&graph, still).unwrap(), still_before);
    assert_eq!(graph.edges_touching(source), vec![moved]);
    assert_eq!(
        all_lines(&graph),
        vec![(moved, moved_after), (still, still_before)]
    );
}

#[test]
fn expanding_a_node_spreads_field_handles() {
    let (mut graph, source, dest) = sample_graph();
    let first = graph
        .connect(FieldAnchor::new(source, 1), FieldAnchor::new(dest, 0))
        .unwrap();
    let second = graph
        .connect(FieldAnchor::new(source, 2), FieldAnchor::new(dest, 1))
        .unwrap();

    // collapsed: both lines start at the header
    assert_eq!(
        edge_line(&graph, first).unwrap().start,
        edge_line(&graph, second).unwrap().start
    );

    assert_eq!(node_height(graph.node(source).unwrap()), HEADER_HEIGHT);

    assert!(!graph.toggle_collapsed(source).unwrap());
    assert_eq!(
        node_height(graph.node(source).unwrap()),
        HEADER_HEIGHT + 3.0 * FIELD_HEIGHT
    );
    let first_start = edge_line(&graph, first).unwrap().start;
    let second_start = edge_line(&graph, second).unwrap().start;
    assert!(second_start.y > first_start.y);
}

#[test]
fn observers_see_events_in_order() {
    let events: Rc<RefCell<Vec<GraphEvent>>> = Rc::default();
    let sink = Rc::clone(&events);

    let mut graph = MappingGraph::new();
    graph.subscribe(move |event: &GraphEvent| sink.borrow_mut().push(event.clone()));

    let source = graph.add_source_node("/data/a.xlsx", fields(&["A"]), Point::default());
    let dest = graph.add_destination_node(Point::default());
    graph.add_destination_field(dest, "B").unwrap();
    let edge = graph
        .connect(FieldAnchor::new(source, 0), FieldAnchor::new(dest, 0))
        .unwrap();
    graph.select_edge(edge).unwrap();
    graph.delete_selection();

    assert_eq!(
        *events.borrow(),
        vec![
            GraphEvent::NodeAdded(source),
            GraphEvent::NodeAdded(dest),
            GraphEvent::FieldAdded {
                node: dest,
                field: 0
            },
            GraphEvent::EdgeAdded(edge),
            GraphEvent::SelectionChanged(Some(Selection::Edge(edge))),
            GraphEvent::SelectionChanged(None),
            GraphEvent::EdgeRemoved(edge),
        ]
    );
}

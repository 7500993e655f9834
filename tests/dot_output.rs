use graphview::graph::build_event_graph;
use graphview::render::dot::to_dot;
use graphview::render::{DotRenderer, Figure, LayoutOptions, Style, draw, spring_layout};
use graphview::tree_graph_from_file;
use graphview_test_utils::builders::EventMapBuilder;
use graphview_test_utils::fixtures::write_temp;
use graphview_test_utils::init_tracing;
use tempfile::tempdir;

fn seeded() -> LayoutOptions {
    LayoutOptions {
        seed: Some(7),
        ..LayoutOptions::default()
    }
}

#[test]
fn event_graph_writes_a_digraph_file() {
    init_tracing();

    let map = EventMapBuilder::new()
        .event("deploy", &["build", "test"])
        .event("test", &["build"])
        .build();
    let graph = build_event_graph(&map);

    let dir = tempdir().unwrap();
    let path = dir.path().join("events.dot");
    draw(&graph, Style::events(), &seeded(), &DotRenderer::new(&path)).unwrap();

    let dot = std::fs::read_to_string(&path).unwrap();
    assert!(dot.starts_with("digraph {"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains(r#"label="Event Dependency Graph";"#));
    assert!(dot.contains(r##"fillcolor="#87ceeb""##));
    for line in [
        r#""build" -> "deploy";"#,
        r#""test" -> "deploy";"#,
        r#""build" -> "test";"#,
    ] {
        assert!(dot.contains(line), "missing {line}");
    }
    assert_eq!(dot.matches(" -> ").count(), graph.edge_count());
}

#[test]
fn tree_nodes_are_keyed_by_id_and_labelled_by_name() {
    let file = write_temp(
        r#"{"id": 1, "name": "Standup \"daily\"", "right": {"id": 2, "name": "Retro"}}"#,
    );
    let graph = tree_graph_from_file(file.path()).unwrap();
    let layout = spring_layout(&graph, &seeded());
    let dot = to_dot(&Figure::new(&graph, &layout, Style::tree()));

    assert!(dot.contains(r#""1" [label="Standup \"daily\""];"#));
    assert!(dot.contains(r#""2" [label="Retro"];"#));
    assert!(dot.contains(r#""1" -> "2";"#));
}

#[test]
fn unwritable_dot_path_is_an_io_error() {
    let map = EventMapBuilder::new().event("b", &["a"]).build();
    let graph = build_event_graph(&map);

    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.dot");
    let err = draw(&graph, Style::events(), &seeded(), &DotRenderer::new(&path)).unwrap_err();
    assert!(err.is_io());
}

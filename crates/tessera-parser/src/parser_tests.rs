use proptest::prelude::*;

use tessera_core::{identifier::NodeId, semantic::NodeType};

use crate::{
    ElaborateConfig,
    ast::{Declaration, NodeDeclaration},
    build, parse,
};

fn node_declarations(source: &str) -> Vec<NodeDeclaration> {
    parse(source)
        .nodes()
        .map(|node| NodeDeclaration::clone(&node))
        .collect()
}

#[test]
fn test_comments_and_blank_lines_are_discarded() {
    let ast = parse(
        r#"
        // a comment
        process A

           // indented comment
        process B
        "#,
    );
    assert_eq!(ast.declarations().len(), 2);
    assert!(ast.skipped().is_empty());
}

#[test]
fn test_default_metadata() {
    let ast = parse("process A");
    assert_eq!(ast.metadata().kind(), "flowchart");
    assert_eq!(ast.metadata().title(), "Untitled");
}

#[test]
fn test_last_metadata_line_wins() {
    let ast = parse("@flowchart \"First\"\n@er \"Second\"\n@sequence");
    assert_eq!(ast.metadata().kind(), "sequence");
    assert_eq!(ast.metadata().title(), "Second");
    assert_eq!(
        ast.declarations()
            .iter()
            .filter(|decl| matches!(decl.inner(), Declaration::Meta(_)))
            .count(),
        3
    );
}

#[test]
fn test_block_collects_attribute_lines_verbatim() {
    let nodes = node_declarations(
        r#"
        entity "Customer" {
            id: int
            "name"   -> ignored as an edge
            // comment inside block
        }
        process After
        "#,
    );
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].node_type, "entity");
    assert_eq!(nodes[0].label, "Customer");
    assert_eq!(nodes[0].attributes, ["id: int", "\"name\"   -> ignored as an edge"]);
    assert!(nodes[1].attributes.is_empty());
}

#[test]
fn test_unterminated_block_is_flushed() {
    let nodes = node_declarations("entity Order {\n  total\n  placed_at");
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].attributes, ["total", "placed_at"]);
}

#[test]
fn test_stray_close_brace_is_skipped() {
    let ast = parse("process A\n}\nthis line has no rule at all");
    assert_eq!(ast.declarations().len(), 1);

    let skipped: Vec<(usize, &str)> = ast
        .skipped()
        .iter()
        .map(|line| (line.line(), line.text()))
        .collect();
    assert_eq!(skipped, [(2, "}"), (3, "this line has no rule at all")]);
}

#[test]
fn test_skipped_line_span_points_at_trimmed_text() {
    let source = "process A\n   ???   \n";
    let ast = parse(source);
    let span = ast.skipped()[0].span();
    assert_eq!(&source[span.range()], "???");
}

#[test]
fn test_block_span_covers_whole_block() {
    let source = "entity E {\n  a\n}\n";
    let ast = parse(source);
    let span = ast.declarations()[0].span();
    assert_eq!(&source[span.range()], "entity E {\n  a\n}");
}

#[test]
fn test_two_nodes_one_edge() {
    let built = build(
        "process A\nprocess B\nA -> B",
        ElaborateConfig::default(),
    );
    let graph = built.graph();
    assert_eq!(graph.nodes_count(), 2);
    assert_eq!(graph.edges_count(), 1);
    assert_eq!(graph.edges()[0].source(), &NodeId::new("n1"));
    assert_eq!(graph.edges()[0].target(), &NodeId::new("n2"));
    assert_eq!(graph.edges()[0].id().as_str(), "e1");
}

#[test]
fn test_dangling_edge_keeps_nodes() {
    let built = build(
        "process A\nprocess B\nA -> Ghost : never\nA --maybe--> B",
        ElaborateConfig::default(),
    );
    let graph = built.graph();
    assert_eq!(graph.nodes_count(), 2);
    assert_eq!(graph.edges_count(), 1);
    assert_eq!(graph.edges()[0].label(), Some("maybe"));
    assert_eq!(graph.edges()[0].id().as_str(), "e1");
    assert_eq!(built.unresolved()[0].source(), "A");
}

#[test]
fn test_quoted_endpoints_with_colons_and_arrows() {
    let built = build(
        r#"
        process A
        process "Status: done"
        process "x -> y"
        A -> "Status: done" : yes
        "Status: done" -> "x -> y"
        "x -> y" --back--> A
        "#,
        ElaborateConfig::default(),
    );
    let graph = built.graph();
    assert!(built.unresolved().is_empty());
    assert_eq!(graph.nodes_count(), 3);

    let edges: Vec<(&str, &str, Option<&str>)> = graph
        .edges()
        .iter()
        .map(|edge| (edge.source().as_str(), edge.target().as_str(), edge.label()))
        .collect();
    assert_eq!(
        edges,
        [
            ("n1", "n2", Some("yes")),
            ("n2", "n3", None),
            ("n3", "n1", Some("back")),
        ]
    );
}

#[test]
fn test_node_types_from_catalog() {
    let built = build(
        r#"
        start Begin
        decision "Paid?"
        db Orders
        Widget Thing
        "#,
        ElaborateConfig::default(),
    );
    let types: Vec<NodeType> = built.graph().nodes().map(|node| node.node_type()).collect();
    assert_eq!(
        types,
        [
            NodeType::Start,
            NodeType::Decision,
            NodeType::Database,
            NodeType::Process
        ]
    );
}

#[test]
fn test_flowchart_sample() {
    let built = build(
        r#"
        @flowchart "Checkout"
        start Begin
        process "Load cart"
        decision "In stock?"
        process Ship
        end Done

        start -> "Load cart"
        "Load cart" -> "In stock?"
        "In stock?" --yes--> Ship
        "In stock?" -> end : no
        Ship -> end
        "#,
        ElaborateConfig::default(),
    );
    let graph = built.graph();
    assert_eq!(graph.metadata().title(), "Checkout");
    assert_eq!(graph.nodes_count(), 5);
    assert_eq!(graph.edges_count(), 5);

    let labels: Vec<Option<&str>> = graph.edges().iter().map(|edge| edge.label()).collect();
    assert_eq!(labels, [None, None, Some("yes"), Some("no"), None]);
    assert!(built.unresolved().is_empty());
}

proptest! {
    #[test]
    fn test_parse_never_panics(source in "\\PC{0,200}") {
        let ast = parse(&source);
        for line in ast.skipped() {
            prop_assert!(source.get(line.span().range()).is_some());
        }
    }

    #[test]
    fn test_build_is_deterministic(labels in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let mut source = String::new();
        for label in &labels {
            source.push_str(&format!("process {label}\n"));
        }
        for pair in labels.windows(2) {
            source.push_str(&format!("{} -> {}\n", pair[0], pair[1]));
        }

        let first = build(&source, ElaborateConfig::default());
        let second = build(&source, ElaborateConfig::default());
        prop_assert_eq!(first.graph(), second.graph());
        prop_assert!(first.unresolved().is_empty());
    }
}

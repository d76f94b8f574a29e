use jdepgraph::DependencyGraph;

#[test]
fn register_creates_sources_and_destinations() {
    let mut graph = DependencyGraph::new();
    assert!(graph.is_empty());

    assert!(graph.register("org.a", "org.b"));
    assert!(graph.register("org.a", "org.c"));
    assert!(graph.register("org.b", "org.c"));

    assert_eq!(graph.source_count(), 2);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.destinations("org.a"), vec!["org.b", "org.c"]);
    assert_eq!(graph.destinations("org.b"), vec!["org.c"]);
    assert!(graph.destinations("org.c").is_empty());
}

#[test]
fn register_is_idempotent() {
    let mut graph = DependencyGraph::new();
    assert!(graph.register("X", "Y"));
    assert!(!graph.register("X", "Y"));

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.destinations("X"), vec!["Y"]);
}

#[test]
fn self_edges_and_cycles_are_kept() {
    let mut graph = DependencyGraph::new();
    graph.register("A", "A");
    graph.register("A", "B");
    graph.register("B", "A");

    assert!(graph.contains_edge("A", "A"));
    assert!(graph.contains_edge("B", "A"));
    assert!(!graph.contains_edge("B", "B"));
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn sources_keep_first_registration_order() {
    let mut graph = DependencyGraph::new();
    graph.register("zeta", "a");
    graph.register("alpha", "b");
    // a destination that later becomes a source
    graph.register("a", "alpha");
    graph.register("zeta", "c");

    let sources: Vec<_> = graph.sources().collect();
    assert_eq!(sources, vec!["zeta", "alpha", "a"]);
}

#[test]
fn destinations_are_sorted_regardless_of_insertion() {
    let mut graph = DependencyGraph::new();
    for dest in ["java.util", "java.io", "org.z", "java.lang", "com.b"] {
        graph.register("src", dest);
    }
    assert_eq!(
        graph.destinations("src"),
        vec!["com.b", "java.io", "java.lang", "java.util", "org.z"]
    );
}

#[test]
fn merge_unions_edge_sets() {
    let mut left = DependencyGraph::new();
    left.register("X", "Y");
    left.register("A", "B");

    let mut right = DependencyGraph::new();
    right.register("X", "Z");
    right.register("X", "Y");

    left.merge(&right);

    assert_eq!(left.destinations("X"), vec!["Y", "Z"]);
    assert_eq!(left.destinations("A"), vec!["B"]);
    assert_eq!(left.edge_count(), 3);
    // the merged-in graph is untouched
    assert_eq!(right.edge_count(), 2);
}

#[test]
fn wide_source_deduplicates_every_destination() {
    let mut graph = DependencyGraph::new();
    let dests: Vec<String> = (0..20_000).map(|i| format!("pkg{i:05}")).collect();

    for dest in &dests {
        assert!(graph.register("hub", dest));
    }
    for dest in &dests {
        assert!(!graph.register("hub", dest));
    }

    assert_eq!(graph.edge_count(), dests.len());
    assert_eq!(graph.source_count(), 1);
    assert!(graph.contains_edge("hub", "pkg19999"));
    assert!(!graph.contains_edge("pkg19999", "hub"));
    assert_eq!(graph.destinations("hub"), dests.iter().map(String::as_str).collect::<Vec<_>>());
}

use heapgraph::{EdgeType, Graph, GraphDescription, GraphError, GraphFactory, PriorityGraph, PriorityItem};

type Edge = PriorityItem<&'static str>;

/// Returns the graph together with the `X -> G` and `X -> A!` edges.
fn wardrobe() -> (PriorityGraph<&'static str>, Edge, Edge) {
    let e1 = PriorityItem::new("G", 1);
    let e2 = PriorityItem::new("A!", 7);
    let mut graph = PriorityGraph::new();
    for v in ["X", "G", "Hat", "A!"] {
        graph.add_vertex(v);
    }
    graph.add_edge(e1.clone(), &"X", &"G");
    graph.add_edge(e2.clone(), &"X", &"A!");
    graph.add_edge(PriorityItem::new("X", 7), &"Hat", &"X");
    (graph, e1, e2)
}

#[test]
fn test_walkthrough() {
    let (mut graph, e1, e2) = wardrobe();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.contains_vertex(&"X"));
    assert!(graph.contains_edge(&e2));

    let successors = graph.successors(&"X");
    assert!(successors.contains(&"G") && successors.contains(&"A!"));
    assert_eq!(graph.edges().len(), 3);
    assert_eq!(graph.find_edge(&"X", &"G"), Some(&e1));
    assert_eq!(graph.endpoints(&e1), Some(("X", "G")));
    assert_eq!(graph.predecessors(&"X"), vec!["Hat"]);

    assert!(graph.remove_vertex(&"X"));
    assert!(!graph.contains_vertex(&"X"));
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 0);

    graph.add_vertex("X");
    graph.add_edge(e1.clone(), &"X", &"G");
    graph.add_edge(e2.clone(), &"X", &"A!");
    assert!(graph.remove_edge(&e1));
    assert!(!graph.contains_edge(&e1));
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.is_successor(&"X", &"A!"));
    assert!(!graph.is_successor(&"X", &"G"));
    assert!(graph.is_incident(&"X", &e2));

    graph.add_edge(PriorityItem::new("X", 3), &"Hat", &"X");
    assert_eq!(graph.neighbor_count(&"Hat"), 1);
    assert_eq!(graph.neighbor_count(&"G"), 0);
    assert_eq!(graph.degree(&"X"), 2);
    assert_eq!(graph.in_degree(&"X"), 1);
    assert_eq!(graph.out_degree(&"X"), 1);

    assert!(!graph.add_vertex("X"));
    assert!(!graph.add_edge(e2, &"X", &"A!"));
    assert!(!graph.add_edge(PriorityItem::new("A!", 7), &"X", &"A!"));
}

#[test]
fn test_loaded_edges_with_equal_values_are_distinct() {
    let input = "3\nX\nY\nZ\n2\nX,Y,0\nZ,Y,0\n";
    let mut graph = heapgraph::graph::loader::load_from_reader(input.as_bytes()).unwrap();
    let (x, y, z) = ("X".to_string(), "Y".to_string(), "Z".to_string());

    let zy = graph.find_edge(&z, &y).cloned().unwrap();
    assert_eq!(graph.source(&zy), Some(z.clone()));
    assert!(graph.remove_edge(&zy));
    assert_eq!(graph.successors(&x), vec![y.clone()]);
    assert!(graph.successors(&z).is_empty());
    assert_eq!(graph.in_edges(&y).len(), 1);
}

#[test]
fn test_no_parallel_edges() {
    let mut graph = PriorityGraph::new();
    graph.add_vertex('A');
    graph.add_vertex('B');
    assert!(graph.add_edge(PriorityItem::new('B', 1), &'A', &'B'));
    assert!(!graph.add_edge(PriorityItem::new('B', 2), &'A', &'B'));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_successor_order_independent_of_priority() {
    let mut graph = PriorityGraph::new();
    for v in ['A', 'B', 'C'] {
        graph.add_vertex(v);
    }
    graph.add_edge(PriorityItem::new('C', 1), &'A', &'C');
    graph.add_edge(PriorityItem::new('B', 9), &'A', &'B');
    assert_eq!(graph.successors(&'A'), vec!['B', 'C']);
    assert_eq!(graph.out_edges(&'A')[0].priority(), 9);
}

#[test]
fn test_cascading_removal() {
    let mut graph = PriorityGraph::new();
    for v in ["X", "Y", "Z"] {
        graph.add_vertex(v);
    }
    graph.add_edge(PriorityItem::new("Y", 1), &"X", &"Y");
    graph.add_edge(PriorityItem::new("Y", 1), &"Z", &"Y");

    assert!(graph.remove_vertex(&"Y"));
    assert!(graph.successors(&"X").is_empty());
    assert!(graph.successors(&"Z").is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_cascade_keeps_heaps_valid() {
    let mut graph = PriorityGraph::new();
    for v in 0..12u32 {
        graph.add_vertex(v);
    }
    for u in 0..12u32 {
        for v in 0..12u32 {
            if u != v {
                let priority = i32::try_from((u * 7 + v * 13) % 23).unwrap();
                graph.add_edge(PriorityItem::new(v, priority), &u, &v);
            }
        }
    }
    assert!(graph.validate_invariants());

    for victim in [5u32, 0, 11] {
        assert!(graph.remove_vertex(&victim));
        assert!(graph.validate_invariants());
        assert!(graph.predecessors(&victim).is_empty());
    }
    let n = graph.vertex_count();
    assert_eq!(graph.edge_count(), n * (n - 1));
}

#[test]
fn test_undirected_requests_fail() {
    let (mut graph, _, _) = wardrobe();
    let result = graph.add_edge_typed(PriorityItem::new("G", 0), &"Hat", &"G", EdgeType::Undirected);
    assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
    assert_eq!(graph.edge_count(), 3);
}

fn count_via_contract<G: Graph<char>>(graph: &mut G, edge: G::Edge) -> usize {
    graph.add_vertex('p');
    graph.add_vertex('q');
    graph.add_edge(edge, &'p', &'q');
    graph.edge_count()
}

#[test]
fn test_graph_contract() {
    let factory = <PriorityGraph<char> as Graph<char>>::factory();
    let mut graph = factory.create();
    let edge = PriorityItem::new('q', 4);
    assert_eq!(count_via_contract(&mut graph, edge.clone()), 1);

    assert_eq!(Graph::source(&graph, &edge), Some('p'));
    assert_eq!(Graph::dest(&graph, &edge), Some('q'));
    assert_eq!(Graph::edge_type(&graph, &edge), EdgeType::Directed);
    assert_eq!(Graph::default_edge_type(&graph), EdgeType::Directed);
    assert_eq!(Graph::vertices(&graph), vec!['p', 'q']);

    // Fresh instances are independent of earlier ones.
    assert_eq!(factory.create().vertex_count(), 0);
}

#[test]
fn test_description_round_trip_through_json() -> anyhow::Result<()> {
    let (graph, _, _) = wardrobe();
    let json = graph.to_description().to_json()?;
    let description: GraphDescription<String> = GraphDescription::from_json(&json)?;
    let rebuilt = PriorityGraph::from(description);

    assert_eq!(rebuilt.vertices(), vec!["X", "G", "Hat", "A!"]);
    assert_eq!(rebuilt.edge_count(), graph.edge_count());
    assert_eq!(
        rebuilt.find_edge(&"X".to_string(), &"A!".to_string()).map(PriorityItem::priority),
        Some(7)
    );
    Ok(())
}

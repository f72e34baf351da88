use sssp_sdk::{AdjListGraph, Error, Graph, NodeId};

fn out_edges(g: &AdjListGraph<f64>, u: impl Into<NodeId>) -> Vec<(NodeId, f64)> {
    g.out(&u.into()).unwrap().collect()
}

#[test]
fn test_dense_nodes_enumerate_in_index_order() {
    let g: AdjListGraph<f64> = AdjListGraph::with_node_count(4);
    let nodes: Vec<NodeId> = g.nodes().collect();
    assert_eq!(g.node_count(), 4);
    assert_eq!(
        nodes,
        (0..4).map(NodeId::Index).collect::<Vec<_>>()
    );
}

#[test]
fn test_from_dense_counts_nodes_and_edges() {
    let g = AdjListGraph::from_dense(vec![
        vec![(1, 1.0), (2, 2.5)],
        vec![(2, 0.5)],
        vec![],
    ]);
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert_eq!(out_edges(&g, 0usize), vec![(NodeId::Index(1), 1.0), (NodeId::Index(2), 2.5)]);
    assert_eq!(out_edges(&g, 2usize), vec![]);
}

#[test]
fn test_dense_add_edge_appends() {
    let mut g: AdjListGraph<f64> = AdjListGraph::with_node_count(3);
    g.add_edge(0, 1, 1.0).unwrap();
    g.add_edge(0, 2, 4.0).unwrap();
    assert_eq!(g.edge_count(), 2);
    assert_eq!(out_edges(&g, 0usize), vec![(NodeId::Index(1), 1.0), (NodeId::Index(2), 4.0)]);
}

#[test]
fn test_dense_keeps_parallel_edges() {
    let mut g: AdjListGraph<f64> = AdjListGraph::with_node_count(2);
    g.add_edge(0, 1, 10.0).unwrap();
    g.add_edge(0, 1, 2.0).unwrap();
    assert_eq!(out_edges(&g, 0usize), vec![(NodeId::Index(1), 10.0), (NodeId::Index(1), 2.0)]);
}

#[test]
fn test_dense_out_accepts_numeric_string_alias() {
    let g = AdjListGraph::from_dense(vec![vec![(1, 1.0)], vec![]]);
    assert_eq!(out_edges(&g, "0"), out_edges(&g, 0usize));
}

#[test]
fn test_dense_out_rejects_non_numeric_name() {
    let g: AdjListGraph<f64> = AdjListGraph::with_node_count(2);
    let err = g.out(&NodeId::from("a7")).err().unwrap();
    assert_eq!(err, Error::InvalidNodeId(NodeId::from("a7")));
}

#[test]
fn test_dense_out_of_range_index_yields_empty() {
    let g: AdjListGraph<f64> = AdjListGraph::with_node_count(2);
    assert_eq!(out_edges(&g, 99usize), vec![]);
}

#[test]
fn test_dense_add_edge_from_out_of_range_fails() {
    let mut g: AdjListGraph<f64> = AdjListGraph::with_node_count(2);
    assert_eq!(
        g.add_edge(5, 0, 1.0),
        Err(Error::InvalidNodeId(NodeId::Index(5)))
    );
}

#[test]
fn test_sparse_nodes_preserve_insertion_order() {
    let g = AdjListGraph::from_sparse(vec![
        (NodeId::from("C"), vec![(NodeId::from("A"), 1.0)]),
        (NodeId::from("A"), vec![]),
        (NodeId::from("B"), vec![]),
    ]);
    let nodes: Vec<NodeId> = g.nodes().collect();
    assert_eq!(nodes, vec![NodeId::from("C"), NodeId::from("A"), NodeId::from("B")]);
}

#[test]
fn test_sparse_out_of_unknown_node_is_empty() {
    let g = AdjListGraph::from_sparse(vec![(NodeId::from("A"), vec![(NodeId::from("B"), 1.0)])]);
    assert_eq!(out_edges(&g, "nowhere"), vec![]);
}

#[test]
fn test_sparse_append_registers_nodes_first_seen() {
    let mut g: AdjListGraph<f64> = AdjListGraph::from_sparse(vec![]);
    g.add_edge_by_id("A", "B", 1.0).unwrap();
    g.add_edge_by_id("C", "A", 2.0).unwrap();

    let nodes: Vec<NodeId> = g.nodes().collect();
    assert_eq!(nodes, vec![NodeId::from("A"), NodeId::from("B"), NodeId::from("C")]);
    assert_eq!(g.node_count(), 3);
    assert_eq!(out_edges(&g, "A"), vec![(NodeId::from("B"), 1.0)]);
    assert_eq!(out_edges(&g, "B"), vec![]);
}

#[test]
fn test_mode_mismatched_append_fails_fast() {
    let mut dense: AdjListGraph<f64> = AdjListGraph::with_node_count(2);
    assert!(matches!(
        dense.add_edge_by_id("A", "B", 1.0),
        Err(Error::InvalidConstruction(_))
    ));

    let mut sparse: AdjListGraph<f64> = AdjListGraph::from_sparse(vec![]);
    assert!(matches!(
        sparse.add_edge(0, 1, 1.0),
        Err(Error::InvalidConstruction(_))
    ));
}

#[test]
fn test_dense_and_sparse_ids_do_not_alias_in_node_set() {
    // Name("0") is a valid dense *lookup* alias but a distinct id value.
    assert_ne!(NodeId::from("0"), NodeId::Index(0));
    assert_eq!(NodeId::from("10").as_index(), Some(10));
    assert_eq!(NodeId::from("1x").as_index(), None);
    assert_eq!(NodeId::from("").as_index(), None);
}

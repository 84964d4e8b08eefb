//! SCC decomposition integration tests.
//!
//! These tests drive the engine through the public API only:
//! 1. Build graphs with `DirectedGraph`, `IndexedGraph` or a caller-defined type
//! 2. Decompose them lazily or eagerly
//! 3. Check membership, emission order and error reporting

use std::collections::BTreeSet;

use sccgraph::prelude::*;

/// Adjacency-list graph over `usize` that lives entirely outside the crate.
struct AdjacencyList {
    successors: Vec<Vec<usize>>,
}

impl AdjacencyList {
    fn new(successors: Vec<Vec<usize>>) -> Self {
        AdjacencyList { successors }
    }
}

impl GraphBase for AdjacencyList {
    type Vertex = usize;

    fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.successors.len()
    }

    fn contains_vertex(&self, vertex: &usize) -> bool {
        *vertex < self.successors.len()
    }
}

impl Successors for AdjacencyList {
    fn successors(&self, vertex: &usize) -> Result<impl Iterator<Item = usize> + '_> {
        let list = self
            .successors
            .get(*vertex)
            .ok_or_else(|| Error::UnknownVertex(format!("{vertex:?}")))?;
        Ok(list.iter().copied())
    }
}

/// Collects a decomposition into a set of member sets.
fn partition<V: Ord>(sccs: Vec<Vec<V>>) -> BTreeSet<BTreeSet<V>> {
    sccs.into_iter().map(|scc| scc.into_iter().collect()).collect()
}

fn set<V: Ord + Clone>(items: &[V]) -> BTreeSet<V> {
    items.iter().cloned().collect()
}

#[test]
fn test_single_cycle_is_one_component() {
    let graph = IndexedGraph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]).unwrap();

    let sccs = strongly_connected_components(&graph).unwrap();
    assert_eq!(sccs.len(), 1);
    assert_eq!(set(&sccs[0]), set(&["A", "B", "C"]));
}

#[test]
fn test_chain_yields_singletons_in_order() {
    let graph = IndexedGraph::from_edges([("A", "B"), ("B", "C")]).unwrap();

    let sccs = strongly_connected_components(&graph).unwrap();
    assert_eq!(sccs, vec![vec!["A"], vec!["B"], vec!["C"]]);
}

#[test]
fn test_disjoint_cycles() {
    let graph =
        IndexedGraph::from_edges([("A", "B"), ("B", "A"), ("C", "D"), ("D", "C")]).unwrap();

    let sccs = strongly_connected_components(&graph).unwrap();
    let expected: BTreeSet<BTreeSet<&str>> =
        [set(&["A", "B"]), set(&["C", "D"])].into_iter().collect();
    assert_eq!(partition(sccs), expected);
}

#[test]
fn test_self_loop() {
    let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
    let a = graph.add_node("A");
    graph.add_edge(a, a, ()).unwrap();

    let mut components = decompose(&graph).unwrap();
    assert_eq!(components.next(), Some(Ok(vec![a])));
    assert_eq!(components.next(), None);
}

#[test]
fn test_empty_graph() {
    let graph: IndexedGraph<&str, ()> = IndexedGraph::new();
    assert_eq!(decompose(&graph).unwrap().count(), 0);
    assert!(strongly_connected_components(&graph).unwrap().is_empty());
}

#[test]
fn test_caller_defined_graph() {
    // 0 <-> 1 -> 2 <-> 3 -> 4, 4 -> 4
    let graph = AdjacencyList::new(vec![vec![1], vec![0, 2], vec![3], vec![2, 4], vec![4]]);

    let sccs = strongly_connected_components(&graph).unwrap();
    assert_eq!(sccs.len(), 3);
    assert_eq!(set(&sccs[0]), set(&[0, 1]));
    assert_eq!(set(&sccs[1]), set(&[2, 3]));
    assert_eq!(sccs[2], vec![4]);
}

#[test]
fn test_caller_defined_graph_dangling_successor() {
    let graph = AdjacencyList::new(vec![vec![1], vec![7]]);

    match decompose(&graph) {
        Err(Error::UnknownVertex(vertex)) => assert_eq!(vertex, "7"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected an unknown vertex error"),
    }
    assert!(transpose(&graph).is_err());
}

#[test]
fn test_unknown_vertex_message() {
    let error = Error::UnknownVertex("\"Q\"".to_string());
    assert_eq!(error.to_string(), "Unknown vertex - \"Q\"");
}

#[test]
fn test_input_graph_is_untouched() {
    let graph = IndexedGraph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]).unwrap();
    let before: Vec<(i32, Vec<i32>)> = graph
        .vertices()
        .map(|v| (v, graph.successors(&v).unwrap().collect()))
        .collect();

    strongly_connected_components(&graph).unwrap();

    let after: Vec<(i32, Vec<i32>)> = graph
        .vertices()
        .map(|v| (v, graph.successors(&v).unwrap().collect()))
        .collect();
    assert_eq!(before, after);
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_partial_consumption_then_restart() {
    let graph =
        IndexedGraph::from_edges([('a', 'b'), ('b', 'c'), ('c', 'b'), ('c', 'd')]).unwrap();
    let kosaraju = Kosaraju::new(&graph);

    let mut first_run = kosaraju.components().unwrap();
    assert_eq!(first_run.next(), Some(Ok(vec!['a'])));

    // A second run is independent of the half-consumed first one
    let full = kosaraju.collect().unwrap();
    assert_eq!(full.len(), 3);
    assert_eq!(full[0], vec!['a']);
    assert_eq!(set(&full[1]), set(&['b', 'c']));
    assert_eq!(full[2], vec!['d']);

    // The first run still resumes where it stopped
    let rest: Vec<Vec<char>> = first_run.collect::<Result<_>>().unwrap();
    assert_eq!(rest, full[1..].to_vec());
}

#[test]
fn test_indexed_graph_via_node_ids() {
    let mut graph: IndexedGraph<String, u32> = IndexedGraph::new();
    graph.add_edge("loop".to_string(), "body".to_string(), 1).unwrap();
    graph.add_edge("body".to_string(), "loop".to_string(), 2).unwrap();
    graph.add_edge("body".to_string(), "exit".to_string(), 3).unwrap();

    let by_node = strongly_connected_components(graph.inner()).unwrap();
    let by_key: Vec<Vec<String>> = by_node
        .iter()
        .map(|scc| graph.map_nodes_to_keys(scc))
        .collect();

    assert_eq!(
        partition(by_key.clone()),
        partition(graph.strongly_connected_components().unwrap())
    );
    assert_eq!(by_key[1], vec!["exit".to_string()]);
}

#[test]
fn test_deep_chain_does_not_overflow() {
    const LEN: usize = 100_000;

    let mut graph: DirectedGraph<(), ()> = DirectedGraph::with_capacity(LEN, LEN);
    let nodes: Vec<NodeId> = (0..LEN).map(|_| graph.add_node(())).collect();
    for pair in nodes.windows(2) {
        graph.add_edge(pair[0], pair[1], ()).unwrap();
    }

    let mut components = decompose(&graph).unwrap();
    assert_eq!(components.remaining_roots(), LEN);
    for node in &nodes {
        assert_eq!(components.next(), Some(Ok(vec![*node])));
    }
    assert_eq!(components.next(), None);
    assert_eq!(components.emitted(), LEN);
}

#[test]
fn test_deep_cycle_does_not_overflow() {
    const LEN: usize = 100_000;

    let mut graph: DirectedGraph<(), ()> = DirectedGraph::with_capacity(LEN, LEN);
    let nodes: Vec<NodeId> = (0..LEN).map(|_| graph.add_node(())).collect();
    for pair in nodes.windows(2) {
        graph.add_edge(pair[1], pair[0], ()).unwrap();
    }
    graph.add_edge(nodes[0], nodes[LEN - 1], ()).unwrap();

    let sccs = graph.strongly_connected_components().unwrap();
    assert_eq!(sccs.len(), 1);
    assert_eq!(sccs[0].len(), LEN);
}

#[test]
fn test_passes_driven_by_hand() {
    let graph = IndexedGraph::from_edges([("x", "y"), ("y", "x"), ("y", "z")]).unwrap();

    let mut visited = VisitedMap::for_graph(&graph);
    let mut finish = finish_order(&graph, &mut visited).unwrap();
    assert_eq!(finish, vec!["z", "y", "x"]);

    let transposed = transpose(&graph).unwrap();
    visited.reset();

    let mut sccs = Vec::new();
    while let Some(root) = finish.pop() {
        if let Some(scc) = extract_component(&transposed, root, &mut visited).unwrap() {
            sccs.push(scc);
        }
    }
    assert_eq!(sccs, strongly_connected_components(&graph).unwrap());
    assert!(visited.all_visited());
}

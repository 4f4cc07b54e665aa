//! Utilities for tests.

use errors::*;
use graph::{Edge, Graph, Node, NodeIndex, Weight};
use union_find::DisjointSet;

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FromIterator;

/// If `left` and `right` hold the same elements, ignoring order and repetition,
/// return `None`. Otherwise, return `Some(left_only, right_only)`, where
/// `left_only` and `right_only` are vectors of the elements appearing only one
/// one side or the other.
pub fn diff_elements<T: Clone + Hash + Eq>(left: &[T], right: &[T])
    -> Option<(HashSet<T>, HashSet<T>)>
{
    let left: HashSet<_> = FromIterator::from_iter(left.iter().cloned());
    let right: HashSet<_> = FromIterator::from_iter(right.iter().cloned());
    if left == right {
        None
    } else {
        Some((HashSet::from_iter(left.difference(&right).cloned()),
              HashSet::from_iter(right.difference(&left).cloned())))
    }
}

/// Take ownership of LEFT and RIGHT, and assert that they hold the same
/// elements, ignoring order and repetition.
macro_rules! assert_same_elements {
    ($left:expr, $right:expr) => ({
        let left = $left;
        let right = $right;
        if let Some((left_only, right_only)) = ::test_utils::diff_elements(&left, &right) {
            panic!("assertion failed: left and right have different elements:\n\
                    left has only `{:#?}`,\n\
                    right has only `{:#?}`",
                   left_only, right_only);
        }
    });
}

/// Return a weight source that hands out `weights` in order, and panics if
/// asked for more.
pub fn listed(weights: Vec<Weight>) -> impl FnMut() -> Weight {
    let mut weights = weights.into_iter();
    move || weights.next().expect("test ran out of listed weights")
}

/// A small directed graph given as a plain edge list, for shapes a
/// `GridGraph` can't take: disconnected graphs, edges pointing in any
/// direction. Node `i` is `Node::new(0, i)`.
pub struct EdgeListGraph {
    nodes: usize,
    edges: Vec<Edge>,

    /// `out[i]` holds the edges leaving node `i`.
    out: Vec<Vec<Edge>>
}

impl EdgeListGraph {
    /// Build a graph with nodes `0..nodes` and an edge for each
    /// `(from, to, weight)` triple.
    pub fn new(nodes: usize, edges: &[(NodeIndex, NodeIndex, Weight)]) -> EdgeListGraph {
        let edges: Vec<Edge> = edges.iter()
            .map(|&(from, to, weight)| Edge {
                from: Node::new(0, from),
                to: Node::new(0, to),
                weight
            })
            .collect();
        let mut out = vec![Vec::new(); nodes];
        for edge in &edges {
            out[edge.from.col].push(*edge);
        }
        EdgeListGraph { nodes, edges, out }
    }

    /// Build a graph with nodes `0..nodes` and a single edge from node 0 to
    /// `stray`, which is not one of its nodes.
    pub fn with_stray_edge(nodes: usize, stray: Node) -> EdgeListGraph {
        let mut graph = EdgeListGraph::new(nodes, &[]);
        let edge = Edge { from: Node::new(0, 0), to: stray, weight: 1 };
        graph.edges.push(edge);
        graph.out[0].push(edge);
        graph
    }
}

impl Graph for EdgeListGraph {
    fn nodes(&self) -> usize { self.nodes }

    fn node(&self, index: NodeIndex) -> Node {
        assert!(index < self.nodes);
        Node::new(0, index)
    }

    fn index_of(&self, node: Node) -> Result<NodeIndex> {
        if node.row != 0 || node.col >= self.nodes {
            bail!(ErrorKind::UnknownNode(node));
        }
        Ok(node.col)
    }

    fn out_edges(&self, index: NodeIndex) -> &[Edge] { &self.out[index] }

    fn all_edges(&self) -> &[Edge] { &self.edges }
}

/// Return the weight of the lightest directed walk from `source` to `target`,
/// found by trying every simple path. Only for small graphs.
pub fn cheapest_walk<G: Graph>(graph: &G, source: Node, target: Node) -> Option<u64> {
    fn explore<G: Graph>(graph: &G, at: Node, target: Node, so_far: u64,
                         on_path: &mut HashSet<Node>, best: &mut Option<u64>) {
        if at == target {
            if best.map_or(true, |b| so_far < b) {
                *best = Some(so_far);
            }
            return;
        }
        for edge in graph.neighbors_out(at).unwrap() {
            if on_path.insert(edge.to) {
                explore(graph, edge.to, target, so_far + edge.weight as u64, on_path, best);
                on_path.remove(&edge.to);
            }
        }
    }

    let mut on_path = HashSet::new();
    on_path.insert(source);
    let mut best = None;
    explore(graph, source, target, 0, &mut on_path, &mut best);
    best
}

/// Return the weight of the lightest spanning tree of `graph`, ignoring edge
/// direction, by trying every subset of `nodes - 1` edges. Return `None` if no
/// subset spans the graph. Only for small graphs.
pub fn lightest_spanning_tree<G: Graph>(graph: &G) -> Option<u64> {
    fn choose<G: Graph>(graph: &G, next: usize, chosen: &mut Vec<Edge>, best: &mut Option<u64>) {
        let wanted = graph.nodes().saturating_sub(1);
        if chosen.len() == wanted {
            let mut sets = DisjointSet::new(graph.nodes());
            let acyclic = chosen.iter().all(|edge| {
                sets.union(graph.index_of(edge.from).unwrap(),
                           graph.index_of(edge.to).unwrap())
            });
            if acyclic {
                let weight: u64 = chosen.iter().map(|edge| edge.weight as u64).sum();
                if best.map_or(true, |b| weight < b) {
                    *best = Some(weight);
                }
            }
            return;
        }

        let edges = graph.all_edges();
        if edges.len() - next < wanted - chosen.len() {
            return;
        }

        chosen.push(edges[next]);
        choose(graph, next + 1, chosen, best);
        chosen.pop();
        choose(graph, next + 1, chosen, best);
    }

    let mut best = None;
    choose(graph, 0, &mut Vec::new(), &mut best);
    best
}

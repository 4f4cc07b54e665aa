//! Minimum spanning trees by Kruskal's algorithm.
//!
//! The graphs we work with are directed, but a spanning tree has no use for
//! direction: an edge from `a` to `b` connects `a` and `b` just as well as one
//! from `b` to `a` would. So we consume each edge as an unordered pair of
//! endpoints, and report the accepted edges exactly as the graph stores them,
//! direction included.

use errors::*;
use graph::{Edge, Graph};
use union_find::DisjointSet;

/// A set of edges containing no cycle, when direction is ignored.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    /// The accepted edges, in the order Kruskal's algorithm took them: by
    /// increasing weight, ties in graph construction order.
    pub edges: Vec<Edge>,

    /// The number of connected components the edges leave the graph's nodes
    /// in. One for a spanning tree.
    pub components: usize
}

impl Forest {
    /// Return the sum of the weights of the forest's edges.
    pub fn weight(&self) -> u64 {
        self.edges.iter().map(|edge| edge.weight as u64).sum()
    }

    /// Return true if this forest connects all the graph's nodes.
    pub fn is_tree(&self) -> bool { self.components <= 1 }
}

/// The outcome of a minimum spanning tree computation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Spanning {
    /// The graph is connected; this is a minimum spanning tree.
    Tree(Forest),

    /// The graph is not connected, so no spanning tree exists. This is a
    /// minimum spanning forest: a minimum spanning tree of each component.
    PartialForest(Forest)
}

impl Spanning {
    /// Return the edges found, tree or not.
    pub fn forest(&self) -> &Forest {
        match *self {
            Spanning::Tree(ref forest) | Spanning::PartialForest(ref forest) => forest
        }
    }

    /// Return the spanning tree, treating a disconnected graph as an error.
    pub fn into_tree(self) -> Result<Forest> {
        match self {
            Spanning::Tree(tree) => Ok(tree),
            Spanning::PartialForest(forest) => {
                Err(ErrorKind::PartialForest(forest.components).into())
            }
        }
    }
}

/// Compute a minimum spanning tree of `graph`, ignoring edge direction.
///
/// Edges of equal weight are considered in the order `graph.all_edges()`
/// lists them, so the result is the same on every call.
///
/// Fails with `UnknownNode` if an edge's endpoint is not one of `graph`'s
/// nodes.
pub fn minimum_spanning_tree<G>(graph: &G) -> Result<Spanning>
    where G: Graph + ?Sized
{
    let n = graph.nodes();

    // Resolve endpoints up front, so a bad edge is reported no matter where it
    // falls in the sort.
    let mut candidates = Vec::with_capacity(graph.all_edges().len());
    for edge in graph.all_edges() {
        let from = graph.index_of(edge.from)?;
        let to = graph.index_of(edge.to)?;
        candidates.push((edge, from, to));
    }

    // `sort_by_key` is stable, so equal weights keep construction order.
    candidates.sort_by_key(|&(edge, _, _)| edge.weight);

    let wanted = n.saturating_sub(1);
    let mut sets = DisjointSet::new(n);
    let mut edges = Vec::with_capacity(wanted);
    for (edge, from, to) in candidates {
        if edges.len() == wanted {
            break;
        }
        if sets.union(from, to) {
            edges.push(*edge);
        }
    }

    let forest = Forest { edges, components: sets.sets() };
    if forest.is_tree() {
        Ok(Spanning::Tree(forest))
    } else {
        Ok(Spanning::PartialForest(forest))
    }
}

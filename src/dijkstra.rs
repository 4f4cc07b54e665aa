//! Single-source shortest paths over directed graphs with non-negative weights.

use errors::*;
use graph::{Edge, Graph, Node, NodeIndex};

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A directed path through a graph, with its total weight.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// The nodes visited, from source to target inclusive. Consecutive nodes
    /// are joined by an edge of the graph.
    pub nodes: Vec<Node>,

    /// The sum of the weights of the edges along the path.
    pub weight: u64
}

impl Path {
    /// Return the first node of the path. Only a path that was built by hand
    /// or deserialized can be empty.
    pub fn source(&self) -> Option<Node> { self.nodes.first().cloned() }

    /// Return the last node of the path.
    pub fn target(&self) -> Option<Node> { self.nodes.last().cloned() }

    /// Return the number of edges along the path.
    pub fn len(&self) -> usize { self.nodes.len().saturating_sub(1) }

    /// Iterate over the `(from, to)` pairs of the path's edges, in order.
    pub fn steps<'a>(&'a self) -> impl Iterator<Item = (Node, Node)> + 'a {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// The outcome of a shortest-path search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Route {
    /// The target is reachable; here is a cheapest way to get there.
    Path(Path),

    /// No directed path leads from the source to the target.
    Unreachable { from: Node, to: Node }
}

impl Route {
    /// Return the path, if there is one.
    pub fn path(&self) -> Option<&Path> {
        match *self {
            Route::Path(ref path) => Some(path),
            Route::Unreachable { .. } => None
        }
    }

    pub fn is_reachable(&self) -> bool { self.path().is_some() }

    /// Return the path, treating an unreachable target as an error.
    pub fn into_path(self) -> Result<Path> {
        match self {
            Route::Path(path) => Ok(path),
            Route::Unreachable { from, to } => Err(ErrorKind::Unreachable(from, to).into())
        }
    }
}

/// Find a minimum-weight directed path from `source` to `target` in `graph`,
/// using Dijkstra's algorithm.
///
/// Nodes with equal tentative distances leave the frontier in the order they
/// entered it, so repeated calls on the same graph always choose the same path
/// among equally cheap ones.
///
/// Fails with `UnknownNode` if either node is not part of `graph`. An
/// unreachable target is not an error: it yields `Route::Unreachable`.
pub fn shortest_path<G>(graph: &G, source: Node, target: Node) -> Result<Route>
    where G: Graph + ?Sized
{
    let source_index = graph.index_of(source)?;
    let target_index = graph.index_of(target)?;

    let n = graph.nodes();
    let mut distance: Vec<Option<u64>> = vec![None; n];
    let mut predecessor: Vec<Option<NodeIndex>> = vec![None; n];
    let mut settled = vec![false; n];

    // Entries are (distance, sequence number, node). A node may appear more
    // than once; only its first extraction counts.
    let mut frontier = BinaryHeap::new();
    let mut sequence: u64 = 0;

    distance[source_index] = Some(0);
    frontier.push(Reverse((0, sequence, source_index)));

    while let Some(Reverse((dist, _, index))) = frontier.pop() {
        if settled[index] {
            continue;
        }
        settled[index] = true;
        if index == target_index {
            break;
        }

        for &Edge { to, weight, .. } in graph.out_edges(index) {
            let to_index = graph.index_of(to)?;
            if settled[to_index] {
                continue;
            }
            let candidate = dist + weight as u64;
            let improves = match distance[to_index] {
                Some(known) => candidate < known,
                None => true
            };
            if improves {
                distance[to_index] = Some(candidate);
                predecessor[to_index] = Some(index);
                sequence += 1;
                frontier.push(Reverse((candidate, sequence, to_index)));
            }
        }
    }

    if !settled[target_index] {
        return Ok(Route::Unreachable { from: source, to: target });
    }

    let mut nodes = vec![target];
    let mut index = target_index;
    while let Some(previous) = predecessor[index] {
        nodes.push(graph.node(previous));
        index = previous;
    }
    nodes.reverse();

    Ok(Route::Path(Path {
        nodes,
        weight: distance[target_index].unwrap_or(0)
    }))
}

//! Read-only support for drawing a graph and the results computed over it.
//!
//! rlattice does no drawing itself. A renderer needs to know where to put each
//! node, and which edges to emphasize; this module answers those questions and
//! nothing more.
//!
//! # Coordinate system
//!
//! A `VisibleGraph` places its nodes in its own "graph space", within the
//! axis-aligned bounding box from (0,0) to `graph.bounds()`. For a
//! `GridGraph`, node `(row, col)` sits at `x = col`, `y = size - 1 - row`:
//! the positive y axis points up, so row 0 is drawn at the top.

use errors::*;
use dijkstra::Path;
use graph::{Edge, Graph, Node};
use grid::GridGraph;
use kruskal::Forest;

use std::collections::HashSet;

/// A point in the graph coordinate space.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GraphPt(pub [f32; 2]);

/// A `Graph` whose nodes have positions, so that it can be drawn.
pub trait VisibleGraph: Graph {
    /// Return the upper-right corner of the smallest axis-aligned bounding box
    /// that contains all nodes' centers.
    fn bounds(&self) -> GraphPt;

    /// Return the center of `node`, or an `UnknownNode` error if `node` is not
    /// part of this graph.
    fn center(&self, node: Node) -> Result<GraphPt>;
}

impl VisibleGraph for GridGraph {
    fn bounds(&self) -> GraphPt {
        let extent = (self.size() - 1) as f32;
        GraphPt([extent, extent])
    }

    fn center(&self, node: Node) -> Result<GraphPt> {
        if !self.contains(node) {
            bail!(ErrorKind::UnknownNode(node));
        }
        let top = (self.size() - 1) as f32;
        Ok(GraphPt([node.col as f32, top - node.row as f32]))
    }
}

/// A set of edges to draw emphasized.
///
/// A highlight built from a `Path` is directed: it contains exactly the
/// path's steps. One built from a `Forest` ignores direction, like the forest
/// itself: an edge matches if it joins the same two nodes as some tree edge.
#[derive(Clone, Debug, Default)]
pub struct Highlight {
    pairs: HashSet<(Node, Node)>,
    directed: bool
}

impl Highlight {
    /// Highlight the steps along `path`.
    pub fn path(path: &Path) -> Highlight {
        Highlight {
            pairs: path.steps().collect(),
            directed: true
        }
    }

    /// Highlight the edges of `forest`, in either direction.
    pub fn forest(forest: &Forest) -> Highlight {
        Highlight {
            pairs: forest.edges.iter().map(Edge::undirected_key).collect(),
            directed: false
        }
    }

    /// Return the number of edges highlighted.
    pub fn len(&self) -> usize { self.pairs.len() }

    pub fn is_empty(&self) -> bool { self.pairs.is_empty() }

    /// Return true if `edge` should be drawn emphasized.
    pub fn contains(&self, edge: &Edge) -> bool {
        if self.directed {
            self.pairs.contains(&(edge.from, edge.to))
        } else {
            self.pairs.contains(&edge.undirected_key())
        }
    }
}

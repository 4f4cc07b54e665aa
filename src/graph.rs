//! Nodes, weighted directed edges, and the `Graph` trait the path and tree
//! engines run over.

use errors::*;

use std::fmt;

/// The weight of a single edge. Always positive.
pub type Weight = u32;

/// The index of a node within a `Graph`. A graph with `n` nodes uses the
/// indices `0..n`.
pub type NodeIndex = usize;

/// A node, identified by its grid row and column. Row 0 is the top row,
/// column 0 the leftmost column.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd,
         Serialize, Deserialize)]
pub struct Node {
    pub row: usize,
    pub col: usize
}

impl Node {
    pub fn new(row: usize, col: usize) -> Node {
        Node { row, col }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A directed, weighted edge from `from` to `to`.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    pub weight: Weight
}

impl Edge {
    /// Return this edge's endpoints as an unordered pair: the smaller node
    /// first. Two edges joining the same nodes in opposite directions have the
    /// same key.
    pub fn undirected_key(&self) -> (Node, Node) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }
}

/// A directed graph with weighted edges, whose nodes are numbered densely.
///
/// Implementations are immutable once built: every method takes `&self`, so
/// any number of computations may share one graph.
pub trait Graph {
    /// Return the number of nodes in this graph. The graph's nodes have indices
    /// in the range 0..graph.nodes().
    fn nodes(&self) -> usize;

    /// Return the node with the given index.
    ///
    /// Panics if `index` is not less than `self.nodes()`.
    fn node(&self, index: NodeIndex) -> Node;

    /// Return the index of `node`, or an `UnknownNode` error if `node` is not
    /// part of this graph.
    fn index_of(&self, node: Node) -> Result<NodeIndex>;

    /// Return the edges leaving the node with the given index.
    ///
    /// Panics if `index` is not less than `self.nodes()`.
    fn out_edges(&self, index: NodeIndex) -> &[Edge];

    /// Return every edge in the graph, in construction order.
    fn all_edges(&self) -> &[Edge];

    /// Return the edges leaving `node`.
    fn neighbors_out(&self, node: Node) -> Result<&[Edge]> {
        let index = self.index_of(node)?;
        Ok(self.out_edges(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, Node};

    #[test]
    fn node_order_is_row_major() {
        assert!(Node::new(0, 5) < Node::new(1, 0));
        assert!(Node::new(2, 1) < Node::new(2, 3));
        assert_eq!(format!("{}", Node::new(3, 4)), "(3, 4)");
    }

    #[test]
    fn undirected_key() {
        let a = Node::new(0, 0);
        let b = Node::new(0, 1);
        let forward = Edge { from: a, to: b, weight: 3 };
        let backward = Edge { from: b, to: a, weight: 3 };
        assert_eq!(forward.undirected_key(), (a, b));
        assert_eq!(backward.undirected_key(), (a, b));
    }
}

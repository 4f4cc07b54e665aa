//! Types for square grids.

use errors::*;
use graph::{Edge, Graph, Node, NodeIndex, Weight};
use weights::{WeightSource, MAX_WEIGHT, MIN_WEIGHT};

use std::convert::TryFrom;
use std::mem;

/// A directed, weighted grid of `size`✕`size` nodes. Each node has an edge
/// to its right-hand neighbor and an edge to the neighbor below it, when those
/// neighbors exist; there are no leftward, upward, or diagonal edges.
///
/// Nodes are numbered in row-major order, top to bottom, left to right. Edges
/// are stored in construction order: for each node in turn, its rightward edge
/// (if any), then its downward edge (if any). That puts each node's outgoing
/// edges next to each other, so `out_edges` can hand out a slice.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridGraph {
    size: usize,

    /// Every edge, in construction order.
    edges: Vec<Edge>,

    /// The outgoing edges of the node with index `i` are
    /// `edges[first_out[i] .. first_out[i + 1]]`.
    first_out: Vec<usize>
}

impl GridGraph {
    /// Build a `size`✕`size` grid, drawing one weight from `weights` for each
    /// edge in construction order.
    ///
    /// Fails with `InvalidSize` if `size` is less than one, and with
    /// `InvalidWeight` if `weights` produces a value outside
    /// `MIN_WEIGHT ..= MAX_WEIGHT`.
    pub fn build<W>(size: i64, weights: &mut W) -> Result<GridGraph>
        where W: WeightSource + ?Sized
    {
        let (size, edge_count, node_count) = match grid_counts(size) {
            Some(counts) => counts,
            None => bail!(ErrorKind::InvalidSize(size))
        };

        let mut edges = Vec::with_capacity(edge_count);
        let mut first_out = Vec::with_capacity(node_count + 1);

        for row in 0..size {
            for col in 0..size {
                first_out.push(edges.len());
                let from = Node::new(row, col);

                if col + 1 < size {
                    let weight = checked_weight(weights)?;
                    edges.push(Edge { from, to: Node::new(row, col + 1), weight });
                }
                if row + 1 < size {
                    let weight = checked_weight(weights)?;
                    edges.push(Edge { from, to: Node::new(row + 1, col), weight });
                }
            }
        }
        first_out.push(edges.len());

        Ok(GridGraph { size, edges, first_out })
    }

    /// Return the number of rows (and of columns) in this grid.
    pub fn size(&self) -> usize { self.size }

    /// Return the node in the top-left corner.
    pub fn top_left(&self) -> Node { Node::new(0, 0) }

    /// Return the node in the bottom-right corner.
    pub fn bottom_right(&self) -> Node { Node::new(self.size - 1, self.size - 1) }

    /// Return true if `node` lies within this grid.
    pub fn contains(&self, node: Node) -> bool {
        node.row < self.size && node.col < self.size
    }

    /// Iterate over the grid's nodes in index order.
    pub fn node_iter<'a>(&'a self) -> impl Iterator<Item = Node> + 'a {
        (0..self.nodes()).map(move |index| self.node(index))
    }
}

/// Return the side length, edge count and node count of a grid with `size`
/// rows, or `None` if `size` is less than one or the grid could not be held
/// in memory.
fn grid_counts(size: i64) -> Option<(usize, usize, usize)> {
    if size < 1 {
        return None;
    }
    let side = usize::try_from(size).ok()?;
    let nodes = side.checked_mul(side)?;
    let edges = side.checked_mul(side - 1)?.checked_mul(2)?;

    // Allocation sizes must fit in an `isize`.
    let limit = isize::max_value() as usize;
    if edges.checked_mul(mem::size_of::<Edge>())? > limit ||
        nodes.checked_add(1)?.checked_mul(mem::size_of::<usize>())? > limit
    {
        return None;
    }
    Some((side, edges, nodes))
}

fn checked_weight<W>(weights: &mut W) -> Result<Weight>
    where W: WeightSource + ?Sized
{
    let weight = weights.next_weight();
    if weight < MIN_WEIGHT || weight > MAX_WEIGHT {
        bail!(ErrorKind::InvalidWeight(weight));
    }
    Ok(weight)
}

impl Graph for GridGraph {
    fn nodes(&self) -> usize { self.size * self.size }

    fn node(&self, index: NodeIndex) -> Node {
        assert!(index < self.nodes());
        Node::new(index / self.size, index % self.size)
    }

    fn index_of(&self, node: Node) -> Result<NodeIndex> {
        if !self.contains(node) {
            bail!(ErrorKind::UnknownNode(node));
        }
        Ok(node.row * self.size + node.col)
    }

    fn out_edges(&self, index: NodeIndex) -> &[Edge] {
        &self.edges[self.first_out[index] .. self.first_out[index + 1]]
    }

    fn all_edges(&self) -> &[Edge] { &self.edges }
}

//! Error types for rlattice, built with `error_chain!`.

use graph::{Node, Weight};

error_chain! {
    errors {
        // A grid was requested with fewer than one row.
        InvalidSize(size: i64) {
            description("invalid grid size")
            display("invalid grid size {}: a grid needs at least one row and column", size)
        }

        // A node, or an edge endpoint, is not part of the graph at hand.
        UnknownNode(node: Node) {
            description("node not in graph")
            display("node {} is not part of the graph", node)
        }

        // A weight source produced a value outside `MIN_WEIGHT ..= MAX_WEIGHT`.
        InvalidWeight(weight: Weight) {
            description("edge weight out of range")
            display("edge weight {} is outside the permitted range", weight)
        }

        // No directed path leads from the first node to the second.
        Unreachable(from: Node, to: Node) {
            description("target not reachable from source")
            display("no directed path from {} to {}", from, to)
        }

        // A random point set was requested with no points in it.
        EmptyPointSet {
            description("empty point set")
            display("a point set needs at least one point")
        }

        // The graph's undirected projection falls into this many components,
        // so only a spanning forest exists.
        PartialForest(components: usize) {
            description("graph is not connected")
            display("graph has {} components; only a spanning forest exists", components)
        }
    }
}

//! Weighted, directed square lattices, and two classic analyses over them:
//! shortest paths by Dijkstra's algorithm and minimum spanning trees by
//! Kruskal's.
//!
//! A `GridGraph` has an edge from each node to its right-hand neighbor and one
//! to the neighbor below, each carrying a weight drawn from a `WeightSource`
//! at construction time. Once built, a grid never changes; `shortest_path`
//! and `minimum_spanning_tree` only read it, and return freshly allocated
//! results.
//!
//! ```
//! use rlattice::{GridGraph, UniformWeights, minimum_spanning_tree, shortest_path};
//!
//! let grid = GridGraph::build(6, &mut UniformWeights::seeded(17)).unwrap();
//! let route = shortest_path(&grid, grid.top_left(), grid.bottom_right()).unwrap();
//! assert_eq!(route.path().unwrap().len(), 10);
//!
//! let tree = minimum_spanning_tree(&grid).unwrap().into_tree().unwrap();
//! assert_eq!(tree.edges.len(), 35);
//! ```

// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
extern crate serde_json;

#[cfg(test)]
#[macro_use]
mod test_utils;

pub mod dijkstra;
pub mod errors;
pub mod graph;
pub mod grid;
pub mod hull;
pub mod kruskal;
pub mod layout;
pub mod union_find;
pub mod weights;
pub mod xorshift;

pub use dijkstra::{shortest_path, Path, Route};
pub use graph::{Edge, Graph, Node, NodeIndex, Weight};
pub use grid::GridGraph;
pub use hull::{convex_hull, random_points};
pub use kruskal::{minimum_spanning_tree, Forest, Spanning};
pub use layout::{GraphPt, Highlight, VisibleGraph};
pub use weights::{UniformWeights, WeightSource, MAX_WEIGHT, MIN_WEIGHT};

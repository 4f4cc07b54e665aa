//! Build a random weighted grid, find its top-left to bottom-right shortest
//! path and its minimum spanning tree, take the convex hull of a random point
//! set, and print everything as JSON.
//!
//! Settings come from the environment:
//!
//! - `RLATTICE_SIZE`: the number of rows and columns (default 6).
//! - `RLATTICE_SEED`: a 64-bit seed for the edge weights. Without one, we pick
//!   a seed at random and report it, so the run can be repeated.

extern crate rand;
extern crate rlattice;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

use rlattice::errors::*;
use rlattice::{minimum_spanning_tree, shortest_path};
use rlattice::{convex_hull, random_points};
use rlattice::{Edge, Forest, GraphPt, GridGraph, Graph, Path, UniformWeights};
use rlattice::xorshift::XorShift128Plus;

use rand::Rng;
use std::env;

const DEFAULT_SIZE: i64 = 6;
const HULL_POINTS: usize = 20;

/// Driver settings, read from the environment.
struct Config {
    size: i64,
    seed: u64
}

impl Config {
    fn from_env() -> Result<Config> {
        let size = match env::var("RLATTICE_SIZE") {
            Ok(text) => text.trim().parse::<i64>()
                .chain_err(|| format!("RLATTICE_SIZE is not an integer: {:?}", text))?,
            Err(_) => DEFAULT_SIZE
        };
        let seed = match env::var("RLATTICE_SEED") {
            Ok(text) => text.trim().parse::<u64>()
                .chain_err(|| format!("RLATTICE_SEED is not a 64-bit unsigned integer: {:?}",
                                      text))?,
            Err(_) => rand::thread_rng().gen()
        };
        Ok(Config { size, seed })
    }
}

/// Everything we print.
#[derive(Serialize)]
struct Report<'a> {
    size: usize,
    seed: u64,
    edges: &'a [Edge],

    /// `None` if the bottom-right node can't be reached, which can't happen on
    /// a grid, but the output format allows for it.
    shortest_path: Option<&'a Path>,
    spanning_tree: &'a Forest,
    spanning_tree_weight: u64,
    points: &'a [GraphPt],
    hull: &'a [GraphPt]
}

fn main() {
    if let Err(ref e) = run() {
        use ::std::io::Write;
        let stderr = &mut ::std::io::stderr();
        let errmsg = "Error writing to stderr";

        writeln!(stderr, "error: {}", e).expect(errmsg);

        for e in e.iter().skip(1) {
            writeln!(stderr, "caused by: {}", e).expect(errmsg);
        }

        // The backtrace is not always generated. Try running with
        // `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            writeln!(stderr, "backtrace: {:?}", backtrace).expect(errmsg);
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env()?;

    let grid = GridGraph::build(config.size, &mut UniformWeights::seeded(config.seed))
        .chain_err(|| "unable to build grid")?;

    let route = shortest_path(&grid, grid.top_left(), grid.bottom_right())
        .chain_err(|| "shortest path search failed")?;
    let tree = minimum_spanning_tree(&grid)
        .chain_err(|| "spanning tree search failed")?
        .into_tree()?;

    let points = random_points(HULL_POINTS, &mut XorShift128Plus::from_u64(config.seed))
        .chain_err(|| "unable to generate points")?;
    let hull = convex_hull(&points);

    let report = Report {
        size: grid.size(),
        seed: config.seed,
        edges: grid.all_edges(),
        shortest_path: route.path(),
        spanning_tree: &tree,
        spanning_tree_weight: tree.weight(),
        points: &points,
        hull: &hull
    };

    let json = serde_json::to_string_pretty(&report)
        .chain_err(|| "unable to serialize report")?;
    println!("{}", json);
    Ok(())
}

//! Convex hulls of points in the plane, by Andrew's monotone chain.

use errors::*;
use layout::GraphPt;

use rand::Rng;
use std::cmp::Ordering;

/// Return the z component of the cross product of the vectors `o→a` and
/// `o→b`. Positive if `o`, `a`, `b` turn counter-clockwise, negative if they
/// turn clockwise, and zero if they are collinear.
pub fn cross(o: GraphPt, a: GraphPt, b: GraphPt) -> f32 {
    let (o, a, b) = (o.0, a.0, b.0);
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

/// Return the vertices of the convex hull of `points`, counter-clockwise,
/// starting from the lowest point with the smallest x coordinate. The first
/// vertex is not repeated at the end.
///
/// Duplicate points count once, and points lying on a hull edge are not
/// vertices. If fewer than three distinct points remain, they are returned
/// sorted by x, then y. Points with a NaN or infinite coordinate are ignored.
pub fn convex_hull(points: &[GraphPt]) -> Vec<GraphPt> {
    let mut sorted: Vec<GraphPt> = points.iter()
        .cloned()
        .filter(|p| p.0[0].is_finite() && p.0[1].is_finite())
        .collect();
    // Only finite values remain, so the comparison never fails.
    sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    sorted.dedup();
    if sorted.len() <= 1 {
        return sorted;
    }

    let lower = half_hull(sorted.iter());
    let upper = half_hull(sorted.iter().rev());

    // Each half ends where the other begins.
    let mut hull = Vec::with_capacity(lower.len() + upper.len() - 2);
    hull.extend_from_slice(&lower[..lower.len() - 1]);
    hull.extend_from_slice(&upper[..upper.len() - 1]);
    hull
}

/// Walk `points` in order, keeping only left turns.
fn half_hull<'a, I>(points: I) -> Vec<GraphPt>
    where I: Iterator<Item = &'a GraphPt>
{
    let mut chain: Vec<GraphPt> = Vec::new();
    for &p in points {
        while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0 {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// Return `count` points drawn uniformly from the unit square `[0, 1)²`.
///
/// Fails with `EmptyPointSet` if `count` is zero.
pub fn random_points<R: Rng>(count: usize, rng: &mut R) -> Result<Vec<GraphPt>> {
    if count == 0 {
        bail!(ErrorKind::EmptyPointSet);
    }
    Ok((0..count).map(|_| GraphPt([rng.gen(), rng.gen()])).collect())
}

//! Erdős–Rényi random graph generator.

use rand::Rng;
use tracing::{instrument, warn};

use crate::graph::{Graph, GraphBuilder};

/// Generates a `G(n, p)` random graph.
///
/// Each unordered pair `{i, j}` with `i < j` is joined independently with
/// probability `probability`, using one Bernoulli draw per pair in
/// lexicographic order. Values outside `[0, 1]` are clamped and NaN is
/// treated as `0`; both corrections log a warning.
///
/// # Examples
/// ```
/// use netlab_core::random_graph;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// assert_eq!(random_graph(6, 1.0, &mut rng).edge_count(), 15);
/// assert_eq!(random_graph(6, -0.5, &mut rng).edge_count(), 0);
/// ```
#[must_use]
#[instrument(name = "topology.random", level = "debug", skip(rng))]
pub fn random_graph<R>(nodes: usize, probability: f64, rng: &mut R) -> Graph
where
    R: Rng + ?Sized,
{
    let probability = clamp_probability(probability);
    let mut builder = GraphBuilder::new(nodes);
    draw_bernoulli_edges(&mut builder, nodes, probability, rng);
    builder.finish()
}

/// Adds each candidate pair of `0..nodes` to `builder` with probability `probability`.
///
/// `probability` must already lie within `[0, 1]`.
pub(crate) fn draw_bernoulli_edges<R>(
    builder: &mut GraphBuilder,
    nodes: usize,
    probability: f64,
    rng: &mut R,
) where
    R: Rng + ?Sized,
{
    for i in 0..nodes {
        for j in (i + 1)..nodes {
            if rng.gen_bool(probability) {
                builder.add_edge(i, j);
            }
        }
    }
}

fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        warn!("edge probability is NaN, treating it as 0");
        return 0.0;
    }
    let clamped = probability.clamp(0.0, 1.0);
    if clamped != probability {
        warn!(
            requested = probability,
            clamped, "edge probability must lie within [0, 1], clamping"
        );
    }
    clamped
}

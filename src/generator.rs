use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::graph::{UndirectedGraph, VertexId, Weight};

/** generates a G(n,p) random graph on vertices 1..=n. Each edge exists with probability
density, weights are uniform in 1..=max_weight. The same seed always gives the same graph. */
pub fn random_graph(n:usize, density:f64, max_weight:Weight, seed:u64) -> UndirectedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let p = density.max(0.).min(1.);
    let mut g = UndirectedGraph::new();
    for v in 1..=n {
        g.add_vertex(v, rng.gen_range(1..=max_weight.max(1)));
    }
    for a in 1..=n {
        for b in a+1..=n {
            if rng.gen_bool(p) {
                g.add_edge(a, b);
            }
        }
    }
    g
}

/** generates a random simple path of n vertices with shuffled ids. Returns the graph and the
path (in path order). */
pub fn random_path(n:usize, max_weight:Weight, seed:u64) -> (UndirectedGraph, Vec<VertexId>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut path:Vec<VertexId> = (1..=n).collect();
    path.shuffle(&mut rng);
    let mut g = UndirectedGraph::new();
    for v in &path {
        g.add_vertex(*v, rng.gen_range(1..=max_weight.max(1)));
    }
    for w in path.windows(2) {
        g.add_edge(w[0], w[1]);
    }
    (g, path)
}

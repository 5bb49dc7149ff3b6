use crate::graph::UndirectedGraph;

impl UndirectedGraph {

    /** lower bound on the weight of a maximum weight independent set:
    ∑ w(v) / (d(v)+1) over all vertices (weighted Caro-Wei bound).
    GWMIN always finds an independent set at least this heavy. */
    pub fn alpha_minorant(&self) -> f64 {
        self.vertex_records()
            .map(|(_, weight, degree)| weight as f64 / (degree + 1) as f64)
            .sum()
    }
}

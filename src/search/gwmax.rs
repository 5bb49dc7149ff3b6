use std::cmp::Ordering;

use priority_queue::PriorityQueue;
use tracing::{debug, info};

use crate::graph::{UndirectedGraph, VertexId, Weight};
use crate::search::cmp_ratio;

/** GWMAX removal priority of a (non isolated) vertex: the smaller weight / (degree*(degree+1)),
the sooner the vertex is removed. Ties are broken by the largest degree, then by the smallest id.
Isolated vertices have an infinite value and are never queued. */
#[derive(Debug, PartialEq, Eq)]
struct GwmaxInfo {
    id: VertexId,
    weight: Weight,
    degree: usize,
}

impl GwmaxInfo {
    fn denominator(&self) -> u128 {
        let d = self.degree as u128;
        d * (d + 1)
    }
}

impl Ord for GwmaxInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ratio(
            other.weight as u128, other.denominator(),
            self.weight as u128, self.denominator(),
        )
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for GwmaxInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl UndirectedGraph {

    /** implements the GWMAX greedy. Works on a copy of the graph (the graph is not modified).
        1. select the vertex v minimizing w(v)/(d(v)(d(v)+1)) (ties: largest degree, then
           smallest id). Isolated vertices are never selected.
        2. remove v (and its incident edges) from the graph
        3. repeat until there is no edge left. The remaining vertices form an independent set.
    */
    pub fn mwis_greedy_gwmax(&self) -> Vec<VertexId> {
        let mut working = self.clone();
        let mut candidates:PriorityQueue<VertexId, GwmaxInfo> = PriorityQueue::new();
        for (id, weight, degree) in working.vertex_records().filter(|(_, _, d)| *d > 0) {
            candidates.push(id, GwmaxInfo { id, weight, degree });
        }
        while working.number_of_edges() > 0 {
            let current_vertex = match candidates.pop() {
                None => break,
                Some((v, info)) => {
                    debug!(vertex = v, weight = info.weight, degree = info.degree, "gwmax removes");
                    v
                }
            };
            let neighbours:Vec<VertexId> = working.neighbours(current_vertex).collect();
            working.remove_vertex(current_vertex);
            for v in neighbours {
                match working.degree(v).unwrap_or(0) {
                    0 => { candidates.remove(&v); },
                    degree => { candidates.change_priority_by(&v, |p| { p.degree = degree; }); }
                }
            }
        }
        let res:Vec<VertexId> = working.vertices().collect();
        info!(weight = self.weight_of_set(&res), size = res.len(), "gwmax");
        res
    }
}

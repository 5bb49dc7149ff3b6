use std::cmp::Ordering;
use std::collections::BTreeSet;

use priority_queue::PriorityQueue;
use tracing::{debug, info};

use crate::graph::{UndirectedGraph, VertexId, Weight};
use crate::search::cmp_ratio;

/** GWMIN priority of a vertex: weight / (degree+1).
Ties are broken by the smallest degree, then by the smallest id. */
#[derive(Debug, PartialEq, Eq)]
struct GwminInfo {
    id: VertexId,
    weight: Weight,
    degree: usize,
}

impl Ord for GwminInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ratio(
            self.weight as u128, self.degree as u128 + 1,
            other.weight as u128, other.degree as u128 + 1,
        )
            .then_with(|| other.degree.cmp(&self.degree))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for GwminInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl UndirectedGraph {

    /** implements the GWMIN greedy. Works on a copy of the graph (the graph is not modified).
        1. select the vertex v maximizing w(v)/(d(v)+1) (ties: smallest degree, then smallest id)
        2. add v to the independent set
        3. remove v and its neighbours from the graph
        4. repeat until the graph is empty
    */
    pub fn mwis_greedy_gwmin(&self) -> Vec<VertexId> {
        let mut working = self.clone();
        let mut remaining_vertices:PriorityQueue<VertexId, GwminInfo> = PriorityQueue::new();
        for (id, weight, degree) in working.vertex_records() {
            remaining_vertices.push(id, GwminInfo { id, weight, degree });
        }
        let mut res = Vec::new();
        loop {
            let current_vertex = match remaining_vertices.pop() {
                None => break,
                Some((v, info)) => {
                    debug!(vertex = v, weight = info.weight, degree = info.degree, "gwmin selects");
                    v
                }
            };
            res.push(current_vertex);
            // current vertex and its neighbours leave the graph
            let removed:Vec<VertexId> = std::iter::once(current_vertex)
                .chain(working.neighbours(current_vertex))
                .collect();
            // vertices two steps away lose some neighbours
            let mut updated:BTreeSet<VertexId> = BTreeSet::new();
            for v in &removed[1..] {
                updated.extend(working.neighbours(*v));
            }
            for v in &removed {
                working.remove_vertex(*v);
                remaining_vertices.remove(v);
                updated.remove(v);
            }
            for v in updated {
                let degree = working.degree(v).unwrap_or(0);
                remaining_vertices.change_priority_by(&v, |p| { p.degree = degree; });
            }
        }
        info!(weight = self.weight_of_set(&res), size = res.len(), "gwmin");
        res
    }
}

use std::collections::BTreeSet;

use crate::graph::{TotalWeight, UndirectedGraph, VertexId};

/** result of the independent set checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// feasible solution (contains its weight)
    Ok(TotalWeight),
    /// the solution contains an id that is not a vertex
    UnknownVertex(VertexId),
    /// the solution contains a vertex twice
    DuplicateVertex(VertexId),
    /// two vertices of the solution are adjacent
    Conflict(VertexId, VertexId),
}

/**
checks that sol is an independent set of the graph.
returns its weight if it is feasible, the reason of infeasibility otherwise.
*/
pub fn checker(g:&UndirectedGraph, sol:&[VertexId]) -> CheckerResult {
    let mut visited = BTreeSet::new();
    for v in sol {
        if !g.has_vertex(*v) {
            return CheckerResult::UnknownVertex(*v);
        }
        if !visited.insert(*v) {
            return CheckerResult::DuplicateVertex(*v);
        }
    }
    // check conflicts
    for (i, a) in sol.iter().enumerate() {
        for b in &sol[i+1..] {
            if g.has_edge(*a, *b) {
                return CheckerResult::Conflict(*a, *b);
            }
        }
    }
    CheckerResult::Ok(g.weight_of_set(sol))
}

/** returns true iff no vertex outside sol can be added to sol without creating a conflict */
pub fn is_maximal(g:&UndirectedGraph, sol:&[VertexId]) -> bool {
    let inside:BTreeSet<VertexId> = sol.iter().copied().collect();
    g.vertices()
        .filter(|v| !inside.contains(v))
        .all(|v| g.neighbours(v).any(|u| inside.contains(&u)))
}

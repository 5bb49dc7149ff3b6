use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::error::{GraphError, Result};
use crate::graph::{TotalWeight, UndirectedGraph, VertexId};

impl UndirectedGraph {

    /** returns true iff ids is a simple path of the graph:
     - an empty sequence, or a single known vertex
     - otherwise, consecutive vertices are adjacent and no vertex appears twice
    */
    pub fn has_path(&self, ids:&[VertexId]) -> bool {
        match ids {
            [] => true,
            [v] => self.has_vertex(*v),
            _ => {
                let adjacent = ids.windows(2).all(|w| self.has_edge(w[0], w[1]));
                // checked separately: a cycle walked back to its start is adjacent everywhere
                let mut visited = BTreeSet::new();
                let no_repetition = ids.iter().all(|v| visited.insert(*v));
                adjacent && no_repetition
            }
        }
    }

    /** computes a maximum weight independent set of a simple path (the vertex order is given by
    the path, not by the graph). The returned vertices follow the path order.

    Fails with InvalidPath if path is not a simple path of the graph.
    */
    pub fn mwis_for_path(&self, path:&[VertexId]) -> Result<Vec<VertexId>> {
        if !self.has_path(path) {
            return Err(GraphError::InvalidPath);
        }
        let weights:Vec<TotalWeight> = path.iter()
            .map(|v| self.weight(*v).map(TotalWeight::from))
            .collect::<Result<_>>()?;
        let n = weights.len();
        if n == 0 {
            return Ok(Vec::new());
        }
        // best[i]: weight of a MWIS of the first i+1 vertices of the path
        let mut best:Vec<TotalWeight> = Vec::with_capacity(n);
        best.push(weights[0]);
        if n > 1 {
            best.push(weights[0].max(weights[1]));
        }
        for i in 2..n {
            let value = best[i-1].max(best[i-2] + weights[i]);
            best.push(value);
        }
        // reconstruction
        let mut res = Vec::new();
        let mut i = n as isize - 1;
        while i > 0 {
            let iu = i as usize;
            if best[iu] == best[iu-1] {
                i -= 1;
            } else {
                res.push(path[iu]);
                i -= 2;
            }
        }
        if i == 0 {
            res.push(path[0]);
        }
        res.reverse();
        debug!(path_length = n, "path dynamic programming done");
        info!(weight = best[n-1], size = res.len(), "path MWIS");
        Ok(res)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::generator::random_path;
    use crate::graph::Weight;
    use crate::util::example_graph;

    #[test]
    fn test_has_path() {
        let g = example_graph();
        assert!(g.has_path(&[]));
        assert!(g.has_path(&[4]));
        assert!(!g.has_path(&[42]));
        assert!(g.has_path(&[1, 2, 3, 4]));
        assert!(g.has_path(&[6, 5, 4, 3]));
        assert!(!g.has_path(&[1, 5])); // not adjacent
        assert!(!g.has_path(&[1, 2, 42]));
    }

    #[test]
    fn test_has_path_rejects_cycle() {
        let g = example_graph();
        // every consecutive pair is an edge
        assert!(!g.has_path(&[1, 2, 3, 1]));
        assert!(!g.has_path(&[1, 2, 1]));
    }

    #[test]
    fn test_mwis_for_path_example() {
        let g = example_graph();
        let check = |path:&[VertexId], expected:&[VertexId], weight:TotalWeight| {
            let res = g.mwis_for_path(path).unwrap();
            assert_eq!(res, expected);
            assert_eq!(g.weight_of_set(&res), weight);
        };
        check(&[1, 2], &[2], 30);
        check(&[2, 3], &[2], 30);
        check(&[1, 2, 3], &[1, 3], 31);
        check(&[1, 2, 3, 4], &[1, 3], 31);
        check(&[5], &[5], 17);
    }

    #[test]
    fn test_mwis_for_path_invalid() {
        let g = example_graph();
        assert!(matches!(g.mwis_for_path(&[1, 6]), Err(GraphError::InvalidPath)));
        assert!(matches!(g.mwis_for_path(&[1, 2, 3, 1]), Err(GraphError::InvalidPath)));
        assert!(g.mwis_for_path(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_mwis_for_path_large_weights() {
        let mut g = UndirectedGraph::new();
        g.add_vertex(1, Weight::MAX / 2 + 1);
        g.add_vertex(2, 1);
        g.add_vertex(3, Weight::MAX / 2 + 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        let res = g.mwis_for_path(&[1, 2, 3]).unwrap();
        assert_eq!(res, vec![1, 3]);
        assert_eq!(g.weight_of_set(&res), 2 * TotalWeight::from(Weight::MAX / 2 + 1));
    }

    /// best independent set weight on a path by enumeration of all subsets
    fn brute_force(weights:&[TotalWeight]) -> TotalWeight {
        let n = weights.len();
        let mut best = 0;
        for mask in 0u32..(1 << n) {
            if mask & (mask >> 1) != 0 { continue; } // two consecutive vertices
            let w:TotalWeight = (0..n).filter(|i| mask & (1 << i) != 0).map(|i| weights[i]).sum();
            best = best.max(w);
        }
        best
    }

    proptest! {
        #[test]
        fn path_mwis_is_optimal(n in 1..14usize, seed in any::<u64>()) {
            // ids are shuffled, the path order differs from the id order
            let (g, ids) = random_path(n, 100, seed);
            let weights:Vec<TotalWeight> = ids.iter()
                .map(|v| TotalWeight::from(g.weight(*v).unwrap()))
                .collect();
            let res = g.mwis_for_path(&ids).unwrap();
            for pair in res.windows(2) {
                prop_assert!(!g.has_edge(pair[0], pair[1]));
            }
            prop_assert_eq!(g.weight_of_set(&res), brute_force(&weights));
        }
    }
}

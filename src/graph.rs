use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{GraphError, Result};

/** Vertex Id */
pub type VertexId = usize;

/** Vertex weight */
pub type Weight = u32;

/** weight of a set of vertices (sums never overflow) */
pub type TotalWeight = u64;

/** undirected edge. Endpoints are normalized (smallest id first) so that (a,b) and (b,a) are
the same edge. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    /// smallest endpoint
    first: VertexId,
    /// largest endpoint
    second: VertexId,
}

impl Edge {
    /** creates a normalized edge */
    pub fn new(a:VertexId, b:VertexId) -> Self {
        Self { first: a.min(b), second: a.max(b) }
    }

    /// smallest endpoint
    pub fn first(&self) -> VertexId { self.first }

    /// largest endpoint
    pub fn second(&self) -> VertexId { self.second }

    /// endpoints as a pair
    pub fn endpoints(&self) -> (VertexId, VertexId) { (self.first, self.second) }
}

/** vertex record: immutable weight and the set of adjacent vertices (its degree is the size of
this set) */
#[derive(Debug, Clone)]
struct Vertex {
    /// vertex weight
    weight: Weight,
    /// adjacent vertices
    neighbours: BTreeSet<VertexId>,
}

impl Vertex {
    fn new(weight:Weight) -> Self {
        Self { weight, neighbours: BTreeSet::new() }
    }

    fn degree(&self) -> usize { self.neighbours.len() }
}

/** models a vertex-weighted undirected graph.

Mutations are forgiving: adding an edge between unknown vertices, a self loop or a duplicate
vertex is silently ignored, as is removing something that does not exist.
*/
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    /// vertices mapped with their ids
    vertices: BTreeMap<VertexId, Vertex>,
    /// set of edges
    edges: BTreeSet<Edge>,
}

impl UndirectedGraph {

    /** creates an empty graph */
    pub fn new() -> Self { Self::default() }

    /// number of vertices
    pub fn number_of_vertices(&self) -> usize { self.vertices.len() }

    /// number of edges
    pub fn number_of_edges(&self) -> usize { self.edges.len() }

    /** adds a vertex. Nothing is done if some vertex already has this id, or if the weight is 0
    (weights are positive) */
    pub fn add_vertex(&mut self, id:VertexId, weight:Weight) {
        if weight == 0 {
            return;
        }
        self.vertices.entry(id).or_insert_with(|| Vertex::new(weight));
    }

    /** removes a vertex and every edge incident to it. Nothing is done if the id is unknown */
    pub fn remove_vertex(&mut self, id:VertexId) {
        let neighbours = match self.vertices.get(&id) {
            None => return,
            Some(vertex) => vertex.neighbours.clone(),
        };
        // incident edges are collected before being erased
        for v in neighbours {
            self.remove_edge(id, v);
        }
        self.vertices.remove(&id);
    }

    /// true iff the id names a vertex of the graph
    pub fn has_vertex(&self, id:VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /** adds the edge (a,b). Ignored if a == b, if one of the ids is not a vertex, or if the
    edge already exists */
    pub fn add_edge(&mut self, a:VertexId, b:VertexId) {
        if a == b || !self.has_vertex(a) || !self.has_vertex(b) {
            return;
        }
        if self.edges.insert(Edge::new(a, b)) {
            // updating vertices degrees
            if let Some(vertex) = self.vertices.get_mut(&a) { vertex.neighbours.insert(b); }
            if let Some(vertex) = self.vertices.get_mut(&b) { vertex.neighbours.insert(a); }
        }
    }

    /** removes the edge (a,b) if it exists */
    pub fn remove_edge(&mut self, a:VertexId, b:VertexId) {
        if self.edges.remove(&Edge::new(a, b)) {
            if let Some(vertex) = self.vertices.get_mut(&a) { vertex.neighbours.remove(&b); }
            if let Some(vertex) = self.vertices.get_mut(&b) { vertex.neighbours.remove(&a); }
        }
    }

    /// true iff a and b are adjacent
    pub fn has_edge(&self, a:VertexId, b:VertexId) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    /** returns the vertices adjacent to id (increasing id order).
    Fails with InvalidVertex if id is not a vertex. */
    pub fn neighbours_for_vertex(&self, id:VertexId) -> Result<Vec<VertexId>> {
        Ok(self.vertex(id)?.neighbours.iter().copied().collect())
    }

    /// weight of the vertex id
    pub fn weight(&self, id:VertexId) -> Result<Weight> {
        Ok(self.vertex(id)?.weight)
    }

    /// degree of the vertex id
    pub fn degree(&self, id:VertexId) -> Result<usize> {
        Ok(self.vertex(id)?.degree())
    }

    /** sums the weights of the given ids. Ids that do not name a vertex are skipped */
    pub fn weight_of_set(&self, ids:&[VertexId]) -> TotalWeight {
        ids.iter()
            .filter_map(|id| self.vertices.get(id))
            .map(|vertex| TotalWeight::from(vertex.weight))
            .sum()
    }

    /// vertex ids (increasing order)
    pub fn vertices(&self) -> impl Iterator<Item=VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// edges (increasing order)
    pub fn edges(&self) -> impl Iterator<Item=Edge> + '_ {
        self.edges.iter().copied()
    }

    /// iterates over (id, weight, degree) for every vertex
    pub(crate) fn vertex_records(&self) -> impl Iterator<Item=(VertexId, Weight, usize)> + '_ {
        self.vertices.iter().map(|(id, vertex)| (*id, vertex.weight, vertex.degree()))
    }

    /// neighbours of a vertex known to exist (empty if it does not)
    pub(crate) fn neighbours(&self, id:VertexId) -> impl Iterator<Item=VertexId> + '_ {
        self.vertices.get(&id)
            .into_iter()
            .flat_map(|vertex| vertex.neighbours.iter().copied())
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.number_of_vertices());
        println!("\t{} \t edges", self.number_of_edges());
        let degrees:Vec<usize> = self.vertices.values().map(|v| v.degree()).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            println!("\t{} \t min degree", min);
            println!("\t{} \t max degree", max);
        }
        println!("\t{} \t total weight", self.vertices.values().map(|v| TotalWeight::from(v.weight)).sum::<TotalWeight>());
    }

    fn vertex(&self, id:VertexId) -> Result<&Vertex> {
        self.vertices.get(&id).ok_or(GraphError::InvalidVertex(id))
    }
}

/** diagnostic dump: every vertex (id, weight, degree) followed by the edges */
impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "********** Graph log **********")?;
        writeln!(f, "* Vertices:")?;
        for (id, weight, degree) in self.vertex_records() {
            writeln!(f, "** Id: {}", id)?;
            writeln!(f, "*** Weight: {} ; degree: {}", weight, degree)?;
        }
        writeln!(f, "* Edges:")?;
        for e in &self.edges {
            write!(f, "{}->{} ; ", e.first, e.second)?;
        }
        if !self.edges.is_empty() { writeln!(f)?; }
        write!(f, "*******************************")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    /// degree of every vertex equals its number of incident edges, endpoints exist
    fn check_invariants(g:&UndirectedGraph) {
        for e in g.edges() {
            assert!(g.has_vertex(e.first()) && g.has_vertex(e.second()));
            assert_ne!(e.first(), e.second());
        }
        for v in g.vertices() {
            let incident = g.edges().filter(|e| e.first() == v || e.second() == v).count();
            assert_eq!(g.degree(v).unwrap(), incident);
        }
    }

    fn small_graph() -> UndirectedGraph {
        let mut g = UndirectedGraph::new();
        g.add_vertex(1, 11);
        g.add_vertex(2, 30);
        g.add_vertex(3, 1);
        g.add_vertex(4, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(2, 4);
        g.add_edge(4, 2);
        g
    }

    #[test]
    fn test_build_graph() {
        let g = small_graph();
        assert_eq!(g.number_of_vertices(), 4);
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.degree(2).unwrap(), 3);
        assert_eq!(g.degree(4).unwrap(), 1);
        assert!(g.has_edge(4, 2));
        assert!(g.has_edge(2, 4));
        assert!(!g.has_edge(1, 3));
        check_invariants(&g);
    }

    #[test]
    fn test_duplicate_vertex_first_wins() {
        let mut g = small_graph();
        g.add_vertex(1, 1000);
        assert_eq!(g.number_of_vertices(), 4);
        assert_eq!(g.weight(1).unwrap(), 11);
    }

    #[test]
    fn test_self_loop_ignored() {
        let mut g = small_graph();
        g.add_edge(3, 3);
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.degree(3).unwrap(), 1);
    }

    #[test]
    fn test_edge_with_unknown_vertex_ignored() {
        let mut g = small_graph();
        g.add_edge(1, 42);
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.degree(1).unwrap(), 1);
        assert!(!g.has_vertex(42));
    }

    #[test]
    fn test_remove_vertex() {
        let mut g = small_graph();
        g.remove_vertex(2);
        assert!(!g.has_vertex(2));
        assert_eq!(g.number_of_vertices(), 3);
        assert_eq!(g.number_of_edges(), 0);
        for v in [1, 3, 4] {
            assert_eq!(g.degree(v).unwrap(), 0);
        }
        g.remove_vertex(2); // unknown: no-op
        assert_eq!(g.number_of_vertices(), 3);
        check_invariants(&g);
    }

    #[test]
    fn test_remove_edge() {
        let mut g = small_graph();
        g.remove_edge(4, 2);
        assert!(!g.has_edge(2, 4));
        assert_eq!(g.degree(2).unwrap(), 2);
        assert_eq!(g.degree(4).unwrap(), 0);
        g.remove_edge(1, 3); // not an edge: no-op
        assert_eq!(g.number_of_edges(), 2);
        check_invariants(&g);
    }

    #[test]
    fn test_neighbours() {
        let g = small_graph();
        assert_eq!(g.neighbours_for_vertex(2).unwrap(), vec![1, 3, 4]);
        assert_eq!(g.neighbours_for_vertex(1).unwrap(), vec![2]);
        assert!(matches!(g.neighbours_for_vertex(7), Err(GraphError::InvalidVertex(7))));
    }

    #[test]
    fn test_weight_of_set_skips_unknown() {
        let g = small_graph();
        assert_eq!(g.weight_of_set(&[1, 3, 99]), 12);
        assert_eq!(g.weight_of_set(&[]), 0);
    }

    #[test]
    fn test_zero_weight_ignored() {
        let mut g = small_graph();
        g.add_vertex(9, 0);
        assert!(!g.has_vertex(9));
        assert_eq!(g.number_of_vertices(), 4);
    }

    #[test]
    fn test_weight_of_set_large_weights() {
        let mut g = UndirectedGraph::new();
        g.add_vertex(1, Weight::MAX);
        g.add_vertex(2, Weight::MAX);
        g.add_vertex(3, Weight::MAX);
        assert_eq!(g.weight_of_set(&[1, 2, 3]), 3 * TotalWeight::from(Weight::MAX));
    }

    #[test]
    fn test_display() {
        let g = small_graph();
        let s = g.to_string();
        assert!(s.contains("** Id: 2\n*** Weight: 30 ; degree: 3"));
        assert!(s.contains("1->2 ; 2->3 ; 2->4 ; "));
    }

    #[derive(Debug, Clone)]
    enum Op {
        AddVertex(VertexId, Weight),
        RemoveVertex(VertexId),
        AddEdge(VertexId, VertexId),
        RemoveEdge(VertexId, VertexId),
    }

    fn op_strategy() -> impl Strategy<Value=Op> {
        prop_oneof![
            (0..12usize, 1..50u32).prop_map(|(v, w)| Op::AddVertex(v, w)),
            (0..12usize).prop_map(Op::RemoveVertex),
            (0..12usize, 0..12usize).prop_map(|(a, b)| Op::AddEdge(a, b)),
            (0..12usize, 0..12usize).prop_map(|(a, b)| Op::RemoveEdge(a, b)),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_after_mutations(ops in proptest::collection::vec(op_strategy(), 0..80)) {
            let mut g = UndirectedGraph::new();
            for op in ops {
                match op {
                    Op::AddVertex(v, w) => g.add_vertex(v, w),
                    Op::RemoveVertex(v) => g.remove_vertex(v),
                    Op::AddEdge(a, b) => g.add_edge(a, b),
                    Op::RemoveEdge(a, b) => g.remove_edge(a, b),
                }
                check_invariants(&g);
            }
        }
    }
}

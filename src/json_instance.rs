/*
Implements:
 - procedures to read and write graphs in a JSON format
 - conversions between the JSON format and the graph structure
*/
use std::fs;

use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::graph::{UndirectedGraph, VertexId, Weight};

/** data structure to represent a JSON instance */
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphInstance {
    /// (id, weight) of every vertex
    pub vertices: Vec<(VertexId, Weight)>,
    /// edges as pairs of vertex ids
    #[serde(default)]
    pub edges: Vec<(VertexId, VertexId)>,
}

impl GraphInstance {
    /** reads a JSON instance from a file. */
    pub fn from_file(filename:&str) -> Result<Self> {
        let s = fs::read_to_string(filename)?;
        Self::from_json(&s)
    }

    /** reads a JSON instance from a string. */
    pub fn from_json(s:&str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /** writes the instance as a JSON string. */
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /** builds the graph. Duplicate vertices, self loops and edges with unknown endpoints are
    ignored (same rules as the graph mutations). */
    pub fn to_graph(&self) -> UndirectedGraph {
        let mut g = UndirectedGraph::new();
        for (id, weight) in &self.vertices {
            g.add_vertex(*id, *weight);
        }
        for (a, b) in &self.edges {
            g.add_edge(*a, *b);
        }
        g
    }
}

impl From<&UndirectedGraph> for GraphInstance {
    fn from(g:&UndirectedGraph) -> Self {
        Self {
            vertices: g.vertex_records().map(|(id, weight, _)| (id, weight)).collect(),
            edges: g.edges().map(|e| e.endpoints()).collect(),
        }
    }
}

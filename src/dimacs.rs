use std::convert::TryFrom;
use std::fs;

use bit_set::BitSet;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space0, space1};
use nom::combinator::{all_consuming, map, map_res};
use nom::sequence::{pair, preceded, terminated};
use tracing::warn;

use crate::error::{GraphError, Result};
use crate::graph::{UndirectedGraph, VertexId, Weight};

/** a meaningful line of a (weighted) DIMACS file */
#[derive(Debug, PartialEq, Eq)]
enum Line {
    /// p edge n m
    Header(usize, usize),
    /// n v w
    Weight(VertexId, usize),
    /// e a b
    Edge(VertexId, VertexId),
}

/// largest number of vertices accepted in a header
pub const MAX_VERTICES:usize = 1 << 26;

/** reads a weighted DIMACS instance from file (see parse_dimacs) */
pub fn read_from_file(filename:&str) -> Result<UndirectedGraph> {
    let content = fs::read_to_string(filename)?;
    parse_dimacs(&content)
}

/** builds a graph from a weighted DIMACS text:
 - `c ...`: comments
 - `p edge n m` (or `p col n m`): vertices are 1..=n, m edges
 - `n v w`: vertex v has weight w (vertices without such a line have weight 1)
 - `e a b`: edge between a and b (WARNING: indices start at 1 in the DIMACS format)
*/
pub fn parse_dimacs(content:&str) -> Result<UndirectedGraph> {
    let mut header = None;
    let mut weights = Vec::new();
    let mut edges = Vec::new();
    for (i, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('c') { continue; }
        match read_line(line) {
            Ok((_, Line::Header(n, m))) => header = Some((n, m)),
            Ok((_, Line::Weight(v, w))) => weights.push((v, w)),
            Ok((_, Line::Edge(a, b))) => edges.push((a, b)),
            Err(_) => return Err(GraphError::Parse(
                format!("line {}: unable to read '{}'", i+1, line)
            )),
        }
    }
    let (n, m) = header.ok_or_else(||
        GraphError::Parse("missing header 'p edge n m'".to_string())
    )?;
    if n > MAX_VERTICES {
        return Err(GraphError::Parse(
            format!("header announces {} vertices (at most {} supported)", n, MAX_VERTICES)
        ));
    }
    let mut g = UndirectedGraph::new();
    let mut weighted = BitSet::new();
    for (v, raw_weight) in weights {
        check_id(v, n)?;
        let w = match Weight::try_from(raw_weight) {
            Ok(w) if w > 0 => w,
            _ => return Err(GraphError::Parse(
                format!("vertex {}: weight {} is not in 1..={}", v, raw_weight, Weight::MAX)
            )),
        };
        if !weighted.insert(v) {
            warn!(vertex = v, "weight given twice, keeping the first one");
        }
        g.add_vertex(v, w);
    }
    for v in 1..=n {
        g.add_vertex(v, 1);
    }
    for (a, b) in edges {
        check_id(a, n)?;
        check_id(b, n)?;
        g.add_edge(a, b);
    }
    let nb_edges = g.number_of_edges();
    if nb_edges != m && 2*nb_edges != m {
        warn!(header = m, read = nb_edges, "number of edges differs from the header");
    }
    Ok(g)
}

fn check_id(v:VertexId, n:usize) -> Result<VertexId> {
    if v == 0 || v > n {
        Err(GraphError::Parse(format!("vertex {} out of range 1..={}", v, n)))
    } else {
        Ok(v)
    }
}

/// reads an unsigned integer
fn unsigned(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers preceded by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    pair(preceded(space1, unsigned), preceded(space1, unsigned))(s)
}

/// reads header containing (n,m)
fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(alt((tag("p edge"), tag("p col"))), read_two_integers)(s)
}

/// reads a vertex weight line
fn read_weight(s:&str) -> IResult<&str, (VertexId,usize)> {
    preceded(tag("n"), read_two_integers)(s)
}

/// reads edge line
fn read_edge(s:&str) -> IResult<&str, (VertexId,VertexId)> {
    preceded(tag("e"), read_two_integers)(s)
}

/// reads a whole (non comment) line
fn read_line(s:&str) -> IResult<&str, Line> {
    all_consuming(terminated(
        alt((
            map(read_header, |(n, m)| Line::Header(n, m)),
            map(read_weight, |(v, w)| Line::Weight(v, w)),
            map(read_edge, |(a, b)| Line::Edge(a, b)),
        )),
        space0,
    ))(s)
}

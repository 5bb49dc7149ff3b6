use std::fs;

use clap::ArgMatches;
use serde_json::{json, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    checker::{checker, CheckerResult},
    dimacs,
    error::{GraphError, Result},
    generator::random_graph,
    graph::{TotalWeight, UndirectedGraph, VertexId, Weight},
    json_instance::GraphInstance,
};

/** algorithm selected on the command line */
#[derive(Debug, Clone, PartialEq)]
pub enum Algorithm {
    /// GWMIN greedy
    Gwmin,
    /// GWMAX greedy
    Gwmax,
    /// exact dynamic programming on the given path
    Path(Vec<VertexId>),
    /// only report the alpha minorant
    Alpha,
}

impl Algorithm {
    /// name used in logs and statistics
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Gwmin => "gwmin",
            Algorithm::Gwmax => "gwmax",
            Algorithm::Path(_) => "path",
            Algorithm::Alpha => "alpha",
        }
    }
}

/** command line parameters */
#[derive(Debug, Clone)]
pub struct Params {
    /// instance file (dimacs and json instances)
    pub instance: Option<String>,
    /// instance type: dimacs, json, random or example
    pub instance_type: String,
    /// number of vertices (random instances)
    pub nb_vertices: usize,
    /// edge probability (random instances)
    pub density: f64,
    /// maximum vertex weight (random instances)
    pub max_weight: Weight,
    /// random seed (random instances)
    pub seed: u64,
    /// solution file
    pub sol_file: Option<String>,
    /// performance statistics file
    pub perf_file: Option<String>,
    /// print the graph and debug logs
    pub verbose: bool,
    /// algorithm to run
    pub algorithm: Algorithm,
}

/** reads command line input */
pub fn read_params(main_args:&ArgMatches) -> Result<Params> {
    let instance = main_args.value_of("instance").map(|e| e.to_string());
    let instance_type = main_args.value_of("type").unwrap_or("dimacs").to_string();
    let nb_vertices = parse_arg(main_args, "vertices", 50)?;
    let density = parse_arg(main_args, "density", 0.1)?;
    let max_weight = parse_arg(main_args, "max_weight", 100)?;
    let seed = parse_arg(main_args, "seed", 0)?;
    let algorithm = match main_args.subcommand() {
        ("gwmin", _) => Algorithm::Gwmin,
        ("gwmax", _) => Algorithm::Gwmax,
        ("alpha", _) => Algorithm::Alpha,
        ("path", Some(sub_args)) => {
            let path = sub_args.value_of("path").unwrap_or("");
            Algorithm::Path(parse_path(path)?)
        },
        (other, _) => return Err(GraphError::Parse(format!("unknown algorithm '{}'", other))),
    };
    Ok(Params {
        instance,
        instance_type,
        nb_vertices,
        density,
        max_weight,
        seed,
        sol_file: main_args.value_of("solution").map(|e| e.to_string()),
        perf_file: main_args.value_of("perf").map(|e| e.to_string()),
        verbose: main_args.is_present("verbose"),
        algorithm,
    })
}

/// parses an optional argument, returns default if absent
fn parse_arg<T:std::str::FromStr>(main_args:&ArgMatches, name:&str, default:T) -> Result<T> {
    match main_args.value_of(name) {
        None => Ok(default),
        Some(e) => e.parse::<T>().map_err(|_|
            GraphError::Parse(format!("unable to parse {} (given: {})", name, e))
        ),
    }
}

/** parses a comma separated list of vertex ids (e.g. "1,2,3") */
pub fn parse_path(s:&str) -> Result<Vec<VertexId>> {
    s.split(',')
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(|e| e.parse::<VertexId>()
            .map_err(|_| GraphError::Parse(format!("invalid vertex id '{}'", e)))
        )
        .collect()
}

/** installs the logger. RUST_LOG takes precedence over the verbose flag */
pub fn init_logging(verbose:bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("unable to install the logger: {}", e);
    }
}

/** builds the instance described by the parameters. Returns (instance name, graph) */
pub fn read_instance(params:&Params) -> Result<(String, UndirectedGraph)> {
    let filename = || params.instance.clone().ok_or_else(||
        GraphError::Parse(format!("an instance file is required for type {}", params.instance_type))
    );
    let res = match params.instance_type.as_str() {
        "dimacs" => {
            let name = filename()?;
            let g = dimacs::read_from_file(&name)?;
            (name, g)
        },
        "json" => {
            let name = filename()?;
            let g = GraphInstance::from_file(&name)?.to_graph();
            (name, g)
        },
        "random" => (
            format!("random_{}_{}_{}", params.nb_vertices, params.density, params.seed),
            random_graph(params.nb_vertices, params.density, params.max_weight, params.seed),
        ),
        "example" => ("example".to_string(), example_graph()),
        other => return Err(GraphError::Parse(format!("instance type unknown {}", other))),
    };
    info!(instance = %res.0, vertices = res.1.number_of_vertices(), edges = res.1.number_of_edges(), "instance read");
    Ok(res)
}

/** small weighted graph used for demonstrations:
vertices {1:11, 2:30, 3:20, 4:1, 5:17, 6:20},
edges {1-2, 2-3, 3-4, 4-5, 5-6, 2-5, 5-4, 4-1, 1-3, 3-6} */
pub fn example_graph() -> UndirectedGraph {
    let mut g = UndirectedGraph::new();
    for (id, weight) in [(1, 11), (2, 30), (3, 20), (4, 1), (5, 17), (6, 20)] {
        g.add_vertex(id, weight);
    }
    for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (2, 5), (5, 4), (4, 1), (1, 3), (3, 6)] {
        g.add_edge(a, b);
    }
    g
}

/** writes a string encoding the solution (one vertex per line) */
pub fn solution_to_string(solution:&[VertexId]) -> String {
    let mut res = String::default();
    for v in solution {
        res += format!("{}\n", v).as_str();
    }
    res
}

/** statistics exported in the performance file. `solution` holds (weight, size) and is None
when the algorithm only reports the alpha minorant. */
pub fn make_stats(
    inst_name:&str,
    algorithm:&Algorithm,
    solution:Option<(TotalWeight, usize)>,
    alpha:f64,
    time_searched:f32,
) -> Value {
    let mut stats = json!({
        "inst_name": inst_name,
        "algorithm": algorithm.name(),
        "alpha": alpha,
        "time_searched": time_searched,
    });
    if let Some((weight, size)) = solution {
        stats["weight"] = json!(weight);
        stats["size"] = json!(size);
    }
    stats
}

/// exports search results to files
pub fn export_results(
    g:&UndirectedGraph,
    solution:&[VertexId],
    stats:&Value,
    perf_file:Option<&str>,
    sol_file:Option<&str>,
) -> Result<()> {
    // export statistics
    if let Some(filename) = perf_file {
        fs::write(filename, serde_json::to_string(stats)?)?;
        info!(file = filename, "statistics written");
    }
    // export solution
    if let Some(filename) = sol_file {
        match checker(g, solution) {
            CheckerResult::Ok(_) => {},
            reason => warn!(?reason, "invalid solution"),
        }
        fs::write(filename, solution_to_string(solution))?;
        info!(file = filename, "solution written");
    }
    Ok(())
}

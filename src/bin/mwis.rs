use std::process;
use std::time::Instant;

use clap::{App, load_yaml};
use tracing::error;

use mwis::error::Result;
use mwis::util::{
    Algorithm, Params, export_results, init_logging, make_stats, read_instance, read_params
};


/** solves a MWIS instance using the selected algorithm */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("mwis.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let params = match read_params(&main_args) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };
    init_logging(params.verbose);
    if let Err(e) = run(&params) {
        error!(error = %e, "mwis failed");
        process::exit(1);
    }
}

fn run(params:&Params) -> Result<()> {
    let (inst_name, g) = read_instance(params)?;
    g.display_statistics();
    if params.verbose {
        println!("{}", g);
    }
    let alpha = g.alpha_minorant();
    println!("alpha minorant: {:.3}", alpha);
    println!("=======================");

    // solve it
    let t_start = Instant::now();
    let solution = match &params.algorithm {
        Algorithm::Gwmin => g.mwis_greedy_gwmin(),
        Algorithm::Gwmax => g.mwis_greedy_gwmax(),
        Algorithm::Path(path) => g.mwis_for_path(path)?,
        Algorithm::Alpha => {
            let stats = make_stats(&inst_name, &params.algorithm, None, alpha, 0.);
            return export_results(&g, &[], &stats, params.perf_file.as_deref(), None);
        },
    };
    let duration = t_start.elapsed().as_secs_f32();
    let weight = g.weight_of_set(&solution);
    println!(
        "{} took {:.3} seconds. weight: {}\t size: {}",
        params.algorithm.name(), duration, weight, solution.len()
    );
    println!("{:?}", solution);
    let stats = make_stats(
        &inst_name, &params.algorithm, Some((weight, solution.len())), alpha, duration
    );

    // export results
    export_results(
        &g, &solution, &stats, params.perf_file.as_deref(), params.sol_file.as_deref()
    )
}

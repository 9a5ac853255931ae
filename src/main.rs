use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{arg, value_parser, Command};

use alwabp::gvns::{GvnsConfig, GvnsRunner};
use alwabp::instance::{read_instance, Instance};
use alwabp::solution::{format_solution, summary_line};

fn cli() -> Command {
    Command::new("alwabp")
        .about("Solves an ALWABP instance with a general variable neighborhood search")
        .arg(arg!([INSTANCE] "Path to an instance file, or '-' for stdin").default_value("-"))
        .arg(
            arg!(-o --output [OUTPUT] "File to write the best solution report to")
                .value_parser(value_parser!(PathBuf))
                .default_value("best_solution.txt"),
        )
        .arg(
            arg!(--seed [SEED] "Random seed")
                .value_parser(value_parser!(u64))
                .default_value("42"),
        )
        .arg(
            arg!(--"max-iter" [MAX_ITER] "Outer GVNS iterations")
                .value_parser(value_parser!(usize))
                .default_value("50"),
        )
        .arg(
            arg!(--"k-max" [K_MAX] "Number of shaking neighborhoods")
                .value_parser(value_parser!(usize))
                .default_value("3"),
        )
        .arg(
            arg!(--retries [RETRIES] "Constructive retries on infeasible construction")
                .value_parser(value_parser!(usize))
                .default_value("0"),
        )
}

fn load_instance(path: &str) -> Result<Instance> {
    if path == "-" {
        read_instance(std::io::stdin().lock())
    } else {
        let file = fs::File::open(path).with_context(|| format!("failed to open {}", path))?;
        read_instance(BufReader::new(file))
    }
}

fn solve(instance_path: &str, output: &Path, config: &GvnsConfig) -> Result<()> {
    let instance = load_instance(instance_path)?;

    let start = Instant::now();
    let result = GvnsRunner::run(&instance, config)?;
    let elapsed = start.elapsed().as_secs_f64();

    // The summary line feeds the experiment aggregation; the full report
    // goes to the output file.
    println!("{}", summary_line(&result.initial, &result.best, elapsed));
    fs::write(output, format_solution(&instance, &result.best))
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}

fn main() {
    let matches = cli().get_matches();

    let config = GvnsConfig::default()
        .with_max_iterations(*matches.get_one::<usize>("max-iter").unwrap())
        .with_k_max(*matches.get_one::<usize>("k-max").unwrap())
        .with_construction_retries(*matches.get_one::<usize>("retries").unwrap())
        .with_seed(*matches.get_one::<u64>("seed").unwrap());

    if let Err(e) = solve(
        matches.get_one::<String>("INSTANCE").unwrap(),
        matches.get_one::<PathBuf>("output").unwrap(),
        &config,
    ) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

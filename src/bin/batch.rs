//! Batch experiment driver: one GVNS run per (instance, seed) pair.
//!
//! Runs are fully independent (each owns its instance and random
//! generator) and execute in parallel. Every run writes its full
//! report into the output directory; the summary CSV collects one
//! `Instance;Seed;SI;SF;Time_s` row per run, with `ERROR` entries for
//! runs that failed instead of aborting the batch.

use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{arg, value_parser, Command};
use rayon::prelude::*;

use alwabp::gvns::{GvnsConfig, GvnsRunner};
use alwabp::instance::read_instance;
use alwabp::solution::{format_cycle_time, format_solution};

struct RunRecord {
    instance: String,
    seed: u64,
    initial: String,
    best: String,
    time: String,
}

fn cli() -> Command {
    Command::new("alwabp-batch")
        .about("Runs the GVNS solver over every instance in a directory")
        .arg(
            arg!(<INSTANCES> "Directory of instance files")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-o --output [OUTPUT] "Directory for per-run reports and the summary CSV")
                .value_parser(value_parser!(PathBuf))
                .default_value("vns_results"),
        )
        .arg(
            arg!(--seeds [SEEDS] "Comma-separated seeds, one run per seed")
                .default_value("42,101,202,303,404"),
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

fn parse_seeds(raw: &str) -> Result<Vec<u64>> {
    raw.split(',')
        .map(|s| {
            s.trim()
                .parse::<u64>()
                .with_context(|| format!("invalid seed {:?}", s))
        })
        .collect()
}

fn run_one(
    path: &Path,
    seed: u64,
    config: &GvnsConfig,
    output_dir: &Path,
) -> Result<(String, String, String)> {
    let file =
        fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let instance = read_instance(BufReader::new(file))?;
    let config = config.clone().with_seed(seed);

    let start = Instant::now();
    let result = GvnsRunner::run(&instance, &config)?;
    let elapsed = start.elapsed().as_secs_f64();

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let report = output_dir.join(format!("{}_seed{}.txt", name, seed));
    fs::write(&report, format_solution(&instance, &result.best))
        .with_context(|| format!("failed to write {}", report.display()))?;

    Ok((
        format_cycle_time(result.initial.cycle_time()),
        format_cycle_time(result.best.cycle_time()),
        format!("{:.4}", elapsed),
    ))
}

fn run_batch(
    instances_dir: &Path,
    output_dir: &Path,
    seeds: &[u64],
    config: &GvnsConfig,
) -> Result<()> {
    let mut paths: Vec<PathBuf> = fs::read_dir(instances_dir)
        .with_context(|| format!("failed to read {}", instances_dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let jobs: Vec<(&PathBuf, u64)> = paths
        .iter()
        .flat_map(|path| seeds.iter().map(move |&seed| (path, seed)))
        .collect();
    eprintln!(
        "Running {} instances x {} seeds = {} jobs",
        paths.len(),
        seeds.len(),
        jobs.len()
    );

    let records: Vec<RunRecord> = jobs
        .par_iter()
        .map(|&(path, seed)| {
            let instance = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match run_one(path, seed, config, output_dir) {
                Ok((initial, best, time)) => RunRecord {
                    instance,
                    seed,
                    initial,
                    best,
                    time,
                },
                Err(e) => {
                    eprintln!("{} (seed {}): {}", path.display(), seed, e);
                    RunRecord {
                        instance,
                        seed,
                        initial: "ERROR".into(),
                        best: "ERROR".into(),
                        time: "ERROR".into(),
                    }
                }
            }
        })
        .collect();

    let summary_path = output_dir.join("summary_results.csv");
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&summary_path)
        .with_context(|| format!("failed to create {}", summary_path.display()))?;
    writer.write_record(["Instance", "Seed", "SI", "SF", "Time_s"])?;
    for record in &records {
        let seed = record.seed.to_string();
        writer.write_record([
            record.instance.as_str(),
            seed.as_str(),
            record.initial.as_str(),
            record.best.as_str(),
            record.time.as_str(),
        ])?;
    }
    writer.flush()?;

    eprintln!("{} runs summarized in {}", records.len(), summary_path.display());
    Ok(())
}

fn main() {
    let matches = cli().get_matches();

    let config = GvnsConfig::default()
        .with_max_iterations(*matches.get_one::<usize>("max-iter").unwrap())
        .with_k_max(*matches.get_one::<usize>("k-max").unwrap())
        .with_construction_retries(*matches.get_one::<usize>("retries").unwrap());

    let result = parse_seeds(matches.get_one::<String>("seeds").unwrap()).and_then(|seeds| {
        run_batch(
            matches.get_one::<PathBuf>("INSTANCES").unwrap(),
            matches.get_one::<PathBuf>("output").unwrap(),
            &seeds,
            &config,
        )
    });
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

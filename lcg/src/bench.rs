//! lcg-bench: time the materialized, streaming and iterator strategies on the same input.
//!
//! # Exit Codes
//!
//! - 0: All strategies produced the same final element
//! - 1: The strategies disagree, or the count is invalid

use clap::Parser;
use lcg_cli::init_logging;
use lcg_cli::timing::{results_agree, run_all};
use lcgrandom::SequenceLength;

#[derive(Parser)]
#[command(name = "lcg-bench")]
#[command(about = "Compare generation strategies for the same count and seed")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Number of elements to generate
    #[arg(short = 'n', long = "count", default_value = "10000000")]
    count: i64,

    /// Initial value of the sequence
    #[arg(short = 's', long = "seed", default_value = "101")]
    seed: i32,

    /// Log generation details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let len = match SequenceLength::new(args.count) {
        Ok(len) => len,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let results = match run_all(len, args.seed) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("count = {}, seed = {}", args.count, args.seed);
    for result in &results {
        println!(
            "{:<13} {:?}  {:.3}s",
            result.strategy,
            result.values,
            result.elapsed.as_secs_f64()
        );
    }

    if !results_agree(&results) {
        eprintln!("Strategies disagree on the final element");
        std::process::exit(1);
    }
}

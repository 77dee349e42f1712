//! Generic CLI for running the distance drivers.
//!
//! Usage:
//!   perm-bench              # Run all drivers
//!   perm-bench --list       # List available drivers
//!   perm-bench compare      # Run specific driver
//!   perm-bench --help       # Show help

use perm_dist_bench::registry::{build_registry, Driver, RunOptions};
use std::env;
use std::fmt::Display;
use std::process::exit;
use std::str::FromStr;

fn main() {
    let args: Vec<String> = env::args().collect();
    let registry = build_registry();

    // Parse arguments
    let mut show_list = false;
    let mut show_help = false;
    let mut opts = RunOptions::default();
    let mut driver_filter: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => show_list = true,
            "--help" | "-h" => show_help = true,
            "--seed" => {
                let raw = next_value("--seed", &args, &mut i);
                let seed = parse_or_exit("--seed", &raw);
                opts.seed = Some(seed);
                opts.sweep.seed = Some(seed);
            }
            "--trials" => {
                let raw = next_value("--trials", &args, &mut i);
                opts.sweep.trials = parse_or_exit("--trials", &raw);
            }
            "--min-len" => {
                let raw = next_value("--min-len", &args, &mut i);
                opts.sweep.min_len = parse_or_exit("--min-len", &raw);
            }
            "--max-len" => {
                let raw = next_value("--max-len", &args, &mut i);
                opts.sweep.max_len = parse_or_exit("--max-len", &raw);
            }
            "--warmup" => {
                let raw = next_value("--warmup", &args, &mut i);
                opts.sweep.warmup_pairs = parse_or_exit("--warmup", &raw);
            }
            "--alphabets" => {
                let raw = next_value("--alphabets", &args, &mut i);
                opts.sweep.alphabet_sizes = parse_list("--alphabets", &raw);
            }
            arg if !arg.starts_with('-') => {
                // First positional selects the driver, the rest go to it
                if driver_filter.is_none() {
                    driver_filter = Some(arg.to_string());
                } else {
                    opts.positionals.push(parse_or_exit("driver argument", arg));
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                exit(1);
            }
        }
        i += 1;
    }

    if show_help {
        perm_dist_bench::tui::print_help();
        return;
    }

    if show_list {
        perm_dist_bench::tui::print_available_drivers(&registry);
        return;
    }

    if let Err(msg) = opts.sweep.validate() {
        eprintln!("Invalid sweep configuration: {}", msg);
        exit(1);
    }

    perm_dist_bench::tui::print_header();

    match driver_filter {
        Some(name) => match registry.find(&name) {
            Some(driver) => run_driver(driver, &opts),
            None => {
                eprintln!("Driver '{}' not found.", name);
                eprintln!("Available: {:?}", registry.list_names());
                exit(1);
            }
        },
        None => {
            for driver in registry.all() {
                perm_dist_bench::tui::print_driver_info_box(driver.as_ref());
                run_driver(driver.as_ref(), &opts);
                println!();
            }
        }
    }
}

/// Run one driver and report failure on stderr.
fn run_driver(driver: &dyn Driver, opts: &RunOptions) {
    if let Err(msg) = driver.run(opts) {
        eprintln!("{}: {}", driver.name(), msg);
        exit(1);
    }
}

/// Consume the value following a flag, exiting if it is missing.
fn next_value(flag: &str, args: &[String], i: &mut usize) -> String {
    *i += 1;
    if *i >= args.len() {
        eprintln!("Missing value for {}", flag);
        exit(1);
    }
    args[*i].clone()
}

/// Parse one flag value, exiting with a message on malformed input.
fn parse_or_exit<T: FromStr>(what: &str, raw: &str) -> T
where
    T::Err: Display,
{
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Invalid value '{}' for {}: {}", raw, what, e);
            exit(1);
        }
    }
}

/// Parse a comma-separated list of values, exiting on malformed input.
fn parse_list(flag: &str, raw: &str) -> Vec<usize> {
    raw.split(',')
        .map(|part| parse_or_exit(flag, part.trim()))
        .collect()
}

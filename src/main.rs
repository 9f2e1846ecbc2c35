//! Coherent Cache Simulator CLI.
//!
//! Replays a memory reference trace through one private cache per core and
//! prints the resulting statistics.
//!
//! # Usage
//!
//! ```text
//! cachesim -t trace.txt -p msi -n 2 --cache 14 6 4
//! ```
//!
//! `--cache` takes log2 of the capacity, log2 of the block size, and the
//! associativity. Command-line values override the configuration file.

use clap::Parser;
use std::process;

extern crate coherence_cache_sim;

use coherence_cache_sim::config::{Config, Protocol};
use coherence_cache_sim::sim::trace;
use coherence_cache_sim::system::System;

/// Command-line arguments for the cache simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "Coherent Cache Simulator")]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Memory reference trace.
    #[arg(short, long)]
    trace: String,

    /// Coherence protocol.
    #[arg(short, long, value_enum)]
    protocol: Option<Protocol>,

    /// Number of cores (one private cache each).
    #[arg(short = 'n', long)]
    cores: Option<usize>,

    /// log2(capacity) log2(block size) associativity.
    #[arg(long, num_args = 3, value_names = ["CAP_BITS", "BLOCK_BITS", "WAYS"])]
    cache: Option<Vec<u32>>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Log every cache access to stderr.
    #[arg(long)]
    trace_accesses: bool,
}

fn fatal(msg: impl std::fmt::Display) -> ! {
    eprintln!("\n[!] FATAL: {}", msg);
    process::exit(1);
}

/// Main entry point for the cache simulator.
///
/// # Behavior
///
/// 1. **Configuration**: Loads the TOML file if given, then applies
///    command-line overrides.
/// 2. **Initialization**: Builds one cache per core on a shared bus.
/// 3. **Simulation**: Replays the trace in order.
/// 4. **Teardown**: Prints the statistics (text or JSON).
fn main() {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| fatal(e)),
        None => Config::default(),
    };

    if let Some(protocol) = args.protocol {
        config.cache.protocol = protocol;
    }
    if let Some(cores) = args.cores {
        config.general.cores = cores;
    }
    if let Some(cache) = &args.cache {
        let (cap_bits, block_bits, ways) = match cache.as_slice() {
            [c, b, w] => (*c, *b, *w),
            _ => fatal("--cache expects three values"),
        };
        if cap_bits >= 64 || block_bits >= 64 {
            fatal("--cache sizes are given as log2 and must be below 64");
        }
        config.cache.capacity = 1 << cap_bits;
        config.cache.block_size = 1 << block_bits;
        config.cache.associativity = ways as u64;
    }
    if args.trace_accesses {
        config.general.trace_accesses = true;
    }

    let mut system =
        System::new(config.general.cores, &config.cache).unwrap_or_else(|e| fatal(e));
    if config.general.trace_accesses {
        system.set_trace(true);
    }

    let records = trace::load_trace(&args.trace).unwrap_or_else(|e| fatal(e));
    if let Err(e) = system.run(&records) {
        fatal(e);
    }

    if args.json {
        match serde_json::to_string_pretty(&system.report()) {
            Ok(json) => println!("{}", json),
            Err(e) => fatal(e),
        }
    } else {
        println!("[*] Replayed {} references from {}", records.len(), args.trace);
        system.print();
    }
}

// Adaptsort - Adaptive Hybrid Sorting Toolkit
//
// Copyright (c) 2025 the Adaptsort contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Sort comparison binary.
//!
//! Runs the standard candidate set against the generated case matrix and
//! prints the comparison report.
//!
//! Usage:
//! ```bash
//! # Full standard run
//! cargo run --package adaptsort-bench --bin compare
//!
//! # Smaller, faster matrix
//! cargo run --package adaptsort-bench --bin compare -- --quick
//!
//! # Custom sizes and seed, with a JSON report
//! cargo run --package adaptsort-bench --bin compare -- \
//!     --size 1000 --size 10000 --seed 7 --json results.json
//! ```

use std::env;
use std::path::PathBuf;
use std::process;

use adaptsort::EngineConfig;
use adaptsort_bench::reporters::{console, json};
use adaptsort_bench::{aggregate, cases_for_sizes, standard_candidates, Harness, STANDARD_SIZES};

/// Command line arguments.
struct Args {
    seed: u64,
    sizes: Vec<usize>,
    json: Option<PathBuf>,
    counting_gate: Option<usize>,
    bucket_cap: Option<usize>,
    quick: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            seed: 42,
            sizes: Vec::new(),
            json: None,
            counting_gate: None,
            bucket_cap: None,
            quick: false,
        }
    }
}

fn print_usage() {
    println!("Usage: compare [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --seed, -s <N>        Base seed for case generation (default: 42)");
    println!("  --size <N>            Case size; repeatable (default: standard sizes)");
    println!("  --quick, -q           Small matrix (sizes 100 and 1000)");
    println!("  --json, -j <PATH>     Also write aggregated results as JSON");
    println!("  --counting-gate <N>   Counting-sort eligibility multiplier");
    println!("  --bucket-cap <N>      Bucket count cap");
    println!("  --help, -h            Show this help");
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut argv: Vec<String> = env::args().skip(1).collect();

    while !argv.is_empty() {
        let arg = argv.remove(0);
        match arg.as_str() {
            "--seed" | "-s" => {
                if let Some(val) = argv.first() {
                    args.seed = val.parse().unwrap_or_else(|_| {
                        eprintln!("Invalid seed: {}", val);
                        process::exit(1);
                    });
                    argv.remove(0);
                }
            }
            "--size" => {
                if let Some(val) = argv.first() {
                    let size = val.parse().unwrap_or_else(|_| {
                        eprintln!("Invalid size: {}", val);
                        process::exit(1);
                    });
                    args.sizes.push(size);
                    argv.remove(0);
                }
            }
            "--json" | "-j" => {
                if let Some(val) = argv.first() {
                    args.json = Some(PathBuf::from(val));
                    argv.remove(0);
                }
            }
            "--counting-gate" => {
                if let Some(val) = argv.first() {
                    args.counting_gate = val.parse().ok();
                    argv.remove(0);
                }
            }
            "--bucket-cap" => {
                if let Some(val) = argv.first() {
                    args.bucket_cap = val.parse().ok();
                    argv.remove(0);
                }
            }
            "--quick" | "-q" => {
                args.quick = true;
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
    }

    args
}

fn main() {
    let args = parse_args();

    let mut config = EngineConfig::new();
    if let Some(gate) = args.counting_gate {
        config = config.with_counting_gate(gate);
    }
    if let Some(cap) = args.bucket_cap {
        config = config.with_bucket_cap(cap);
    }

    let candidates = match standard_candidates(config) {
        Ok(candidates) => candidates,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let sizes: Vec<usize> = if !args.sizes.is_empty() {
        args.sizes.clone()
    } else if args.quick {
        vec![100, 1_000]
    } else {
        STANDARD_SIZES.to_vec()
    };

    println!("Generating test cases...");
    let cases = match cases_for_sizes(&sizes, args.seed) {
        Ok(cases) => cases,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };
    println!(
        "Created {} cases across {} sizes (seed {})",
        cases.len(),
        sizes.len(),
        args.seed
    );

    println!("Running comparison (this may take a while)...");
    let report = Harness::new().run(&candidates, &cases);
    let aggregated = aggregate(&report.all_records());

    console::print_summary(&report, &aggregated);

    if let Some(path) = &args.json {
        match json::write_json(&aggregated, path) {
            Ok(()) => println!("\nJSON report written to {}", path.display()),
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        }
    }
}

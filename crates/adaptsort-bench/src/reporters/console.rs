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

//! Console reporter for comparison results.

use crate::harness::{Aggregated, RunReport};

/// Prints the full comparison summary to the console.
pub fn print_summary(report: &RunReport, aggregated: &Aggregated) {
    println!("\n{}", "=".repeat(80));
    println!("SORT COMPARISON REPORT");
    println!("{}", "=".repeat(80));
    println!("Candidates evaluated: {}", report.timings.len());
    println!(
        "Cases per candidate: {}",
        report.timings.values().map(|r| r.len()).max().unwrap_or(0)
    );

    print_rankings(aggregated);
    print_best_by_pattern(aggregated);
    print_best_by_size(aggregated);
    print_pattern_medians(aggregated);

    if !report.violations.is_empty() {
        print_violations(report);
    }
}

/// Prints the overall ranking, fastest first.
pub fn print_rankings(aggregated: &Aggregated) {
    println!("\n{}", "-".repeat(80));
    println!("RANKINGS (fastest to slowest, mean across all cases)");
    println!("{}", "-".repeat(80));

    for entry in &aggregated.ranking {
        println!(
            "{}. {} - {:.2} us",
            entry.rank, entry.candidate, entry.mean_micros
        );
    }
}

/// Prints the fastest candidate for each pattern.
pub fn print_best_by_pattern(aggregated: &Aggregated) {
    println!("\n{}", "-".repeat(80));
    println!("BEST CANDIDATE BY PATTERN (median)");
    println!("{}", "-".repeat(80));

    let mut patterns: Vec<&String> = aggregated.best_by_pattern.keys().collect();
    patterns.sort();
    for pattern in patterns {
        let best = &aggregated.best_by_pattern[pattern];
        println!(
            "{:<14} {} ({:.2} us)",
            pattern, best.candidate, best.median_micros
        );
    }
}

/// Prints the fastest candidate for each input size.
pub fn print_best_by_size(aggregated: &Aggregated) {
    println!("\n{}", "-".repeat(80));
    println!("BEST CANDIDATE BY SIZE (median)");
    println!("{}", "-".repeat(80));

    let mut sizes: Vec<usize> = aggregated.best_by_size.keys().copied().collect();
    sizes.sort_unstable();
    for size in sizes {
        let best = &aggregated.best_by_size[&size];
        println!(
            "{:<14} {} ({:.2} us)",
            size, best.candidate, best.median_micros
        );
    }
}

/// Prints the median time per pattern for every candidate.
pub fn print_pattern_medians(aggregated: &Aggregated) {
    println!("\n{}", "-".repeat(80));
    println!("MEDIAN TIME BY PATTERN (us)");
    println!("{}", "-".repeat(80));

    let mut candidates: Vec<&String> = aggregated
        .ranking
        .iter()
        .map(|entry| &entry.candidate)
        .collect();
    candidates.sort();

    let mut patterns: Vec<&String> = aggregated.by_pattern.keys().collect();
    patterns.sort();

    print!("{:<14}", "Pattern");
    for candidate in &candidates {
        print!("{:>14}", candidate);
    }
    println!();

    for pattern in patterns {
        print!("{:<14}", pattern);
        let group = &aggregated.by_pattern[pattern];
        for candidate in &candidates {
            match group.get(candidate.as_str()) {
                Some(samples) => print!("{:>14.2}", crate::harness::median(samples)),
                None => print!("{:>14}", "-"),
            }
        }
        println!();
    }
}

/// Prints correctness violations for excluded candidates.
pub fn print_violations(report: &RunReport) {
    println!("\n{}", "-".repeat(80));
    println!("CORRECTNESS VIOLATIONS (excluded from ranking)");
    println!("{}", "-".repeat(80));

    for violation in &report.violations {
        println!("[VIOLATION] {}", violation);
    }
}

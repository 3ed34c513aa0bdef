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

//! Comparative benchmark harness for the adaptsort engine.
//!
//! The pipeline is: [`cases`] generates named, seeded test fixtures;
//! [`harness`] times each candidate on each case and validates every
//! result against a trusted reference sort; the aggregator reduces the
//! timing records to grouped statistics, rankings, and per-group winners;
//! [`reporters`] render the result read-only.
//!
//! Everything runs single-threaded and sequentially; timed windows never
//! overlap, so elapsed readings stay comparable. There are no retries: a
//! candidate that produces an incorrect result is excluded from
//! aggregation and reported with full identity.
//!
//! # Example
//!
//! ```no_run
//! use adaptsort::EngineConfig;
//! use adaptsort_bench::{aggregate, cases_for_sizes, standard_candidates, Harness};
//!
//! let candidates = standard_candidates(EngineConfig::new())?;
//! let cases = cases_for_sizes(&[100, 1_000], 42)?;
//!
//! let report = Harness::new().run(&candidates, &cases);
//! let aggregated = aggregate(&report.all_records());
//! adaptsort_bench::reporters::console::print_summary(&report, &aggregated);
//! # adaptsort_bench::Result::Ok(())
//! ```

pub mod candidates;
pub mod cases;
pub mod error;
pub mod harness;
pub mod reporters;

pub use candidates::{
    heap_sort, merge_sort, quick_sort, standard_candidates, std_sort, Candidate, SortFn,
};
pub use cases::{
    cases_for_sizes, generate, generate_case, split_case_name, standard_cases, Pattern, TestCase,
    ADVANCED_MIN_SIZE, SAWTOOTH_PERIOD, STANDARD_SIZES,
};
pub use error::{validate_case_size, BenchError, Result, MAX_CASE_SIZE};
pub use harness::{
    aggregate, mean, median, Aggregated, GroupBest, Harness, RankingEntry, RunReport, TimingRecord,
};

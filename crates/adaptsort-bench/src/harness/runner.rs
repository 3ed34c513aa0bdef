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

//! Timed, validated execution of candidates against test cases.
//!
//! Execution is strictly sequential: each timed invocation runs to
//! completion before the next begins, so elapsed-time readings never
//! overlap. Every result is checked against the trusted reference sort
//! before its timing is recorded; a candidate that fails validation is
//! dropped from the run and reported, never silently ignored.

use crate::candidates::{std_sort, Candidate, SortFn};
use crate::cases::TestCase;
use crate::error::{BenchError, Result};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// One timed measurement of one candidate on one case.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingRecord {
    /// Candidate name.
    pub candidate: String,
    /// Case name (`Pattern-size`).
    pub case: String,
    /// Wall-clock time of the single sort invocation.
    pub elapsed: Duration,
}

impl TimingRecord {
    /// Returns the elapsed time in microseconds.
    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000.0
    }
}

/// Results of one harness run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Per-candidate records, in case order, for candidates that passed
    /// validation on every case.
    pub timings: HashMap<String, Vec<TimingRecord>>,
    /// Violations for candidates excluded from the run.
    pub violations: Vec<BenchError>,
}

impl RunReport {
    /// Returns every record across all surviving candidates.
    pub fn all_records(&self) -> Vec<TimingRecord> {
        let mut records: Vec<TimingRecord> =
            self.timings.values().flatten().cloned().collect();
        records.sort_by(|a, b| a.candidate.cmp(&b.candidate).then_with(|| a.case.cmp(&b.case)));
        records
    }
}

/// Runs candidates against cases, timing and validating each invocation.
///
/// The reference sort used for validation is an explicit, swappable
/// parameter. It must be independently implemented and trusted; it
/// defaults to the standard library's sort and should never be the engine
/// under test.
pub struct Harness {
    reference: SortFn,
}

impl Harness {
    /// Creates a harness validating against the standard library sort.
    pub fn new() -> Self {
        Self {
            reference: Box::new(std_sort),
        }
    }

    /// Creates a harness validating against a custom reference sort.
    pub fn with_reference(reference: impl Fn(&[f64]) -> Vec<f64> + 'static) -> Self {
        Self {
            reference: Box::new(reference),
        }
    }

    /// Runs one candidate over all cases in order.
    ///
    /// For each case the fixture is copied, the candidate is invoked
    /// exactly once on the copy inside the timing window, and the output
    /// is validated before the timing is trusted.
    ///
    /// # Returns
    ///
    /// The records in case order, or [`BenchError::CorrectnessViolation`]
    /// identifying the first case the candidate failed.
    pub fn run_candidate(
        &self,
        candidate: &Candidate,
        cases: &[TestCase],
    ) -> Result<Vec<TimingRecord>> {
        let mut records = Vec::with_capacity(cases.len());

        for case in cases {
            let input = case.data.clone();

            let start = Instant::now();
            let output = (candidate.sort)(&input);
            let elapsed = start.elapsed();

            let expected = (self.reference)(&case.data);
            if !outputs_match(&output, &expected) {
                return Err(BenchError::CorrectnessViolation {
                    candidate: candidate.name.clone(),
                    case: case.name.clone(),
                });
            }

            records.push(TimingRecord {
                candidate: candidate.name.clone(),
                case: case.name.clone(),
                elapsed,
            });
        }

        Ok(records)
    }

    /// Runs every candidate over all cases.
    ///
    /// A violating candidate is excluded from `timings` and recorded in
    /// `violations`; all other candidates continue to be evaluated.
    pub fn run(&self, candidates: &[Candidate], cases: &[TestCase]) -> RunReport {
        let mut report = RunReport::default();

        for candidate in candidates {
            match self.run_candidate(candidate, cases) {
                Ok(records) => {
                    report.timings.insert(candidate.name.clone(), records);
                }
                Err(violation) => report.violations.push(violation),
            }
        }

        report
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

/// Numeric equality of two sequences, element by element.
fn outputs_match(output: &[f64], expected: &[f64]) -> bool {
    output.len() == expected.len()
        && output.iter().zip(expected.iter()).all(|(a, b)| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::{generate_case, Pattern};

    fn small_cases() -> Vec<TestCase> {
        vec![
            generate_case(Pattern::Random, 64, 1).unwrap(),
            generate_case(Pattern::Reverse, 64, 2).unwrap(),
            generate_case(Pattern::Float, 64, 3).unwrap(),
        ]
    }

    #[test]
    fn test_records_cover_every_case_in_order() {
        let harness = Harness::new();
        let candidate = Candidate::new("Std", std_sort);
        let cases = small_cases();

        let records = harness.run_candidate(&candidate, &cases).unwrap();
        assert_eq!(records.len(), cases.len());
        for (record, case) in records.iter().zip(cases.iter()) {
            assert_eq!(record.candidate, "Std");
            assert_eq!(record.case, case.name);
        }
    }

    #[test]
    fn test_fixture_is_never_mutated() {
        let harness = Harness::new();
        let cases = small_cases();
        let snapshot: Vec<Vec<f64>> = cases.iter().map(|c| c.data.clone()).collect();

        let candidate = Candidate::new("Std", std_sort);
        harness.run_candidate(&candidate, &cases).unwrap();

        for (case, original) in cases.iter().zip(snapshot.iter()) {
            assert_eq!(&case.data, original);
        }
    }

    #[test]
    fn test_violation_names_candidate_and_case() {
        let harness = Harness::new();
        let broken = Candidate::new("Broken", |values: &[f64]| values.to_vec());
        let cases = small_cases();

        let err = harness.run_candidate(&broken, &cases).unwrap_err();
        match err {
            BenchError::CorrectnessViolation { candidate, case } => {
                assert_eq!(candidate, "Broken");
                assert_eq!(case, cases[0].name);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_violating_candidate_excluded_but_reported() {
        let harness = Harness::new();
        let candidates = vec![
            Candidate::new("Broken", |values: &[f64]| values.to_vec()),
            Candidate::new("Std", std_sort),
        ];
        let cases = small_cases();

        let report = harness.run(&candidates, &cases);
        assert!(!report.timings.contains_key("Broken"));
        assert!(report.timings.contains_key("Std"));
        assert_eq!(report.violations.len(), 1);
    }

    #[test]
    fn test_length_mismatch_is_a_violation() {
        let harness = Harness::new();
        let truncating = Candidate::new("Truncating", |values: &[f64]| {
            let mut sorted = std_sort(values);
            sorted.pop();
            sorted
        });
        let cases = small_cases();

        let err = harness.run_candidate(&truncating, &cases).unwrap_err();
        assert!(matches!(err, BenchError::CorrectnessViolation { .. }));
    }

    #[test]
    fn test_custom_reference_sort() {
        // A reference that deliberately reverses exposes any candidate that
        // agrees with the standard order instead.
        let harness = Harness::with_reference(|values: &[f64]| {
            let mut sorted = std_sort(values);
            sorted.reverse();
            sorted
        });
        let candidate = Candidate::new("Std", std_sort);
        let cases = small_cases();

        assert!(harness.run_candidate(&candidate, &cases).is_err());
    }
}

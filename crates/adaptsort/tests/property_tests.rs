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

//! Property-based tests for the sort engine.

use adaptsort::{analyze, SortEngine, Strategy};
use proptest::prelude::*;

fn reference_sort(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Multiset equality under numeric comparison.
fn is_permutation(a: &[f64], b: &[f64]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let (a, b) = (reference_sort(a), reference_sort(b));
    a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: output length equals input length and values are preserved.
    #[test]
    fn prop_sort_is_permutation(values in proptest::collection::vec(-1000.0f64..1000.0, 0..200)) {
        let engine = SortEngine::new();
        let sorted = engine.sort(&values);
        prop_assert_eq!(sorted.len(), values.len());
        prop_assert!(is_permutation(&values, &sorted));
    }

    /// Property: output is non-decreasing.
    #[test]
    fn prop_sort_is_non_decreasing(values in proptest::collection::vec(-1000.0f64..1000.0, 0..200)) {
        let engine = SortEngine::new();
        prop_assert!(is_non_decreasing(&engine.sort(&values)));
    }

    /// Property: sorting a sorted sequence changes nothing.
    #[test]
    fn prop_sort_is_idempotent(values in proptest::collection::vec(-1000.0f64..1000.0, 0..200)) {
        let engine = SortEngine::new();
        let once = engine.sort(&values);
        let twice = engine.sort(&once);
        prop_assert_eq!(once, twice);
    }

    /// Property: integral inputs sort identically to the reference sort.
    #[test]
    fn prop_integral_matches_reference(raw in proptest::collection::vec(-500i64..500, 2..200)) {
        let values: Vec<f64> = raw.iter().map(|&v| v as f64).collect();
        let engine = SortEngine::new();
        prop_assert_eq!(engine.sort(&values), reference_sort(&values));
    }

    /// Property: strategy selection is a pure function of the input.
    #[test]
    fn prop_selection_is_deterministic(raw in proptest::collection::vec(-500i64..500, 2..200)) {
        let values: Vec<f64> = raw.iter().map(|&v| v as f64).collect();
        let engine = SortEngine::new();
        let range = analyze(&values).unwrap();
        let first = engine.select_strategy(&range, values.len());
        for _ in 0..5 {
            prop_assert_eq!(engine.select_strategy(&range, values.len()), first);
        }
    }

    /// Property: inputs inside the eligibility gate use counting and still
    /// match the reference sort exactly.
    #[test]
    fn prop_gated_counting_matches_reference(raw in proptest::collection::vec(0i64..50, 16..200)) {
        let values: Vec<f64> = raw.iter().map(|&v| v as f64).collect();
        let engine = SortEngine::new();
        let range = analyze(&values).unwrap();
        prop_assert_eq!(engine.select_strategy(&range, values.len()), Strategy::Counting);
        prop_assert_eq!(engine.sort(&values), reference_sort(&values));
    }

    /// Property: fractional data always takes the bucket path and sorts.
    #[test]
    fn prop_fractional_bucket_sorts(values in proptest::collection::vec(-1000.0f64..1000.0, 2..200)) {
        prop_assume!(values.iter().any(|v| v.fract() != 0.0));
        let engine = SortEngine::new();
        let range = analyze(&values).unwrap();
        prop_assert_eq!(engine.select_strategy(&range, values.len()), Strategy::Bucket);
        prop_assert!(is_non_decreasing(&engine.sort(&values)));
    }
}

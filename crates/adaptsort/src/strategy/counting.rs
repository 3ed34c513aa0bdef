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

//! Counting strategy: frequency-table sort for integral data.
//!
//! O(n + range) time and O(range) space, where `range = max - min + 1`.
//! The table size is bounded only by the engine's eligibility gate
//! (`range <= counting_gate * n`); callers must not invoke this strategy
//! on ranges that have not passed the gate.

use crate::analysis::ValueRange;

/// Sorts an integral sequence by counting occurrences per value.
///
/// # Arguments
///
/// * `values` - Sequence of integral values, length >= 2
/// * `range` - The analyzed value range of `values`
///
/// # Returns
///
/// A non-decreasing permutation of `values`.
pub(crate) fn sort(values: &[f64], range: &ValueRange) -> Vec<f64> {
    let span = (range.max - range.min) as usize + 1;
    let mut counts = vec![0usize; span];

    for &v in values {
        counts[(v - range.min) as usize] += 1;
    }

    let mut sorted = Vec::with_capacity(values.len());
    for (offset, &count) in counts.iter().enumerate() {
        let value = range.min + offset as f64;
        for _ in 0..count {
            sorted.push(value);
        }
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    fn counting_sort(values: &[f64]) -> Vec<f64> {
        let range = analyze(values).unwrap();
        sort(values, &range)
    }

    #[test]
    fn test_matches_reference_sort() {
        let values = [5.0, 2.0, 8.0, 1.0, 9.0, 4.0];
        let mut expected = values.to_vec();
        expected.sort_unstable_by(f64::total_cmp);
        assert_eq!(counting_sort(&values), expected);
    }

    #[test]
    fn test_negative_offsets() {
        let values = [-3.0, 4.0, -7.0, 0.0, -3.0];
        assert_eq!(counting_sort(&values), vec![-7.0, -3.0, -3.0, 0.0, 4.0]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let values = [2.0, 1.0, 2.0, 1.0, 2.0];
        assert_eq!(counting_sort(&values), vec![1.0, 1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_output_length() {
        let values: Vec<f64> = (0..50).rev().map(|i| (i % 7) as f64).collect();
        assert_eq!(counting_sort(&values).len(), values.len());
    }
}

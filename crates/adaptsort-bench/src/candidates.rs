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

//! Candidate sorters under comparison.
//!
//! Besides the adaptive engine, the registry carries three classic
//! comparison sorts and the standard library's sort, so the engine's
//! strategy-dependent cliffs show up against stable reference points.
//! Every candidate is a pure `&[f64] -> Vec<f64>` function.

use crate::error::Result;
use adaptsort::{EngineConfig, SortEngine};

/// A sort function under comparison.
pub type SortFn = Box<dyn Fn(&[f64]) -> Vec<f64>>;

/// A named sorter registered with the harness.
pub struct Candidate {
    /// Unique display name.
    pub name: String,
    /// The sort implementation.
    pub sort: SortFn,
}

impl Candidate {
    /// Creates a named candidate from any sort function.
    pub fn new(name: impl Into<String>, sort: impl Fn(&[f64]) -> Vec<f64> + 'static) -> Self {
        Self {
            name: name.into(),
            sort: Box::new(sort),
        }
    }
}

/// Sorts with the standard library's unstable sort under total order.
pub fn std_sort(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

/// Recursive quicksort with a middle-element pivot and three-way split.
pub fn quick_sort(values: &[f64]) -> Vec<f64> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let pivot = values[values.len() / 2];
    let mut left = Vec::new();
    let mut middle = Vec::new();
    let mut right = Vec::new();

    for &v in values {
        if v < pivot {
            left.push(v);
        } else if v == pivot {
            middle.push(v);
        } else {
            right.push(v);
        }
    }

    let mut sorted = quick_sort(&left);
    sorted.extend_from_slice(&middle);
    sorted.extend(quick_sort(&right));
    sorted
}

/// Top-down merge sort.
pub fn merge_sort(values: &[f64]) -> Vec<f64> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let mid = values.len() / 2;
    let left = merge_sort(&values[..mid]);
    let right = merge_sort(&values[mid..]);

    let mut merged = Vec::with_capacity(values.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// In-place heapsort over a max-heap.
pub fn heap_sort(values: &[f64]) -> Vec<f64> {
    let mut heap = values.to_vec();
    let n = heap.len();

    for root in (0..n / 2).rev() {
        sift_down(&mut heap, root, n);
    }
    for end in (1..n).rev() {
        heap.swap(0, end);
        sift_down(&mut heap, 0, end);
    }

    heap
}

fn sift_down(heap: &mut [f64], mut root: usize, end: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < end && heap[left] > heap[largest] {
            largest = left;
        }
        if right < end && heap[right] > heap[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        heap.swap(root, largest);
        root = largest;
    }
}

/// Builds the standard candidate set: the adaptive engine plus the
/// comparison baselines.
///
/// # Arguments
///
/// * `config` - Engine tuning parameters, validated before registration
///
/// # Returns
///
/// The candidates in display order, or a configuration error.
pub fn standard_candidates(config: EngineConfig) -> Result<Vec<Candidate>> {
    let engine = SortEngine::with_config(config)?;

    Ok(vec![
        Candidate::new("AdaptSort", move |values: &[f64]| engine.sort(values)),
        Candidate::new("QuickSort", quick_sort),
        Candidate::new("MergeSort", merge_sort),
        Candidate::new("HeapSort", heap_sort),
        Candidate::new("StdSort", std_sort),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorts_like_std(sort: fn(&[f64]) -> Vec<f64>) {
        let inputs: [&[f64]; 5] = [
            &[],
            &[7.0],
            &[5.0, 2.0, 8.0, 1.0, 9.0, 4.0],
            &[3.0, 3.0, 3.0, 1.0, 1.0],
            &[0.5, -2.25, 10.75, -2.25, 0.0],
        ];
        for input in inputs {
            assert_eq!(sort(input), std_sort(input));
        }
    }

    #[test]
    fn test_quick_sort() {
        assert_sorts_like_std(quick_sort);
    }

    #[test]
    fn test_merge_sort() {
        assert_sorts_like_std(merge_sort);
    }

    #[test]
    fn test_heap_sort() {
        assert_sorts_like_std(heap_sort);
    }

    #[test]
    fn test_standard_registry() {
        let candidates = standard_candidates(EngineConfig::new()).unwrap();
        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["AdaptSort", "QuickSort", "MergeSort", "HeapSort", "StdSort"]
        );

        let input = [9.0, -1.0, 4.5, 4.5, 0.0];
        for candidate in &candidates {
            assert_eq!((candidate.sort)(&input), std_sort(&input));
        }
    }

    #[test]
    fn test_invalid_engine_config_surfaces() {
        let result = standard_candidates(EngineConfig::new().with_bucket_cap(1));
        assert!(result.is_err());
    }
}

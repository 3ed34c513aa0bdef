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

//! Bucket strategy: range-partitioned distribution with local sorts.
//!
//! Buckets partition `[min, max]` into contiguous, non-overlapping,
//! ascending intervals, so concatenating the locally sorted buckets in
//! index order yields a fully sorted sequence. Performance is near O(n)
//! when values spread roughly uniformly across the range and degrades
//! toward O(n^2) when most values collapse into one bucket.

use crate::analysis::ValueRange;

/// Sorts a sequence by distributing values into ordered buckets.
///
/// Each value lands in exactly one bucket. A value equal to `max` is
/// placed in the last bucket explicitly rather than through the index
/// computation, whose floating-point rounding could otherwise produce an
/// index one past the end.
///
/// # Arguments
///
/// * `values` - Sequence with at least two distinct values
/// * `range` - The analyzed value range of `values`
/// * `bucket_cap` - Upper bound on the number of buckets
///
/// # Returns
///
/// A non-decreasing permutation of `values`.
pub(crate) fn sort(values: &[f64], range: &ValueRange, bucket_cap: usize) -> Vec<f64> {
    let num_buckets = values.len().clamp(2, bucket_cap.max(2));
    let width = range.width();
    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); num_buckets];

    for &v in values {
        let index = if v == range.max {
            num_buckets - 1
        } else {
            let scaled = (v - range.min) * num_buckets as f64 / width;
            (scaled as usize).min(num_buckets - 1)
        };
        buckets[index].push(v);
    }

    let mut sorted = Vec::with_capacity(values.len());
    for bucket in &mut buckets {
        if bucket.is_empty() {
            continue;
        }
        bucket.sort_unstable_by(f64::total_cmp);
        sorted.extend_from_slice(bucket);
    }

    sorted
}

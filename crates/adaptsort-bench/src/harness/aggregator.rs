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

//! Grouped statistics, rankings, and per-group winners.
//!
//! Aggregation is pure: it reads timing records, never mutates them, and
//! recomputes every derived structure from scratch. All orderings that
//! reach the output are made deterministic with lexicographic tie-breaks
//! on candidate names.

use crate::cases::split_case_name;
use crate::harness::runner::TimingRecord;
use std::collections::HashMap;

/// A candidate's position in the overall ranking.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RankingEntry {
    /// Candidate name.
    pub candidate: String,
    /// Mean elapsed time across all cases, in microseconds.
    pub mean_micros: f64,
    /// 1-based rank, fastest first.
    pub rank: usize,
}

/// The fastest candidate within one group.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupBest {
    /// Candidate name.
    pub candidate: String,
    /// The candidate's median time in the group, in microseconds.
    pub median_micros: f64,
}

/// Derived statistics over a set of timing records.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Aggregated {
    /// Elapsed samples per pattern per candidate, in microseconds.
    pub by_pattern: HashMap<String, HashMap<String, Vec<f64>>>,
    /// Elapsed samples per size per candidate, in microseconds.
    pub by_size: HashMap<usize, HashMap<String, Vec<f64>>>,
    /// Candidates ordered ascending by overall mean elapsed time.
    pub ranking: Vec<RankingEntry>,
    /// Fastest candidate by median time for each pattern.
    pub best_by_pattern: HashMap<String, GroupBest>,
    /// Fastest candidate by median time for each size.
    pub best_by_size: HashMap<usize, GroupBest>,
}

/// Arithmetic mean of a sample set; 0 for an empty set.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Median of a sample set; 0 for an empty set.
///
/// Even-sized sets average the two central samples.
pub fn median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Aggregates timing records into grouped statistics and rankings.
///
/// # Arguments
///
/// * `records` - Timing records from a harness run
///
/// # Returns
///
/// Grouped samples, the overall ranking (ties broken lexicographically by
/// candidate name), and the per-group winners.
pub fn aggregate(records: &[TimingRecord]) -> Aggregated {
    let mut aggregated = Aggregated::default();
    let mut overall: HashMap<String, Vec<f64>> = HashMap::new();

    for record in records {
        let (pattern, size) = match split_case_name(&record.case) {
            Some(key) => key,
            None => continue,
        };
        let micros = record.elapsed_micros();

        aggregated
            .by_pattern
            .entry(pattern.to_string())
            .or_default()
            .entry(record.candidate.clone())
            .or_default()
            .push(micros);
        aggregated
            .by_size
            .entry(size)
            .or_default()
            .entry(record.candidate.clone())
            .or_default()
            .push(micros);
        overall
            .entry(record.candidate.clone())
            .or_default()
            .push(micros);
    }

    let mut ranking: Vec<RankingEntry> = overall
        .iter()
        .map(|(candidate, samples)| RankingEntry {
            candidate: candidate.clone(),
            mean_micros: mean(samples),
            rank: 0,
        })
        .collect();
    ranking.sort_by(|a, b| {
        a.mean_micros
            .total_cmp(&b.mean_micros)
            .then_with(|| a.candidate.cmp(&b.candidate))
    });
    for (index, entry) in ranking.iter_mut().enumerate() {
        entry.rank = index + 1;
    }
    aggregated.ranking = ranking;

    aggregated.best_by_pattern = aggregated
        .by_pattern
        .iter()
        .filter_map(|(pattern, group)| {
            best_in_group(group).map(|best| (pattern.clone(), best))
        })
        .collect();
    aggregated.best_by_size = aggregated
        .by_size
        .iter()
        .filter_map(|(&size, group)| best_in_group(group).map(|best| (size, best)))
        .collect();

    aggregated
}

/// Selects the candidate with the minimal median time in one group.
fn best_in_group(group: &HashMap<String, Vec<f64>>) -> Option<GroupBest> {
    group
        .iter()
        .map(|(candidate, samples)| (candidate, median(samples)))
        .min_by(|(a_name, a_median), (b_name, b_median)| {
            a_median
                .total_cmp(b_median)
                .then_with(|| a_name.cmp(b_name))
        })
        .map(|(candidate, median_micros)| GroupBest {
            candidate: candidate.clone(),
            median_micros,
        })
}

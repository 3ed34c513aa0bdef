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

//! Synthetic test-case generation.
//!
//! Each pattern stresses a different distribution shape: dense duplicates,
//! presorted runs, bimodal clusters, and so on. All randomized patterns are
//! driven by an explicit seed so any case can be regenerated exactly; no
//! generator reads ambient random state.

use crate::error::{validate_case_size, BenchError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;

/// Standard case sizes for a full comparison run.
pub const STANDARD_SIZES: &[usize] = &[10, 100, 1_000, 10_000, 100_000];

/// Minimum size at which the advanced patterns are generated.
pub const ADVANCED_MIN_SIZE: usize = 1_000;

/// Period of the sawtooth pattern.
pub const SAWTOOTH_PERIOD: usize = 100;

/// Fraction of elements disturbed by random pairwise swaps in the
/// nearly-sorted pattern.
pub const NEARLY_SORTED_SWAP_FRACTION: f64 = 0.05;

/// A named input-distribution shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Pattern {
    /// Independent wide-range random integers.
    Random,
    /// Ascending integers.
    Sorted,
    /// Descending integers.
    Reverse,
    /// One repeated value.
    Duplicates,
    /// Independent random floating values.
    Float,
    /// Random integers in a small fixed domain (many collisions).
    SmallRange,
    /// Ascending integers with a small fraction of random pairwise swaps.
    NearlySorted,
    /// `index mod period` repeating ramp.
    Sawtooth,
    /// Random draws from a very small value set.
    FewUniques,
    /// Bimodal: each value from a low-negative or high-positive band.
    Extremes,
    /// Bimodal by position parity: even indices low, odd indices high.
    Alternating,
}

impl Pattern {
    /// Returns the pattern name as used in case names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Random => "Random",
            Pattern::Sorted => "Sorted",
            Pattern::Reverse => "Reverse",
            Pattern::Duplicates => "Duplicates",
            Pattern::Float => "Float",
            Pattern::SmallRange => "SmallRange",
            Pattern::NearlySorted => "NearlySorted",
            Pattern::Sawtooth => "Sawtooth",
            Pattern::FewUniques => "FewUniques",
            Pattern::Extremes => "Extremes",
            Pattern::Alternating => "Alternating",
        }
    }

    /// Patterns generated at every size.
    pub fn basic() -> &'static [Pattern] {
        &[
            Pattern::Random,
            Pattern::Sorted,
            Pattern::Reverse,
            Pattern::Duplicates,
            Pattern::Float,
        ]
    }

    /// Patterns generated only at sizes >= [`ADVANCED_MIN_SIZE`].
    pub fn advanced() -> &'static [Pattern] {
        &[
            Pattern::SmallRange,
            Pattern::NearlySorted,
            Pattern::Sawtooth,
            Pattern::FewUniques,
            Pattern::Extremes,
            Pattern::Alternating,
        ]
    }

    /// Returns every pattern kind.
    pub fn all() -> Vec<Pattern> {
        let mut patterns = Self::basic().to_vec();
        patterns.extend_from_slice(Self::advanced());
        patterns
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pattern {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        Pattern::all()
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| BenchError::UnknownPattern(s.to_string()))
    }
}

/// A named, immutable test fixture.
///
/// The name uniquely encodes pattern and size (e.g. `"Sawtooth-10000"`);
/// the harness only ever borrows the data read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    /// `Pattern-size` encoding.
    pub name: String,
    /// The generated sequence.
    pub data: Vec<f64>,
}

impl TestCase {
    /// Creates a case with the canonical `Pattern-size` name.
    pub fn new(pattern: Pattern, size: usize, data: Vec<f64>) -> Self {
        Self {
            name: format!("{}-{}", pattern.as_str(), size),
            data,
        }
    }
}

/// Recovers the `(pattern, size)` group key from a case name.
///
/// # Returns
///
/// `None` if the name does not follow the `Pattern-size` encoding.
pub fn split_case_name(name: &str) -> Option<(&str, usize)> {
    let (pattern, size) = name.rsplit_once('-')?;
    let size = size.parse().ok()?;
    Some((pattern, size))
}

/// Generates the data for one pattern at one size.
///
/// Deterministic for a fixed seed: the same `(pattern, size, seed)` triple
/// always yields the same sequence.
///
/// # Arguments
///
/// * `pattern` - Distribution shape to generate
/// * `size` - Number of values, must be positive
/// * `seed` - Seed for the randomized patterns
///
/// # Returns
///
/// The generated sequence, or a configuration error for an unusable size.
pub fn generate(pattern: Pattern, size: usize, seed: u64) -> Result<Vec<f64>> {
    validate_case_size(size)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let data = match pattern {
        Pattern::Random => (0..size)
            .map(|_| rng.gen_range(-1_000_000i64..=1_000_000) as f64)
            .collect(),
        Pattern::Sorted => (0..size).map(|i| i as f64).collect(),
        Pattern::Reverse => (1..=size).rev().map(|i| i as f64).collect(),
        Pattern::Duplicates => vec![42.0; size],
        Pattern::Float => (0..size)
            .map(|_| rng.gen_range(-1_000.0..1_000.0))
            .collect(),
        Pattern::SmallRange => (0..size)
            .map(|_| rng.gen_range(0i64..=50) as f64)
            .collect(),
        Pattern::NearlySorted => {
            let mut data: Vec<f64> = (0..size).map(|i| i as f64).collect();
            let swaps = (size as f64 * NEARLY_SORTED_SWAP_FRACTION) as usize;
            for _ in 0..swaps {
                let i = rng.gen_range(0..size);
                let j = rng.gen_range(0..size);
                if i != j {
                    data.swap(i, j);
                }
            }
            data
        }
        Pattern::Sawtooth => (0..size).map(|i| (i % SAWTOOTH_PERIOD) as f64).collect(),
        Pattern::FewUniques => (0..size)
            .map(|_| rng.gen_range(1i64..=10) as f64)
            .collect(),
        Pattern::Extremes => (0..size)
            .map(|_| {
                if rng.gen_bool(0.5) {
                    rng.gen_range(-1_000_000i64..=-100_000) as f64
                } else {
                    rng.gen_range(100_000i64..=1_000_000) as f64
                }
            })
            .collect(),
        Pattern::Alternating => (0..size)
            .map(|i| {
                if i % 2 == 0 {
                    rng.gen_range(0i64..=100) as f64
                } else {
                    rng.gen_range(900i64..=1_000) as f64
                }
            })
            .collect(),
    };

    Ok(data)
}

/// Generates a named [`TestCase`] for one pattern at one size.
pub fn generate_case(pattern: Pattern, size: usize, seed: u64) -> Result<TestCase> {
    Ok(TestCase::new(pattern, size, generate(pattern, size, seed)?))
}

/// Builds the case matrix for an explicit list of sizes.
///
/// Basic patterns are generated at every size; advanced patterns only at
/// sizes >= [`ADVANCED_MIN_SIZE`]. Per-case seeds are derived from the base
/// seed, so the whole matrix is reproducible from one number.
pub fn cases_for_sizes(sizes: &[usize], seed: u64) -> Result<Vec<TestCase>> {
    let mut cases = Vec::new();
    let mut index: u64 = 0;

    for &size in sizes {
        for &pattern in Pattern::basic() {
            cases.push(generate_case(pattern, size, seed.wrapping_add(index))?);
            index += 1;
        }
        if size >= ADVANCED_MIN_SIZE {
            for &pattern in Pattern::advanced() {
                cases.push(generate_case(pattern, size, seed.wrapping_add(index))?);
                index += 1;
            }
        }
    }

    Ok(cases)
}

/// Builds the full standard case matrix over [`STANDARD_SIZES`].
pub fn standard_cases(seed: u64) -> Result<Vec<TestCase>> {
    cases_for_sizes(STANDARD_SIZES, seed)
}

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

//! The adaptive hybrid sorter.

use crate::analysis::{self, ValueRange};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::strategy::{bucket, counting, Strategy};

/// A sorter that selects a counting or bucket strategy per invocation.
///
/// Inputs of length <= 1 and uniform inputs (all values equal) are returned
/// unchanged without selecting a strategy. Otherwise the engine classifies
/// the value range and dispatches: integral data whose range passes the
/// eligibility gate goes to the counting strategy, everything else to the
/// bucket strategy.
///
/// # Example
///
/// ```
/// use adaptsort::{EngineConfig, SortEngine};
///
/// let engine = SortEngine::with_config(EngineConfig::new().with_bucket_cap(256))?;
/// assert_eq!(engine.sort(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
/// # Ok::<(), adaptsort::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SortEngine {
    config: EngineConfig,
}

impl SortEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
        }
    }

    /// Creates an engine with a custom configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Tuning parameters, validated before use
    ///
    /// # Returns
    ///
    /// The engine, or [`EngineError::InvalidConfig`] for an out-of-domain
    /// parameter.
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Selects the strategy for a classified input.
    ///
    /// Pure function of the range, the input length, and the configuration:
    /// identical input always selects the same strategy.
    pub fn select_strategy(&self, range: &ValueRange, len: usize) -> Strategy {
        let gate = self.config.counting_gate.saturating_mul(len);
        if range.integral && range.integral_span() <= gate as f64 {
            Strategy::Counting
        } else {
            Strategy::Bucket
        }
    }

    /// Returns a non-decreasing permutation of `values`.
    pub fn sort(&self, values: &[f64]) -> Vec<f64> {
        if values.len() <= 1 {
            return values.to_vec();
        }

        let range = match analysis::analyze(values) {
            Some(range) => range,
            None => return values.to_vec(),
        };

        if range.is_uniform() {
            return values.to_vec();
        }

        match self.select_strategy(&range, values.len()) {
            Strategy::Counting => counting::sort(values, &range),
            Strategy::Bucket => bucket::sort(values, &range, self.config.bucket_cap),
        }
    }
}

impl Default for SortEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    fn is_sorted(values: &[f64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_basic_scenario() {
        let engine = SortEngine::new();
        let sorted = engine.sort(&[5.0, 2.0, 8.0, 1.0, 9.0, 4.0]);
        assert_eq!(sorted, vec![1.0, 2.0, 4.0, 5.0, 8.0, 9.0]);
    }

    #[test]
    fn test_empty_and_single() {
        let engine = SortEngine::new();
        assert_eq!(engine.sort(&[]), Vec::<f64>::new());
        assert_eq!(engine.sort(&[7.0]), vec![7.0]);
    }

    #[test]
    fn test_uniform_input_returned_unchanged() {
        let engine = SortEngine::new();
        let values = [1.0, 1.0, 1.0, 1.0, 1.0];
        assert_eq!(engine.sort(&values), values.to_vec());

        // A uniform integral range still classifies as counting-eligible.
        let range = analyze(&values).unwrap();
        assert_eq!(range.integral_span(), 1.0);
        assert_eq!(engine.select_strategy(&range, values.len()), Strategy::Counting);
    }

    #[test]
    fn test_dense_integers_select_counting() {
        let engine = SortEngine::new();
        let values: Vec<f64> = (0..100).rev().map(|i| i as f64).collect();
        let range = analyze(&values).unwrap();
        assert_eq!(engine.select_strategy(&range, values.len()), Strategy::Counting);
        assert!(is_sorted(&engine.sort(&values)));
    }

    #[test]
    fn test_sparse_integers_fall_through_to_bucket() {
        // Two integers a billion apart: individually bounded, but the range
        // fails the gate, so no counting table is ever allocated.
        let engine = SortEngine::new();
        let values = [1_000_000_000.0, 0.0];
        let range = analyze(&values).unwrap();
        assert_eq!(engine.select_strategy(&range, values.len()), Strategy::Bucket);
        assert_eq!(engine.sort(&values), vec![0.0, 1_000_000_000.0]);
    }

    #[test]
    fn test_fractional_values_select_bucket() {
        let engine = SortEngine::new();
        let values = [0.5, 0.25, 0.75];
        let range = analyze(&values).unwrap();
        assert_eq!(engine.select_strategy(&range, values.len()), Strategy::Bucket);
        assert_eq!(engine.sort(&values), vec![0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_gate_respects_configured_multiplier() {
        // Range 0..=9 over 2 elements: eligible at the default gate of 10,
        // ineligible at 4.
        let values = [9.0, 0.0];
        let range = analyze(&values).unwrap();

        let default_engine = SortEngine::new();
        assert_eq!(default_engine.select_strategy(&range, 2), Strategy::Counting);

        let strict = SortEngine::with_config(EngineConfig::new().with_counting_gate(4)).unwrap();
        assert_eq!(strict.select_strategy(&range, 2), Strategy::Bucket);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let engine = SortEngine::new();
        let values: Vec<f64> = (0..64).map(|i| ((i * 31) % 64) as f64).collect();
        let range = analyze(&values).unwrap();
        let first = engine.select_strategy(&range, values.len());
        for _ in 0..10 {
            assert_eq!(engine.select_strategy(&range, values.len()), first);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(SortEngine::with_config(EngineConfig::new().with_bucket_cap(0)).is_err());
    }
}

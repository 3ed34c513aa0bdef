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

//! Engine tuning parameters.
//!
//! Both constants here are empirically tuned rather than derived; they are
//! exposed as configuration so callers can override them per workload.

use crate::error::EngineError;

/// Default multiplier for the counting-sort eligibility gate.
///
/// Counting sort is selected only when `range <= DEFAULT_COUNTING_GATE * n`,
/// which bounds the frequency table to a constant factor of the input length.
pub const DEFAULT_COUNTING_GATE: usize = 10;

/// Default upper bound on the number of buckets.
///
/// Caps auxiliary memory for the bucket strategy regardless of input length.
pub const DEFAULT_BUCKET_CAP: usize = 1_000;

/// Tuning parameters for [`crate::SortEngine`].
///
/// # Example
///
/// ```
/// use adaptsort::EngineConfig;
///
/// let config = EngineConfig::new().with_counting_gate(4).with_bucket_cap(256);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Counting sort is eligible when `range <= counting_gate * n`.
    pub counting_gate: usize,
    /// Maximum number of buckets for the bucket strategy.
    pub bucket_cap: usize,
}

impl EngineConfig {
    /// Creates a configuration with the default gate and cap.
    pub fn new() -> Self {
        Self {
            counting_gate: DEFAULT_COUNTING_GATE,
            bucket_cap: DEFAULT_BUCKET_CAP,
        }
    }

    /// Sets the counting-sort eligibility multiplier.
    pub fn with_counting_gate(mut self, gate: usize) -> Self {
        self.counting_gate = gate;
        self
    }

    /// Sets the bucket count cap.
    pub fn with_bucket_cap(mut self, cap: usize) -> Self {
        self.bucket_cap = cap;
        self
    }

    /// Checks that every parameter is inside its valid domain.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is usable, or an
    /// [`EngineError::InvalidConfig`] naming the offending parameter.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.counting_gate == 0 {
            return Err(EngineError::InvalidConfig {
                parameter: "counting_gate",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.bucket_cap < 2 {
            return Err(EngineError::InvalidConfig {
                parameter: "bucket_cap",
                reason: "must be at least 2".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.counting_gate, DEFAULT_COUNTING_GATE);
        assert_eq!(config.bucket_cap, DEFAULT_BUCKET_CAP);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::new().with_counting_gate(3).with_bucket_cap(64);
        assert_eq!(config.counting_gate, 3);
        assert_eq!(config.bucket_cap, 64);
    }

    #[test]
    fn test_zero_gate_rejected() {
        let err = EngineConfig::new().with_counting_gate(0).validate();
        assert!(matches!(
            err,
            Err(EngineError::InvalidConfig {
                parameter: "counting_gate",
                ..
            })
        ));
    }

    #[test]
    fn test_tiny_bucket_cap_rejected() {
        let err = EngineConfig::new().with_bucket_cap(1).validate();
        assert!(matches!(
            err,
            Err(EngineError::InvalidConfig {
                parameter: "bucket_cap",
                ..
            })
        ));
    }
}

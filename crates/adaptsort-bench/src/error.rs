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

//! Error types for benchmark operations.
//!
//! A failure is always reported and the affected data point omitted from
//! aggregation; nothing in the harness retries or masks an error.

use adaptsort::EngineError;
use std::fmt;

/// Maximum test-case size (10 million values).
///
/// Bounds the memory a single generated case can claim; benchmark runs
/// should use a reasonable subset of sizes for meaningful results.
pub const MAX_CASE_SIZE: usize = 10_000_000;

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while generating cases or running the harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// A candidate's output is not a sorted permutation of its input.
    ///
    /// Fatal for that candidate's run: its records are excluded from
    /// aggregation and the violation is reported with full identity.
    CorrectnessViolation {
        /// Name of the failing candidate.
        candidate: String,
        /// Name of the case it failed on.
        case: String,
    },

    /// Requested case size exceeds [`MAX_CASE_SIZE`].
    CaseTooLarge {
        /// Requested size.
        requested: usize,
        /// Maximum allowed size.
        max: usize,
    },

    /// Invalid generator or engine parameter.
    InvalidConfig {
        /// Parameter name.
        parameter: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// A pattern name did not match any known pattern kind.
    UnknownPattern(String),

    /// Report serialization failed.
    ExportError(String),

    /// I/O error while writing a report.
    IoError(String),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::CorrectnessViolation { candidate, case } => {
                write!(
                    f,
                    "Candidate '{}' produced an incorrectly sorted result on case '{}'",
                    candidate, case
                )
            }
            BenchError::CaseTooLarge { requested, max } => {
                write!(
                    f,
                    "Case size {} exceeds maximum allowed size of {}",
                    requested, max
                )
            }
            BenchError::InvalidConfig { parameter, reason } => {
                write!(
                    f,
                    "Invalid configuration parameter '{}': {}",
                    parameter, reason
                )
            }
            BenchError::UnknownPattern(name) => {
                write!(f, "Unknown pattern kind: '{}'", name)
            }
            BenchError::ExportError(msg) => {
                write!(f, "Report export failed: {}", msg)
            }
            BenchError::IoError(msg) => {
                write!(f, "I/O error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BenchError {}

impl From<EngineError> for BenchError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidConfig { parameter, reason } => BenchError::InvalidConfig {
                parameter: parameter.to_string(),
                reason,
            },
        }
    }
}

/// Validates that a case size is positive and within the allowed limit.
///
/// # Arguments
///
/// * `size` - The requested case size
///
/// # Returns
///
/// `Ok(())` for a usable size, [`BenchError::InvalidConfig`] for zero, or
/// [`BenchError::CaseTooLarge`] above the limit.
pub fn validate_case_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(BenchError::InvalidConfig {
            parameter: "size".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if size > MAX_CASE_SIZE {
        return Err(BenchError::CaseTooLarge {
            requested: size,
            max: MAX_CASE_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_case_size_success() {
        assert!(validate_case_size(1).is_ok());
        assert!(validate_case_size(10_000).is_ok());
        assert!(validate_case_size(MAX_CASE_SIZE).is_ok());
    }

    #[test]
    fn test_validate_case_size_zero() {
        let result = validate_case_size(0);
        assert!(matches!(result, Err(BenchError::InvalidConfig { .. })));
    }

    #[test]
    fn test_validate_case_size_too_large() {
        let result = validate_case_size(MAX_CASE_SIZE + 1);
        if let Err(BenchError::CaseTooLarge { requested, max }) = result {
            assert_eq!(requested, MAX_CASE_SIZE + 1);
            assert_eq!(max, MAX_CASE_SIZE);
        } else {
            panic!("Expected CaseTooLarge error");
        }
    }

    #[test]
    fn test_error_display() {
        let err = BenchError::CorrectnessViolation {
            candidate: "QuickSort".to_string(),
            case: "Sawtooth-10000".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("QuickSort"));
        assert!(msg.contains("Sawtooth-10000"));

        let err = BenchError::UnknownPattern("Zigzag".to_string());
        assert!(format!("{}", err).contains("Zigzag"));
    }

    #[test]
    fn test_engine_error_conversion() {
        let err: BenchError = EngineError::InvalidConfig {
            parameter: "bucket_cap",
            reason: "must be at least 2".to_string(),
        }
        .into();
        assert!(matches!(err, BenchError::InvalidConfig { .. }));
        assert!(format!("{}", err).contains("bucket_cap"));
    }
}

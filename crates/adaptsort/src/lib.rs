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

//! Adaptive hybrid sorting engine.
//!
//! This crate provides [`SortEngine`], a sorter that inspects the value
//! distribution of its input and picks one of two strategies per call:
//!
//! - **Counting**: a frequency-table sort, O(n + range), used for integral
//!   data whose value range is small relative to the input length.
//! - **Bucket**: distributes values into ordered buckets by position within
//!   the value range, sorts each bucket locally, and concatenates.
//!
//! Selection is driven by [`analyze`], which classifies the input's value
//! domain (min, max, integral-ness) in a single pass. The eligibility gate
//! and bucket count cap are exposed through [`EngineConfig`].
//!
//! # Example
//!
//! ```
//! use adaptsort::SortEngine;
//!
//! let engine = SortEngine::new();
//! let sorted = engine.sort(&[5.0, 2.0, 8.0, 1.0, 9.0, 4.0]);
//! assert_eq!(sorted, vec![1.0, 2.0, 4.0, 5.0, 8.0, 9.0]);
//! ```
//!
//! The engine guarantees a non-decreasing permutation of its input. It does
//! not guarantee stability and does not accept custom comparators.

mod analysis;
mod config;
mod engine;
mod error;
mod strategy;

pub use analysis::{analyze, ValueRange};
pub use config::{EngineConfig, DEFAULT_BUCKET_CAP, DEFAULT_COUNTING_GATE};
pub use engine::SortEngine;
pub use error::EngineError;
pub use strategy::Strategy;

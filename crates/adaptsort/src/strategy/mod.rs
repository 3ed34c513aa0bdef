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

//! The two sorting strategies the engine chooses between.

pub(crate) mod bucket;
pub(crate) mod counting;

/// The strategy selected for one sort invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Frequency-table sort for integral data with a bounded range.
    Counting,
    /// Range-partitioned bucket sort with local comparison sorts.
    Bucket,
}

impl Strategy {
    /// Returns the strategy as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Counting => "counting",
            Strategy::Bucket => "bucket",
        }
    }
}

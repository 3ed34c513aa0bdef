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

//! JSON reporter for machine-readable comparison results.

use crate::error::{BenchError, Result};
use crate::harness::Aggregated;
use std::path::Path;

/// Serializes aggregated results to pretty-printed JSON.
pub fn to_json(aggregated: &Aggregated) -> Result<String> {
    serde_json::to_string_pretty(aggregated)
        .map_err(|err| BenchError::ExportError(err.to_string()))
}

/// Writes aggregated results as JSON to a file.
///
/// # Arguments
///
/// * `aggregated` - The results to export
/// * `path` - Destination file path
pub fn write_json(aggregated: &Aggregated, path: &Path) -> Result<()> {
    let json = to_json(aggregated)?;
    std::fs::write(path, json).map_err(|err| BenchError::IoError(err.to_string()))
}

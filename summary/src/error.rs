// Copyright 2025 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.
// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use thiserror::Error;

/// `Error` enumerates errors returned by the summary operations that take
/// serialized input.
///
/// Summarizing an already parsed manifest store never fails; missing or
/// malformed fields are treated as absent.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The manifest store text could not be parsed, or the summary could not
    /// be serialized.
    #[error("invalid manifest store JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for summary operations.
pub type Result<T> = std::result::Result<T, Error>;

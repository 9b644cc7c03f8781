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

use serde::Serialize;

use crate::store::{StoreView, ValidationEntry};

/// Validation status codes that pertain to the claim signature itself start
/// with this prefix and are not reported as issues.
const CLAIM_PREFIX: &str = "claim";

/// A validation status entry that indicates a trust or verification problem.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// The validation status code as reported by the SDK.
    pub code: String,
    /// The code formatted for display, see [`format_code`].
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl From<ValidationEntry<'_>> for ValidationIssue {
    fn from(entry: ValidationEntry<'_>) -> Self {
        Self {
            code: entry.code.to_owned(),
            label: format_code(entry.code),
            explanation: entry.explanation.map(str::to_owned),
        }
    }
}

/// The overall validation outcome of a manifest store.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(tag = "status", content = "issues", rename_all = "snake_case")]
pub enum Verdict {
    #[default]
    Valid,
    Issues(Vec<ValidationIssue>),
}

impl Verdict {
    /// Derives the verdict from the store's validation status list.
    pub fn from_store(store: &StoreView<'_>) -> Self {
        let issues: Vec<ValidationIssue> = store
            .validation_entries()
            .filter(|entry| !entry.code.starts_with(CLAIM_PREFIX))
            .map(ValidationIssue::from)
            .collect();

        if issues.is_empty() {
            Verdict::Valid
        } else {
            Verdict::Issues(issues)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Verdict::Valid => &[],
            Verdict::Issues(issues) => issues,
        }
    }

    pub fn issue_count(&self) -> usize {
        self.issues().len()
    }
}

/// Formats a validation status code for display.
///
/// Dots become ` › `, underscores become spaces, camelCase words are split,
/// and the result is lower-cased with only its first character capitalized:
/// `signingCredential.untrusted` becomes `Signing credential › untrusted`.
pub fn format_code(code: &str) -> String {
    let mut spaced = String::with_capacity(code.len() + 8);
    let mut prev = None;
    for c in code.chars() {
        match c {
            '.' => spaced.push_str(" › "),
            '_' => spaced.push(' '),
            c => {
                if c.is_ascii_uppercase() && prev.is_some_and(|p: char| p.is_ascii_lowercase()) {
                    spaced.push(' ');
                }
                spaced.push(c);
            }
        }
        prev = Some(c);
    }

    let lower = spaced.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

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

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{
    assertions,
    error::Result,
    store::{ManifestView, StoreView},
    validation::Verdict,
};

/// Format of the signing time in a summary.
const SIGNED_AT_FORMAT: &str = "%b %-d, %Y %H:%M:%S UTC";

/// A title and format of an ingredient of the active manifest.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct IngredientSummary {
    pub title: Option<String>,
    pub format: Option<String>,
}

/// Details derived from the active manifest.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ManifestDetails {
    pub issuer: Option<String>,
    pub signed_at: Option<String>,
    pub cert_serial_number: Option<String>,
    pub title: Option<String>,
    pub format: Option<String>,
    pub author: Option<String>,
    pub app_name: Option<String>,
    pub claim_generator: Option<String>,
    /// Display labels of every action, in the order they were recorded.
    pub actions: Vec<String>,
    pub ingredients: Vec<IngredientSummary>,
    pub assertion_count: usize,
    pub ingredient_count: usize,
}

impl ManifestDetails {
    fn from_manifest(manifest: &ManifestView<'_>) -> Self {
        let assertions = manifest.assertions();
        let ingredients = manifest.ingredients();
        let claim_generator = manifest.claim_generator();

        Self {
            issuer: manifest.issuer().map(str::to_owned),
            signed_at: manifest.signed_time().map(format_signed_at),
            cert_serial_number: manifest.cert_serial_number().map(str::to_owned),
            title: manifest.title().map(str::to_owned),
            format: manifest.format().map(str::to_owned),
            author: assertions::author(assertions).map(str::to_owned),
            app_name: claim_generator.as_deref().map(app_name),
            claim_generator,
            actions: assertions::actions(assertions),
            ingredients: ingredients
                .iter()
                .map(|i| IngredientSummary {
                    title: i.get("title").and_then(Value::as_str).map(str::to_owned),
                    format: i.get("format").and_then(Value::as_str).map(str::to_owned),
                })
                .collect(),
            assertion_count: assertions.len(),
            ingredient_count: ingredients.len(),
        }
    }

    /// "1 Assertion", "3 Assertions".
    pub fn assertion_count_label(&self) -> String {
        pluralize(self.assertion_count, "Assertion")
    }

    /// "1 Ingredient", "0 Ingredients".
    pub fn ingredient_count_label(&self) -> String {
        pluralize(self.ingredient_count, "Ingredient")
    }
}

/// A normalized, human-presentable summary of a manifest store.
///
/// A `DisplaySummary` is plain data; it is rebuilt for every asset and never
/// updated in place.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DisplaySummary {
    /// Details of the active manifest, or `None` when no active manifest
    /// could be resolved.
    pub manifest: Option<ManifestDetails>,
    pub manifest_count: usize,
    pub validation: Verdict,
}

impl DisplaySummary {
    /// True when there is no active manifest to show details for.
    pub fn is_absent(&self) -> bool {
        self.manifest.is_none()
    }

    /// "1 Manifest", "2 Manifests".
    pub fn manifest_count_label(&self) -> String {
        pluralize(self.manifest_count, "Manifest")
    }

    /// Serializes the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Derives a [`DisplaySummary`] from a manifest store.
///
/// The store may use either the snake_case or the camelCase field spelling.
/// Missing and malformed fields are treated as absent, so this never fails;
/// any JSON value, including `null`, is accepted.
pub fn summarize(store: &Value) -> DisplaySummary {
    let view = StoreView::new(store);

    let manifest = view.active_manifest().map(|m| ManifestDetails::from_manifest(&m));
    if manifest.is_none() {
        log::debug!("no active manifest in manifest store");
    }

    DisplaySummary {
        manifest,
        manifest_count: view.manifest_count(),
        validation: Verdict::from_store(&view),
    }
}

/// Parses manifest store JSON text and summarizes it.
pub fn summarize_str(json: &str) -> Result<DisplaySummary> {
    let store: Value = serde_json::from_str(json)?;
    Ok(summarize(&store))
}

/// Derives an application name from a claim generator user agent string.
///
/// `Adobe_Photoshop/25.0 adobe_c2pa/0.7.6` becomes `Adobe Photoshop 25.0`.
pub fn app_name(claim_generator: &str) -> String {
    claim_generator
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .replace(['_', '/'], " ")
}

/// Formats an ISO-8601 signing time for display, in UTC.
///
/// Times that do not parse are returned unchanged.
pub fn format_signed_at(time: &str) -> String {
    match DateTime::parse_from_rfc3339(time) {
        Ok(dt) => dt.with_timezone(&Utc).format(SIGNED_AT_FORMAT).to_string(),
        Err(err) => {
            log::warn!("could not parse signing time {time}: {err}");
            time.to_owned()
        }
    }
}

/// Formats a count with its noun, adding a plural `s` unless the count is one.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

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

//! Read-only views over a manifest store produced by a C2PA SDK.
//!
//! The native SDK serializes its manifest store with snake_case keys while the
//! JavaScript bindings use camelCase. Every field whose spelling differs is
//! read through a [`DualKey`], so nothing outside this module has to know which
//! binding produced the value.

use serde_json::{Map, Value};

/// A field name with its snake_case and camelCase spellings.
///
/// Lookups prefer the snake_case spelling and fall back to camelCase. A field
/// present but set to `null` counts as absent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DualKey {
    snake: &'static str,
    camel: &'static str,
}

impl DualKey {
    pub const fn new(snake: &'static str, camel: &'static str) -> Self {
        Self { snake, camel }
    }

    /// Returns the value stored under either spelling of this key.
    pub fn get<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        present(value.get(self.snake)).or_else(|| present(value.get(self.camel)))
    }

    /// Returns the value stored under either spelling of this key if it is a string.
    pub fn get_str<'a>(&self, value: &'a Value) -> Option<&'a str> {
        self.get(value).and_then(Value::as_str)
    }
}

pub const ACTIVE_MANIFEST: DualKey = DualKey::new("active_manifest", "activeManifest");
pub const VALIDATION_STATUS: DualKey = DualKey::new("validation_status", "validationStatus");
pub const SIGNATURE_INFO: DualKey = DualKey::new("signature_info", "signatureInfo");
pub const ISSUER: DualKey = DualKey::new("issuer", "issuer");
pub const TIME: DualKey = DualKey::new("time", "time");
pub const CERT_SERIAL_NUMBER: DualKey = DualKey::new("cert_serial_number", "certSerialNumber");
pub const CLAIM_GENERATOR: DualKey = DualKey::new("claim_generator", "claimGenerator");
pub const CLAIM_GENERATOR_INFO: DualKey =
    DualKey::new("claim_generator_info", "claimGeneratorInfo");

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    match present(value.get(key)) {
        Some(Value::Array(items)) => items.as_slice(),
        Some(_) => {
            log::warn!("ignoring malformed {key}: expected an array");
            &[]
        }
        None => &[],
    }
}

/// Reads a manifest label, which is either a plain string or an inlined
/// manifest object carrying its own `label`.
fn manifest_label(value: &Value) -> Option<&str> {
    match value {
        Value::String(label) => Some(label),
        Value::Object(map) => map.get("label").and_then(Value::as_str),
        _ => None,
    }
}

/// One entry of a validation status list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValidationEntry<'a> {
    pub code: &'a str,
    pub explanation: Option<&'a str>,
}

/// A view over the top level of a manifest store.
#[derive(Clone, Copy, Debug)]
pub struct StoreView<'a> {
    value: &'a Value,
}

impl<'a> StoreView<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The label of the active manifest, if the store names one.
    pub fn active_label(&self) -> Option<&'a str> {
        ACTIVE_MANIFEST.get(self.value).and_then(manifest_label)
    }

    /// The `manifests` map, if present and well formed.
    pub fn manifests(&self) -> Option<&'a Map<String, Value>> {
        self.value.get("manifests").and_then(Value::as_object)
    }

    pub fn manifest_count(&self) -> usize {
        self.manifests().map_or(0, Map::len)
    }

    /// Looks up a manifest by label.
    pub fn manifest(&self, label: &str) -> Option<ManifestView<'a>> {
        self.manifests()?
            .get(label)
            .filter(|m| m.is_object())
            .map(ManifestView::new)
    }

    /// Resolves the active manifest.
    ///
    /// Returns `None` when there is no active label, no `manifests` map, or
    /// the label does not index a manifest object.
    pub fn active_manifest(&self) -> Option<ManifestView<'a>> {
        let label = self.active_label()?;
        let manifest = self.manifest(label);
        if manifest.is_none() {
            log::debug!("active manifest {label} not found in manifest store");
        }
        manifest
    }

    /// Iterates the validation status entries in order.
    ///
    /// Entries without a string `code` are skipped.
    pub fn validation_entries(&self) -> impl Iterator<Item = ValidationEntry<'a>> + 'a {
        VALIDATION_STATUS
            .get(self.value)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|entry| {
                let code = str_field(entry, "code");
                if code.is_none() {
                    log::warn!("skipping validation status entry without a code");
                }
                Some(ValidationEntry {
                    code: code?,
                    explanation: str_field(entry, "explanation"),
                })
            })
    }
}

/// A view over a single manifest of a store.
#[derive(Clone, Copy, Debug)]
pub struct ManifestView<'a> {
    value: &'a Value,
}

impl<'a> ManifestView<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn title(&self) -> Option<&'a str> {
        str_field(self.value, "title")
    }

    pub fn format(&self) -> Option<&'a str> {
        str_field(self.value, "format")
    }

    /// The claim generator string.
    ///
    /// Manifests written by newer claim generators only carry
    /// `claim_generator_info`; the first entry's name (and version, if any)
    /// stands in for the claim generator in that case.
    pub fn claim_generator(&self) -> Option<String> {
        if let Some(claim_generator) = CLAIM_GENERATOR.get_str(self.value) {
            return Some(claim_generator.to_owned());
        }

        let info = CLAIM_GENERATOR_INFO.get(self.value)?.as_array()?.first()?;
        let name = str_field(info, "name")?;
        Some(match str_field(info, "version") {
            Some(version) => format!("{name}/{version}"),
            None => name.to_owned(),
        })
    }

    pub fn signature_info(&self) -> Option<&'a Value> {
        let info = SIGNATURE_INFO.get(self.value)?;
        if !info.is_object() {
            log::warn!("ignoring malformed signature info: expected an object");
            return None;
        }
        Some(info)
    }

    pub fn issuer(&self) -> Option<&'a str> {
        self.signature_info().and_then(|info| ISSUER.get_str(info))
    }

    /// The signing time as recorded by the SDK (ISO-8601).
    pub fn signed_time(&self) -> Option<&'a str> {
        self.signature_info().and_then(|info| TIME.get_str(info))
    }

    pub fn cert_serial_number(&self) -> Option<&'a str> {
        self.signature_info()
            .and_then(|info| CERT_SERIAL_NUMBER.get_str(info))
    }

    pub fn assertions(&self) -> &'a [Value] {
        array_field(self.value, "assertions")
    }

    pub fn ingredients(&self) -> &'a [Value] {
        array_field(self.value, "ingredients")
    }
}

/// The label of the manifest an ingredient carries, if any.
pub fn ingredient_manifest(ingredient: &Value) -> Option<&str> {
    ACTIVE_MANIFEST.get(ingredient).and_then(manifest_label)
}

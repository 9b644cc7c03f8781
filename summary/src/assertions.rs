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

//! Extraction of the assertions the summary interprets: authorship and actions.

use serde_json::Value;

/// Label of the schema.org CreativeWork assertion.
pub const CREATIVE_WORK: &str = "stds.schema-org.CreativeWork";
/// Label of the actions assertion.
pub const ACTIONS: &str = "c2pa.actions";
/// Label of the actions assertion in C2PA 2.x claims.
pub const ACTIONS_V2: &str = "c2pa.actions.v2";

/// Display labels for the actions defined by the C2PA standard.
const ACTION_LABELS: [(&str, &str); 14] = [
    ("c2pa.color_adjustments", "Color adjustments"),
    ("c2pa.converted", "Converted"),
    ("c2pa.created", "Created"),
    ("c2pa.cropped", "Cropped"),
    ("c2pa.drawing", "Drawing"),
    ("c2pa.edited", "Edited"),
    ("c2pa.filtered", "Filtered"),
    ("c2pa.opened", "Opened"),
    ("c2pa.orientation", "Orientation"),
    ("c2pa.placed", "Placed"),
    ("c2pa.published", "Published"),
    ("c2pa.repackaged", "Repackaged"),
    ("c2pa.resized", "Resized"),
    ("c2pa.transcoded", "Transcoded"),
];

fn label(assertion: &Value) -> Option<&str> {
    assertion.get("label").and_then(Value::as_str)
}

fn data_array<'a>(assertion: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    assertion.get("data")?.get(key)?.as_array()
}

fn is_actions(label: &str) -> bool {
    label == ACTIONS || label == ACTIONS_V2
}

/// Returns the human-readable label for an action code.
///
/// Codes outside the standard list lose their `c2pa.` prefix and have
/// underscores turned into spaces; they are not capitalized.
pub fn action_label(code: &str) -> String {
    match ACTION_LABELS.iter().find(|(known, _)| *known == code) {
        Some((_, label)) => (*label).to_owned(),
        None => code.strip_prefix("c2pa.").unwrap_or(code).replace('_', " "),
    }
}

/// Collects the action codes of every actions assertion, in order.
///
/// Duplicates are kept, and all actions assertions contribute. Besides
/// `c2pa.actions`, the versioned `c2pa.actions.v2` label of C2PA 2.x claims
/// is read as an actions assertion too.
pub fn action_codes(assertions: &[Value]) -> Vec<&str> {
    assertions
        .iter()
        .filter(|a| label(a).is_some_and(is_actions))
        .filter_map(|a| data_array(a, "actions"))
        .flatten()
        .filter_map(|action| action.get("action").and_then(Value::as_str))
        .collect()
}

/// Collects the display labels of every action, in order.
pub fn actions(assertions: &[Value]) -> Vec<String> {
    action_codes(assertions)
        .into_iter()
        .map(action_label)
        .collect()
}

/// Finds the author named by the first CreativeWork assertion that lists any.
///
/// CreativeWork assertions with an empty or malformed author list are
/// skipped. Once one with authors is found, its first author decides the
/// result, even if that entry has no name.
pub fn author(assertions: &[Value]) -> Option<&str> {
    let authors = assertions
        .iter()
        .filter(|a| label(a) == Some(CREATIVE_WORK))
        .filter_map(|a| data_array(a, "author"))
        .find(|authors| !authors.is_empty())?;

    authors.first()?.get("name").and_then(Value::as_str)
}

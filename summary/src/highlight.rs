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

//! Syntax highlighting of serialized JSON as HTML.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::error::Result;

// One JSON token per match. Keys keep their trailing colon.
#[allow(clippy::unwrap_used)]
static JSON_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#""(?:\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(?:\s*:)?|\b(?:true|false|null)\b|-?\d+(?:\.\d*)?(?:[eE][+\-]?\d+)?"#,
    )
    .unwrap()
});

/// The lexical category of a highlighted JSON token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenClass {
    Key,
    String,
    Boolean,
    Null,
    Number,
}

impl TokenClass {
    /// Classifies a matched token by looking at the token text alone.
    pub fn of(token: &str) -> Self {
        if token.starts_with('"') {
            if token.ends_with(':') {
                TokenClass::Key
            } else {
                TokenClass::String
            }
        } else if token == "true" || token == "false" {
            TokenClass::Boolean
        } else if token == "null" {
            TokenClass::Null
        } else {
            TokenClass::Number
        }
    }

    /// The CSS class wrapped around tokens of this category.
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenClass::Key => "json-key",
            TokenClass::String => "json-string",
            TokenClass::Boolean => "json-boolean",
            TokenClass::Null => "json-null",
            TokenClass::Number => "json-number",
        }
    }
}

// Quotes stay as they are so the token pattern still sees string boundaries.
fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Highlights serialized JSON for display in HTML.
///
/// The text is HTML-escaped, then every string, number, boolean and null token
/// is wrapped in a `<span>` whose class names its category. Object keys (a
/// string followed by a colon) are tagged as keys. Whitespace and punctuation
/// are left as they are.
///
/// This is a single lexical pass; call it once on plain JSON text, not on its
/// own output.
pub fn highlight_json(json: &str) -> String {
    let escaped = escape_markup(json);
    JSON_TOKEN
        .replace_all(&escaped, |caps: &Captures<'_>| {
            let token = &caps[0];
            format!(
                r#"<span class="{}">{token}</span>"#,
                TokenClass::of(token).css_class()
            )
        })
        .into_owned()
}

/// Pretty-prints a JSON value and highlights it.
pub fn highlight_value(value: &Value) -> Result<String> {
    let json = serde_json::to_string_pretty(value)?;
    Ok(highlight_json(&json))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(TokenClass::of(r#""a":"#), TokenClass::Key);
        assert_eq!(TokenClass::of(r#""a"  :"#), TokenClass::Key);
        assert_eq!(TokenClass::of(r#""a""#), TokenClass::String);
        assert_eq!(TokenClass::of("false"), TokenClass::Boolean);
        assert_eq!(TokenClass::of("null"), TokenClass::Null);
        assert_eq!(TokenClass::of("-1.5e3"), TokenClass::Number);
    }

    #[test]
    fn test_highlight_escaped_quote() {
        let html = highlight_json(r#"{"a":1,"b":"x\"y"}"#);
        assert_eq!(
            html,
            r#"{<span class="json-key">"a":</span><span class="json-number">1</span>,<span class="json-key">"b":</span><span class="json-string">"x\"y"</span>}"#
        );
    }

    #[test]
    fn test_highlight_literals_and_whitespace() {
        let html = highlight_json("[true, false,\n  null, -2.5E-3]");
        assert_eq!(
            html,
            "[<span class=\"json-boolean\">true</span>, <span class=\"json-boolean\">false</span>,\n  <span class=\"json-null\">null</span>, <span class=\"json-number\">-2.5E-3</span>]"
        );
    }

    #[test]
    fn test_highlight_key_with_space_before_colon() {
        let html = highlight_json(r#"{"k" : "v"}"#);
        assert_eq!(
            html,
            r#"{<span class="json-key">"k" :</span> <span class="json-string">"v"</span>}"#
        );
    }

    #[test]
    fn test_highlight_unicode_escape_and_html() {
        let html = highlight_json(r#"["\u00e9<b>&", "true"]"#);
        assert_eq!(
            html,
            r#"[<span class="json-string">"\u00e9&lt;b&gt;&amp;"</span>, <span class="json-string">"true"</span>]"#
        );
    }

    #[test]
    fn test_numbers_inside_strings_are_not_numbers() {
        let html = highlight_json(r#"{"c2pa.actions.v2":"urn:uuid:1234"}"#);
        assert!(!html.contains("json-number"));
    }

    #[test]
    fn test_highlight_value() {
        let html = highlight_value(&json!({"count": 2})).unwrap();
        assert_eq!(
            html,
            "{\n  <span class=\"json-key\">\"count\":</span> <span class=\"json-number\">2</span>\n}"
        );
    }
}

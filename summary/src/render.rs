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

//! Text and HTML presentation of a [`DisplaySummary`].

use std::fmt::{self, Display};

use serde_json::Value;

use crate::{
    error::Result,
    highlight::highlight_value,
    summary::{DisplaySummary, IngredientSummary, ManifestDetails},
    validation::Verdict,
};

/// Marker shown when no active manifest could be resolved.
pub const NO_DETAILS: &str = "No manifest details";

const UNKNOWN: &str = "Unknown";

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn or_unknown(value: Option<&String>) -> &str {
    value.map_or(UNKNOWN, String::as_str)
}

fn ingredient_text(ingredient: &IngredientSummary) -> String {
    let title = ingredient.title.as_deref().unwrap_or("Untitled");
    match &ingredient.format {
        Some(format) => format!("{title} ({format})"),
        None => title.to_owned(),
    }
}

impl Display for DisplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.manifest {
            Some(details) => {
                writeln!(f, "Title: {}", or_unknown(details.title.as_ref()))?;
                writeln!(f, "Format: {}", or_unknown(details.format.as_ref()))?;
                writeln!(f, "Issued by: {}", or_unknown(details.issuer.as_ref()))?;
                writeln!(f, "Signed on: {}", or_unknown(details.signed_at.as_ref()))?;
                if let Some(author) = &details.author {
                    writeln!(f, "Author: {author}")?;
                }
                writeln!(f, "App: {}", or_unknown(details.app_name.as_ref()))?;
                if !details.actions.is_empty() {
                    writeln!(f, "Actions: {}", details.actions.join(", "))?;
                }
                if !details.ingredients.is_empty() {
                    writeln!(f, "Ingredients:")?;
                    for ingredient in &details.ingredients {
                        writeln!(f, "   {}", ingredient_text(ingredient))?;
                    }
                }
                writeln!(
                    f,
                    "{}, {}, {}",
                    self.manifest_count_label(),
                    details.assertion_count_label(),
                    details.ingredient_count_label()
                )?;
            }
            None => {
                writeln!(f, "{NO_DETAILS}")?;
                writeln!(f, "{}", self.manifest_count_label())?;
            }
        }

        match &self.validation {
            Verdict::Valid => write!(f, "Validated"),
            Verdict::Issues(issues) => {
                write!(f, "Validation issues: {}", issues.len())?;
                for issue in issues {
                    write!(f, "\n   {}", issue.label)?;
                    if let Some(explanation) = &issue.explanation {
                        write!(f, ": {explanation}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

fn push_row(html: &mut String, name: &str, value: Option<&String>) {
    let value = match value {
        Some(value) => escape_html(value),
        None => format!(r#"<span class="muted">{UNKNOWN}</span>"#),
    };
    html.push_str(&format!("<dt>{name}</dt><dd>{value}</dd>"));
}

fn push_details(html: &mut String, details: &ManifestDetails) {
    html.push_str("<dl class=\"manifest-details\">");
    push_row(html, "Title", details.title.as_ref());
    push_row(html, "Format", details.format.as_ref());
    push_row(html, "Issued by", details.issuer.as_ref());
    push_row(html, "Signed on", details.signed_at.as_ref());
    push_row(html, "Certificate serial", details.cert_serial_number.as_ref());
    push_row(html, "Author", details.author.as_ref());
    push_row(html, "App", details.app_name.as_ref());
    html.push_str("</dl>");

    if !details.actions.is_empty() {
        html.push_str("<h3>Actions</h3><ul class=\"actions\">");
        for action in &details.actions {
            html.push_str(&format!("<li>{}</li>", escape_html(action)));
        }
        html.push_str("</ul>");
    }

    if !details.ingredients.is_empty() {
        html.push_str("<h3>Ingredients</h3><ul class=\"ingredients\">");
        for ingredient in &details.ingredients {
            html.push_str(&format!("<li>{}</li>", escape_html(&ingredient_text(ingredient))));
        }
        html.push_str("</ul>");
    }
}

fn push_verdict(html: &mut String, verdict: &Verdict) {
    match verdict {
        Verdict::Valid => html.push_str(r#"<p class="validation valid">Validated</p>"#),
        Verdict::Issues(issues) => {
            html.push_str(&format!(
                r#"<div class="validation issues"><p>{}</p><ul>"#,
                crate::summary::pluralize(issues.len(), "validation issue")
            ));
            for issue in issues {
                html.push_str(&format!(
                    r#"<li title="{}">{}"#,
                    escape_html(&issue.code),
                    escape_html(&issue.label)
                ));
                if let Some(explanation) = &issue.explanation {
                    html.push_str(&format!(
                        r#"<span class="explanation">{}</span>"#,
                        escape_html(explanation)
                    ));
                }
                html.push_str("</li>");
            }
            html.push_str("</ul></div>");
        }
    }
}

/// Renders the summary as an HTML details panel.
///
/// Every value taken from the manifest store is HTML-escaped.
pub fn render_panel(summary: &DisplaySummary) -> String {
    let mut html = String::from(r#"<section class="manifest-summary">"#);

    match &summary.manifest {
        Some(details) => {
            push_details(&mut html, details);
            html.push_str(&format!(
                r#"<p class="counts">{}, {}, {}</p>"#,
                summary.manifest_count_label(),
                details.assertion_count_label(),
                details.ingredient_count_label()
            ));
        }
        None => {
            html.push_str(&format!(r#"<p class="no-details">{NO_DETAILS}</p>"#));
        }
    }

    push_verdict(&mut html, &summary.validation);
    html.push_str("</section>");
    html
}

const PAGE_STYLE: &str = "body{font-family:sans-serif;margin:2em}\
dl{display:grid;grid-template-columns:max-content auto;gap:.25em 1em}\
dt{font-weight:bold}.muted{color:#888}.valid{color:#1a7f37}.issues{color:#b3261e}\
.explanation{display:block;color:#555}\
pre{background:#f6f8fa;padding:1em;overflow:auto}\
.json-key{color:#0550ae}.json-string{color:#0a3069}.json-number{color:#953800}\
.json-boolean{color:#8250df}.json-null{color:#6e7781}";

/// Renders a standalone HTML page with the summary panel and the highlighted
/// manifest store JSON.
pub fn render_page(title: &str, summary: &DisplaySummary, store: &Value) -> Result<String> {
    let title = escape_html(title);
    let json = highlight_value(store)?;
    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{PAGE_STYLE}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n{}\n<h2>Manifest store</h2>\n<pre class=\"json\">{json}</pre>\n\
         </body>\n</html>\n",
        render_panel(summary)
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;
    use crate::summary::summarize;

    fn store() -> Value {
        json!({
            "active_manifest": "m",
            "manifests": {"m": {
                "title": "<script>alert(1)</script>.jpg",
                "signature_info": {"issuer": "Tom & Jerry"},
                "assertions": [
                    {"label": "c2pa.actions", "data": {"actions": [{"action": "c2pa.created"}]}}
                ],
                "ingredients": [{"title": "parent.jpg", "format": "image/jpeg"}, {}]
            }},
            "validation_status": [{"code": "signingCredential.untrusted", "explanation": "x"}]
        })
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_display_text() {
        let text = summarize(&store()).to_string();
        assert!(text.contains("Title: <script>alert(1)</script>.jpg\n"));
        assert!(text.contains("Issued by: Tom & Jerry\n"));
        assert!(text.contains("Signed on: Unknown\n"));
        assert!(text.contains("Actions: Created\n"));
        assert!(text.contains("   parent.jpg (image/jpeg)\n   Untitled\n"));
        assert!(text.contains("1 Manifest, 1 Assertion, 2 Ingredients\n"));
        assert!(text.ends_with("Validation issues: 1\n   Signing credential › untrusted: x"));
    }

    #[test]
    fn test_display_absent() {
        let text = summarize(&json!({})).to_string();
        assert_eq!(text, "No manifest details\n0 Manifests\nValidated");
    }

    #[test]
    fn test_panel_escapes_manifest_text() {
        let html = render_panel(&summarize(&store()));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;.jpg"));
        assert!(html.contains("<dd>Tom &amp; Jerry</dd>"));
        assert!(html.contains(r#"<dt>Author</dt><dd><span class="muted">Unknown</span></dd>"#));
        assert!(html.contains("<li>Created</li>"));
        assert!(html.contains("1 validation issue</p>"));
        assert!(html.contains(r#"<span class="explanation">x</span>"#));
    }

    #[test]
    fn test_panel_absent() {
        let html = render_panel(&summarize(&Value::Null));
        assert_eq!(
            html,
            r#"<section class="manifest-summary"><p class="no-details">No manifest details</p><p class="validation valid">Validated</p></section>"#
        );
    }

    #[test]
    fn test_render_page() {
        let store = store();
        let page = render_page("C.jpg", &summarize(&store), &store).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>C.jpg</title>"));
        assert!(page.contains(r#"<span class="json-key">"active_manifest":</span>"#));
        assert!(page.trim_end().ends_with("</html>"));
    }
}

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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

//! This library turns a C2PA manifest store, as returned by a C2PA SDK, into
//! a summary a person can read: who signed it and when, which app produced
//! it, what was done to the asset, its ingredients and whether validation
//! found any issues.
//!
//! The manifest store is taken as a [`serde_json::Value`]. Both the
//! snake_case spelling of the native SDK and the camelCase spelling of the
//! JavaScript bindings are accepted.
//!
//! # Example: Summarizing a manifest store
//!
//! ```
//! use c2pa_summary::{highlight_value, render_panel, summarize};
//! use serde_json::json;
//!
//! # fn main() -> c2pa_summary::Result<()> {
//! let store = json!({
//!     "active_manifest": "urn:uuid:1",
//!     "manifests": {
//!         "urn:uuid:1": {
//!             "title": "photo.jpg",
//!             "claim_generator": "my_app/1.0 c2pa-rs/0.58.0",
//!             "signature_info": { "issuer": "C2PA Test Signing Cert" },
//!             "assertions": [
//!                 { "label": "c2pa.actions", "data": { "actions": [{ "action": "c2pa.created" }] } }
//!             ]
//!         }
//!     }
//! });
//!
//! let summary = summarize(&store);
//! let details = summary.manifest.as_ref().expect("active manifest");
//! assert_eq!(details.app_name.as_deref(), Some("my app 1.0"));
//! assert_eq!(details.actions, vec!["Created"]);
//! assert!(summary.validation.is_valid());
//!
//! println!("{summary}");
//! let panel = render_panel(&summary);
//! let json = highlight_value(&store)?;
//! # assert!(panel.contains("C2PA Test Signing Cert"));
//! # assert!(json.contains("json-key"));
//! # Ok(())
//! # }
//! ```

pub mod assertions;
mod error;
pub use error::{Error, Result};
pub mod highlight;
pub use highlight::{highlight_json, highlight_value};
mod render;
pub use render::{escape_html, render_page, render_panel, NO_DETAILS};
pub mod store;
pub use store::{ManifestView, StoreView};
mod summary;
pub use summary::{
    app_name, format_signed_at, pluralize, summarize, summarize_str, DisplaySummary,
    IngredientSummary, ManifestDetails,
};
pub mod validation;
pub use validation::{format_code, ValidationIssue, Verdict};

/// The name of this crate.
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

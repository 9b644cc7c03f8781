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

mod view;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::debug;
use serde_json::{json, Map, Value};
use url::Url;

pub use self::view::{print_summary, View};

/// Tool for viewing C2PA manifest stores.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Asset, manifest store .json file or URL to summarize.
    #[clap(value_parser = InputSource::validate)]
    pub source: Option<InputSource>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a C2PA SDK settings file (.json or .toml).
    #[clap(long, global = true, env = "C2PATOOL_SETTINGS")]
    pub settings: Option<PathBuf>,

    #[clap(flatten)]
    pub trust: Trust,

    /// Use verbose output (-vv very verbose output).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// View a manifest store as a summary, JSON, HTML or a tree.
    #[clap(subcommand)]
    View(View),
}

#[derive(Debug, Default, Parser)]
pub struct Trust {
    /// Path or URL to file containing list of trust anchors in PEM format.
    #[clap(long, global = true, env = "C2PATOOL_TRUST_ANCHORS", value_parser = InputSource::validate)]
    pub trust_anchors: Option<InputSource>,

    /// Path or URL to file containing specific manifest signing certificates in PEM format to implicitly trust.
    #[clap(long, global = true, env = "C2PATOOL_ALLOWED_LIST", value_parser = InputSource::validate)]
    pub allowed_list: Option<InputSource>,

    /// Path or URL to file containing configured EKUs in Oid dot notation.
    #[clap(long, global = true, env = "C2PATOOL_TRUST_CONFIG", value_parser = InputSource::validate)]
    pub trust_config: Option<InputSource>,
}

impl Trust {
    fn is_empty(&self) -> bool {
        self.trust_anchors.is_none() && self.allowed_list.is_none() && self.trust_config.is_none()
    }
}

/// A local file or an http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Path(PathBuf),
    Url(Url),
}

impl InputSource {
    pub fn validate(s: &str) -> Result<InputSource> {
        match s.parse::<Url>() {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(InputSource::Url(url)),
            _ => Ok(InputSource::Path(s.into())),
        }
    }

    /// Reads the source as text.
    pub fn resolve(&self) -> Result<String> {
        let data = match self {
            InputSource::Path(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read input from path: {path:?}"))?,
            InputSource::Url(url) => reqwest::blocking::get(url.clone())?
                .error_for_status()?
                .text()
                .with_context(|| format!("Failed to read input from URL: {url}"))?,
        };
        Ok(data)
    }

    /// A short name for the source, used as a page title.
    pub fn name(&self) -> String {
        match self {
            InputSource::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            InputSource::Url(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .unwrap_or_else(|| url.to_string()),
        }
    }
}

/// Loads a C2PA SDK settings file. The format follows the file extension.
pub fn load_settings_file(path: &Path) -> Result<()> {
    let format = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if format != "json" && format != "toml" {
        bail!("Unsupported settings format, expected .json or .toml: {path:?}");
    }

    let settings = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from path: {path:?}"))?;
    c2pa::settings::load_settings_from_str(&settings, &format)
        .with_context(|| format!("Failed to load settings from path: {path:?}"))?;
    debug!("Loaded settings from {path:?}");
    Ok(())
}

/// Builds the trust section of the SDK settings from the command line.
fn trust_settings(trust: &Trust) -> Result<Map<String, Value>> {
    let mut settings = Map::new();
    let sources = [
        ("trust_anchors", &trust.trust_anchors),
        ("allowed_list", &trust.allowed_list),
        ("trust_config", &trust.trust_config),
    ];
    for (key, source) in sources {
        if let Some(source) = source {
            debug!("Using {key} from {source:?}");
            settings.insert(key.to_owned(), Value::String(source.resolve()?));
        }
    }
    Ok(settings)
}

/// Loads any trust lists given on the command line and turns on trust
/// verification in the SDK.
pub fn load_trust_settings(trust: &Trust) -> Result<()> {
    if trust.is_empty() {
        return Ok(());
    }

    let settings = json!({
        "trust": trust_settings(trust)?,
        "verify": { "verify_trust": true },
    });
    c2pa::settings::load_settings_from_str(&settings.to_string(), "json")?;
    Ok(())
}

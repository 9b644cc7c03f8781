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

//! Reading a manifest store from an asset, a .json file or a URL.

use std::{fs, io::Cursor, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use c2pa::{Error, Reader};
use log::{debug, info};
use serde_json::Value;

use crate::commands::InputSource;

const JSON_MIME_TYPE: &str = "application/json";

// Map some errors to strings we expect
fn sdk_error(err: Error) -> anyhow::Error {
    match err {
        Error::FileNotFound(name) => anyhow!("File not found: {name}"),
        Error::UnsupportedType => anyhow!("Unsupported file type"),
        Error::PrereleaseError => anyhow!("Prerelease claim found"),
        _ => err.into(),
    }
}

fn parse_store(json: &str) -> Result<Value> {
    serde_json::from_str(json).context("Failed to parse manifest store JSON")
}

// An asset without C2PA data reads as an empty (null) manifest store.
fn store_from_reader(reader: c2pa::Result<Reader>, name: &str) -> Result<Value> {
    match reader {
        Ok(reader) => parse_store(&reader.json()),
        Err(Error::JumbfNotFound) => {
            info!("No C2PA data found in {name}");
            Ok(Value::Null)
        }
        Err(err) => Err(sdk_error(err)),
    }
}

fn is_json_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Strips any parameters from a `Content-Type` header value.
fn media_type(content_type: &str) -> &str {
    content_type.split(';').next().unwrap_or_default().trim()
}

fn load_from_path(path: &Path) -> Result<Value> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }
    if !path.is_file() {
        bail!("Input path must be a file");
    }

    if is_json_path(path) {
        debug!("Reading manifest store JSON from {}", path.display());
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input from path: {path:?}"))?;
        return parse_store(&json);
    }

    debug!("Reading C2PA data from asset {}", path.display());
    store_from_reader(Reader::from_file(path), &path.display().to_string())
}

fn load_from_url(url: &url::Url) -> Result<Value> {
    debug!("Fetching {url}");
    let response = reqwest::blocking::get(url.clone())
        .with_context(|| format!("Failed to fetch {url}"))?
        .error_for_status()?;

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| media_type(value).to_owned());
    let bytes = response
        .bytes()
        .with_context(|| format!("Failed to read input from URL: {url}"))?;

    let url_path = Path::new(url.path());
    if content_type.as_deref() == Some(JSON_MIME_TYPE) || is_json_path(url_path) {
        let json = std::str::from_utf8(&bytes).context("Manifest store JSON is not UTF-8")?;
        return parse_store(json);
    }

    let format = match content_type {
        // servers often answer with a generic type, so fall back to the URL's extension
        Some(mime) if mime != "application/octet-stream" => mime,
        _ => c2pa::format_from_path(url_path).ok_or_else(|| anyhow!("Unsupported file type"))?,
    };

    debug!("Reading C2PA data as {format}");
    store_from_reader(
        Reader::from_stream(&format, Cursor::new(bytes.to_vec())),
        url.as_str(),
    )
}

/// Loads the manifest store of a source as JSON.
///
/// Assets are read with the C2PA SDK; `.json` files and JSON responses are
/// taken to already hold a manifest store. Assets without C2PA data yield
/// `Value::Null`.
pub fn load_manifest_store(source: &InputSource) -> Result<Value> {
    match source {
        InputSource::Path(path) => load_from_path(path),
        InputSource::Url(url) => load_from_url(url),
    }
}

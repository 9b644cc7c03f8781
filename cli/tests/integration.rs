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

use std::{error::Error, fs, process::Command};

// Add methods on commands
use assert_cmd::prelude::*;
use httpmock::prelude::*;
use predicate::str;
use predicates::prelude::*;
use serde_json::Value;

mod common;
use common::{fixture_path, temp_path, TEST_STORE};

#[test]
fn tool_not_found() -> Result<(), Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("c2paview")?;
    cmd.arg("test/file/notfound.jpg");
    cmd.assert()
        .failure()
        .stderr(str::contains("File not found"));
    Ok(())
}

#[test]
fn tool_missing_source() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("c2paview")?
        .assert()
        .failure()
        .stderr(str::contains("Missing source"));
    Ok(())
}

#[test]
fn tool_summary() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("c2paview")?
        .arg(fixture_path(TEST_STORE))
        .assert()
        .success()
        .stdout(str::contains("Title: CA.jpg\n"))
        .stdout(str::contains("Issued by: C2PA Test Signing Cert\n"))
        .stdout(str::contains("Author: Jane Doe\n"))
        .stdout(str::contains("2 Manifests, 4 Assertions, 2 Ingredients\n"))
        .stdout(str::contains(
            "Validation issues: 2\n   Signing credential › untrusted: signing certificate untrusted",
        ));
    Ok(())
}

#[test]
fn tool_summary_no_manifest() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("c2paview")?
        .arg(fixture_path("no_manifest.json"))
        .assert()
        .success()
        .stdout(str::contains("No manifest details\n0 Manifests\nValidated"));
    Ok(())
}

#[test]
fn tool_summary_json() -> Result<(), Box<dyn Error>> {
    let output = Command::cargo_bin("c2paview")?
        .arg("view")
        .arg("summary")
        .arg(fixture_path(TEST_STORE))
        .arg("--json")
        .output()?;
    assert!(output.status.success());

    let summary: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(summary["manifest"]["title"], "CA.jpg");
    assert_eq!(summary["manifest"]["assertion_count"], 4);
    assert_eq!(summary["validation"]["status"], "issues");
    assert_eq!(summary["validation"]["issues"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn tool_view_manifest() -> Result<(), Box<dyn Error>> {
    let output = Command::cargo_bin("c2paview")?
        .arg("view")
        .arg("manifest")
        .arg(fixture_path(TEST_STORE))
        .output()?;
    assert!(output.status.success());

    let printed: Value = serde_json::from_slice(&output.stdout)?;
    let expected: Value = serde_json::from_str(&fs::read_to_string(fixture_path(TEST_STORE))?)?;
    assert_eq!(printed, expected);
    Ok(())
}

#[test]
fn tool_view_manifest_highlight() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("c2paview")?
        .arg("view")
        .arg("manifest")
        .arg("--highlight")
        .arg(fixture_path(TEST_STORE))
        .assert()
        .success()
        .stdout(str::contains(r#"<span class="json-key">"active_manifest":</span>"#))
        .stdout(str::contains(r#"<span class="json-string">"c2pa.resized"</span>"#));
    Ok(())
}

#[test]
fn tool_view_html() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("report/CA.html");

    Command::cargo_bin("c2paview")?
        .arg("view")
        .arg("html")
        .arg(fixture_path(TEST_STORE))
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let page = fs::read_to_string(&output)?;
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>store.json</title>"));
    assert!(page.contains("<dt>Issued by</dt><dd>C2PA Test Signing Cert</dd>"));
    assert!(page.contains("2 validation issues"));

    // second run needs --force
    Command::cargo_bin("c2paview")?
        .arg("view")
        .arg("html")
        .arg(fixture_path(TEST_STORE))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(str::contains("Output already exists"));

    Command::cargo_bin("c2paview")?
        .arg("view")
        .arg("html")
        .arg(fixture_path("no_manifest.json"))
        .arg("-o")
        .arg(&output)
        .arg("-f")
        .assert()
        .success();
    assert!(fs::read_to_string(&output)?.contains("No manifest details"));
    Ok(())
}

#[test]
fn tool_view_html_stdout() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("c2paview")?
        .arg("view")
        .arg("html")
        .arg(fixture_path(TEST_STORE))
        .assert()
        .success()
        .stdout(str::starts_with("<!DOCTYPE html>"))
        .stdout(str::contains("<li>Color adjustments</li>"));
    Ok(())
}

#[test]
fn tool_view_tree() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("c2paview")?
        .arg("view")
        .arg("tree")
        .arg(fixture_path(TEST_STORE))
        .assert()
        .success()
        .stdout(str::contains("Tree View:"))
        .stdout(str::contains("Assertion:c2pa.actions"))
        .stdout(str::contains(
            "Asset:CAI.jpg, Manifest:contentauth:urn:uuid:a6e95bfb-8ee2-4d8e-9f61-4dd4a4f7c2a4",
        ))
        .stdout(str::contains("Asset:A.jpg"));
    Ok(())
}

// JFIF header with an empty APP0 segment, no C2PA data.
const PLAIN_JPEG: [u8; 22] = [
    0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0x01, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0xff, 0xd9,
];

#[test]
fn tool_asset_without_c2pa_data() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let asset = dir.path().join("plain.jpg");
    fs::write(&asset, PLAIN_JPEG)?;

    Command::cargo_bin("c2paview")?
        .arg(&asset)
        .assert()
        .success()
        .stdout(str::diff("No manifest details\n0 Manifests\nValidated\n"));

    Command::cargo_bin("c2paview")?
        .args(["view", "tree"])
        .arg(&asset)
        .assert()
        .success()
        .stdout(str::contains("Tree View:\n Asset:plain.jpg"));
    Ok(())
}

#[test]
fn tool_unsupported_asset_type() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let asset = dir.path().join("notes.txt");
    fs::write(&asset, "not an image")?;

    Command::cargo_bin("c2paview")?
        .arg(&asset)
        .assert()
        .failure()
        .stderr(str::contains("Unsupported file type"));
    Ok(())
}

#[test]
fn tool_invalid_json() -> Result<(), Box<dyn Error>> {
    Command::cargo_bin("c2paview")?
        .arg(fixture_path("broken.json"))
        .assert()
        .failure()
        .stderr(str::contains("Failed to parse manifest store JSON"));
    Ok(())
}

#[test]
fn tool_unsupported_settings() -> Result<(), Box<dyn Error>> {
    let settings = temp_path("settings.yaml");
    fs::write(&settings, "verify: {}")?;

    Command::cargo_bin("c2paview")?
        .arg(fixture_path(TEST_STORE))
        .arg("--settings")
        .arg(&settings)
        .assert()
        .failure()
        .stderr(str::contains("Unsupported settings format"));
    Ok(())
}

#[test]
fn tool_summary_from_url() -> Result<(), Box<dyn Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/stores/CA.json");
        then.status(200)
            .header("content-type", "application/json")
            .body_from_file(fixture_path(TEST_STORE).to_string_lossy().into_owned());
    });

    Command::cargo_bin("c2paview")?
        .arg(server.url("/stores/CA.json"))
        .assert()
        .success()
        .stdout(str::contains("Title: CA.jpg\n"));

    mock.assert();
    Ok(())
}

#[test]
fn tool_url_not_found() -> Result<(), Box<dyn Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/missing.jpg");
        then.status(404);
    });

    Command::cargo_bin("c2paview")?
        .arg(server.url("/missing.jpg"))
        .assert()
        .failure()
        .stderr(str::contains("404"));

    mock.assert();
    Ok(())
}

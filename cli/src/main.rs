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

#![doc = include_str!("../README.md")]
/// Tool to view C2PA manifest stores
///
/// A file path or URL to an asset or to a manifest store .json file must be provided.
/// If only the source is given, this prints a summary of the active manifest.
use anyhow::{bail, Result};
use clap::Parser;
use env_logger::Env;

mod commands;
use commands::{load_settings_file, load_trust_settings, CliArgs, Commands};
mod source;
mod tree;

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // RUST_LOG takes precedence over -v
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level(args.verbose)))
        .init();

    if let Some(settings) = &args.settings {
        load_settings_file(settings)?;
    }
    load_trust_settings(&args.trust)?;

    match (&args.command, &args.source) {
        (Some(Commands::View(view)), _) => view.execute(),
        (None, Some(source)) => commands::print_summary(source),
        (None, None) => bail!("Missing source; pass an asset, a manifest store .json file or a URL"),
    }
}

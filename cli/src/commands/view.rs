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

use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use c2pa_summary::{highlight_value, render_page, summarize};
use clap::Subcommand;
use log::info;

use crate::{commands::InputSource, source::load_manifest_store, tree::tree};

#[derive(Debug, Subcommand)]
pub enum View {
    /// View a human-readable summary of the active manifest.
    Summary {
        /// Asset, manifest store .json file or URL.
        #[clap(value_parser = InputSource::validate)]
        source: InputSource,

        /// Print the summary as .json instead of text.
        #[clap(long)]
        json: bool,
    },
    /// View the manifest store in .json format.
    Manifest {
        /// Asset, manifest store .json file or URL.
        #[clap(value_parser = InputSource::validate)]
        source: InputSource,

        /// Print the .json as syntax-highlighted HTML.
        #[clap(long)]
        highlight: bool,
    },
    /// Render the summary and the manifest store as an HTML page.
    Html {
        /// Asset, manifest store .json file or URL.
        #[clap(value_parser = InputSource::validate)]
        source: InputSource,

        /// Path to output file, the page is printed if not given.
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// Force overwrite of output if it already exists.
        #[clap(short, long)]
        force: bool,
    },
    /// View a tree diagram of the manifest store.
    Tree {
        /// Asset, manifest store .json file or URL.
        #[clap(value_parser = InputSource::validate)]
        source: InputSource,
    },
}

/// Prints the text summary of a source.
pub fn print_summary(source: &InputSource) -> Result<()> {
    let store = load_manifest_store(source)?;
    println!("{}", summarize(&store));
    Ok(())
}

impl View {
    pub fn execute(&self) -> Result<()> {
        match self {
            View::Summary { source, json } => {
                if !json {
                    return print_summary(source);
                }
                let store = load_manifest_store(source)?;
                println!("{}", summarize(&store).to_json()?);
            }
            View::Manifest { source, highlight } => {
                let store = load_manifest_store(source)?;
                let report = match highlight {
                    true => highlight_value(&store)?,
                    false => serde_json::to_string_pretty(&store)?,
                };
                println!("{report}");
            }
            View::Html {
                source,
                output,
                force,
            } => {
                let store = load_manifest_store(source)?;
                let page = render_page(&source.name(), &summarize(&store), &store)?;

                match output {
                    Some(output) => {
                        if output.exists() && !force {
                            bail!("Output already exists; use -f/force to force write");
                        }
                        if let Some(dir) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                            fs::create_dir_all(dir)?;
                        }
                        fs::write(output, page)
                            .with_context(|| format!("Failed to write output: {output:?}"))?;
                        info!("Wrote {}", output.display());
                    }
                    None => print!("{page}"),
                }
            }
            View::Tree { source } => {
                let store = load_manifest_store(source)?;
                println!("{}", tree(&source.name(), &store));
            }
        }

        Ok(())
    }
}

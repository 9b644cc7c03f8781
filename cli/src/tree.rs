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

use std::collections::HashSet;

use atree::{Arena, Token};
use c2pa_summary::{store::ingredient_manifest, StoreView};
use serde_json::Value;
use treeline::Tree;

fn label_with_instance(assertion: &Value) -> Option<String> {
    let label = assertion.get("label")?.as_str()?;
    Some(match assertion.get("instance").and_then(Value::as_u64) {
        Some(instance) if instance > 1 => format!("{label}__{instance}"),
        _ => label.to_owned(),
    })
}

fn populate_node<'a>(
    tree: &mut Arena<String>,
    store: &StoreView<'a>,
    manifest_label: &'a str,
    current_token: &Token,
    visited: &mut HashSet<&'a str>,
) {
    let Some(manifest) = store.manifest(manifest_label) else {
        return;
    };

    for label in manifest.assertions().iter().filter_map(label_with_instance) {
        current_token.append(tree, format!("Assertion:{label}"));
    }

    for ingredient in manifest.ingredients() {
        let title = ingredient
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("Untitled");
        match ingredient_manifest(ingredient) {
            // each manifest is expanded once, which also stops reference cycles
            Some(label) if visited.insert(label) => {
                let new_token = current_token.append(tree, format!("Asset:{title}, Manifest:{label}"));
                populate_node(tree, store, label, &new_token, visited);
            }
            _ => {
                current_token.append(tree, format!("Asset:{title}"));
            }
        }
    }
}

fn walk_tree(tree: &Arena<String>, token: &Token) -> Tree<String> {
    token.children_tokens(tree).fold(
        Tree::root(tree[*token].data.clone()),
        |mut root, entry_token| {
            if entry_token.is_leaf(tree) {
                root.push(Tree::root(tree[entry_token].data.clone()));
            } else {
                root.push(walk_tree(tree, &entry_token));
            }
            root
        },
    )
}

/// Formats a tree view of a manifest store, starting at the active manifest.
pub fn tree(asset_name: &str, store: &Value) -> String {
    let store = StoreView::new(store);

    match store.active_manifest().and(store.active_label()) {
        Some(manifest_label) => {
            let data = format!("Asset:{asset_name}, Manifest:{manifest_label}");
            let (mut tree, root_token) = Arena::with_data(data);
            populate_node(
                &mut tree,
                &store,
                manifest_label,
                &root_token,
                &mut HashSet::from([manifest_label]),
            );
            format!("Tree View:\n {}", walk_tree(&tree, &root_token))
        }
        None => format!("Tree View:\n Asset:{asset_name}"),
    }
}

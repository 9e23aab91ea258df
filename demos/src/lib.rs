// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Trellis demos.

use std::error::Error;

use trellis_menu::{MenuData, MenuTree};

/// A storefront `headerMenu` payload with a mega menu, a dropdown and a plain link.
pub const STOREFRONT_PAYLOAD: &str = include_str!("../data/header_menu.json");

/// Parses a provider payload and checks it for duplicate or empty identifiers.
///
/// A payload without a `headerMenu` yields an empty tree.
pub fn load_tree(payload: &str) -> Result<MenuTree, Box<dyn Error>> {
    let data: MenuData = serde_json::from_str(payload)?;
    let items = data.header_menu.map(|menu| menu.items).unwrap_or_default();
    Ok(MenuTree::validated(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_payload_loads() {
        let tree = load_tree(STOREFRONT_PAYLOAD).unwrap();
        assert_eq!(tree.top_level().len(), 3);
        assert!(tree.validate().is_empty());
    }

    #[test]
    fn missing_header_menu_is_empty() {
        let tree = load_tree("{}").unwrap();
        assert!(tree.is_empty());
    }
}

// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapes handed over by the menu-data provider.
//!
//! With the `serde` feature these deserialize straight from the storefront
//! response: `{ "headerMenu": { "items": [ { "id", "title", "to", "items", "resource" } ] } }`.
//! Unknown fields are ignored, `headerMenu` may be absent or `null`, and any
//! `items` list may be absent or `null`.

use alloc::vec::Vec;

use crate::{MenuEntry, MenuTree};

/// The header menu as published by the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct HeaderMenu {
    /// Top-level entries in display order.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::entry::null_as_empty")
    )]
    pub items: Vec<MenuEntry>,
}

/// The provider's menu payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct MenuData {
    /// The header menu, if the storefront has one configured.
    #[cfg_attr(feature = "serde", serde(default))]
    pub header_menu: Option<HeaderMenu>,
}

impl MenuData {
    /// Converts the payload into a tree; a missing header menu becomes an empty tree.
    #[must_use]
    pub fn into_tree(self) -> MenuTree {
        MenuTree::from(self.header_menu)
    }
}

impl From<HeaderMenu> for MenuTree {
    fn from(menu: HeaderMenu) -> Self {
        Self::new(menu.items)
    }
}

impl From<Option<HeaderMenu>> for MenuTree {
    fn from(menu: Option<HeaderMenu>) -> Self {
        menu.map(Self::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn missing_header_menu_is_an_empty_tree() {
        assert!(MenuData::default().into_tree().is_empty());
    }

    #[test]
    fn header_menu_items_become_top_level() {
        let data = MenuData {
            header_menu: Some(HeaderMenu {
                items: vec![MenuEntry::new("a", "A", "/a")],
            }),
        };
        assert_eq!(data.into_tree().len(), 1);
    }
}

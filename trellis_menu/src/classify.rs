// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape classification of top-level entries.

use crate::MenuEntry;

/// How a top-level entry is presented on the desktop surface.
///
/// Computed once per entry by [`Classification::of`] from the depth of its
/// subtree and the shape of its immediate children:
///
/// | depth | immediate children        | classification          |
/// |-------|---------------------------|-------------------------|
/// | 1     | none                      | [`PlainLink`]           |
/// | 2     | none carries an image     | [`Dropdown`]            |
/// | 2     | at least one has an image | [`MegaMenu`]            |
/// | > 2   | any                       | [`MegaMenu`]            |
///
/// Deeper trees are never folded into nested dropdowns; they fall back to
/// the mega-menu layout, which shows one extra level under each column.
///
/// [`PlainLink`]: Classification::PlainLink
/// [`Dropdown`]: Classification::Dropdown
/// [`MegaMenu`]: Classification::MegaMenu
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// A navigable link with no flyout.
    PlainLink,
    /// A trigger whose flyout is a simple list of text links.
    Dropdown,
    /// A trigger whose flyout mixes image tiles and text-link columns.
    MegaMenu,
}

impl Classification {
    /// Classifies `entry` by the depth and shape of its subtree.
    ///
    /// ```rust
    /// use trellis_menu::{Classification, MenuEntry, MenuImage};
    ///
    /// let about = MenuEntry::new("about", "About", "/about");
    /// assert_eq!(Classification::of(&about), Classification::PlainLink);
    ///
    /// let shop = MenuEntry::new("shop", "Shop", "/shop").with_children([
    ///     MenuEntry::new("a", "A", "/a").with_image(MenuImage::new("a.jpg")),
    ///     MenuEntry::new("b", "B", "/b"),
    /// ]);
    /// assert_eq!(Classification::of(&shop), Classification::MegaMenu);
    /// ```
    #[must_use]
    pub fn of(entry: &MenuEntry) -> Self {
        match entry.max_depth() {
            1 => Self::PlainLink,
            2 if entry.children.iter().all(|child| child.image().is_none()) => Self::Dropdown,
            _ => Self::MegaMenu,
        }
    }

    /// Returns `true` if the entry opens a flyout panel.
    #[must_use]
    pub fn is_trigger(self) -> bool {
        !matches!(self, Self::PlainLink)
    }
}

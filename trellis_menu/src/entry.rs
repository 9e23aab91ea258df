// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu entries: the nodes of a navigation tree.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

/// A stable identifier for a [`MenuEntry`], unique across the whole tree.
///
/// Identifiers come from the menu-data provider (for example a storefront
/// `gid://` string). Cloning is cheap: the string is shared.
///
/// ```rust
/// use trellis_menu::EntryId;
///
/// let id = EntryId::new("gid://shop/MenuItem/1");
/// assert_eq!(id.as_str(), "gid://shop/MenuItem/1");
/// assert_eq!(id, EntryId::from("gid://shop/MenuItem/1"));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(from = "String", into = "String")
)]
pub struct EntryId(Arc<str>);

impl EntryId {
    /// Creates an identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntryId").field(&&*self.0).finish()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(Arc::from(id))
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl From<EntryId> for String {
    fn from(id: EntryId) -> Self {
        Self::from(&*id.0)
    }
}

/// An image attached to a menu entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct MenuImage {
    /// Source URL of the image.
    pub url: String,
    /// Alternative text, if the provider supplies one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub alt_text: Option<String>,
    /// Intrinsic width in pixels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub width: Option<u32>,
    /// Intrinsic height in pixels.
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: Option<u32>,
}

impl MenuImage {
    /// Creates an image with only a source URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Media attached to a menu entry (the linked collection, page, or product).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MenuResource {
    /// The resource's image, if it has one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<MenuImage>,
}

/// One node of the navigation tree.
///
/// `children` are kept in display order. Leaves have no children.
///
/// On the wire the destination is called `to` and the children `items`;
/// missing or `null` `items` means a leaf.
///
/// Dropping an entry unlinks its descendants iteratively, so a tree of any
/// depth can be released. The derived `Clone`, `PartialEq` and `Debug` still
/// recurse once per level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MenuEntry {
    /// Identifier, unique across the tree.
    pub id: EntryId,
    /// Display label.
    pub title: String,
    /// Navigation destination (route or URL).
    #[cfg_attr(feature = "serde", serde(rename = "to"))]
    pub target: String,
    /// Child entries in display order.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "items", default, deserialize_with = "crate::entry::null_as_empty")
    )]
    pub children: Vec<MenuEntry>,
    /// Optional attached media.
    #[cfg_attr(feature = "serde", serde(default))]
    pub resource: Option<MenuResource>,
}

impl MenuEntry {
    /// Creates a leaf entry with no attached media.
    #[must_use]
    pub fn new(id: impl Into<EntryId>, title: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            target: target.into(),
            children: Vec::new(),
            resource: None,
        }
    }

    /// Appends `children` after any existing ones and returns the entry.
    #[must_use]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        self.children.extend(children);
        self
    }

    /// Attaches `image` as the entry's resource image and returns the entry.
    #[must_use]
    pub fn with_image(mut self, image: MenuImage) -> Self {
        self.resource
            .get_or_insert_with(MenuResource::default)
            .image = Some(image);
        self
    }

    /// Returns `true` if the entry has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the attached image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&MenuImage> {
        self.resource.as_ref().and_then(|r| r.image.as_ref())
    }

    /// Returns `true` if the entry renders as an image tile inside a mega-menu.
    ///
    /// That requires an image **and** no children; an entry with children is
    /// always a text column, whatever its resource.
    #[must_use]
    pub fn is_image_tile(&self) -> bool {
        self.is_leaf() && self.image().is_some()
    }

    /// Returns the number of levels in the subtree rooted at this entry.
    ///
    /// A leaf has depth 1; any other entry has depth `1 + max(child depth)`.
    /// The walk uses an explicit work-list, so arbitrarily deep trees do not
    /// grow the call stack.
    ///
    /// ```rust
    /// use trellis_menu::MenuEntry;
    ///
    /// let leaf = MenuEntry::new("a", "A", "/a");
    /// assert_eq!(leaf.max_depth(), 1);
    ///
    /// let shop = MenuEntry::new("shop", "Shop", "/shop").with_children([
    ///     MenuEntry::new("b", "B", "/b"),
    ///     MenuEntry::new("c", "C", "/c").with_children([MenuEntry::new("d", "D", "/d")]),
    /// ]);
    /// assert_eq!(shop.max_depth(), 3);
    /// ```
    #[must_use]
    pub fn max_depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: SmallVec<[(&Self, usize); 16]> = SmallVec::new();
        pending.push((self, 1));
        while let Some((entry, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(entry.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }
}

impl Drop for MenuEntry {
    fn drop(&mut self) {
        if self.children.iter().all(Self::is_leaf) {
            return;
        }
        // Unlink descendants onto a work-list so each one drops with no children.
        let mut pending = core::mem::take(&mut self.children);
        while let Some(mut entry) = pending.pop() {
            pending.append(&mut entry.children);
        }
    }
}

/// Reads a child list that the provider may send as `null`.
#[cfg(feature = "serde")]
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    use serde::Deserialize as _;

    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(len: usize) -> MenuEntry {
        let mut entry = MenuEntry::new("0", "0", "/");
        for i in 1..len {
            let id = alloc::format!("{i}");
            entry = MenuEntry::new(id.as_str(), id.as_str(), "/").with_children([entry]);
        }
        entry
    }

    #[test]
    fn leaf_depth_is_one() {
        assert_eq!(MenuEntry::new("a", "A", "/a").max_depth(), 1);
    }

    #[test]
    fn depth_follows_deepest_branch() {
        let entry = MenuEntry::new("r", "R", "/").with_children([
            MenuEntry::new("shallow", "S", "/s"),
            chain(4),
            MenuEntry::new("mid", "M", "/m").with_children([MenuEntry::new("x", "X", "/x")]),
        ]);
        assert_eq!(entry.max_depth(), 5);
    }

    #[test]
    fn deep_chain_is_measured_and_dropped_without_recursing() {
        // Deep enough that a recursive walk or drop would overflow the test thread.
        let entry = chain(200_000);
        assert_eq!(entry.max_depth(), 200_000);
        drop(entry);
    }

    #[test]
    fn dropping_an_entry_leaves_its_clone_intact() {
        let parent = MenuEntry::new("p", "P", "/p").with_children([
            chain(3),
            MenuEntry::new("s", "S", "/s"),
            chain(2),
        ]);
        let copy = parent.clone();
        drop(parent);
        assert_eq!(copy.max_depth(), 4);
        assert_eq!(copy.children.len(), 3);
        assert_eq!(copy.children[0].children[0].id.as_str(), "1");
    }

    #[test]
    fn image_tile_requires_leaf() {
        let tile = MenuEntry::new("t", "T", "/t").with_image(MenuImage::new("t.png"));
        assert!(tile.is_image_tile());

        let column = tile.clone().with_children([MenuEntry::new("c", "C", "/c")]);
        assert!(column.image().is_some());
        assert!(!column.is_image_tile());
    }

    #[test]
    fn resource_without_image_is_not_a_tile() {
        let mut entry = MenuEntry::new("t", "T", "/t");
        entry.resource = Some(MenuResource::default());
        assert!(entry.image().is_none());
        assert!(!entry.is_image_tile());
    }

    #[test]
    fn entry_id_display_and_debug() {
        let id = EntryId::from("gid://1");
        assert_eq!(alloc::format!("{id}"), "gid://1");
        assert_eq!(alloc::format!("{id:?}"), "EntryId(\"gid://1\")");
        assert_eq!(String::from(id), "gid://1");
    }
}

// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu tree and its pre-order traversal.

use alloc::vec::Vec;
use core::slice;

use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::{EntryId, MenuEntry, TreeError};

/// The root collection of menu entries, as handed over by the menu-data provider.
///
/// The tree is read-only to this crate. Presentation strategies borrow it for
/// the duration of a render cycle and derive their own UI state; replacing the
/// tree resets that state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuTree {
    items: Vec<MenuEntry>,
}

impl MenuTree {
    /// Creates a tree from top-level entries without validating them.
    ///
    /// Identifier uniqueness is the provider's contract. Use
    /// [`MenuTree::validated`] to reject malformed data instead.
    #[must_use]
    pub fn new(items: Vec<MenuEntry>) -> Self {
        Self { items }
    }

    /// Creates an empty tree.
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a tree, failing fast on the first contract violation.
    ///
    /// ```rust
    /// use trellis_menu::{MenuEntry, MenuTree, TreeError};
    ///
    /// let err = MenuTree::validated(vec![
    ///     MenuEntry::new("a", "A", "/a"),
    ///     MenuEntry::new("b", "B", "/b").with_children([MenuEntry::new("a", "Again", "/again")]),
    /// ])
    /// .unwrap_err();
    /// assert!(matches!(err, TreeError::DuplicateId { .. }));
    /// ```
    pub fn validated(items: Vec<MenuEntry>) -> Result<Self, TreeError> {
        let tree = Self::new(items);
        match tree.validate().into_iter().next() {
            Some(err) => {
                log::debug!("rejecting menu tree: {err}");
                Err(err)
            }
            None => Ok(tree),
        }
    }

    /// Checks identifier uniqueness and non-emptiness, returning every problem found.
    ///
    /// Problems are reported in pre-order. A repeated identifier is reported
    /// once per extra occurrence.
    #[must_use]
    pub fn validate(&self) -> Vec<TreeError> {
        let mut seen: HashSet<&EntryId> = HashSet::new();
        let mut problems = Vec::new();
        for visit in self.iter() {
            let entry = visit.entry;
            if entry.id.is_empty() {
                problems.push(TreeError::EmptyId {
                    title: entry.title.clone(),
                    level: visit.level,
                });
            } else if !seen.insert(&entry.id) {
                problems.push(TreeError::DuplicateId {
                    id: entry.id.clone(),
                });
            }
        }
        problems
    }

    /// Returns the top-level entries in display order.
    #[must_use]
    pub fn top_level(&self) -> &[MenuEntry] {
        &self.items
    }

    /// Returns `true` if there are no top-level entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns a pre-order iterator over every entry in the tree.
    pub fn iter(&self) -> Iter<'_> {
        let mut stack = SmallVec::new();
        stack.push(self.items.iter());
        Iter { stack }
    }

    /// Finds the entry with the given identifier anywhere in the tree.
    #[must_use]
    pub fn find(&self, id: &EntryId) -> Option<&MenuEntry> {
        self.iter().map(|v| v.entry).find(|e| &e.id == id)
    }

    /// Returns `true` if any entry has the given identifier.
    #[must_use]
    pub fn contains(&self, id: &EntryId) -> bool {
        self.find(id).is_some()
    }

    /// Returns the root→entry identifier path for `id`, inclusive at both ends.
    ///
    /// ```rust
    /// use trellis_menu::{EntryId, MenuEntry, MenuTree};
    ///
    /// let tree = MenuTree::new(vec![
    ///     MenuEntry::new("shop", "Shop", "/shop").with_children([
    ///         MenuEntry::new("men", "Men", "/men").with_children([MenuEntry::new("shirts", "Shirts", "/shirts")]),
    ///     ]),
    /// ]);
    /// let path = tree.path_to(&EntryId::from("shirts")).unwrap();
    /// assert_eq!(path, [EntryId::from("shop"), EntryId::from("men"), EntryId::from("shirts")]);
    /// ```
    #[must_use]
    pub fn path_to(&self, id: &EntryId) -> Option<Vec<EntryId>> {
        let mut path: Vec<EntryId> = Vec::new();
        for visit in self.iter() {
            path.truncate(visit.level);
            path.push(visit.entry.id.clone());
            if &visit.entry.id == id {
                return Some(path);
            }
        }
        None
    }
}

impl From<Vec<MenuEntry>> for MenuTree {
    fn from(items: Vec<MenuEntry>) -> Self {
        Self::new(items)
    }
}

impl<'a> IntoIterator for &'a MenuTree {
    type Item = Visit<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An entry reached during traversal, with its nesting level.
#[derive(Copy, Clone, Debug)]
pub struct Visit<'a> {
    /// The entry.
    pub entry: &'a MenuEntry,
    /// Zero-based nesting level; top-level entries are at level 0.
    pub level: usize,
}

/// Pre-order iterator over a [`MenuTree`], see [`MenuTree::iter`].
///
/// Keeps one slice iterator per open level instead of recursing.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    stack: SmallVec<[slice::Iter<'a, MenuEntry>; 8]>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.len().checked_sub(1)?;
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(entry) => {
                    if !entry.children.is_empty() {
                        self.stack.push(entry.children.iter());
                    }
                    return Some(Visit { entry, level });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

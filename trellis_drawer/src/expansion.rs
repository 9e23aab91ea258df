// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node expansion flags for one drawer session.

use hashbrown::HashSet;
use trellis_menu::EntryId;

/// The set of expanded node identifiers.
///
/// Flags are independent: toggling one node never touches another, and any
/// number of siblings may be expanded at once. Identifiers not in the set are
/// collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Expansion {
    expanded: HashSet<EntryId>,
}

impl Expansion {
    /// Creates a fully collapsed set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &EntryId) -> bool {
        self.expanded.contains(id)
    }

    /// Flips the flag of `id` and returns its new value.
    pub fn toggle(&mut self, id: &EntryId) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    /// Returns the number of expanded nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Returns `true` if every node is collapsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Returns an iterator over the expanded identifiers, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &EntryId> + '_ {
        self.expanded.iter()
    }

    /// Collapses every node.
    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}

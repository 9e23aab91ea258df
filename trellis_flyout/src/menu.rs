// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The desktop menu surface: classification snapshot plus flyout state.

use alloc::vec::Vec;

use trellis_menu::layout::Link;
use trellis_menu::{Classification, EntryId, FlyoutPanel, MenuEntry, MenuTree};

use crate::{DismissReason, FlyoutEvent, FlyoutPolicy, FlyoutState, FlyoutTransition};

/// Drives the desktop navigation bar over a borrowed [`MenuTree`].
///
/// Each top-level entry is classified once when the tree is attached. The only
/// interaction state is a [`FlyoutState`], so at most one panel is ever open.
#[derive(Clone, Debug)]
pub struct FlyoutMenu<'t> {
    tree: &'t MenuTree,
    classes: Vec<Classification>,
    state: FlyoutState,
    policy: FlyoutPolicy,
    revision: u64,
}

impl<'t> FlyoutMenu<'t> {
    /// Attaches to `tree` with the default [`FlyoutPolicy`].
    #[must_use]
    pub fn new(tree: &'t MenuTree) -> Self {
        Self::with_policy(tree, FlyoutPolicy::default())
    }

    /// Attaches to `tree` with an explicit policy.
    #[must_use]
    pub fn with_policy(tree: &'t MenuTree, policy: FlyoutPolicy) -> Self {
        Self {
            tree,
            classes: classify_all(tree),
            state: FlyoutState::closed(),
            policy,
            revision: 0,
        }
    }

    /// Swaps in a freshly fetched tree and closes any open panel.
    ///
    /// The old open identifier is not carried over, even if the new tree has
    /// an entry with the same identifier.
    pub fn replace_tree(&mut self, tree: &'t MenuTree) -> FlyoutTransition {
        self.tree = tree;
        self.classes = classify_all(tree);
        self.commit(FlyoutState::closed())
    }

    /// Returns the attached tree.
    #[must_use]
    pub fn tree(&self) -> &'t MenuTree {
        self.tree
    }

    /// Returns the active policy.
    #[must_use]
    pub fn policy(&self) -> &FlyoutPolicy {
        &self.policy
    }

    /// Replaces the policy. The open panel is left as it is.
    pub fn set_policy(&mut self, policy: FlyoutPolicy) {
        self.policy = policy;
    }

    /// Returns `true` if there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &FlyoutState {
        &self.state
    }

    /// Returns the identifier of the open top-level entry.
    #[must_use]
    pub fn open(&self) -> Option<&EntryId> {
        self.state.open()
    }

    /// Returns a counter that bumps whenever the open panel changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the classification of a top-level entry, or `None` if `id` is
    /// not a top-level entry of the attached tree.
    #[must_use]
    pub fn classification(&self, id: &EntryId) -> Option<Classification> {
        classification_in(self.tree, &self.classes, id)
    }

    /// Applies one interaction and reports what changed.
    pub fn handle(&mut self, event: &FlyoutEvent) -> FlyoutTransition {
        let (tree, classes) = (self.tree, &self.classes);
        let next = self
            .state
            .apply(event, &self.policy, |id| classification_in(tree, classes, id));
        if next == self.state
            && let FlyoutEvent::Hover(id) | FlyoutEvent::Focus(id) | FlyoutEvent::Activate(id) =
                event
            && self.classification(id).is_none()
        {
            log::debug!("ignoring {event:?}: `{id}` is not a top-level entry");
        }
        self.commit(next)
    }

    /// Pointer entered the top-level entry `id`.
    pub fn hover(&mut self, id: &EntryId) -> FlyoutTransition {
        self.handle(&FlyoutEvent::Hover(id.clone()))
    }

    /// The top-level entry `id` received keyboard focus.
    pub fn focus(&mut self, id: &EntryId) -> FlyoutTransition {
        self.handle(&FlyoutEvent::Focus(id.clone()))
    }

    /// The top-level entry `id` was clicked or activated from the keyboard.
    ///
    /// For a plain link this changes nothing here; the host follows the link
    /// and reports the navigation through [`FlyoutMenu::dismiss`].
    pub fn activate(&mut self, id: &EntryId) -> FlyoutTransition {
        self.handle(&FlyoutEvent::Activate(id.clone()))
    }

    /// The host asks to close the open panel.
    pub fn dismiss(&mut self, reason: DismissReason) -> FlyoutTransition {
        self.handle(&FlyoutEvent::Dismiss(reason))
    }

    /// Returns the top-level items to render, in display order.
    pub fn items(&self) -> impl Iterator<Item = TopLevelItem<'t>> + '_ {
        self.tree
            .top_level()
            .iter()
            .zip(&self.classes)
            .map(|(entry, &classification)| TopLevelItem {
                entry,
                classification,
                is_open: self.state.is_open(&entry.id),
            })
    }

    /// Returns the one visible panel, or `None` if nothing is open.
    #[must_use]
    pub fn open_panel(&self) -> Option<OpenPanel<'t>> {
        let id = self.state.open()?;
        let (entry, &classification) = self
            .tree
            .top_level()
            .iter()
            .zip(&self.classes)
            .find(|(entry, _)| &entry.id == id)?;
        let panel = FlyoutPanel::with_classification(entry, classification)?;
        Some(OpenPanel { entry, panel })
    }

    fn commit(&mut self, next: FlyoutState) -> FlyoutTransition {
        let transition = FlyoutTransition::between(&self.state, &next);
        if transition.is_change() {
            log::trace!("flyout transition: {transition:?}");
            self.state = next;
            self.revision = self.revision.wrapping_add(1);
        }
        transition
    }
}

/// A top-level entry as the navigation bar renders it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TopLevelItem<'t> {
    /// The entry.
    pub entry: &'t MenuEntry,
    /// How the entry is presented.
    pub classification: Classification,
    /// Whether this entry's panel is the open one.
    pub is_open: bool,
}

impl<'t> TopLevelItem<'t> {
    /// Returns `true` if the item is a trigger rather than a plain link.
    #[must_use]
    pub fn is_trigger(&self) -> bool {
        self.classification.is_trigger()
    }

    /// Returns the item's link (the plain link itself, or the trigger's label and target).
    #[must_use]
    pub fn link(&self) -> Link<'t> {
        Link::from(self.entry)
    }
}

/// The visible flyout: its top-level entry and laid-out contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenPanel<'t> {
    /// The open top-level entry.
    pub entry: &'t MenuEntry,
    /// The panel layout.
    pub panel: FlyoutPanel<'t>,
}

fn classify_all(tree: &MenuTree) -> Vec<Classification> {
    tree.top_level().iter().map(Classification::of).collect()
}

fn classification_in(
    tree: &MenuTree,
    classes: &[Classification],
    id: &EntryId,
) -> Option<Classification> {
    tree.top_level()
        .iter()
        .position(|entry| &entry.id == id)
        .and_then(|idx| classes.get(idx).copied())
}

// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer session state machine and its visible-row projection.

use alloc::vec::Vec;
use core::slice;

use smallvec::SmallVec;
use trellis_menu::{EntryId, MenuEntry, MenuTree};

use crate::Expansion;

/// Whether the menu button can open the drawer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DrawerTrigger {
    /// There is no menu data; the button is shown but does nothing.
    Inert,
    /// The button opens the drawer.
    Active,
}

/// Why the drawer closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// The drawer's close control.
    CloseControl,
    /// A tap on the backdrop outside the drawer.
    Backdrop,
    /// A navigation happened (a leaf link was followed, or the route changed).
    Navigation,
}

/// An interaction delivered by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawerEvent {
    /// The menu button was pressed.
    Open,
    /// The host closed the drawer.
    Close(CloseReason),
    /// The expand/collapse control of a node was pressed.
    Toggle(EntryId),
    /// A node was activated: leaves navigate, nodes with children toggle.
    Activate(EntryId),
}

/// What an event did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawerOutcome<'t> {
    /// Nothing changed.
    Unchanged,
    /// A new session started with every node collapsed.
    Opened,
    /// The session ended and its expansion state was discarded.
    Closed(CloseReason),
    /// One node's flag flipped.
    Toggled {
        /// The node.
        id: EntryId,
        /// Its new flag.
        expanded: bool,
    },
    /// A leaf link was selected. The session has ended; the host should
    /// dismiss the overlay and navigate to `target`.
    Navigate {
        /// The leaf's destination.
        target: &'t str,
    },
}

impl DrawerOutcome<'_> {
    /// Returns `true` unless this is [`DrawerOutcome::Unchanged`].
    #[must_use]
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// The drawer's UI state: closed, or an open session with its expansion set.
///
/// [`DrawerState::apply`] is the whole state machine. It reads the tree only to
/// tell leaves from nodes with children.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    session: Option<Expansion>,
}

impl DrawerState {
    /// A closed drawer.
    #[must_use]
    pub const fn closed() -> Self {
        Self { session: None }
    }

    /// Returns `true` while a session is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the open session's expansion set.
    #[must_use]
    pub fn expansion(&self) -> Option<&Expansion> {
        self.session.as_ref()
    }

    /// Returns `true` if the drawer is open and `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &EntryId) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_expanded(id))
    }

    /// Applies `event` against `tree` and reports what it did.
    ///
    /// - `Open` starts a collapsed session, unless the tree is empty or a
    ///   session is already open.
    /// - `Close` ends the session and discards its expansion state.
    /// - `Toggle` flips one node's flag; leaves and unknown ids are ignored.
    /// - `Activate` on a leaf ends the session and asks for navigation, at any
    ///   depth; on a node with children it toggles.
    ///
    /// Events other than `Open` do nothing while the drawer is closed.
    pub fn apply<'t>(&mut self, event: &DrawerEvent, tree: &'t MenuTree) -> DrawerOutcome<'t> {
        match event {
            DrawerEvent::Open => {
                if self.session.is_some() || tree.is_empty() {
                    return DrawerOutcome::Unchanged;
                }
                self.session = Some(Expansion::new());
                DrawerOutcome::Opened
            }
            DrawerEvent::Close(reason) => match self.session.take() {
                Some(_) => DrawerOutcome::Closed(*reason),
                None => DrawerOutcome::Unchanged,
            },
            DrawerEvent::Toggle(id) => self.toggle(id, tree),
            DrawerEvent::Activate(id) => {
                if self.session.is_none() {
                    return DrawerOutcome::Unchanged;
                }
                match tree.find(id) {
                    Some(entry) if entry.is_leaf() => {
                        self.session = None;
                        DrawerOutcome::Navigate {
                            target: &entry.target,
                        }
                    }
                    Some(_) => self.toggle(id, tree),
                    None => DrawerOutcome::Unchanged,
                }
            }
        }
    }

    fn toggle<'t>(&mut self, id: &EntryId, tree: &MenuTree) -> DrawerOutcome<'t> {
        let Some(session) = self.session.as_mut() else {
            return DrawerOutcome::Unchanged;
        };
        match tree.find(id) {
            Some(entry) if !entry.is_leaf() => DrawerOutcome::Toggled {
                id: id.clone(),
                expanded: session.toggle(id),
            },
            _ => DrawerOutcome::Unchanged,
        }
    }
}

/// One row of the drawer list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Row<'t> {
    /// The entry shown on this row.
    pub entry: &'t MenuEntry,
    /// Nesting level; top-level rows are at 0.
    pub depth: usize,
    /// What the row does when pressed.
    pub kind: RowKind<'t>,
}

/// The two kinds of drawer row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RowKind<'t> {
    /// A leaf: a navigable link that closes the drawer.
    Link {
        /// The destination.
        target: &'t str,
    },
    /// A node with children: an expand/collapse trigger.
    Toggle {
        /// Whether its children are currently shown.
        expanded: bool,
    },
}

/// Drives the mobile drawer over a borrowed [`MenuTree`].
#[derive(Clone, Debug)]
pub struct DrawerMenu<'t> {
    tree: &'t MenuTree,
    state: DrawerState,
    revision: u64,
}

impl<'t> DrawerMenu<'t> {
    /// Attaches to `tree` with the drawer closed.
    #[must_use]
    pub fn new(tree: &'t MenuTree) -> Self {
        Self {
            tree,
            state: DrawerState::closed(),
            revision: 0,
        }
    }

    /// Swaps in a freshly fetched tree and reports what happened to the session.
    ///
    /// - A closed drawer stays closed: [`DrawerOutcome::Unchanged`].
    /// - If the new tree is empty an open session ends:
    ///   [`DrawerOutcome::Closed`] with [`CloseReason::Navigation`].
    /// - Otherwise an open session keeps the drawer open but starts over fully
    ///   collapsed: [`DrawerOutcome::Opened`], or
    ///   [`DrawerOutcome::Unchanged`] if nothing was expanded.
    pub fn replace_tree(&mut self, tree: &'t MenuTree) -> DrawerOutcome<'t> {
        self.tree = tree;
        let outcome = match self.state.expansion().map(Expansion::is_empty) {
            None => DrawerOutcome::Unchanged,
            Some(_) if tree.is_empty() => {
                self.state = DrawerState::closed();
                DrawerOutcome::Closed(CloseReason::Navigation)
            }
            Some(true) => DrawerOutcome::Unchanged,
            Some(false) => {
                self.state = DrawerState {
                    session: Some(Expansion::new()),
                };
                DrawerOutcome::Opened
            }
        };
        if outcome.is_change() {
            log::trace!("drawer tree replaced: {outcome:?}");
            self.revision = self.revision.wrapping_add(1);
        }
        outcome
    }

    /// Returns the attached tree.
    #[must_use]
    pub fn tree(&self) -> &'t MenuTree {
        self.tree
    }

    /// Returns whether the menu button can open the drawer.
    #[must_use]
    pub fn trigger(&self) -> DrawerTrigger {
        if self.tree.is_empty() {
            DrawerTrigger::Inert
        } else {
            DrawerTrigger::Active
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    /// Returns `true` while the drawer is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Returns `true` if the drawer is open and `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &EntryId) -> bool {
        self.state.is_expanded(id)
    }

    /// Returns a counter that bumps whenever the state changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies one interaction and reports what it did.
    pub fn handle(&mut self, event: &DrawerEvent) -> DrawerOutcome<'t> {
        let outcome = self.state.apply(event, self.tree);
        if outcome.is_change() {
            log::trace!("drawer outcome: {outcome:?}");
            self.revision = self.revision.wrapping_add(1);
        } else if matches!(event, DrawerEvent::Open) && self.tree.is_empty() {
            log::debug!("drawer trigger is inert: no menu entries");
        }
        outcome
    }

    /// The menu button was pressed.
    pub fn open(&mut self) -> DrawerOutcome<'t> {
        self.handle(&DrawerEvent::Open)
    }

    /// The host closed the drawer.
    pub fn close(&mut self, reason: CloseReason) -> DrawerOutcome<'t> {
        self.handle(&DrawerEvent::Close(reason))
    }

    /// The expand/collapse control of `id` was pressed.
    pub fn toggle(&mut self, id: &EntryId) -> DrawerOutcome<'t> {
        self.handle(&DrawerEvent::Toggle(id.clone()))
    }

    /// The row for `id` was pressed.
    pub fn activate(&mut self, id: &EntryId) -> DrawerOutcome<'t> {
        self.handle(&DrawerEvent::Activate(id.clone()))
    }

    /// Projects the tree into the rows currently shown, top to bottom.
    ///
    /// Children of a node appear directly below it only while it is expanded.
    /// Returns nothing while the drawer is closed.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<Row<'t>> {
        let Some(expansion) = self.state.expansion() else {
            return Vec::new();
        };
        let mut rows = Vec::new();
        let mut stack: SmallVec<[(slice::Iter<'t, MenuEntry>, usize); 8]> = SmallVec::new();
        stack.push((self.tree.top_level().iter(), 0));
        while let Some((level, depth)) = stack.last_mut() {
            let depth = *depth;
            let Some(entry) = level.next() else {
                stack.pop();
                continue;
            };
            if entry.is_leaf() {
                rows.push(Row {
                    entry,
                    depth,
                    kind: RowKind::Link {
                        target: &entry.target,
                    },
                });
            } else {
                let expanded = expansion.is_expanded(&entry.id);
                rows.push(Row {
                    entry,
                    depth,
                    kind: RowKind::Toggle { expanded },
                });
                if expanded {
                    stack.push((entry.children.iter(), depth + 1));
                }
            }
        }
        rows
    }
}

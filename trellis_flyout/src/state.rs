// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single-open-panel state machine.
//!
//! [`FlyoutState`] is the whole desktop UI state: the identifier of the open
//! top-level entry, or nothing. [`FlyoutState::apply`] is a pure function
//! from `(state, event)` to the next state, so it can be tested without any
//! rendering.
//!
//! ## Minimal example
//!
//! ```
//! use trellis_flyout::{FlyoutEvent, FlyoutPolicy, FlyoutState, FlyoutTransition};
//! use trellis_menu::{Classification, EntryId};
//!
//! // Entries "a" and "b" are triggers; "about" is a plain link.
//! let classify = |id: &EntryId| match id.as_str() {
//!     "a" | "b" => Some(Classification::Dropdown),
//!     "about" => Some(Classification::PlainLink),
//!     _ => None,
//! };
//! let policy = FlyoutPolicy::default();
//!
//! let closed = FlyoutState::closed();
//! let a = closed.apply(&FlyoutEvent::Hover("a".into()), &policy, classify);
//! let b = a.apply(&FlyoutEvent::Hover("b".into()), &policy, classify);
//! assert_eq!(b.open(), Some(&EntryId::from("b")));
//! assert_eq!(
//!     FlyoutTransition::between(&a, &b),
//!     FlyoutTransition::Switched { from: "a".into(), to: "b".into() }
//! );
//! ```

use trellis_menu::{Classification, EntryId};

use crate::{DismissReason, FlyoutPolicy};

/// An interaction delivered by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlyoutEvent {
    /// The pointer entered a top-level entry.
    Hover(EntryId),
    /// A top-level entry received keyboard focus.
    Focus(EntryId),
    /// A top-level entry was clicked or activated from the keyboard.
    Activate(EntryId),
    /// The host asks to close the open panel.
    Dismiss(DismissReason),
}

/// The open top-level entry, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlyoutState {
    open: Option<EntryId>,
}

impl FlyoutState {
    /// A state with no open panel.
    #[must_use]
    pub const fn closed() -> Self {
        Self { open: None }
    }

    /// Returns the identifier of the open top-level entry.
    #[must_use]
    pub fn open(&self) -> Option<&EntryId> {
        self.open.as_ref()
    }

    /// Returns `true` if `id` is the open entry.
    #[must_use]
    pub fn is_open(&self, id: &EntryId) -> bool {
        self.open.as_ref() == Some(id)
    }

    /// Returns `true` if no panel is open.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.open.is_none()
    }

    /// Computes the state after `event`.
    ///
    /// `classify` maps a top-level identifier to its [`Classification`], or
    /// `None` if the identifier is not a top-level entry. Only triggers open;
    /// plain links and unknown identifiers leave the state as it was. Opening
    /// a trigger replaces whatever was open.
    #[must_use]
    pub fn apply<F>(&self, event: &FlyoutEvent, policy: &FlyoutPolicy, classify: F) -> Self
    where
        F: Fn(&EntryId) -> Option<Classification>,
    {
        let (id, allowed) = match event {
            FlyoutEvent::Hover(id) => (id, policy.open_on_hover),
            FlyoutEvent::Focus(id) => (id, policy.open_on_focus),
            FlyoutEvent::Activate(id) => (id, true),
            FlyoutEvent::Dismiss(reason) => {
                return if policy.dismiss.dismisses(*reason) {
                    Self::closed()
                } else {
                    self.clone()
                };
            }
        };
        match classify(id) {
            Some(class) if allowed && class.is_trigger() => Self {
                open: Some(id.clone()),
            },
            _ => self.clone(),
        }
    }
}

/// What changed between two [`FlyoutState`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlyoutTransition {
    /// Nothing changed.
    Unchanged,
    /// A panel opened where none was open.
    Opened(EntryId),
    /// The open panel closed.
    Closed(EntryId),
    /// One panel replaced another.
    Switched {
        /// The panel that closed.
        from: EntryId,
        /// The panel that opened.
        to: EntryId,
    },
}

impl FlyoutTransition {
    /// Describes the change from `before` to `after`.
    #[must_use]
    pub fn between(before: &FlyoutState, after: &FlyoutState) -> Self {
        match (&before.open, &after.open) {
            (None, None) => Self::Unchanged,
            (None, Some(to)) => Self::Opened(to.clone()),
            (Some(from), None) => Self::Closed(from.clone()),
            (Some(from), Some(to)) if from == to => Self::Unchanged,
            (Some(from), Some(to)) => Self::Switched {
                from: from.clone(),
                to: to.clone(),
            },
        }
    }

    /// Returns `true` unless this is [`FlyoutTransition::Unchanged`].
    #[must_use]
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

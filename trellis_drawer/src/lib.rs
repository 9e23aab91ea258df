// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_drawer --heading-base-level=0

//! Trellis Drawer: the mobile navigation drawer's accordion state.
//!
//! Below the desktop breakpoint the whole [`MenuTree`](trellis_menu::MenuTree)
//! is shown as a vertical list inside an overlay. Every node with children is
//! an expand/collapse trigger; every leaf is a link that closes the overlay.
//! Unlike the desktop flyout there is no exclusivity: any number of sibling
//! subtrees may be expanded at once.
//!
//! - [`Expansion`]: the set of expanded identifiers for one session.
//! - [`DrawerState`]: closed, or an open session; [`DrawerState::apply`] is
//!   the state machine.
//! - [`DrawerMenu`]: a controller over a borrowed tree, with the
//!   [`DrawerTrigger`] state and a [`visible_rows`](DrawerMenu::visible_rows)
//!   projection for rendering.
//!
//! A session starts fully collapsed. Closing the drawer, for any
//! [`CloseReason`] or by following a leaf link, discards the session's
//! expansion state; it is never persisted or shared with the desktop surface.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_drawer::{DrawerMenu, DrawerOutcome, DrawerTrigger};
//! use trellis_menu::{EntryId, MenuEntry, MenuTree};
//!
//! let tree = MenuTree::new(vec![
//!     MenuEntry::new("shop", "Shop", "/shop").with_children([
//!         MenuEntry::new("men", "Men", "/men")
//!             .with_children([MenuEntry::new("shirts", "Shirts", "/shirts")]),
//!     ]),
//! ]);
//! let mut drawer = DrawerMenu::new(&tree);
//! assert_eq!(drawer.trigger(), DrawerTrigger::Active);
//!
//! drawer.open();
//! drawer.toggle(&EntryId::from("shop"));
//! drawer.toggle(&EntryId::from("men"));
//! assert_eq!(drawer.visible_rows().len(), 3);
//!
//! // Following a leaf link ends the session.
//! let outcome = drawer.activate(&EntryId::from("shirts"));
//! assert_eq!(outcome, DrawerOutcome::Navigate { target: "/shirts" });
//! assert!(!drawer.is_open());
//!
//! // Reopening starts collapsed.
//! drawer.open();
//! assert!(!drawer.is_expanded(&EntryId::from("shop")));
//! ```
//!
//! ## Empty menus
//!
//! With no entries the trigger is [`DrawerTrigger::Inert`] and
//! [`DrawerEvent::Open`] does nothing.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod drawer;
mod expansion;

pub use drawer::{
    CloseReason, DrawerEvent, DrawerMenu, DrawerOutcome, DrawerState, DrawerTrigger, Row, RowKind,
};
pub use expansion::Expansion;

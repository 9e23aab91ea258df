// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_flyout --heading-base-level=0

//! Trellis Flyout: the desktop navigation bar's single-open-panel state.
//!
//! Each top-level entry of a [`MenuTree`](trellis_menu::MenuTree) is either a
//! plain link or a trigger that owns a flyout panel (a dropdown or a
//! mega-menu, see [`Classification`](trellis_menu::Classification)). This
//! crate tracks which panel is open. The state is a single optional
//! identifier, so opening one panel implicitly closes any other: at most one
//! panel is visible at a time.
//!
//! - [`FlyoutState`]: the open identifier, with a pure
//!   [`apply`](FlyoutState::apply) transition function.
//! - [`FlyoutEvent`]: hover, focus, activation, or a [`DismissReason`].
//! - [`FlyoutPolicy`] / [`DismissPolicy`]: which events open and which dismiss.
//! - [`FlyoutMenu`]: a controller over a borrowed tree that classifies the
//!   top-level entries once and projects [`TopLevelItem`]s and the single
//!   [`OpenPanel`] for rendering.
//!
//! Selecting a plain link never changes the open panel. The host follows the
//! link and reports the navigation as [`DismissReason::Navigation`].
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_flyout::{DismissReason, FlyoutMenu, FlyoutTransition};
//! use trellis_menu::{EntryId, MenuEntry, MenuTree};
//!
//! let tree = MenuTree::new(vec![
//!     MenuEntry::new("shop", "Shop", "/shop").with_children([MenuEntry::new("a", "A", "/a")]),
//!     MenuEntry::new("help", "Help", "/help").with_children([MenuEntry::new("faq", "FAQ", "/faq")]),
//!     MenuEntry::new("about", "About", "/about"),
//! ]);
//! let mut menu = FlyoutMenu::new(&tree);
//!
//! menu.hover(&EntryId::from("shop"));
//! menu.hover(&EntryId::from("help"));
//! assert_eq!(menu.open(), Some(&EntryId::from("help")));
//! assert_eq!(menu.items().filter(|item| item.is_open).count(), 1);
//!
//! // Plain links carry no panel.
//! assert_eq!(menu.activate(&EntryId::from("about")), FlyoutTransition::Unchanged);
//!
//! menu.dismiss(DismissReason::PointerLeave);
//! assert!(menu.open_panel().is_none());
//! ```
//!
//! ## Empty menus
//!
//! An empty tree is not an error: [`FlyoutMenu::is_empty`] is `true`, there
//! are no items, and no event can open anything.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod menu;
mod policy;
mod state;

pub use menu::{FlyoutMenu, OpenPanel, TopLevelItem};
pub use policy::{DismissPolicy, DismissReason, FlyoutPolicy};
pub use state::{FlyoutEvent, FlyoutState, FlyoutTransition};

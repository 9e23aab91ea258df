// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_menu --heading-base-level=0

//! Trellis Menu: the storefront navigation tree and its shape classifier.
//!
//! This crate holds the part of a site-navigation menu that carries real
//! decisions: given an arbitrarily nested tree of menu entries, how is each
//! top-level entry presented? It does **not** fetch menu data, render markup,
//! or track interaction state. The presentation strategies in
//! `trellis_flyout` (desktop) and `trellis_drawer` (mobile) build on it.
//!
//! The core types are:
//!
//! - [`MenuEntry`]: one node with an [`EntryId`], a title, a navigation
//!   target, ordered children, and optional media ([`MenuResource`]).
//! - [`MenuTree`]: the read-only root collection supplied by the provider,
//!   with pre-order traversal, lookup, and optional validation.
//! - [`Classification`]: plain link, dropdown, or mega-menu, computed from
//!   [`MenuEntry::max_depth`] and the shape of an entry's immediate children.
//! - [`FlyoutPanel`]: the borrowed layout of a dropdown or mega-menu panel.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_menu::{Classification, FlyoutPanel, MenuEntry, MenuImage, MenuTree};
//!
//! let tree = MenuTree::new(vec![
//!     MenuEntry::new("shop", "Shop", "/collections/all").with_children([
//!         MenuEntry::new("new", "New In", "/collections/new")
//!             .with_image(MenuImage::new("https://cdn.example/new.jpg")),
//!         MenuEntry::new("sale", "Sale", "/collections/sale"),
//!     ]),
//!     MenuEntry::new("help", "Help", "/pages/help").with_children([
//!         MenuEntry::new("shipping", "Shipping", "/pages/shipping"),
//!         MenuEntry::new("returns", "Returns", "/pages/returns"),
//!     ]),
//!     MenuEntry::new("about", "About", "/pages/about"),
//! ]);
//!
//! let kinds: Vec<Classification> = tree.top_level().iter().map(Classification::of).collect();
//! assert_eq!(
//!     kinds,
//!     [Classification::MegaMenu, Classification::Dropdown, Classification::PlainLink]
//! );
//!
//! // Only triggers have a panel.
//! assert!(FlyoutPanel::for_entry(&tree.top_level()[0]).is_some());
//! assert!(FlyoutPanel::for_entry(&tree.top_level()[2]).is_none());
//! ```
//!
//! ## Provider contract
//!
//! Identifiers must be unique across the whole tree. This crate trusts the
//! provider by default ([`MenuTree::new`]); hosts that prefer to fail fast can
//! use [`MenuTree::validated`], which returns a [`TreeError`].
//!
//! ## Features
//!
//! - `std` (default): forwards to dependencies.
//! - `serde`: deserialize [`MenuData`] / [`HeaderMenu`] from the storefront
//!   payload (`headerMenu.items`, entries with `to` and `items`).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod classify;
mod entry;
mod error;
pub mod layout;
mod provider;
mod tree;

pub use classify::Classification;
pub use entry::{EntryId, MenuEntry, MenuImage, MenuResource};
pub use error::TreeError;
pub use layout::FlyoutPanel;
pub use provider::{HeaderMenu, MenuData};
pub use tree::{Iter, MenuTree, Visit};

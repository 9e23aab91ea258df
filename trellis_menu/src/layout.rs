// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flyout panel layouts for dropdown and mega-menu entries.
//!
//! These are borrowed views over the tree. A host walks them to emit markup;
//! nothing here knows about styling or animation beyond the per-block
//! `stagger` position.

use alloc::vec::Vec;

use crate::{Classification, EntryId, MenuEntry, MenuImage};

/// A navigable link: the minimum a host needs to render an anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Link<'a> {
    /// Identifier of the entry the link was made from.
    pub id: &'a EntryId,
    /// Display label.
    pub title: &'a str,
    /// Navigation destination.
    pub target: &'a str,
}

impl<'a> From<&'a MenuEntry> for Link<'a> {
    fn from(entry: &'a MenuEntry) -> Self {
        Self {
            id: &entry.id,
            title: &entry.title,
            target: &entry.target,
        }
    }
}

/// A dropdown flyout: the entry's immediate children as text links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownPanel<'a> {
    /// Links in display order.
    pub links: Vec<Link<'a>>,
}

/// One block of a mega-menu flyout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MegaMenuBlock<'a> {
    /// A leaf child with an image.
    ImageTile {
        /// Zero-based display position, used to stagger entrance animations.
        stagger: usize,
        /// The tile's link.
        link: Link<'a>,
        /// The tile's image.
        image: &'a MenuImage,
    },
    /// A child rendered as a heading link with its own children listed beneath.
    ///
    /// Only one level is listed; deeper descendants are not expanded.
    Column {
        /// Zero-based display position, used to stagger entrance animations.
        stagger: usize,
        /// The column heading.
        heading: Link<'a>,
        /// The heading entry's children, in display order.
        links: Vec<Link<'a>>,
    },
}

impl MegaMenuBlock<'_> {
    /// Returns the block's display position.
    #[must_use]
    pub fn stagger(&self) -> usize {
        match self {
            Self::ImageTile { stagger, .. } | Self::Column { stagger, .. } => *stagger,
        }
    }
}

/// A mega-menu flyout: one block per immediate child.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MegaMenuPanel<'a> {
    /// Blocks in display order.
    pub blocks: Vec<MegaMenuBlock<'a>>,
}

/// The flyout panel of a trigger entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlyoutPanel<'a> {
    /// See [`DropdownPanel`].
    Dropdown(DropdownPanel<'a>),
    /// See [`MegaMenuPanel`].
    MegaMenu(MegaMenuPanel<'a>),
}

impl<'a> FlyoutPanel<'a> {
    /// Lays out the panel for `entry`, or returns `None` for a plain link.
    #[must_use]
    pub fn for_entry(entry: &'a MenuEntry) -> Option<Self> {
        Self::with_classification(entry, Classification::of(entry))
    }

    /// Lays out the panel for `entry` using an already computed classification.
    #[must_use]
    pub fn with_classification(
        entry: &'a MenuEntry,
        classification: Classification,
    ) -> Option<Self> {
        match classification {
            Classification::PlainLink => None,
            Classification::Dropdown => Some(Self::Dropdown(DropdownPanel {
                links: entry.children.iter().map(Link::from).collect(),
            })),
            Classification::MegaMenu => Some(Self::MegaMenu(MegaMenuPanel {
                blocks: entry
                    .children
                    .iter()
                    .enumerate()
                    .map(|(stagger, child)| mega_menu_block(stagger, child))
                    .collect(),
            })),
        }
    }
}

fn mega_menu_block(stagger: usize, child: &MenuEntry) -> MegaMenuBlock<'_> {
    match child.image() {
        Some(image) if child.is_leaf() => MegaMenuBlock::ImageTile {
            stagger,
            link: Link::from(child),
            image,
        },
        _ => MegaMenuBlock::Column {
            stagger,
            heading: Link::from(child),
            links: child.children.iter().map(Link::from).collect(),
        },
    }
}

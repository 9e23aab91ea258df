// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract violations in provider data.

use alloc::string::String;
use core::fmt;

use crate::EntryId;

/// A problem found while validating a [`MenuTree`](crate::MenuTree).
///
/// The provider owns well-formedness; these errors only exist so a host can
/// choose to reject a bad tree up front with
/// [`MenuTree::validated`](crate::MenuTree::validated) instead of rendering it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// Two entries share the same identifier.
    DuplicateId {
        /// The repeated identifier.
        id: EntryId,
    },
    /// An entry has an empty identifier.
    EmptyId {
        /// Title of the offending entry, to help locate it.
        title: String,
        /// Zero-based nesting level of the entry (0 for top-level entries).
        level: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "menu entry id `{id}` appears more than once"),
            Self::EmptyId { title, level } => {
                write!(f, "menu entry {title:?} at level {level} has an empty id")
            }
        }
    }
}

impl core::error::Error for TreeError {}

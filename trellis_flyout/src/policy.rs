// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which host events open and dismiss the flyout.

/// Why the host asks to dismiss the open flyout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// The pointer left the whole menu surface (triggers and panel).
    PointerLeave,
    /// A click landed outside the menu surface.
    OutsideClick,
    /// The escape key was pressed while focus was inside the menu.
    Escape,
    /// Keyboard focus left the menu surface.
    Blur,
    /// A navigation happened (a panel link was followed, or the route changed).
    Navigation,
    /// An explicit close control. Always honored.
    Explicit,
}

/// The set of [`DismissReason`]s that close the open flyout.
///
/// [`DismissReason::Explicit`] always closes and has no switch here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DismissPolicy {
    /// Honor [`DismissReason::PointerLeave`].
    pub pointer_leave: bool,
    /// Honor [`DismissReason::OutsideClick`].
    pub outside_click: bool,
    /// Honor [`DismissReason::Escape`].
    pub escape: bool,
    /// Honor [`DismissReason::Blur`].
    pub blur: bool,
    /// Honor [`DismissReason::Navigation`].
    pub navigation: bool,
}

impl DismissPolicy {
    /// Every reason dismisses.
    pub const ALL: Self = Self {
        pointer_leave: true,
        outside_click: true,
        escape: true,
        blur: true,
        navigation: true,
    };

    /// Only explicit close controls dismiss. Useful for click-to-open menus
    /// that should stay open while the pointer wanders.
    pub const EXPLICIT_ONLY: Self = Self {
        pointer_leave: false,
        outside_click: false,
        escape: false,
        blur: false,
        navigation: false,
    };

    /// Returns `true` if `reason` closes the flyout under this policy.
    #[must_use]
    pub fn dismisses(&self, reason: DismissReason) -> bool {
        match reason {
            DismissReason::PointerLeave => self.pointer_leave,
            DismissReason::OutsideClick => self.outside_click,
            DismissReason::Escape => self.escape,
            DismissReason::Blur => self.blur,
            DismissReason::Navigation => self.navigation,
            DismissReason::Explicit => true,
        }
    }
}

impl Default for DismissPolicy {
    fn default() -> Self {
        Self::ALL
    }
}

/// Flyout behavior switches.
///
/// Activation (click, Enter, Space) on a trigger always opens its panel.
/// Hover and focus can be turned off for click-to-open menus.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlyoutPolicy {
    /// Open a trigger's panel when the pointer hovers it.
    pub open_on_hover: bool,
    /// Open a trigger's panel when it receives keyboard focus.
    pub open_on_focus: bool,
    /// Which reasons dismiss the open panel.
    pub dismiss: DismissPolicy,
}

impl Default for FlyoutPolicy {
    fn default() -> Self {
        Self {
            open_on_hover: true,
            open_on_focus: true,
            dismiss: DismissPolicy::ALL,
        }
    }
}

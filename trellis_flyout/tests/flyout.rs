// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `trellis_flyout` crate.
//!
//! These drive a [`FlyoutMenu`] over a small storefront tree and check the
//! single-open-panel invariant after every step.

use trellis_flyout::{DismissPolicy, DismissReason, FlyoutMenu, FlyoutPolicy, FlyoutTransition};
use trellis_menu::layout::MegaMenuBlock;
use trellis_menu::{Classification, EntryId, FlyoutPanel, MenuEntry, MenuImage, MenuTree};

fn storefront() -> MenuTree {
    MenuTree::new(vec![
        MenuEntry::new("shop", "Shop", "/collections/all").with_children([
            MenuEntry::new("new", "New In", "/collections/new")
                .with_image(MenuImage::new("new.jpg")),
            MenuEntry::new("men", "Men", "/collections/men")
                .with_children([MenuEntry::new("shirts", "Shirts", "/collections/shirts")]),
        ]),
        MenuEntry::new("help", "Help", "/pages/help").with_children([
            MenuEntry::new("shipping", "Shipping", "/pages/shipping"),
            MenuEntry::new("returns", "Returns", "/pages/returns"),
        ]),
        MenuEntry::new("journal", "Journal", "/blogs/journal").with_children([
            MenuEntry::new("stories", "Stories", "/blogs/stories"),
        ]),
        MenuEntry::new("about", "About", "/pages/about"),
    ])
}

fn id(s: &str) -> EntryId {
    EntryId::from(s)
}

fn assert_single_open(menu: &FlyoutMenu<'_>) {
    let open: Vec<&str> = menu
        .items()
        .filter(|item| item.is_open)
        .map(|item| item.entry.id.as_str())
        .collect();
    assert!(open.len() <= 1, "more than one open panel: {open:?}");
    assert_eq!(open.first().copied(), menu.open().map(EntryId::as_str));
    assert_eq!(
        menu.open_panel().map(|p| p.entry.id.as_str()),
        menu.open().map(EntryId::as_str)
    );
}

#[test]
fn items_follow_classification() {
    let tree = storefront();
    let menu = FlyoutMenu::new(&tree);
    let kinds: Vec<(&str, Classification)> = menu
        .items()
        .map(|item| (item.entry.id.as_str(), item.classification))
        .collect();
    assert_eq!(
        kinds,
        [
            ("shop", Classification::MegaMenu),
            ("help", Classification::Dropdown),
            ("journal", Classification::Dropdown),
            ("about", Classification::PlainLink),
        ]
    );
    assert!(menu.items().all(|item| !item.is_open));
    assert!(menu.open_panel().is_none());
}

#[test]
fn opening_b_after_a_closes_a_for_every_pair() {
    let tree = storefront();
    let triggers = ["shop", "help", "journal"];
    for a in triggers {
        for b in triggers {
            if a == b {
                continue;
            }
            let mut menu = FlyoutMenu::new(&tree);
            assert_eq!(menu.hover(&id(a)), FlyoutTransition::Opened(id(a)));
            assert_single_open(&menu);
            assert_eq!(
                menu.focus(&id(b)),
                FlyoutTransition::Switched {
                    from: id(a),
                    to: id(b)
                }
            );
            assert_single_open(&menu);
            assert_eq!(menu.open(), Some(&id(b)));
        }
    }
}

#[test]
fn plain_link_activation_keeps_open_panel() {
    let tree = storefront();
    let mut menu = FlyoutMenu::new(&tree);
    menu.activate(&id("shop"));
    let revision = menu.revision();

    assert_eq!(menu.activate(&id("about")), FlyoutTransition::Unchanged);
    assert_eq!(menu.hover(&id("about")), FlyoutTransition::Unchanged);
    assert_eq!(menu.open(), Some(&id("shop")));
    assert_eq!(menu.revision(), revision);

    // Following the link is reported as navigation, which closes the panel.
    assert_eq!(
        menu.dismiss(DismissReason::Navigation),
        FlyoutTransition::Closed(id("shop"))
    );
    assert_single_open(&menu);
}

#[test]
fn nested_ids_do_not_open_panels() {
    let tree = storefront();
    let mut menu = FlyoutMenu::new(&tree);
    assert_eq!(menu.hover(&id("men")), FlyoutTransition::Unchanged);
    assert_eq!(menu.classification(&id("men")), None);
    assert!(menu.open().is_none());
}

#[test]
fn open_panel_matches_the_open_entry() {
    let tree = storefront();
    let mut menu = FlyoutMenu::new(&tree);

    menu.hover(&id("help"));
    let Some(open) = menu.open_panel() else {
        panic!("help should be open");
    };
    let FlyoutPanel::Dropdown(dropdown) = open.panel else {
        panic!("help is a dropdown");
    };
    let targets: Vec<&str> = dropdown.links.iter().map(|l| l.target).collect();
    assert_eq!(targets, ["/pages/shipping", "/pages/returns"]);

    menu.hover(&id("shop"));
    let Some(open) = menu.open_panel() else {
        panic!("shop should be open");
    };
    let FlyoutPanel::MegaMenu(mega) = open.panel else {
        panic!("shop is a mega-menu");
    };
    assert!(matches!(mega.blocks[0], MegaMenuBlock::ImageTile { .. }));
    assert!(matches!(mega.blocks[1], MegaMenuBlock::Column { .. }));
}

#[test]
fn dismissal_policy_controls_pointer_leave() {
    let tree = storefront();
    let policy = FlyoutPolicy {
        dismiss: DismissPolicy {
            pointer_leave: false,
            ..DismissPolicy::ALL
        },
        ..FlyoutPolicy::default()
    };
    let mut menu = FlyoutMenu::with_policy(&tree, policy);
    menu.activate(&id("shop"));

    assert_eq!(
        menu.dismiss(DismissReason::PointerLeave),
        FlyoutTransition::Unchanged
    );
    assert_eq!(
        menu.dismiss(DismissReason::Explicit),
        FlyoutTransition::Closed(id("shop"))
    );
    assert_eq!(
        menu.dismiss(DismissReason::Explicit),
        FlyoutTransition::Unchanged
    );
}

#[test]
fn replacing_the_tree_resets_state() {
    let first = storefront();
    let second = storefront();
    let mut menu = FlyoutMenu::new(&first);
    menu.hover(&id("shop"));

    assert_eq!(
        menu.replace_tree(&second),
        FlyoutTransition::Closed(id("shop"))
    );
    assert!(menu.open().is_none());
    assert_eq!(menu.replace_tree(&first), FlyoutTransition::Unchanged);
}

#[test]
fn empty_tree_renders_nothing_and_ignores_events() {
    let tree = MenuTree::empty();
    let mut menu = FlyoutMenu::new(&tree);
    assert!(menu.is_empty());
    assert_eq!(menu.items().count(), 0);
    assert_eq!(menu.hover(&id("shop")), FlyoutTransition::Unchanged);
    assert_eq!(menu.dismiss(DismissReason::Explicit), FlyoutTransition::Unchanged);
    assert_eq!(menu.revision(), 0);
}

#[test]
fn revision_counts_only_real_changes() {
    let tree = storefront();
    let mut menu = FlyoutMenu::new(&tree);
    menu.hover(&id("shop"));
    menu.hover(&id("shop"));
    menu.focus(&id("shop"));
    assert_eq!(menu.revision(), 1);
    menu.hover(&id("help"));
    menu.dismiss(DismissReason::Blur);
    assert_eq!(menu.revision(), 3);
}

// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Storefront menu walkthrough.
//!
//! Load a `headerMenu` payload, then drive both the desktop flyout and the
//! mobile drawer through a short interaction script, printing what a host
//! would render after each step.
//!
//! Run:
//! - `cargo run -p trellis_demos --example storefront_menu`

use std::error::Error;

use trellis_drawer::{CloseReason, DrawerMenu, RowKind};
use trellis_flyout::{DismissReason, FlyoutMenu};
use trellis_menu::layout::MegaMenuBlock;
use trellis_demos::{STOREFRONT_PAYLOAD, load_tree};
use trellis_menu::{EntryId, FlyoutPanel, MenuTree};

fn main() -> Result<(), Box<dyn Error>> {
    let tree = load_tree(STOREFRONT_PAYLOAD)?;

    desktop(&tree);
    println!();
    mobile(&tree);
    Ok(())
}

fn desktop(tree: &MenuTree) {
    println!("== desktop");
    let mut menu = FlyoutMenu::new(tree);
    for item in menu.items() {
        println!("{:<8} {:?}", item.entry.title, item.classification);
    }

    let shop = EntryId::from("gid://shop/MenuItem/shop");
    let help = EntryId::from("gid://shop/MenuItem/help");
    let about = EntryId::from("gid://shop/MenuItem/about");

    println!("hover Shop: {:?}", menu.hover(&shop));
    print_panel(&menu);
    println!("focus Help: {:?}", menu.focus(&help));
    print_panel(&menu);
    println!("activate About: {:?}", menu.activate(&about));
    println!("pointer leaves: {:?}", menu.dismiss(DismissReason::PointerLeave));
    print_panel(&menu);
}

fn print_panel(menu: &FlyoutMenu<'_>) {
    let Some(open) = menu.open_panel() else {
        println!("  (no panel)");
        return;
    };
    println!("  panel for {}", open.entry.title);
    match open.panel {
        FlyoutPanel::Dropdown(dropdown) => {
            for link in dropdown.links {
                println!("    {} -> {}", link.title, link.target);
            }
        }
        FlyoutPanel::MegaMenu(mega) => {
            for block in mega.blocks {
                match block {
                    MegaMenuBlock::ImageTile {
                        stagger,
                        link,
                        image,
                    } => println!("    [{stagger}] tile {} ({})", link.title, image.url),
                    MegaMenuBlock::Column {
                        stagger,
                        heading,
                        links,
                    } => {
                        println!("    [{stagger}] column {}", heading.title);
                        for link in links {
                            println!("        {} -> {}", link.title, link.target);
                        }
                    }
                }
            }
        }
    }
}

fn mobile(tree: &MenuTree) {
    println!("== mobile");
    let mut drawer = DrawerMenu::new(tree);
    println!("trigger: {:?}", drawer.trigger());
    println!("open: {:?}", drawer.open());

    for id in [
        "gid://shop/MenuItem/shop",
        "gid://shop/MenuItem/men",
        "gid://shop/MenuItem/help",
    ] {
        println!("toggle: {:?}", drawer.toggle(&EntryId::from(id)));
    }
    print_rows(&drawer);

    let raw = EntryId::from("gid://shop/MenuItem/men-denim-raw");
    println!("activate hidden leaf: {:?}", drawer.activate(&raw));
    println!("drawer open: {}", drawer.is_open());

    println!("reopen: {:?}", drawer.open());
    print_rows(&drawer);
    println!("backdrop: {:?}", drawer.close(CloseReason::Backdrop));
}

fn print_rows(drawer: &DrawerMenu<'_>) {
    for row in drawer.visible_rows() {
        let indent = "  ".repeat(row.depth + 1);
        match row.kind {
            RowKind::Link { target } => println!("{indent}{} -> {target}", row.entry.title),
            RowKind::Toggle { expanded } => {
                let marker = if expanded { "v" } else { ">" };
                println!("{indent}{marker} {}", row.entry.title);
            }
        }
    }
}

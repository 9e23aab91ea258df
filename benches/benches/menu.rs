// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use std::time::Duration;
use trellis_drawer::DrawerMenu;
use trellis_flyout::FlyoutMenu;
use trellis_menu::{Classification, EntryId, MenuEntry, MenuTree};

/// `width` top-level entries, each a full `fanout`-ary subtree of `depth` levels.
fn wide_tree(width: usize, fanout: usize, depth: usize) -> MenuTree {
    fn subtree(prefix: &str, fanout: usize, depth: usize) -> MenuEntry {
        let entry = MenuEntry::new(prefix, prefix, format!("/{prefix}"));
        if depth <= 1 {
            return entry;
        }
        entry.with_children(
            (0..fanout).map(|i| subtree(&format!("{prefix}.{i}"), fanout, depth - 1)),
        )
    }
    MenuTree::new(
        (0..width)
            .map(|i| subtree(&format!("n{i}"), fanout, depth))
            .collect(),
    )
}

/// A single chain `len` entries deep.
fn chain(len: usize) -> MenuEntry {
    let mut entry = MenuEntry::new(format!("c{len}"), "leaf", "/leaf");
    for i in (0..len - 1).rev() {
        entry = MenuEntry::new(format!("c{i}"), "link", "/link").with_children([entry]);
    }
    entry
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu/classify");

    for fanout in [2usize, 4, 8] {
        let tree = wide_tree(8, fanout, 4);
        group.throughput(Throughput::Elements(tree.iter().count() as u64));
        group.bench_with_input(BenchmarkId::new("wide", fanout), &tree, |b, tree| {
            b.iter(|| {
                for entry in tree.top_level() {
                    black_box(Classification::of(entry));
                }
            });
        });
    }

    group.finish();
}

fn bench_deep_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu/max_depth_chain");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(3));

    for len in [1_024usize, 16_384] {
        let entry = chain(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("max_depth", len), &entry, |b, entry| {
            b.iter(|| black_box(entry.max_depth()));
        });
    }

    group.finish();
}

fn bench_flyout_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("flyout/hover_sweep");

    // Sweeping the pointer across the bar switches the open panel at every step.
    for width in [8usize, 32, 128] {
        let tree = wide_tree(width, 3, 3);
        let ids: Vec<EntryId> = tree.top_level().iter().map(|e| e.id.clone()).collect();
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::new("hover", width), &ids, |b, ids| {
            b.iter_batched(
                || FlyoutMenu::new(&tree),
                |mut menu| {
                    for id in ids {
                        black_box(menu.hover(id));
                    }
                    black_box(menu.open_panel().is_some());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_drawer_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawer/visible_rows");

    for fanout in [2usize, 4, 6] {
        let tree = wide_tree(6, fanout, 4);
        let parents: Vec<EntryId> = tree
            .iter()
            .filter(|v| !v.entry.is_leaf())
            .map(|v| v.entry.id.clone())
            .collect();
        group.throughput(Throughput::Elements(tree.iter().count() as u64));
        group.bench_with_input(
            BenchmarkId::new("fully_expanded", fanout),
            &parents,
            |b, parents| {
                let mut drawer = DrawerMenu::new(&tree);
                drawer.open();
                for id in parents {
                    drawer.toggle(id);
                }
                b.iter(|| black_box(drawer.visible_rows().len()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_deep_chain,
    bench_flyout_switch,
    bench_drawer_rows
);
criterion_main!(benches);

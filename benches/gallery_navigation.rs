// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery scanning and lightbox navigation.
//!
//! Measures the performance of:
//! - Directory scanning (filtering and sorting image files)
//! - Navigation operations (next/previous with wrap-around)

use criterion::{criterion_group, criterion_main, Criterion};
use iced_lightbox::config::SortOrder;
use iced_lightbox::gallery::Gallery;
use iced_lightbox::lightbox::{Lightbox, OverlayState};
use std::hint::black_box;
use tempfile::TempDir;

const GALLERY_SIZE: usize = 500;

/// Creates a directory with empty image-named files and a few distractors.
fn populated_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for i in 0..GALLERY_SIZE {
        let ext = ["jpg", "jpeg", "png", "gif"][i % 4];
        std::fs::write(dir.path().join(format!("image_{i:04}.{ext}")), b"")
            .expect("failed to write file");
    }
    for i in 0..50 {
        std::fs::write(dir.path().join(format!("notes_{i}.txt")), b"")
            .expect("failed to write file");
    }
    dir
}

fn bench_scan_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let dir = populated_dir();

    group.bench_function("scan_directory_alphabetical", |b| {
        b.iter(|| {
            let gallery = Gallery::scan_directory(dir.path(), SortOrder::Alphabetical)
                .expect("scan failed");
            black_box(gallery);
        });
    });

    group.bench_function("scan_directory_modified_date", |b| {
        b.iter(|| {
            let gallery = Gallery::scan_directory(dir.path(), SortOrder::ModifiedDate)
                .expect("scan failed");
            black_box(gallery);
        });
    });

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let gallery = Gallery::from_sources((0..GALLERY_SIZE).map(|i| format!("image_{i:04}.png")));

    group.bench_function("navigate_next_full_cycle", |b| {
        let mut lightbox = Lightbox::new(gallery.clone(), OverlayState::default());
        lightbox.open(0);
        b.iter(|| {
            for _ in 0..GALLERY_SIZE {
                lightbox.navigate_next();
            }
            black_box(lightbox.current_index());
        });
    });

    group.bench_function("navigate_previous_full_cycle", |b| {
        let mut lightbox = Lightbox::new(gallery.clone(), OverlayState::default());
        lightbox.open(0);
        b.iter(|| {
            for _ in 0..GALLERY_SIZE {
                lightbox.navigate_previous();
            }
            black_box(lightbox.current_index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scan_directory, bench_navigate);
criterion_main!(benches);

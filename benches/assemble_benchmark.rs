//! Benchmarks for pagedeck assembly performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks measure planning and full package assembly at various
//! deck sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pagedeck::{PackageAssembler, PackageOptions};

/// Creates a PNG header followed by filler bytes standing in for image data.
fn create_test_page(width: u32, height: u32, payload: usize) -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[8, 6, 0, 0, 0]);
    data.extend((0..payload).map(|i| (i % 251) as u8));
    data
}

/// Creates a deck of pages with mixed aspect ratios.
fn create_test_deck(page_count: usize) -> Vec<Vec<u8>> {
    (0..page_count)
        .map(|i| {
            if i % 2 == 0 {
                create_test_page(1700, 2200, 16 * 1024)
            } else {
                create_test_page(2200, 1700, 16 * 1024)
            }
        })
        .collect()
}

/// Benchmark header reading and placement.
fn bench_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("planning");

    for page_count in [10, 100, 1000].iter() {
        let deck = create_test_deck(*page_count);

        for parallel in [false, true] {
            let assembler = PackageAssembler::new(PackageOptions::new().with_parallel(parallel));
            let label = if parallel { "parallel" } else { "sequential" };

            group.bench_with_input(BenchmarkId::new(label, page_count), &deck, |b, deck| {
                b.iter(|| {
                    let _ = assembler.plan(black_box(deck));
                });
            });
        }
    }

    group.finish();
}

/// Benchmark full package assembly.
fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");

    for page_count in [1, 10, 100].iter() {
        let deck = create_test_deck(*page_count);
        let size: usize = deck.iter().map(Vec::len).sum();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::new("pages", page_count),
            &deck,
            |b, deck| {
                b.iter(|| {
                    let _ = pagedeck::assemble(black_box(deck));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the effect of the Deflate level.
fn bench_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression");
    let deck = create_test_deck(20);

    for level in [1i64, 6, 9].iter() {
        let assembler = PackageAssembler::new(PackageOptions::new().with_compression_level(*level));

        group.bench_with_input(BenchmarkId::new("level", level), &deck, |b, deck| {
            b.iter(|| {
                let _ = assembler.assemble(black_box(deck));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_planning, bench_assembly, bench_compression);
criterion_main!(benches);

#![allow(unused)]
extern crate permnode;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use permnode::prelude::*;
use std::hint::black_box;

/// A mixed corpus resembling a real holder's node list: mostly plain
/// permission strings, a few structured payloads of every kind.
const CORPUS: &[&str] = &[
    "essentials.fly",
    "essentials.tp",
    "minecraft.command.gamemode",
    "worldedit.wand",
    "some.plugin.some.deep.permission.node",
    "group.admin",
    "group.moderator",
    "meta.rank.captain",
    "meta.server\\.name.lobby\\.1",
    "prefix.100.&a[Admin]",
    "suffix.50.~hero",
    "weight.42",
    "displayname.The Boss",
    "r=^essentials\\..*$",
    "prefix.not-a-number.value",
    "weight.abc",
];

/// Benchmark the aggregate parser over the mixed corpus.
fn bench_parse_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_types");
    group.throughput(Throughput::Elements(CORPUS.len() as u64));
    group.bench_function("mixed_corpus", |b| {
        b.iter(|| {
            for node in CORPUS {
                black_box(parse_types(black_box(node)));
            }
        });
    });
    group.finish();
}

/// Benchmark the single-kind fast path against the aggregate on the same
/// input, the trade-off callers make when they already know the kind.
fn bench_single_kind(c: &mut Criterion) {
    let node = "prefix.100.&a[Admin]";

    let mut group = c.benchmark_group("single_kind");
    group.bench_function("parse_prefix_type", |b| {
        b.iter(|| black_box(parse_prefix_type(black_box(node))));
    });
    group.bench_function("parse_types", |b| {
        b.iter(|| black_box(parse_types(black_box(node))));
    });
    group.finish();
}

criterion_group!(benches, bench_parse_types, bench_single_kind);
criterion_main!(benches);

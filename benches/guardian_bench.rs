//! Benchmarks for the path-scope evaluator
//!
//! Measures performance of:
//! - Pattern parsing
//! - Match classification
//! - Guardian construction
//! - Access decisions over growing scope lists

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use filestore_authz::{file_scope, Guardian, PathPattern, PermissionSet, Principal};

fn bench_pattern_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_parsing");

    let test_cases = vec![
        ("plain", "/a/b/c/d/f.jpg"),
        ("wildcard", "/a/b/c/*"),
        ("negated_wildcard", "!/a/b/c/*"),
    ];

    for (name, scope) in test_cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &scope, |b, &s| {
            b.iter(|| PathPattern::parse(black_box(s)));
        });
    }

    group.finish();
}

fn bench_match_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_classification");

    let wildcard = PathPattern::parse("/a/b/c/*");
    let literal = PathPattern::parse("/a/b/c/d/f.jpg");

    group.bench_function("exact", |b| {
        b.iter(|| literal.matches(black_box("/a/b/c/d/f.jpg")));
    });

    group.bench_function("wildcard_prefix", |b| {
        b.iter(|| wildcard.matches(black_box("/a/b/c/d/e.jpg")));
    });

    group.bench_function("ancestor", |b| {
        b.iter(|| literal.matches(black_box("/a/b/")));
    });

    group.bench_function("miss", |b| {
        b.iter(|| wildcard.matches(black_box("/x/y/z.jpg")));
    });

    group.finish();
}

fn permissions_with_scopes(count: usize) -> PermissionSet {
    let mut permissions = PermissionSet::new();
    let scopes = (0..count)
        .map(|i| {
            if i % 4 == 3 {
                file_scope(&format!("!/denied-{}/*", i))
            } else {
                file_scope(&format!("/folder-{}/*", i))
            }
        })
        .collect();
    permissions.grant(0, "files:read", scopes);
    permissions
}

fn bench_guardian_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("guardian_construction");

    for count in [1, 10, 100] {
        let permissions = permissions_with_scopes(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &permissions,
            |b, permissions| {
                b.iter(|| Guardian::for_org(black_box(permissions), 0));
            },
        );
    }

    group.finish();
}

fn bench_access_decisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("access_decisions");

    for count in [1, 10, 100] {
        let principal = Principal::new("user:bench", 0)
            .with_permissions(permissions_with_scopes(count));
        let guardian = Guardian::new(&principal);

        group.bench_with_input(
            BenchmarkId::new("allowed", count),
            &guardian,
            |b, guardian| {
                b.iter(|| guardian.can(black_box("files:read"), black_box("/folder-0/a.jpg")));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("denied", count),
            &guardian,
            |b, guardian| {
                b.iter(|| guardian.can(black_box("files:read"), black_box("/nowhere/a.jpg")));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pattern_parsing,
    bench_match_classification,
    bench_guardian_construction,
    bench_access_decisions,
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scoped_permission::{Definition, Definitions, Notation, Permission, Scope};

fn definitions(count: usize) -> Definitions {
    (0..count)
        .map(|i| {
            Definition::new(format!("resource{}", i))
                .with_subset(["read", "write", "delete", "share"])
                .with_default_subset(["read", "write"])
        })
        .collect()
}

fn bench_parse_permission(c: &mut Criterion) {
    let notation = Notation::default();

    let mut group = c.benchmark_group("parse_permission");
    for text in ["user", "user.edit"] {
        group.bench_with_input(BenchmarkId::from_parameter(text), &text, |b, &text| {
            b.iter(|| Permission::parse_with(black_box(text), &notation).unwrap());
        });
    }
    group.finish();
}

fn bench_parse_scope(c: &mut Criterion) {
    let notation = Notation::default();
    let scope = "user.edit,profile,friends,billing.read,billing.refund";

    c.bench_function("parse_scope", |b| {
        b.iter(|| Scope::parse_with(black_box(scope), &notation).unwrap());
    });
}

fn bench_require(c: &mut Criterion) {
    let notation = Notation::default();

    let mut group = c.benchmark_group("require");
    for count in [10, 100, 1_000] {
        let table = definitions(count);
        let required = format!("resource{}.write", count - 1);
        let given = format!("resource0,resource{}", count - 1);

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| table.require_with(black_box(&required), black_box(&given), &notation));
        });
    }
    group.finish();
}

fn bench_authorize_parsed(c: &mut Criterion) {
    let table = definitions(100);
    let notation = Notation::default();
    let required = Scope::parse_with("resource42.delete,resource7", &notation).unwrap();
    let given = Scope::parse_with("resource1,resource7.read,resource42.delete", &notation).unwrap();

    c.bench_function("authorize_parsed", |b| {
        b.iter(|| table.authorize(black_box(&required), black_box(&given)));
    });
}

criterion_group!(
    benches,
    bench_parse_permission,
    bench_parse_scope,
    bench_require,
    bench_authorize_parsed
);
criterion_main!(benches);

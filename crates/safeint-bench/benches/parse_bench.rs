//! String parsing benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use safeint::parse_safe_integer;

fn bench_parse_decimal(c: &mut Criterion) {
    let inputs: &[(&str, &str)] = &[
        ("small", "42"),
        ("max_safe", "9007199254740991"),
        ("padded", "   \t\r\n  -9007199254740991  "),
        ("fractional_prefix", "3.14159265358979"),
    ];
    let mut group = c.benchmark_group("parse_decimal");

    for &(label, text) in inputs {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("safeint", label), &text, |b, &text| {
            b.iter(|| black_box(parse_safe_integer(black_box(text), None)));
        });
    }
    group.finish();
}

fn bench_parse_radix(c: &mut Criterion) {
    let inputs: &[(&str, &str, u32)] = &[
        ("hex", "deadbeef", 16),
        ("hex_prefixed", "0x1fffffffffffff", 16),
        ("binary", "11111111111111111111111111111111", 2),
        ("base36", "zzzzzzzzz", 36),
    ];
    let mut group = c.benchmark_group("parse_radix");

    for &(label, text, radix) in inputs {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("safeint", label), &text, |b, &text| {
            b.iter(|| black_box(parse_safe_integer(black_box(text), Some(radix))));
        });
    }
    group.finish();
}

fn bench_parse_rejections(c: &mut Criterion) {
    let inputs: &[(&str, &str)] = &[
        ("overflow", "9007199254740992"),
        ("no_digits", "deadbeef"),
        ("bare_hex_prefix", "0x"),
    ];
    let mut group = c.benchmark_group("parse_reject");

    for &(label, text) in inputs {
        group.bench_with_input(BenchmarkId::new("safeint", label), &text, |b, &text| {
            b.iter(|| black_box(parse_safe_integer(black_box(text), None)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_parse_decimal,
    bench_parse_radix,
    bench_parse_rejections
);
criterion_main!(benches);

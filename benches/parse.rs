//! Benchmarks for target parsing and display sanitizing.
//!
//! Both run once per target or per retrieved value in CLI tools, so the
//! interesting numbers are per-call latency and allocation overhead.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use snmp_utils::{classify, parse_connection_string, parse_target, sanitize_for_display};

fn bench_parse_connection_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_connection_string");

    let cases = [
        ("ipv4", "10.0.0.1", false),
        ("ipv4_port", "10.0.0.1:161", false),
        ("ipv6", "2001:db8::1", true),
        ("ipv6_bracketed_port", "[2001:db8:1234:5678::1]:161", true),
        ("dns_name", "switch01.lab.example.com", false),
    ];

    for (name, input, ipv6) in cases {
        group.bench_with_input(BenchmarkId::new("parse", name), &input, |b, input| {
            b.iter(|| black_box(parse_connection_string(input, None, ipv6)))
        });
    }

    group.finish();
}

fn bench_parse_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_target");

    for input in ["10.0.0.1:161", "[::1]:161", "switch01.lab:1161"] {
        group.bench_with_input(BenchmarkId::new("infer", input), &input, |b, input| {
            b.iter(|| black_box(parse_target(input, None)))
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for input in ["192.168.1.1", "fe80::1%eth0", "not-an-address"] {
        group.bench_with_input(BenchmarkId::new("classify", input), &input, |b, input| {
            b.iter(|| black_box(classify(input)))
        });
    }

    group.finish();
}

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");

    // Typical sysDescr length up to large table cell dumps
    for len in [16usize, 256, 4096] {
        let clean: String = "Linux router ".chars().cycle().take(len).collect();
        let dirty: String = clean
            .chars()
            .enumerate()
            .map(|(i, c)| if i % 17 == 0 { '\x01' } else { c })
            .collect();

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("clean", len), &clean, |b, s| {
            b.iter(|| black_box(sanitize_for_display(Some(s.as_str()))))
        });
        group.bench_with_input(BenchmarkId::new("binary", len), &dirty, |b, s| {
            b.iter(|| black_box(sanitize_for_display(Some(s.as_str()))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_connection_string,
    bench_parse_target,
    bench_classify,
    bench_sanitize,
);
criterion_main!(benches);

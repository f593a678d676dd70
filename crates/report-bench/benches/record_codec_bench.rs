use criterion::{black_box, criterion_group, criterion_main, Criterion};
use csv::StringRecord;

use report_bench::data::generator::{synthesize_record, FixedClock};
use report_bench::data::record::ReportRecord;

fn codec_clock() -> FixedClock {
    FixedClock::at_rfc3339("2024-03-01T09:30:00Z").expect("valid fixed timestamp")
}

fn bench_synthesize(c: &mut Criterion) {
    let clock = codec_clock();
    c.bench_function("synthesize_record", |b| {
        b.iter(|| synthesize_record(black_box(12_345), &clock))
    });
}

fn bench_to_fields(c: &mut Criterion) {
    let record = synthesize_record(12_345, &codec_clock());
    c.bench_function("record_to_fields", |b| {
        b.iter(|| black_box(&record).to_fields())
    });
}

fn bench_parse_fields(c: &mut Criterion) {
    let rec = StringRecord::from(synthesize_record(12_345, &codec_clock()).to_fields());
    c.bench_function("record_parse_fields", |b| {
        b.iter(|| ReportRecord::parse_fields(black_box(&rec), 2).expect("parse"))
    });
}

criterion_group!(benches, bench_synthesize, bench_to_fields, bench_parse_fields);
criterion_main!(benches);

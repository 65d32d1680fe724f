//! Benchmark suite for the CSV encoder
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Records are generated in memory, so no fixture files are needed. Each
//! size is run with named records (header derived) and ordered records.

use csv_response::{encode, EncoderConfig, FieldValue, Record};

fn main() {
    divan::main();
}

fn named_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            Record::named([
                ("id", FieldValue::from(i as u64)),
                ("name", FieldValue::from(format!("user \"{}\"", i))),
                ("score", FieldValue::from(i as f64 / 3.0)),
                ("note", FieldValue::Null),
            ])
        })
        .collect()
}

fn ordered_records(count: usize) -> Vec<Record> {
    named_records(count)
        .into_iter()
        .map(|record| Record::Ordered(record.values()))
        .collect()
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn encode_named(bencher: divan::Bencher, count: usize) {
    let records = named_records(count);
    let config = EncoderConfig::default();
    bencher.bench(|| encode(divan::black_box(&records), true, &config));
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn encode_ordered(bencher: divan::Bencher, count: usize) {
    let records = ordered_records(count);
    let config = EncoderConfig::default();
    bencher.bench(|| encode(divan::black_box(&records), false, &config));
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn encode_prevent_cast(bencher: divan::Bencher, count: usize) {
    let records = named_records(count);
    let config = EncoderConfig::new().prevent_cast(true);
    bencher.bench(|| encode(divan::black_box(&records), true, &config));
}

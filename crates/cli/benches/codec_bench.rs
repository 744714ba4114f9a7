use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::fs::File;

use codec::{decode, encode, encode_to};
use document::{Database, Document, Entry, Value};
use tempfile::tempdir;

const N_ENTRIES: usize = 10_000;
const VALUE_SIZE: usize = 100;

fn build_document() -> Document {
    let mut db = Database::new(0);
    for i in 0..N_ENTRIES {
        let entry = if i % 10 == 0 {
            Entry::expiring(
                format!("key{i}"),
                Value::Str(vec![b'x'; VALUE_SIZE]),
                1_710_382_559_637 + i as u64,
            )
        } else {
            Entry::new(format!("key{i}"), Value::Str(vec![b'x'; VALUE_SIZE]))
        };
        db.entries.push(entry);
    }
    let mut doc = Document::new();
    doc.metadata
        .insert("redis-ver".to_string(), "6.0.16".to_string());
    doc.databases.push(db);
    doc
}

fn encode_benchmark(c: &mut Criterion) {
    let doc = build_document();
    c.bench_function("encode_10k_entries", |b| {
        b.iter(|| encode(&doc).unwrap());
    });
}

fn decode_benchmark(c: &mut Criterion) {
    let bytes = encode(&build_document()).unwrap();
    c.bench_function("decode_10k_entries", |b| {
        b.iter(|| decode(&bytes).unwrap());
    });
}

fn write_file_benchmark(c: &mut Criterion) {
    c.bench_function("write_snapshot_file_10k", |b| {
        b.iter_batched(
            || {
                let dir = tempdir().unwrap();
                let path = dir.path().join("bench.rdb");
                (dir, path, build_document())
            },
            |(_dir, path, doc)| {
                let mut f = File::create(&path).unwrap();
                encode_to(&doc, &mut f).unwrap();
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    encode_benchmark,
    decode_benchmark,
    write_file_benchmark
);
criterion_main!(benches);

//! Benchmarks for the flat record codec and file store
//!
//! Performance-critical paths:
//! - `Task::serialize` / `Task::deserialize`: per-line encode and decode
//! - `TaskCollection::save` / `TaskCollection::load`: whole-file round trip

#![allow(missing_docs)]

use chrono::NaiveDate;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use tempfile::TempDir;
use todo_kernel::{Priority, Task, TaskCollection};

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_codec");
    let task = Task::new(
        "Renew passport at the city office",
        NaiveDate::from_ymd_opt(2024, 9, 1),
        Priority::new(4),
    );
    let record = task.serialize();

    group.bench_function("serialize", |b| b.iter(|| black_box(&task).serialize()));
    group.bench_function("deserialize", |b| {
        b.iter(|| Task::deserialize(black_box(&record)).unwrap());
    });
    group.finish();
}

fn bench_file_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_codec/file");
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.txt");

    let tasks: TaskCollection = (0..1_000)
        .map(|i| Task::new(format!("Task {i}"), None, Priority::new(i % 5 + 1)))
        .collect();
    group.throughput(Throughput::Elements(1_000));

    group.bench_function("save/1000", |b| b.iter(|| tasks.save(&path).unwrap()));

    tasks.save(&path).unwrap();
    group.bench_function("load/1000", |b| {
        b.iter(|| {
            let mut loaded = TaskCollection::new();
            loaded.load(&path).unwrap();
            black_box(loaded)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_codec, bench_file_round_trip);
criterion_main!(benches);

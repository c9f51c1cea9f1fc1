//! Benchmarks for `TaskCollection` in kernel/src/collection
//!
//! Performance-critical paths:
//! - `sort`: stable reorder by due date, priority and status
//! - `search`: case-insensitive substring scan
//! - `remove_completed`: in-place filter

#![allow(missing_docs)]
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use todo_kernel::{Priority, SortCriteria, Task, TaskCollection};

fn make_collection(size: usize) -> TaskCollection {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..size)
        .map(|i| {
            let due = (i % 3 != 0).then(|| base + chrono::Days::new((i * 7 % 365) as u64));
            let mut task = Task::new(
                format!("Task {i} about {}", ["milk", "rent", "dog", "taxes"][i % 4]),
                due,
                Priority::new((i % 5) as i64 + 1),
            );
            if i % 4 == 0 {
                task.mark_complete();
            }
            task
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection/sort");

    for size in [100, 1_000, 10_000] {
        let tasks = make_collection(size);
        group.throughput(Throughput::Elements(size as u64));
        for criteria in SortCriteria::ALL {
            group.bench_with_input(
                BenchmarkId::new(criteria.as_str(), size),
                &tasks,
                |b, tasks| {
                    b.iter_batched(
                        || tasks.clone(),
                        |mut tasks| {
                            tasks.sort(criteria);
                            black_box(tasks)
                        },
                        criterion::BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection/search");

    for size in [100, 1_000, 10_000] {
        let tasks = make_collection(size);
        group.throughput(Throughput::Elements(size as u64));
        for keyword in ["", "MILK", "absent"] {
            group.bench_with_input(BenchmarkId::new(format!("'{keyword}'"), size), &tasks, |b, tasks| {
                b.iter(|| black_box(tasks.search(black_box(keyword)).count()));
            });
        }
    }

    group.finish();
}

fn bench_remove_completed(c: &mut Criterion) {
    let tasks = make_collection(10_000);
    c.bench_function("collection/remove_completed/10000", |b| {
        b.iter_batched(
            || tasks.clone(),
            |mut tasks| black_box(tasks.remove_completed()),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_sort, bench_search, bench_remove_completed);
criterion_main!(benches);

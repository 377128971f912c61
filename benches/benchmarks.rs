use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use tablestore::{Item, TableStore};

fn rows(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item::named(format!("row-{i}")).with("value", i))
        .collect()
}

fn set_items_benchmark(c: &mut Criterion) {
    let store = TableStore::new();
    let items = rows(1_000);

    c.bench_function("set_items_1000", |b| {
        b.iter(|| store.set_items(black_box(items.clone())));
    });
}

fn update_item_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_item");

    for row_count in [10, 1_000, 100_000].iter() {
        let store = TableStore::new();
        store.set_items(rows(*row_count));
        let last = format!("row-{}", row_count - 1);

        group.bench_with_input(BenchmarkId::new("hit_last", row_count), row_count, |b, _| {
            let mut i = 0;
            b.iter(|| {
                store.update_item(black_box(Item::named(last.clone()).with("value", i)));
                i += 1;
            });
        });

        group.bench_with_input(BenchmarkId::new("miss", row_count), row_count, |b, _| {
            b.iter(|| store.update_item(black_box(Item::named("absent"))));
        });
    }
    group.finish();
}

fn notify_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("notify");

    for subscriber_count in [1, 10, 100].iter() {
        let store = TableStore::new();
        store.set_items(rows(10));

        for _ in 0..*subscriber_count {
            store.subscribe(|state| {
                black_box(state.items().len());
            });
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(subscriber_count),
            subscriber_count,
            |b, _| {
                b.iter(|| store.update_item(black_box(Item::named("row-0"))));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    set_items_benchmark,
    update_item_benchmark,
    notify_benchmark,
);
criterion_main!(benches);

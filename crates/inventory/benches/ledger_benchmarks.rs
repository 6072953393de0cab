use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockledger_core::ItemId;
use stockledger_inventory::{Item, StockLedger};

fn seeded_ledger(items: i64) -> StockLedger {
    let mut ledger = StockLedger::new();
    for id in 0..items {
        ledger
            .add_stock(Item::new(id, 1_000, 1.25), "bench")
            .unwrap();
    }
    ledger
}

fn bench_stock_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("stock_mutations");
    group.throughput(Throughput::Elements(2));

    group.bench_function("add_then_remove", |b| {
        let mut ledger = seeded_ledger(100);
        let mut next = 0i64;
        b.iter(|| {
            let id = next % 100;
            next += 1;
            ledger.add_stock(Item::new(id, 3, 1.25), "bench").unwrap();
            ledger.remove_stock(ItemId::new(id), 3, "bench").unwrap();
        });
    });

    group.finish();
}

fn bench_total_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_cost");

    for size in [10i64, 1_000, 10_000].iter() {
        let ledger = seeded_ledger(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ledger, |b, ledger| {
            b.iter(|| black_box(ledger.calculate_total_cost()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stock_mutations, bench_total_cost);
criterion_main!(benches);

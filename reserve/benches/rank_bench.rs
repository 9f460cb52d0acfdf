use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use reserve::{choose, CombinatorialReserve, IdSet, Reservable};

#[derive(Debug, Clone, Default)]
struct Slot {
    ids: IdSet,
}

impl Reservable for Slot {
    fn ids(&self) -> &[u8] {
        &self.ids
    }
    fn ids_mut(&mut self) -> &mut IdSet {
        &mut self.ids
    }
    fn initialize(&mut self) {}
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("choose_20_10", |b| {
        b.iter(|| choose(black_box(20), black_box(10)))
    });

    let reserve = CombinatorialReserve::<Slot>::with_limit(20, 10).unwrap();
    let mut group = c.benchmark_group("rank");
    for k in [2usize, 4, 6, 8, 10].iter() {
        let ids: Vec<u8> = (0..*k).map(|i| (2 * i + 1) as u8).collect();
        group.bench_with_input(BenchmarkId::new("rank", k), &ids, |b, ids| {
            b.iter(|| reserve.rank(black_box(ids)));
        });
        let address = reserve.rank(&ids).unwrap();
        group.bench_with_input(BenchmarkId::new("unrank", k), &address, |b, address| {
            b.iter(|| reserve.unrank(black_box(*address)));
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

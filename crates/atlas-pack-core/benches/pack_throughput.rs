use atlas_pack_core::{PackItem, pack};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn generate_items(count: usize, min_size: u32, max_size: u32) -> Vec<PackItem> {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let w = rng.gen_range(min_size..=max_size);
            let h = rng.gen_range(min_size..=max_size);
            PackItem::new(i as u64, w, h)
        })
        .collect()
}

fn bench_pack_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack_throughput");

    let item_counts = vec![50, 100, 200, 500];

    for count in item_counts {
        let items = generate_items(count, 16, 64);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("varied", count), &items, |b, items| {
            b.iter(|| black_box(pack(items, 1024, 2).unwrap()));
        });
    }

    group.finish();
}

fn bench_padding_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("padding_levels");

    let items = generate_items(200, 16, 64);

    for padding in [0u32, 2, 8] {
        group.bench_with_input(BenchmarkId::new("padding", padding), &items, |b, items| {
            b.iter(|| black_box(pack(items, 1024, padding).unwrap()));
        });
    }

    group.finish();
}

fn bench_uniform_vs_varied(c: &mut Criterion) {
    let mut group = c.benchmark_group("item_mix");

    let uniform: Vec<PackItem> = (0..200).map(|i| PackItem::new(i as u64, 64, 64)).collect();
    let varied = generate_items(200, 16, 128);

    for (name, items) in [("uniform", &uniform), ("varied", &varied)] {
        group.bench_with_input(BenchmarkId::new(name, items.len()), items, |b, items| {
            b.iter(|| {
                let out = pack(items, 1024, 2).unwrap();
                black_box(out.stats().occupancy)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pack_throughput,
    bench_padding_levels,
    bench_uniform_vs_varied,
);
criterion_main!(benches);

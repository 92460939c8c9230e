use boundary_index::{
    BoundaryIndex, BoundingBox2D, DemoConfig, DeletionScenario, PointSampler, bundled_countries,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geo::Point;

fn grid_index(side: usize) -> BoundaryIndex {
    let mut index = BoundaryIndex::new();
    for i in 0..side {
        for j in 0..side {
            let (x, y) = (i as f64, j as f64);
            let label = format!("cell:{}:{}", i, j);
            index
                .insert(BoundingBox2D::new(x, y, x + 1.5, y + 1.5), label)
                .unwrap();
        }
    }
    index
}

fn benchmark_index_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_operations");

    for side in [10usize, 100] {
        let index = grid_index(side);
        let center = Point::new(side as f64 / 2.0 + 0.25, side as f64 / 2.0 + 0.25);

        group.bench_with_input(BenchmarkId::new("query_point", side * side), &index, |b, index| {
            b.iter(|| index.query_point(black_box(&center)))
        });
    }

    // Insert then delete the same entry so the tree size stays fixed
    let mut index = grid_index(100);
    let bbox = BoundingBox2D::new(10.0, 10.0, 11.0, 11.0);
    group.bench_function("insert_delete", |b| {
        b.iter(|| {
            let id = index.insert(black_box(bbox), "churn").unwrap();
            index.delete(id, &bbox)
        })
    });

    group.finish();
}

fn benchmark_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    let countries = bundled_countries().unwrap();
    let canada = countries
        .iter()
        .find(|country| country.name() == "Canada")
        .and_then(|country| country.polygons().next().cloned())
        .unwrap();

    let sampler = PointSampler::new(1);
    for count in [1usize, 100] {
        group.bench_with_input(BenchmarkId::new("canada", count), &count, |b, &count| {
            b.iter(|| sampler.sample(black_box(&canada), count).unwrap())
        });
    }

    group.finish();
}

fn benchmark_scenario(c: &mut Criterion) {
    let countries = bundled_countries().unwrap();
    let config = DemoConfig::default();

    c.bench_function("bundled_scenario_run", |b| {
        b.iter(|| {
            let mut scenario = DeletionScenario::new(black_box(&countries), &config).unwrap();
            scenario.run().unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_index_operations,
    benchmark_sampling,
    benchmark_scenario
);
criterion_main!(benches);

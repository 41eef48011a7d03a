#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use convex_angle_hull::{generate_angle_hull, Angle, ConvexHull, Point};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_points(n: usize) -> Vec<Point> {
    let seed = [32; 32]; // A seed for the RNG. You can put any number here.
    let mut rng: StdRng = SeedableRng::from_seed(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-50_000..50_000), rng.gen_range(-50_000..50_000)))
        .collect()
}

pub fn build_and_update(c: &mut Criterion) {
    let points = random_points(100_000);
    let mut updated = points.clone();
    updated.extend(random_points(1_000));

    let mut group = c.benchmark_group("ConvexHull");
    group.bench_function("build/100k", |b| b.iter(|| ConvexHull::build(&points)));

    let baseline = ConvexHull::build(&points);
    group.bench_function("update/+1k", |b| b.iter(|| baseline.update(&updated)));
    group.finish();
}

pub fn angle_hull_walk(c: &mut Criterion) {
    let points = random_points(10_000);
    let hull = ConvexHull::build(&points);
    let alpha = Angle::from_deg(150.0);

    let mut group = c.benchmark_group("AngleHull");
    group.bench_function("generate/10k-points-150deg", |b| {
        b.iter(|| generate_angle_hull(&hull, alpha).unwrap())
    });
    group.finish();
}

criterion_group!(benches, build_and_update, angle_hull_walk);
criterion_main!(benches);

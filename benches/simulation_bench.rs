use arcade_physics::{
    Collider, Entity, OutOfBoundsPolicy, PhysicsWorld, Ray, RigidBody, TagFilter, Vec2, WorldConfig,
    AABB,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// --- Helper for filling a world with a grid of bouncing balls ---
fn ball_pit(num_balls: usize) -> PhysicsWorld {
    let config = WorldConfig {
        world_bounds: AABB::new(Vec2::ZERO, Vec2::new(2000.0, 2000.0)),
        out_of_bounds: OutOfBoundsPolicy::Wrap,
        seed: Some(7),
        ..WorldConfig::default()
    };
    let mut world = PhysicsWorld::new(config).expect("valid bench config");

    let columns = (num_balls as f64).sqrt().ceil() as usize;
    for i in 0..num_balls {
        let position = Vec2::new(
            50.0 + (i % columns) as f64 * 18.0,
            50.0 + (i / columns) as f64 * 18.0,
        );
        let velocity = Vec2::new((i % 7) as f64 - 3.0, (i % 5) as f64 - 2.0);
        let collider = if i % 2 == 0 {
            Collider::new_circle()
        } else {
            Collider::new_box()
        };
        world.spawn(
            Entity::new(position, Vec2::splat(20.0))
                .with_collider(collider)
                .with_body(RigidBody::new().with_velocity(velocity).with_drag(0.1)),
        );
    }
    world
}

// Benchmark for a full frame over a growing number of colliders
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for num_balls in [10, 50, 200].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_balls), num_balls, |b, &n| {
            b.iter(|| {
                let mut world = ball_pit(black_box(n));
                let dt = 1.0 / 60.0;
                for _ in 0..30 {
                    world.step(black_box(dt));
                }
            });
        });
    }
    group.finish();
}

// Benchmark for a ray crossing every registered collider
fn bench_raycast(c: &mut Criterion) {
    let mut group = c.benchmark_group("raycast_all");

    for num_balls in [10, 50, 200].iter() {
        let world = ball_pit(*num_balls);
        let ray = Ray::between(Vec2::new(0.0, 0.0), Vec2::new(400.0, 400.0));
        group.bench_with_input(BenchmarkId::from_parameter(num_balls), &world, |b, world| {
            b.iter(|| world.raycast_all(black_box(&ray), &TagFilter::Any));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step, bench_raycast);
criterion_main!(benches);

use arcade_physics::*;
use std::env;
use std::fs;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let args: Vec<String> = env::args().collect();
    let example = if args.len() > 1 { args[1].as_str() } else { "basic" };

    // Optional second argument: a JSON world config
    let config = match args.get(2) {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Could not load config {}: {}", path, e);
                return;
            }
        },
        None => WorldConfig::default(),
    };

    info!("Running example: {}", example);

    let result = match example {
        "basic" => run_basic_example(config),
        "ball_pit" => run_ball_pit_example(config),
        "wrap" => run_wrap_example(config),
        "raycast" => run_raycast_example(config),
        _ => {
            error!(
                "Unknown example: {}. Available examples: basic, ball_pit, wrap, raycast",
                example
            );
            return;
        }
    };
    if let Err(e) = result {
        error!("Example {} failed: {}", example, e);
    }
}

fn load_config(path: &str) -> std::result::Result<WorldConfig, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    Ok(WorldConfig::from_json(&json)?)
}

fn floor(world: &PhysicsWorld) -> Entity {
    let AABB { min, max } = world.config().world_bounds;
    Entity::new(
        Vec2::new((min.x + max.x) / 2.0, max.y - 10.0),
        Vec2::new(max.x - min.x, 20.0),
    )
    .with_tag("Floor")
    .with_collider(Collider::new_box().with_friction(0.1))
}

fn run_basic_example(config: WorldConfig) -> Result<()> {
    let mut world = PhysicsWorld::new(config)?;
    world.spawn(floor(&world));

    let ball = world.spawn(
        Entity::new(Vec2::new(300.0, 100.0), Vec2::splat(24.0))
            .with_tag("Ball")
            .with_collider(Collider::new_circle())
            .with_body(
                RigidBody::new()
                    .with_bounciness(0.7)
                    .with_drag(0.05)
                    .with_gravity(Vec2::new(0.0, 0.3)),
            ),
    );

    let bounces = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    if let Some(collider) = world.entity_mut(ball).and_then(Entity::collider_mut) {
        let bounces = Arc::clone(&bounces);
        collider.add_listener(ColliderEvent::CollisionEnter, move |_| {
            bounces.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        });
    }

    let dt = 1.0 / 60.0;
    for frame in 0..240 {
        world.step(dt);
        if frame % 30 == 0 {
            if let Some(entity) = world.entity(ball) {
                let position = entity.position();
                info!("Frame {}: Ball position: ({:.2}, {:.2})", frame, position.x, position.y);
            }
        }
    }
    info!(
        "Simulation finished after {} floor contacts.",
        bounces.load(std::sync::atomic::Ordering::Relaxed)
    );
    Ok(())
}

fn run_ball_pit_example(config: WorldConfig) -> Result<()> {
    let mut world = PhysicsWorld::new(config)?;
    world.spawn(floor(&world));

    for i in 0..20 {
        let size = 16.0 + (i % 4) as f64 * 4.0;
        let position = Vec2::new(60.0 + i as f64 * 24.0, 60.0 + (i % 3) as f64 * 30.0);
        let collider = if i % 2 == 0 {
            Collider::new_circle()
        } else {
            Collider::new_box().with_friction(0.2)
        };
        world.spawn(
            Entity::new(position, Vec2::splat(size))
                .with_tag("Ball")
                .with_collider(collider)
                .with_body(
                    RigidBody::new()
                        .with_bounciness(0.8)
                        .with_drag(0.05)
                        .with_gravity(Vec2::new(0.0, 0.3)),
                ),
        );
    }

    let buffer = Arc::new(SnapshotBuffer::new());
    let renderer = {
        let buffer = Arc::clone(&buffer);
        std::thread::spawn(move || {
            let snapshot = buffer.latest();
            let visible = snapshot.entities.iter().filter(|e| e.visible && !e.destroyed).count();
            (snapshot.frame, visible)
        })
    };

    info!("Simulating ball pit with {} bodies", world.bodies().len());
    let dt = 1.0 / 60.0;
    for frame in 0..180 {
        world.step(dt);
        world.publish_snapshot(&buffer);
        if frame % 30 == 0 {
            info!("Frame {}: {} bodies simulated", frame, world.bodies().len());
        }
    }
    if let Ok((frame, visible)) = renderer.join() {
        info!("Renderer saw frame {} with {} visible entities", frame, visible);
    }
    info!("Ball pit simulation finished.");
    Ok(())
}

fn run_wrap_example(mut config: WorldConfig) -> Result<()> {
    config.out_of_bounds = OutOfBoundsPolicy::Wrap;
    let mut world = PhysicsWorld::new(config)?;

    let ship = world.spawn(
        Entity::new(Vec2::new(560.0, 200.0), Vec2::splat(16.0))
            .with_tag("Ship")
            .with_collider(Collider::new_box())
            .with_body(RigidBody::new().with_drag(0.0).with_velocity(Vec2::new(40.0, 0.0))),
    );

    let dt = 1.0 / 60.0;
    for frame in 0..300 {
        world.step(dt);
        if frame % 60 == 0 {
            if let Some(entity) = world.entity(ship) {
                info!("Frame {}: Ship x = {:.1}", frame, entity.position().x);
            }
        }
    }
    info!("Wrap simulation finished.");
    Ok(())
}

fn run_raycast_example(config: WorldConfig) -> Result<()> {
    let mut world = PhysicsWorld::new(config)?;
    for (i, tag) in ["Crate", "Coin", "Crate", "Wall"].iter().enumerate() {
        let collider = if *tag == "Coin" {
            Collider::new_circle().trigger()
        } else {
            Collider::new_box()
        };
        world.spawn(
            Entity::new(Vec2::new(100.0 + i as f64 * 80.0, 200.0), Vec2::splat(32.0))
                .with_tag(*tag)
                .with_collider(collider),
        );
    }

    let ray = Ray::between(Vec2::new(0.0, 200.0), Vec2::new(600.0, 200.0));
    info!("Ray hits anything: {}", world.raycast(&ray));
    info!("All hits: {}", world.raycast_all(&ray, &TagFilter::Any).len());
    info!(
        "Hits without crates: {}",
        world
            .raycast_all(&ray, &TagFilter::Exclude("Crate".to_string()))
            .len()
    );

    let point = Vec2::new(180.0, 200.0);
    let solid = world.collision_cast(point, &CastFilter::default().without_triggers());
    info!("Solid collider under {}: {:?}", point, solid);
    Ok(())
}

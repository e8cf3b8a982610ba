use arcade_physics::{
    CastFilter, Collider, ColliderEvent, Entity, EntityKey, PhysicsWorld, PointerInput,
    QueryConfig, Ray, TagFilter, Vec2,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// A box at (3, 0), a coin at (5.5, 0) and a box out of reach at (10, 0).
fn ray_scene() -> (PhysicsWorld, EntityKey, EntityKey, EntityKey) {
    let mut world = PhysicsWorld::default();
    let crate_key = world.spawn(
        Entity::new(Vec2::new(3.0, 0.0), Vec2::splat(2.0))
            .with_tag("Crate")
            .with_collider(Collider::new_box()),
    );
    let coin = world.spawn(
        Entity::new(Vec2::new(5.5, 0.0), Vec2::splat(2.0))
            .with_tag("Coin")
            .with_collider(Collider::new_circle()),
    );
    let far = world.spawn(
        Entity::new(Vec2::new(10.0, 0.0), Vec2::splat(2.0))
            .with_tag("Crate")
            .with_collider(Collider::new_box()),
    );
    (world, crate_key, coin, far)
}

fn short_ray() -> Ray {
    Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 5.0)
}

#[test]
fn test_ray_hits_colliders_in_registration_order() {
    let (world, crate_key, coin, far) = ray_scene();
    assert!(world.raycast(&short_ray()));
    assert_eq!(world.raycast_hit(&short_ray()), Some(crate_key));

    let hits = world.raycast_all(&short_ray(), &TagFilter::Any);
    assert_eq!(hits, vec![crate_key, coin]);
    assert!(!hits.contains(&far));
}

#[test]
fn test_ray_misses_beyond_its_length() {
    let (world, ..) = ray_scene();
    let ray = Ray::new(Vec2::new(0.0, 20.0), Vec2::new(1.0, 0.0), 50.0);
    assert!(!world.raycast(&ray));
    assert!(world.raycast_all(&ray, &TagFilter::Any).is_empty());
}

#[test]
fn test_ray_between_points() {
    let (world, _, _, far) = ray_scene();
    let ray = Ray::between(Vec2::new(10.0, -5.0), Vec2::new(10.0, 5.0));
    assert_eq!(world.raycast_hit(&ray), Some(far));
}

#[test]
fn test_ray_without_direction_hits_nothing() {
    let (world, ..) = ray_scene();
    let ray = Ray::new(Vec2::new(3.0, 0.0), Vec2::ZERO, 5.0);
    assert!(!world.raycast(&ray));
}

#[test]
fn test_ray_tag_filters() {
    let (mut world, crate_key, coin, _) = ray_scene();
    let ray = short_ray();

    assert_eq!(
        world.raycast_filtered(&ray, &TagFilter::Only("Coin".into())),
        Some(coin)
    );
    assert_eq!(
        world.raycast_filtered(&ray, &TagFilter::Exclude("Crate".into())),
        Some(coin)
    );
    assert_eq!(
        world.raycast_filtered(&ray, &TagFilter::Only("Player".into())),
        None
    );

    // lists are ignored until the world opts in
    let list = TagFilter::ExcludeAny(vec!["Crate".into(), "Player".into()]);
    assert_eq!(world.raycast_all(&ray, &list), vec![crate_key, coin]);

    world.set_query_config(QueryConfig {
        tag_list_exclusion: true,
    });
    assert_eq!(world.raycast_all(&ray, &list), vec![coin]);
}

#[test]
fn test_collision_cast_respects_triggers_and_tags() {
    let mut world = PhysicsWorld::default();
    let zone = world.spawn(
        Entity::new(Vec2::new(50.0, 50.0), Vec2::splat(20.0))
            .with_tag("Zone")
            .with_collider(Collider::new_box().trigger()),
    );
    let wall = world.spawn(
        Entity::new(Vec2::new(55.0, 50.0), Vec2::splat(20.0))
            .with_tag("Wall")
            .with_collider(Collider::new_box()),
    );
    let point = Vec2::new(52.0, 50.0);

    assert_eq!(world.collision_cast(point, &CastFilter::default()), Some(zone));
    assert_eq!(
        world.collision_cast_all(point, &CastFilter::default()),
        vec![zone, wall]
    );
    assert_eq!(
        world.collision_cast(point, &CastFilter::default().without_triggers()),
        Some(wall)
    );
    assert_eq!(
        world.collision_cast(
            point,
            &CastFilter::default().with_tags(TagFilter::Exclude("Zone".into()))
        ),
        Some(wall)
    );
    assert_eq!(world.collision_cast(Vec2::new(200.0, 200.0), &CastFilter::default()), None);
}

#[test]
fn test_queries_see_manual_only_colliders() {
    let mut world = PhysicsWorld::default();
    let mut collider = Collider::new_circle();
    collider.manual_detect_only = true;
    let key = world.spawn(Entity::new(Vec2::new(30.0, 30.0), Vec2::splat(8.0)).with_collider(collider));
    assert_eq!(
        world.collision_cast(Vec2::new(31.0, 31.0), &CastFilter::default()),
        Some(key)
    );
}

type PointerLog = Arc<Mutex<Vec<(ColliderEvent, EntityKey)>>>;

fn pointer_target(world: &mut PhysicsWorld, interactable: bool) -> (EntityKey, PointerLog) {
    let mut collider = Collider::new_box();
    collider.interactable = interactable;
    let key = world.spawn(Entity::new(Vec2::new(100.0, 100.0), Vec2::splat(20.0)).with_collider(collider));

    let log: PointerLog = Arc::default();
    let target = world.entity_mut(key).unwrap().collider_mut().unwrap();
    for event in [
        ColliderEvent::PointerEnter,
        ColliderEvent::PointerStay,
        ColliderEvent::PointerExit,
        ColliderEvent::PointerDown,
        ColliderEvent::PointerUp,
        ColliderEvent::PointerClick,
    ] {
        let log = Arc::clone(&log);
        target.add_listener(event, move |key| log.lock().push((event, key)));
    }
    (key, log)
}

fn events(log: &PointerLog) -> Vec<ColliderEvent> {
    log.lock().drain(..).map(|(event, _)| event).collect()
}

#[test]
fn test_pointer_press_and_release_clicks() {
    let mut world = PhysicsWorld::default();
    let (button, log) = pointer_target(&mut world, true);
    let over = Vec2::new(100.0, 100.0);

    world.update_pointer(PointerInput {
        position: over,
        pressed: true,
        released: false,
    });
    assert!(log.lock().iter().all(|(_, key)| *key == button));
    assert_eq!(
        events(&log),
        vec![ColliderEvent::PointerEnter, ColliderEvent::PointerDown]
    );

    world.update_pointer(PointerInput {
        position: over,
        pressed: false,
        released: true,
    });
    assert_eq!(
        events(&log),
        vec![
            ColliderEvent::PointerStay,
            ColliderEvent::PointerUp,
            ColliderEvent::PointerClick
        ]
    );

    world.update_pointer(PointerInput {
        position: Vec2::new(300.0, 300.0),
        ..PointerInput::default()
    });
    assert_eq!(events(&log), vec![ColliderEvent::PointerExit]);

    world.update_pointer(PointerInput::default());
    assert!(events(&log).is_empty());
}

#[test]
fn test_pointer_release_without_press_is_not_a_click() {
    let mut world = PhysicsWorld::default();
    let (_, log) = pointer_target(&mut world, true);

    world.update_pointer(PointerInput {
        position: Vec2::new(300.0, 300.0),
        pressed: true,
        released: false,
    });
    assert!(events(&log).is_empty());

    world.update_pointer(PointerInput {
        position: Vec2::new(100.0, 100.0),
        pressed: false,
        released: true,
    });
    assert_eq!(
        events(&log),
        vec![ColliderEvent::PointerEnter, ColliderEvent::PointerUp]
    );
}

#[test]
fn test_pointer_ignores_non_interactable_colliders() {
    let mut world = PhysicsWorld::default();
    let (_, log) = pointer_target(&mut world, false);
    world.update_pointer(PointerInput {
        position: Vec2::new(100.0, 100.0),
        pressed: true,
        released: false,
    });
    assert!(events(&log).is_empty());
}

#[test]
fn test_pointer_reenabled_collider_enters_again() {
    let mut world = PhysicsWorld::default();
    let (button, log) = pointer_target(&mut world, true);
    let over = PointerInput {
        position: Vec2::new(100.0, 100.0),
        ..PointerInput::default()
    };

    world.update_pointer(over);
    assert_eq!(events(&log), vec![ColliderEvent::PointerEnter]);

    let set_interactable = |world: &mut PhysicsWorld, on: bool| {
        world.entity_mut(button).unwrap().collider_mut().unwrap().interactable = on;
    };
    set_interactable(&mut world, false);
    world.update_pointer(over);
    assert!(events(&log).is_empty());

    set_interactable(&mut world, true);
    world.update_pointer(over);
    assert_eq!(events(&log), vec![ColliderEvent::PointerEnter]);
}

#[test]
fn test_world_random_is_seeded_from_config() {
    let config = arcade_physics::WorldConfig {
        seed: Some(99),
        ..Default::default()
    };
    let mut a = PhysicsWorld::new(config.clone()).unwrap();
    let mut b = PhysicsWorld::new(config).unwrap();
    let rolls_a: Vec<i32> = (0..8).map(|_| a.random_mut().range_i32(0, 359)).collect();
    let rolls_b: Vec<i32> = (0..8).map(|_| b.random_mut().range_i32(0, 359)).collect();
    assert_eq!(rolls_a, rolls_b);
    assert_eq!(a.random_mut().range_i32(1, 1), 1);
}

//! Integration tests for the prototype registry.

use drawkit_studio::{Color, Prototype, PrototypeRegistry};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn proto(name: &str, radius: i32, color: Color) -> Prototype {
    Prototype::new(name, radius, color).unwrap()
}

#[test]
fn test_register_overwrite_keeps_key_unique() {
    let mut registry = PrototypeRegistry::new();
    registry.register(proto("X", 10, Color::RED));
    registry.register(proto("X", 20, Color::MINT));

    // lookup("X") returns the replacement, with no duplicate key.
    assert_eq!(registry.lookup("X").unwrap().radius(), 20);
    assert_eq!(registry.lookup("X").unwrap().color(), Color::MINT);
    assert_eq!(registry.keys().len(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_lookup_missing_is_not_found_and_harmless() {
    let mut registry = PrototypeRegistry::new();
    registry.register(proto("Tiny Red", 30, Color::RED));
    let keys_before = registry.keys();

    let err = registry.lookup("missing").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Prototype not found: missing");

    // Registry state is unchanged by the failed lookup.
    assert_eq!(registry.keys(), keys_before);
}

#[test]
fn test_remove_is_non_strict() {
    let mut registry = PrototypeRegistry::new();
    registry.register(proto("A", 10, Color::RED));

    assert!(registry.remove("A"));
    assert!(!registry.contains("A"));
    // Removing an absent key is a documented no-op.
    assert!(!registry.remove("A"));
    assert!(!registry.remove("never existed"));
    assert!(registry.is_empty());
}

#[test]
fn test_keys_snapshot_not_live() {
    let mut registry = PrototypeRegistry::new();
    registry.register(proto("A", 10, Color::RED));
    let snapshot = registry.keys();
    registry.register(proto("B", 10, Color::RED));

    assert_eq!(snapshot, vec!["A"]);
    assert_eq!(registry.keys(), vec!["A", "B"]);
}

#[test]
fn test_spawn_placement_jitter_within_range() {
    let mut registry = PrototypeRegistry::new();
    registry.register(proto("Tiny Red", 30, Color::RED));

    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let shape = registry
            .spawn_placement_with("Tiny Red", 600, 480, &mut rng)
            .unwrap();
        assert_eq!(shape.label(), "Tiny Red copy");
        assert_eq!(shape.radius(), 30);
        assert_eq!(shape.color(), Color::RED);

        // Center (300, 240) +/- 100 per axis; clamp never bites here.
        let pos = shape.position();
        assert!((200..=400).contains(&pos.x), "x out of range: {}", pos.x);
        assert!((140..=340).contains(&pos.y), "y out of range: {}", pos.y);
    }
}

#[test]
fn test_spawn_placement_clamps_small_canvas() {
    let mut registry = PrototypeRegistry::new();
    registry.register(proto("Dot", 5, Color::GRAY));

    // Center (10, 10): most jittered positions fall below the clamp floor.
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let pos = registry
            .spawn_placement_with("Dot", 20, 20, &mut rng)
            .unwrap()
            .position();
        assert!(pos.x >= 40, "x below clamp: {}", pos.x);
        assert!(pos.y >= 40, "y below clamp: {}", pos.y);
        assert!(pos.x <= 110 && pos.y <= 110);
    }
}

#[test]
fn test_spawn_placement_missing_prototype() {
    let registry = PrototypeRegistry::new();
    let err = registry.spawn_placement("ghost", 600, 480).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_spawn_never_mutates_prototype() {
    let mut registry = PrototypeRegistry::new();
    registry.register(proto("Blue Burst", 70, Color::DODGER_BLUE));

    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..10 {
        let mut shape = registry
            .spawn_placement_with("Blue Burst", 600, 480, &mut rng)
            .unwrap();
        shape.set_radius(1).unwrap();
        shape.set_color(Color::GRAY);
    }

    let source = registry.lookup("Blue Burst").unwrap();
    assert_eq!(source.radius(), 70);
    assert_eq!(source.color(), Color::DODGER_BLUE);
}

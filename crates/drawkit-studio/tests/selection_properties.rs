//! Property tests for the canvas selection invariant and hit-testing.

use drawkit_studio::{CanvasModel, Color, Point, ShapeInstance};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add { x: i32, y: i32, radius: i32 },
    /// Select by index into the ids handed out so far (may be stale).
    Select(usize),
    Deselect,
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-500..500i32, -500..500i32, 1..150i32)
            .prop_map(|(x, y, radius)| Op::Add { x, y, radius }),
        (0..64usize).prop_map(Op::Select),
        Just(Op::Deselect),
        (0..64usize).prop_map(Op::Remove),
    ]
}

proptest! {
    /// For any sequence of add/select/remove calls, `selected` is always
    /// either none or a current member of the canvas.
    #[test]
    fn selection_is_always_a_member(ops in proptest::collection::vec(op_strategy(), 1..80)) {
        let mut canvas = CanvasModel::new();
        let mut handed_out: Vec<u64> = Vec::new();

        for op in ops {
            match op {
                Op::Add { x, y, radius } => {
                    let id = canvas.add_instance(ShapeInstance::new(
                        "shape",
                        Point::new(x, y),
                        radius,
                        Color::RED,
                    ));
                    handed_out.push(id);
                }
                Op::Select(i) => {
                    // Possibly-stale ids exercise the membership guard.
                    let id = handed_out.get(i).copied().unwrap_or(u64::MAX);
                    canvas.set_selected(Some(id));
                }
                Op::Deselect => canvas.set_selected(None),
                Op::Remove(i) => {
                    if let Some(&id) = handed_out.get(i) {
                        canvas.remove_instance(id);
                    }
                }
            }

            if let Some(selected) = canvas.selected_id() {
                prop_assert!(
                    canvas.instances().iter().any(|s| s.id() == selected),
                    "selected id {} not on canvas",
                    selected
                );
            }
        }
    }

    /// The center of an instance is always contained; a point at
    /// radius + 1 along an axis never is.
    #[test]
    fn hit_test_center_and_rim(x in -10_000..10_000i32,
                               y in -10_000..10_000i32,
                               radius in 1..1_000i32) {
        let shape = ShapeInstance::new("s", Point::new(x, y), radius, Color::RED);
        prop_assert!(shape.contains(x, y));
        prop_assert!(shape.contains(x + radius, y));
        prop_assert!(!shape.contains(x + radius + 1, y));
        prop_assert!(!shape.contains(x, y - radius - 1));
    }

    /// Clones are value copies: mutating the clone never touches the source.
    #[test]
    fn clone_in_place_is_detached(radius in 1..150i32, new_radius in 1..150i32) {
        let mut canvas = CanvasModel::new();
        let source = canvas.add_instance(ShapeInstance::new(
            "src",
            Point::new(0, 0),
            radius,
            Color::RED,
        ));
        let clone = canvas.clone_in_place(source).unwrap();

        canvas.get_mut(clone).unwrap().set_radius(new_radius).unwrap();
        canvas.get_mut(clone).unwrap().set_color(Color::MINT);

        let src = canvas.get(source).unwrap();
        prop_assert_eq!(src.radius(), radius);
        prop_assert_eq!(src.color(), Color::RED);
    }
}

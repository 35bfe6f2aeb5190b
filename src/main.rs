//! Headless demo: drives the studio core through a short scripted session.
//!
//! There is no UI here by design; this binary shows the wiring a
//! presentation layer would do and logs every studio event it produces.

use drawkit::{init_logging, Color, StudioState};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    tracing::info!(version = drawkit::VERSION, built = drawkit::BUILD_DATE, "drawkit demo");

    let mut studio = StudioState::with_default_prototypes();
    studio.subscribe_events(|event| println!("[studio] {event}"));
    studio.canvas.subscribe_selection(|selected| match selected {
        Some(shape) => println!("[inspector] selected '{}'", shape.label()),
        None => println!("[inspector] - none -"),
    });

    // Clone two prototypes onto the canvas.
    let red = studio.spawn_from_prototype("Tiny Red")?;
    studio.spawn_from_prototype("Blue Burst")?;

    // Drag the red clone 40px right, 25px down.
    let pos = studio
        .canvas
        .get(red)
        .map(|s| s.position())
        .ok_or_else(|| anyhow::anyhow!("spawned shape missing"))?;
    studio.pointer_pressed(pos.x, pos.y);
    studio.pointer_dragged(pos.x + 40, pos.y + 25);
    studio.pointer_released();

    // Double-click duplicates it in place.
    let pos = studio
        .canvas
        .get(red)
        .map(|s| s.position())
        .ok_or_else(|| anyhow::anyhow!("spawned shape missing"))?;
    studio.pointer_double_clicked(pos.x, pos.y);

    // Inspector edits on the current selection.
    studio.apply_color(Color::rgb(255, 215, 0));
    studio.apply_radius(45)?;
    studio.apply_label("Golden");

    for shape in studio.canvas.instances() {
        println!(
            "shape #{}: '{}' at {} r={} {}",
            shape.id(),
            shape.label(),
            shape.position(),
            shape.radius(),
            shape.color()
        );
    }

    Ok(())
}

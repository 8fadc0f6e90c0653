//! Drives a floating action button through an expand/collapse cycle and a
//! press, printing each animation frame to the terminal.
//!
//! Run with: cargo run -p vela-fab --example expand_collapse

use std::time::Duration;

use vela_fab::{FabIcon, FabLabel, FabPose, FloatingActionButton, Size};
use vela_fab_core::TickerHandle;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    // Show trace output from the button and ticker.
    tracing_subscriber::fmt::init();

    let ticker = TickerHandle::new();
    let mut fab = FloatingActionButton::builder()
        .icon(FabIcon::default())
        .label(FabLabel::new("Compose", Size::new(64.0, 20.0)))
        .build(&ticker)
        .expect("icon and label are both set");

    fab.pressed().connect(|_| println!("            >>> pressed"));

    println!("expand: {:?} -> {:?}", fab.pose(), FabPose::IconAndLabel);
    fab.set_pose(FabPose::IconAndLabel).expect("shown pose");
    run_animation(&ticker, &fab);

    // A quick tap while extended; the shadow rises and falls.
    println!("tap:");
    fab.handle_touch_down();
    run_animation(&ticker, &fab);
    fab.handle_touch_up();
    run_animation(&ticker, &fab);

    println!("collapse: {:?} -> {:?}", fab.pose(), FabPose::Icon);
    fab.set_pose(FabPose::Icon).expect("shown pose");
    run_animation(&ticker, &fab);
}

/// Advances the ticker frame by frame until everything settles, printing a
/// crude picture of each frame.
fn run_animation(ticker: &TickerHandle, fab: &FloatingActionButton) {
    let mut elapsed = Duration::ZERO;
    while fab.is_animating() {
        ticker.advance(FRAME);
        elapsed += FRAME;
        print_frame(elapsed, fab);
    }
}

fn print_frame(elapsed: Duration, fab: &FloatingActionButton) {
    let layout = fab.layout();
    let bar = "=".repeat((layout.size.width / 4.0).round() as usize);
    println!(
        "  {:>4}ms [{bar:<40}] {:5.1} x {:4.1}  label opacity {:.2}  elevation {:4.2}",
        elapsed.as_millis(),
        layout.size.width,
        layout.size.height,
        layout.label.opacity,
        fab.rendered_elevation(),
    );
}

//! Scripted construction session: an outer square with a hole, a rejected
//! click or two, then triangulation through the fan stand-in engine.
//!
//! Usage:
//!   cargo run -p polytri --example session
//!
//! Edits are logged at DEBUG, so ignored clicks show their rejection reason.

use polytri::bridge::FanEngine;
use polytri::prelude::*;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .init();

    let clicks: &[(f64, f64)] = &[
        (100.0, 100.0),
        (100.0, 400.0),
        (400.0, 400.0),
        (100.0, 250.0), // on the first edge: ignored
        (400.0, 100.0),
    ];
    let mut engine = PolygonValidityEngine::new();
    for &(x, y) in clicks {
        let _ = engine.try_add_vertex(Point::new(x, y));
    }
    let _ = engine.try_close_polygon();

    for &(x, y) in &[(200.0, 200.0), (200.0, 300.0), (300.0, 300.0), (300.0, 200.0)] {
        let _ = engine.try_add_vertex(Point::new(x, y));
    }
    let _ = engine.try_close_polygon();

    let mut bridge = MarshallingBridge::new(FanEngine::new());
    match engine.triangulate(&mut bridge) {
        Ok(outcome) => println!("{outcome:?}"),
        Err(err) => eprintln!("triangulation failed: {err}"),
    }
    if let Some(triangles) = engine.triangles() {
        for (i, t) in triangles.iter().enumerate() {
            println!("#{i}: {:?} area {:.1}", t.vertices(), t.signed_area().abs());
        }
    }
    println!("hover (150, 120) -> {:?}", engine.triangle_at(Point::new(150.0, 120.0)));
}

//! # Firetrail Demo
//!
//! The full pipeline, headless: a simulated attractor orbits through space,
//! the rope head chases it, the head's path feeds the spline, and each
//! simulated second the trail is resampled into a renderable strip.
//!
//! ## What This Demonstrates
//!
//! - `Firetrail::builder()` configuration
//! - `set_attractor` / `advance` as the per-frame cycle
//! - `sample_positions` + `build_billboard_strip` for the GPU-upload side
//! - Curve length stabilizing once the control-point ring saturates
//!
//! ## Try This
//!
//! - Lower `with_rest_dist` to 0.02 for a denser, shorter-lived trail
//! - Raise `with_node_count` to 200 and watch the length keep growing
//! - Set `with_attractor_strength(0.15)` for a lazier, smoother chase
//!
//! Run with: `cargo run --example firetrail`

use firetrail::prelude::*;

fn main() {
    let mut trail = Firetrail::builder()
        .with_node_count(40)
        .with_particle_count(40)
        .with_rest_dist(0.1)
        .with_sample_count(500)
        .build()
        .expect("valid config");

    let mut attractor = OrbitAttractor::default();
    let mut positions: Vec<Vec3> = Vec::new();
    let mut vertices: Vec<RibbonVertex> = Vec::new();

    // Ten simulated seconds at 60 fps.
    for frame in 0..600u64 {
        trail.set_attractor(attractor.position(frame));
        trail.advance();

        if frame % 60 == 59 {
            trail.sample_positions(&mut positions);
            build_billboard_strip(&positions, &mut vertices);

            let head = trail.rope().particles()[0].position;
            println!(
                "t={:>2}s  curve length {:>7.3}  points {:>2}  strip vertices {:>4}  head ({:+.2}, {:+.2}, {:+.2})",
                (frame + 1) / 60,
                trail.length(),
                trail.spline().written(),
                vertices.len(),
                head.x,
                head.y,
                head.z,
            );
        }
    }
}

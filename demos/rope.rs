//! # Rope Demo
//!
//! A rope on its own: drag the head sideways, then pin it and let gravity
//! take the chain. Prints the per-link spacing so the single-sweep
//! relaxation is visible settling toward the rest length.
//!
//! ## What This Demonstrates
//!
//! - Head-driven `update_head_to_tail` relaxation
//! - Link spacing converging to `link_length` over successive frames
//! - `compute_normals` staying finite through straight and bent states
//!
//! ## Try This
//!
//! - Set `strength` to 0.1 and watch convergence slow right down
//! - Set `inv_friction` to 0.5 for a heavily damped, syrupy chain
//! - Swap in `update_tail_to_head` to bias correction the other way
//!
//! Run with: `cargo run --example rope`

use firetrail::prelude::*;
use rand::Rng;

fn print_links(label: &str, rope: &Rope) {
    let spacing: Vec<String> = rope
        .particles()
        .windows(2)
        .map(|pair| format!("{:.3}", pair[0].position.distance(pair[1].position)))
        .collect();
    println!("{:<12} links: [{}]", label, spacing.join(", "));
}

fn main() {
    let mut rng = rand::thread_rng();
    let mut rope = Rope::new(8);
    rope.link_length = 1.0;

    // Drag the head along +X with a little jitter, no gravity yet.
    for frame in 0..240 {
        let x = 10.0 * (frame + 1) as f32 / 240.0;
        let wobble = rng.gen_range(-0.02..0.02);
        rope.head_mut().position = Vec3::new(x, wobble, 0.0);
        rope.update_head_to_tail();
        rope.compute_normals();

        if frame % 60 == 59 {
            print_links("dragging", &rope);
        }
    }

    // Pin the head and hang.
    let pin = rope.particles()[0].position;
    rope.forces = Vec3::new(0.0, -0.01, 0.0);
    for frame in 0..300 {
        rope.head_mut().position = pin;
        rope.update_head_to_tail();
        rope.compute_normals();

        if frame % 100 == 99 {
            print_links("hanging", &rope);
        }
    }

    let tail = rope.particles().last().unwrap().position;
    println!("tail came to rest at ({:+.2}, {:+.2}, {:+.2})", tail.x, tail.y, tail.z);
}

//! # Spline Resampling Demo
//!
//! The curve engine on its own: push a noisy path one point at a time and
//! query positions back at even arc-length spacing, showing that the spacing
//! the renderer sees stays uniform no matter how unevenly the input arrived.
//!
//! ## What This Demonstrates
//!
//! - Warm-up behavior (queries return zero until four points exist)
//! - Even arc-length spacing from `position_at_length`
//! - The ring buffer forgetting the oldest points once full
//!
//! Run with: `cargo run --example spline_resample`

use firetrail::prelude::*;
use rand::Rng;

fn main() {
    let mut rng = rand::thread_rng();
    let mut spline = Spline::new(16);
    let mut x = 0.0f32;

    for i in 0..40 {
        // Uneven input spacing: between 0.2 and 1.8 units per step.
        x += rng.gen_range(0.2..1.8);
        spline.push_point(Vec3::new(x, (x * 0.4).sin() * 2.0, 0.0));

        if !spline.is_ready() {
            println!("point {:>2}: warming up ({} of 4)", i, spline.written());
            continue;
        }

        if i % 8 == 7 {
            let samples = 8;
            print!("point {:>2}: length {:>6.2}  samples:", i, spline.length());
            let mut prev = spline.position_at_length(0.0);
            for s in 1..samples {
                let arc = spline.length() * s as f32 / (samples - 1) as f32;
                let pos = spline.position_at_length(arc);
                print!(" {:.2}", pos.distance(prev));
                prev = pos;
            }
            println!();
        }
    }
}

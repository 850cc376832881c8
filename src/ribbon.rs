//! Render-facing vertex preparation.
//!
//! The renderer is an external collaborator: it accepts an ordered vertex
//! sequence and owns everything GPU-side (buffers, shaders, textures). This
//! module shapes trail samples into that sequence - a triangle-strip layout
//! with two vertices per sample and alternating texture coordinates, matching
//! a fire-shader ribbon. Vertices are plain-old-data so the host can upload
//! a `&[RibbonVertex]` slice byte-for-byte.
//!
//! Two strip flavors:
//!
//! - [`build_billboard_strip`] duplicates each sample position; the host's
//!   vertex shader spreads the pair apart using `tex_coord.y`.
//! - [`build_ribbon`] offsets the pair on the CPU along per-sample normals,
//!   for hosts that render the strip as-is.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// One trail vertex: position plus strip texture coordinate.
///
/// `tex_coord.x` is the normalized position along the trail (0 at the oldest
/// end), `tex_coord.y` alternates 0/1 across the strip.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct RibbonVertex {
    pub position: Vec3,
    pub tex_coord: Vec2,
}

/// Consumer of per-frame vertex sequences, e.g. a dynamic vertex buffer.
pub trait TrailSink {
    fn submit(&mut self, vertices: &[RibbonVertex]);
}

/// A sink that discards everything. Useful in tests and benches.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TrailSink for NullSink {
    fn submit(&mut self, _vertices: &[RibbonVertex]) {}
}

/// Collecting sink: keeps the most recent submission.
impl TrailSink for Vec<RibbonVertex> {
    fn submit(&mut self, vertices: &[RibbonVertex]) {
        self.clear();
        self.extend_from_slice(vertices);
    }
}

/// Fill `out` with a shader-billboarded triangle strip.
///
/// Emits two coincident vertices per sample with `tex_coord.y` of 0 and 1;
/// the host shader widens the strip. `out` is cleared first and reused, so a
/// warm caller allocates nothing per frame. Fewer than two samples clear
/// `out` and return.
pub fn build_billboard_strip(samples: &[Vec3], out: &mut Vec<RibbonVertex>) {
    out.clear();
    if samples.len() < 2 {
        return;
    }
    let last = (samples.len() - 1) as f32;
    out.reserve(samples.len() * 2);
    for (i, &position) in samples.iter().enumerate() {
        let u = i as f32 / last;
        out.push(RibbonVertex {
            position,
            tex_coord: Vec2::new(u, 0.0),
        });
        out.push(RibbonVertex {
            position,
            tex_coord: Vec2::new(u, 1.0),
        });
    }
}

/// Fill `out` with a CPU-widened ribbon strip.
///
/// Each sample contributes a pair of vertices offset `half_width` along its
/// normal (normals need not be unit length; zero normals collapse the pair).
/// `samples` and `normals` must be equally long - rope particles provide
/// both. Fewer than two samples clear `out` and return.
pub fn build_ribbon(
    samples: &[Vec3],
    normals: &[Vec3],
    half_width: f32,
    out: &mut Vec<RibbonVertex>,
) {
    assert_eq!(
        samples.len(),
        normals.len(),
        "one normal per ribbon sample"
    );
    out.clear();
    if samples.len() < 2 {
        return;
    }
    let last = (samples.len() - 1) as f32;
    out.reserve(samples.len() * 2);
    for (i, (&position, &normal)) in samples.iter().zip(normals).enumerate() {
        let u = i as f32 / last;
        let offset = normal.normalize_or_zero() * half_width;
        out.push(RibbonVertex {
            position: position - offset,
            tex_coord: Vec2::new(u, 0.0),
        });
        out.push(RibbonVertex {
            position: position + offset,
            tex_coord: Vec2::new(u, 1.0),
        });
    }
}

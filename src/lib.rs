//! # Firetrail - flame-trail curves made easy
//!
//! A CPU-side engine for flame-like motion trails that follow a moving
//! attractor point (mouse projection or simulated target). Firetrail keeps
//! the numerics stable at interactive frame rates without ever recomputing a
//! curve from scratch, and hands the renderer plain ordered vertex data.
//!
//! ## Quick Start
//!
//! ```
//! use firetrail::prelude::*;
//!
//! let mut trail = Firetrail::builder()
//!     .with_node_count(40)        // spline control-point ring
//!     .with_particle_count(40)    // rope length
//!     .with_rest_dist(0.1)        // head travel per emitted point
//!     .build()
//!     .expect("valid config");
//!
//! let mut attractor = OrbitAttractor::default();
//! let mut positions = Vec::new();
//! let mut vertices = Vec::new();
//!
//! for frame in 0..240 {
//!     trail.set_attractor(attractor.position(frame));
//!     trail.advance();
//! }
//!
//! trail.sample_positions(&mut positions);
//! build_billboard_strip(&positions, &mut vertices);
//! // `vertices` is Pod data, ready for the host's dynamic vertex buffer.
//! ```
//!
//! ## Core Concepts
//!
//! ### Spline
//!
//! [`Spline`] ingests one 3D point at a time into a fixed-capacity ring and
//! answers "where is the curve `l` units from its oldest end?" in
//! O(capacity). Each push recomputes exactly one arc-length table entry -
//! the Catmull-Rom segment the new point completes - so the work per frame
//! is constant-bounded regardless of how long the trail has been running.
//!
//! ### Rope
//!
//! [`Rope`] is a chain of Verlet particles with a single-iteration distance
//! constraint per adjacent pair. The head particle is externally driven;
//! one relaxation sweep per frame makes the rest of the chain trail behind
//! it with the asymmetric lag that sells the effect. Not physically
//! accurate, and not meant to be.
//!
//! ### Driving loop
//!
//! [`Firetrail`] wires both together: attractor in, evenly spaced sample
//! positions out. Use it as-is, or drive [`Spline`] / [`Rope`] directly -
//! they are independent and share no state.
//!
//! ## What Firetrail does not do
//!
//! Windowing, input dispatch, camera math, GPU upload, shaders, and
//! parameter UI all belong to the host. The crate's outputs are plain
//! `Vec3` sequences and [`RibbonVertex`] slices (`bytemuck::Pod`) that the
//! host uploads however it likes.
//!
//! | Module | Concern |
//! |---------------|---------------------------------------------|
//! | [`spline`] | incremental arc-length curve engine |
//! | [`rope`] | Verlet distance-constrained particle chain |
//! | [`trail`] | per-frame driving loop |
//! | [`ribbon`] | strip vertex preparation for the renderer |
//! | [`attractor`] | simulated per-frame target sources |
//! | [`error`] | configuration validation errors |

pub mod attractor;
pub mod error;
pub mod ribbon;
pub mod rope;
pub mod spline;
pub mod trail;

// Re-export primary API
pub use attractor::{Attractor, FixedAttractor, OrbitAttractor};
pub use bytemuck;
pub use error::ConfigError;
pub use glam::{Vec2, Vec3};
pub use ribbon::{build_billboard_strip, build_ribbon, NullSink, RibbonVertex, TrailSink};
pub use rope::{Rope, RopeParticle};
pub use spline::{catmull_rom, Spline};
pub use trail::{Firetrail, FiretrailBuilder};

/// Convenience imports for the common case.
///
/// ```
/// use firetrail::prelude::*;
/// ```
pub mod prelude {
    pub use crate::attractor::{Attractor, FixedAttractor, OrbitAttractor};
    pub use crate::error::ConfigError;
    pub use crate::ribbon::{
        build_billboard_strip, build_ribbon, NullSink, RibbonVertex, TrailSink,
    };
    pub use crate::rope::{Rope, RopeParticle};
    pub use crate::spline::Spline;
    pub use crate::trail::{Firetrail, FiretrailBuilder};
    pub use crate::{Vec2, Vec3};
}

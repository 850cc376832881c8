//! The trail engine - rope, spline, and the per-frame loop that binds them.
//!
//! [`Firetrail`] owns one [`Rope`] and one [`Spline`] and runs the frame
//! cycle the renderer drives: ease the rope head toward the attractor, relax
//! the chain, feed the head's path into the spline, then resample the curve
//! into evenly spaced positions for upload.
//!
//! # Quick start
//!
//! ```
//! use firetrail::Firetrail;
//! use glam::Vec3;
//!
//! let mut trail = Firetrail::builder()
//!     .with_node_count(40)
//!     .with_particle_count(40)
//!     .with_rest_dist(0.1)
//!     .build()
//!     .unwrap();
//!
//! let mut positions = Vec::new();
//! for frame in 0..120 {
//!     // Normally the pointer/camera projection; simulated here.
//!     trail.set_attractor(Vec3::new(frame as f32 * 0.05, 0.0, 0.0));
//!     trail.advance();
//! }
//! trail.sample_positions(&mut positions);
//! assert!(!positions.is_empty());
//! ```
//!
//! All configuration is validated up front by the builder; per-frame calls
//! never fail. Changing a node or particle count afterwards is destructive,
//! resetting that component's history (see [`Firetrail::set_node_count`] and
//! [`Firetrail::set_particle_count`]).

use glam::Vec3;

use crate::error::ConfigError;
use crate::rope::Rope;
use crate::spline::Spline;

/// Builder for [`Firetrail`]. Defaults mirror an interactive mouse trail:
/// 40 spline nodes, 40 rope particles, 500 resampled positions.
#[derive(Debug, Clone)]
pub struct FiretrailBuilder {
    node_count: usize,
    particle_count: usize,
    attractor_strength: f32,
    rest_dist: f32,
    sample_count: usize,
    inv_friction: f32,
    link_length: f32,
    strength: f32,
    forces: Vec3,
}

impl Default for FiretrailBuilder {
    fn default() -> Self {
        Self {
            node_count: 40,
            particle_count: 40,
            attractor_strength: 1.0,
            rest_dist: 0.1,
            sample_count: 500,
            inv_friction: 0.986,
            link_length: 1.0,
            strength: 0.5,
            forces: Vec3::ZERO,
        }
    }
}

impl FiretrailBuilder {
    /// Spline control-point capacity (minimum 4).
    pub fn with_node_count(mut self, count: usize) -> Self {
        self.node_count = count;
        self
    }

    /// Rope particle count (minimum 3).
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Fraction of the head-to-attractor gap closed per frame, in `(0, 1]`.
    /// 1.0 snaps the head straight onto the attractor.
    pub fn with_attractor_strength(mut self, strength: f32) -> Self {
        self.attractor_strength = strength;
        self
    }

    /// Minimum head travel before a new spline point is emitted. Keeps
    /// duplicate points - and their zero-length curve segments - out of the
    /// lookup table. Must be positive.
    pub fn with_rest_dist(mut self, dist: f32) -> Self {
        self.rest_dist = dist;
        self
    }

    /// Number of evenly spaced positions produced per resampling pass
    /// (minimum 2). A 500-sample trail feeds a 1000-vertex strip.
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    /// Rope damping factor, in `[0, 1]`.
    pub fn with_inv_friction(mut self, inv_friction: f32) -> Self {
        self.inv_friction = inv_friction;
        self
    }

    /// Rope rest distance between adjacent particles.
    pub fn with_link_length(mut self, length: f32) -> Self {
        self.link_length = length;
        self
    }

    /// Rope constraint correction fraction, in `[0, 1]`.
    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    /// Constant rope acceleration, e.g. gravity.
    pub fn with_forces(mut self, forces: Vec3) -> Self {
        self.forces = forces;
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<Firetrail, ConfigError> {
        if self.node_count < 4 {
            return Err(ConfigError::SplineCapacityTooSmall(self.node_count));
        }
        if self.particle_count < 3 {
            return Err(ConfigError::RopeTooShort(self.particle_count));
        }
        if self.sample_count < 2 {
            return Err(ConfigError::SampleCountTooSmall(self.sample_count));
        }
        knob_in_range("attractor_strength", self.attractor_strength, f32::EPSILON, 1.0)?;
        knob_in_range("rest_dist", self.rest_dist, f32::EPSILON, f32::MAX)?;
        knob_in_range("inv_friction", self.inv_friction, 0.0, 1.0)?;
        knob_in_range("strength", self.strength, 0.0, 1.0)?;
        knob_in_range("link_length", self.link_length, 0.0, f32::MAX)?;

        let mut rope = Rope::new(self.particle_count);
        rope.inv_friction = self.inv_friction;
        rope.link_length = self.link_length;
        rope.strength = self.strength;
        rope.forces = self.forces;

        Ok(Firetrail {
            rope,
            spline: Spline::new(self.node_count),
            attractor: Vec3::ZERO,
            attractor_strength: self.attractor_strength,
            rest_dist: self.rest_dist,
            sample_count: self.sample_count,
            last_emitted: None,
            frame: 0,
        })
    }
}

fn knob_in_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ConfigError::InvalidKnob { name, value });
    }
    Ok(())
}

/// The per-frame trail engine.
#[derive(Debug, Clone)]
pub struct Firetrail {
    rope: Rope,
    spline: Spline,
    attractor: Vec3,
    attractor_strength: f32,
    rest_dist: f32,
    sample_count: usize,
    last_emitted: Option<Vec3>,
    frame: u64,
}

impl Firetrail {
    /// Start configuring a trail engine.
    pub fn builder() -> FiretrailBuilder {
        FiretrailBuilder::default()
    }

    /// Set the target the head chases. Call once per frame before
    /// [`Firetrail::advance`].
    #[inline]
    pub fn set_attractor(&mut self, position: Vec3) {
        self.attractor = position;
    }

    /// Run one frame: ease the head toward the attractor, relax the rope,
    /// emit a spline point once the head has travelled `rest_dist`, and
    /// refresh rope normals.
    pub fn advance(&mut self) {
        let target = self.attractor;
        let strength = self.attractor_strength;
        let head = self.rope.head_mut();
        head.position = head.position.lerp(target, strength);

        self.rope.update_head_to_tail();
        self.rope.compute_normals();

        let head_pos = self.rope.particles()[0].position;
        let emit = match self.last_emitted {
            Some(prev) => prev.distance(head_pos) >= self.rest_dist,
            None => true,
        };
        if emit {
            self.spline.push_point(head_pos);
            self.last_emitted = Some(head_pos);
        }
        self.frame += 1;
    }

    /// Fill `out` with `sample_count` evenly spaced positions along the
    /// current curve, oldest end first. `out` is cleared and left empty
    /// while the spline is still warming up (fewer than four emitted
    /// points).
    pub fn sample_positions(&self, out: &mut Vec<Vec3>) {
        out.clear();
        if !self.spline.is_ready() {
            return;
        }
        let total = self.spline.length();
        let last = (self.sample_count - 1) as f32;
        out.reserve(self.sample_count);
        for i in 0..self.sample_count {
            out.push(self.spline.position_at_length(total * i as f32 / last));
        }
    }

    /// Total arc length of the current curve window.
    #[inline]
    pub fn length(&self) -> f32 {
        self.spline.length()
    }

    /// Frames advanced so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Mutable rope access for adjusting knobs (`inv_friction`,
    /// `link_length`, `strength`, `forces`) between frames.
    #[inline]
    pub fn rope_mut(&mut self) -> &mut Rope {
        &mut self.rope
    }

    #[inline]
    pub fn spline(&self) -> &Spline {
        &self.spline
    }

    #[inline]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Change the spline capacity. Destructive: the curve history is
    /// discarded and queries return to the warm-up state.
    pub fn set_node_count(&mut self, count: usize) -> Result<(), ConfigError> {
        if count < 4 {
            return Err(ConfigError::SplineCapacityTooSmall(count));
        }
        self.spline.set_capacity(count);
        self.last_emitted = None;
        Ok(())
    }

    /// Change the rope particle count. Destructive: all particle state is
    /// zeroed; rope knobs are kept.
    pub fn set_particle_count(&mut self, count: usize) -> Result<(), ConfigError> {
        if count < 3 {
            return Err(ConfigError::RopeTooShort(count));
        }
        self.rope.reset(count);
        self.last_emitted = None;
        Ok(())
    }

    /// Change the resampling resolution. Takes effect on the next
    /// [`Firetrail::sample_positions`] call.
    pub fn set_sample_count(&mut self, count: usize) -> Result<(), ConfigError> {
        if count < 2 {
            return Err(ConfigError::SampleCountTooSmall(count));
        }
        self.sample_count = count;
        Ok(())
    }

    /// Change how quickly the head closes on the attractor.
    pub fn set_attractor_strength(&mut self, strength: f32) -> Result<(), ConfigError> {
        knob_in_range("attractor_strength", strength, f32::EPSILON, 1.0)?;
        self.attractor_strength = strength;
        Ok(())
    }

    /// Change the minimum head travel between emitted spline points.
    pub fn set_rest_dist(&mut self, dist: f32) -> Result<(), ConfigError> {
        knob_in_range("rest_dist", dist, f32::EPSILON, f32::MAX)?;
        self.rest_dist = dist;
        Ok(())
    }
}

//! Per-frame attractor sources.
//!
//! The trail follows a single moving 3D target. In an interactive host that
//! target comes from pointer/camera-ray projection; headless runs (demos,
//! tests, benches) use a simulated source instead. Both sides of that split
//! speak through the [`Attractor`] trait.

use glam::Vec3;

/// A source of one target position per frame.
pub trait Attractor {
    /// Target position for the given frame number.
    fn position(&mut self, frame: u64) -> Vec3;
}

/// An attractor that never moves.
#[derive(Debug, Clone, Copy)]
pub struct FixedAttractor(pub Vec3);

impl Attractor for FixedAttractor {
    fn position(&mut self, _frame: u64) -> Vec3 {
        self.0
    }
}

/// A closed Lissajous-style orbit, the simulated stand-in for mouse input.
///
/// Each axis oscillates independently:
/// `center + amplitude * sin(rate * t + phase)`, with `t` advancing by
/// `frame_step` per frame.
#[derive(Debug, Clone, Copy)]
pub struct OrbitAttractor {
    pub center: Vec3,
    pub amplitude: Vec3,
    /// Angular rate per axis, radians per simulated second.
    pub rate: Vec3,
    pub phase: Vec3,
    /// Simulated seconds per frame.
    pub frame_step: f32,
}

impl Default for OrbitAttractor {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            amplitude: Vec3::new(4.0, 2.0, 1.0),
            rate: Vec3::new(1.0, 1.7, 2.3),
            phase: Vec3::new(0.0, 0.5, 1.1),
            frame_step: 1.0 / 60.0,
        }
    }
}

impl Attractor for OrbitAttractor {
    fn position(&mut self, frame: u64) -> Vec3 {
        let t = frame as f32 * self.frame_step;
        let angle = self.rate * t + self.phase;
        self.center + self.amplitude * Vec3::new(angle.x.sin(), angle.y.sin(), angle.z.sin())
    }
}

//! Verlet rope - a distance-constrained particle chain.
//!
//! [`Rope`] models a stylized trailing rope: an ordered chain of particles
//! integrated with position-based Verlet dynamics and kept near a rest
//! spacing by a single-iteration distance constraint per adjacent pair.
//! The head particle (index 0) is never integrated - the caller drives it
//! directly each frame and the rest of the chain follows.
//!
//! ```
//! use firetrail::Rope;
//! use glam::Vec3;
//!
//! let mut rope = Rope::new(8);
//! rope.link_length = 0.5;
//!
//! // Drive the head, relax the chain, read positions back.
//! rope.head_mut().position = Vec3::new(1.0, 0.0, 0.0);
//! rope.update_head_to_tail();
//! let tail = rope.particles().last().unwrap().position;
//! assert!(tail.is_finite());
//! ```
//!
//! One sweep per frame is an approximation, not a converged solve: the chain
//! settles toward the rest spacing over successive frames, and the sweep
//! direction decides which end absorbs correction first. That asymmetry is
//! what gives a dragged trail its look.

use glam::Vec3;

/// Edges shorter than this (cross-product magnitude squared) are treated as
/// collinear when deriving normals.
const COLLINEAR_EPS: f32 = 1e-12;

/// One chain element: current and previous position (implicit velocity) plus
/// a derived normal for ribbon shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopeParticle {
    pub position: Vec3,
    pub prev_position: Vec3,
    /// Updated by [`Rope::compute_normals`]; not normalized.
    pub normal: Vec3,
}

impl Default for RopeParticle {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            prev_position: Vec3::ZERO,
            normal: Vec3::Y,
        }
    }
}

/// A chain of Verlet particles with per-pair distance constraints.
#[derive(Debug, Clone)]
pub struct Rope {
    /// Damping factor in `[0, 1]`; higher keeps more of the implied velocity.
    pub inv_friction: f32,
    /// Rest distance between adjacent particles.
    pub link_length: f32,
    /// Fraction of the constraint correction applied per sweep, in `[0, 1]`.
    pub strength: f32,
    /// Constant per-frame acceleration, e.g. gravity.
    pub forces: Vec3,
    particles: Vec<RopeParticle>,
}

impl Rope {
    /// Create a rope of `particle_count` zeroed particles.
    ///
    /// # Panics
    ///
    /// Panics if `particle_count < 3` - normals need an interior particle.
    pub fn new(particle_count: usize) -> Self {
        let mut rope = Self {
            inv_friction: 0.986,
            link_length: 1.0,
            strength: 0.5,
            forces: Vec3::ZERO,
            particles: Vec::new(),
        };
        rope.reset(particle_count);
        rope
    }

    /// Discard all particle state and reallocate `particle_count` zeroed
    /// particles. Knobs (`inv_friction`, `link_length`, `strength`,
    /// `forces`) are kept.
    ///
    /// # Panics
    ///
    /// Panics if `particle_count < 3`.
    pub fn reset(&mut self, particle_count: usize) {
        assert!(
            particle_count >= 3,
            "rope needs at least 3 particles, got {}",
            particle_count
        );
        self.particles.clear();
        self.particles
            .resize(particle_count, RopeParticle::default());
    }

    /// The externally driven particle. Set its `position` every frame; the
    /// relaxation sweeps never integrate it.
    #[inline]
    pub fn head_mut(&mut self) -> &mut RopeParticle {
        &mut self.particles[0]
    }

    /// Read-only view of the chain, head first.
    #[inline]
    pub fn particles(&self) -> &[RopeParticle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// One relaxation sweep from the particle after the head toward the
    /// tail. The head stays where the caller put it.
    pub fn update_head_to_tail(&mut self) {
        for i in 1..self.particles.len() {
            self.relax(i, i - 1);
        }
    }

    /// One relaxation sweep from the particle before the tail toward the
    /// head. The tail holds still; the head is integrated like any other
    /// particle in this direction.
    pub fn update_tail_to_head(&mut self) {
        if self.particles.len() < 2 {
            return;
        }
        for i in (0..self.particles.len() - 1).rev() {
            self.relax(i, i + 1);
        }
    }

    /// Verlet step plus one distance-constraint correction against the
    /// already-updated neighbor.
    fn relax(&mut self, i: usize, anchor: usize) {
        let p = self.particles[i];
        let next =
            p.position * (1.0 + self.inv_friction) - p.prev_position * self.inv_friction
                + self.forces;
        self.particles[i].prev_position = p.position;
        self.particles[i].position = next;

        let delta = self.particles[i].position - self.particles[anchor].position;
        let delta_length = delta.length();
        // Coincident particles get no correction instead of a NaN.
        let ratio = if delta_length > 0.0 {
            (delta_length - self.link_length) / delta_length
        } else {
            0.0
        };
        let correction = delta * (ratio * self.strength);
        self.particles[anchor].position += correction;
        self.particles[i].position -= correction;
    }

    /// Derive interior normals from the cross product of adjacent edges.
    ///
    /// Near-collinear edges keep the previous normal, so a straight chain
    /// stays temporally coherent. Endpoints copy their nearest interior
    /// neighbor. No-op below three particles.
    pub fn compute_normals(&mut self) {
        let n = self.particles.len();
        if n < 3 {
            return;
        }
        for i in 1..n - 1 {
            let a = self.particles[i - 1].position - self.particles[i].position;
            let b = self.particles[i + 1].position - self.particles[i].position;
            let cross = a.cross(b);
            if cross.length_squared() > COLLINEAR_EPS {
                self.particles[i].normal = cross;
            }
        }
        self.particles[0].normal = self.particles[1].normal;
        self.particles[n - 1].normal = self.particles[n - 2].normal;
    }
}

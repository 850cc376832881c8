//! Incremental Catmull-Rom curve engine with arc-length parameterization.
//!
//! [`Spline`] ingests a continuous stream of 3D points into a fixed-capacity
//! ring buffer and maintains a parallel lookup table of per-segment arc
//! lengths, so that positions can be queried by distance along the curve at
//! interactive rates without ever recomputing the whole curve.
//!
//! # Usage
//!
//! ```
//! use firetrail::Spline;
//! use glam::Vec3;
//!
//! let mut spline = Spline::new(40);
//!
//! // Feed one attractor position per frame.
//! for i in 0..10 {
//!     spline.push_point(Vec3::new(i as f32, 0.0, 0.0));
//! }
//!
//! // Query evenly spaced positions for rendering.
//! let mid = spline.position_at_length(spline.length() * 0.5);
//! assert!(mid.is_finite());
//! ```
//!
//! # How it works
//!
//! Pushing a point is pushing `p3` of a Catmull-Rom window: it completes
//! exactly one new curve segment, so exactly one lookup entry is recomputed
//! (50-step numeric integration of the basis). The total curve length is then
//! resummed over the whole valid window rather than accumulated
//! incrementally, which keeps the ring overwrite of stale entries drift-free
//! at O(capacity) cost per push.
//!
//! A query is only meaningful once four points have been written (one full
//! control window); before that, [`Spline::position_at_length`] returns
//! `Vec3::ZERO` as a warm-up value.

use glam::Vec3;

/// Number of uniform samples used to integrate one segment's arc length.
const ARC_LENGTH_STEPS: usize = 50;

/// A fixed-capacity, incrementally updated Catmull-Rom curve.
///
/// Control points live in a ring buffer: once `capacity` points have been
/// written, each new push silently overwrites the oldest point. All storage
/// is allocated at construction; pushing and querying never allocate.
#[derive(Debug, Clone)]
pub struct Spline {
    /// Control point ring.
    points: Vec<Vec3>,
    /// Arc length of the segment whose `p2` control point sits at this slot.
    arc_length_lookup: Vec<f32>,
    /// Slot of the most recently written point.
    insert_index: usize,
    /// Points written so far, saturating at capacity.
    written: usize,
    /// Cached sum of all valid lookup entries.
    curve_length: f32,
}

impl Spline {
    /// Create a spline with room for `capacity` control points.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < 4` - a Catmull-Rom segment needs a full
    /// four-point window.
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity >= 4,
            "spline capacity must be at least 4, got {}",
            capacity
        );
        Self {
            points: vec![Vec3::ZERO; capacity],
            arc_length_lookup: vec![0.0; capacity],
            insert_index: capacity - 1,
            written: 0,
            curve_length: 0.0,
        }
    }

    /// Append a control point, overwriting the oldest once full.
    ///
    /// Recomputes the arc length of the one segment completed by this point
    /// and refreshes the cached total curve length.
    pub fn push_point(&mut self, pt: Vec3) {
        let n = self.points.len();

        self.insert_index = (self.insert_index + 1) % n;
        if self.written < n {
            self.written += 1;
        }
        self.points[self.insert_index] = pt;

        if self.written > 3 {
            // The new point is p3 of the newest window; its segment entry
            // lives at the slot of p2.
            let p0 = self.points[(self.insert_index + n - 3) % n];
            let p1 = self.points[(self.insert_index + n - 2) % n];
            let p2 = self.points[(self.insert_index + n - 1) % n];
            self.arc_length_lookup[(self.insert_index + n - 1) % n] =
                compute_arc_length(p0, p1, p2, pt, ARC_LENGTH_STEPS);

            // Full resum of the valid window. Slots outside it hold stale
            // entries from overwritten segments and must never be counted.
            let start = self.oldest_segment_slot();
            let mut total = 0.0;
            for i in 0..self.segment_count() {
                total += self.arc_length_lookup[(start + i) % n];
            }
            self.curve_length = total;
        }
    }

    /// Position at `length` units along the curve from its oldest end.
    ///
    /// Returns `Vec3::ZERO` while fewer than four points have been written.
    /// A `length` beyond [`Spline::length`] extrapolates the newest segment
    /// past `t = 1`; a degenerate zero-length segment resolves to its start
    /// rather than dividing by zero.
    pub fn position_at_length(&self, length: f32) -> Vec3 {
        if self.written < 4 {
            return Vec3::ZERO;
        }

        let n = self.points.len();
        let start = self.oldest_segment_slot();

        let mut walked = 0.0;
        let mut seg_arc = 0.0;
        let mut slot = start;
        let mut found = false;
        for i in 0..self.segment_count() {
            slot = (start + i) % n;
            seg_arc = self.arc_length_lookup[slot];
            if walked + seg_arc > length {
                found = true;
                break;
            }
            walked += seg_arc;
        }
        if !found {
            // Past the end of the curve: rewind onto the newest segment so
            // the local parameter extrapolates beyond 1.
            walked -= seg_arc;
        }

        let t = if seg_arc > 0.0 {
            (length - walked) / seg_arc
        } else {
            0.0
        };

        catmull_rom(
            self.points[(slot + n - 2) % n],
            self.points[(slot + n - 1) % n],
            self.points[slot],
            self.points[(slot + 1) % n],
            t,
        )
    }

    /// Total arc length of the currently valid curve window.
    #[inline]
    pub fn length(&self) -> f32 {
        self.curve_length
    }

    /// Control point capacity of the ring.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    /// Points written so far, saturating at capacity.
    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Whether enough points have been written for queries to be defined.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.written >= 4
    }

    /// Forget all points, keeping the current capacity.
    pub fn reset(&mut self) {
        self.insert_index = self.points.len() - 1;
        self.written = 0;
        self.curve_length = 0.0;
    }

    /// Reallocate for a new capacity, discarding all points.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < 4`.
    pub fn set_capacity(&mut self, capacity: usize) {
        assert!(
            capacity >= 4,
            "spline capacity must be at least 4, got {}",
            capacity
        );
        self.points = vec![Vec3::ZERO; capacity];
        self.arc_length_lookup = vec![0.0; capacity];
        self.insert_index = capacity - 1;
        self.written = 0;
        self.curve_length = 0.0;
    }

    /// Valid segments in the window: each needs a four-point window of its own.
    #[inline]
    fn segment_count(&self) -> usize {
        self.written - 3
    }

    /// Lookup slot of the oldest valid segment.
    #[inline]
    fn oldest_segment_slot(&self) -> usize {
        let n = self.points.len();
        (self.insert_index + 3 + n - self.written) % n
    }
}

/// Uniform Catmull-Rom basis through `p1..p2` with tangents from `p0`/`p3`.
pub fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    (p1 * 2.0
        + (p2 - p0) * t
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t * t
        + (p1 * 3.0 + p3 - p0 - p2 * 3.0) * t * t * t)
        * 0.5
}

/// Chord-summed arc length of one segment at fixed resolution.
///
/// Samples the basis at `steps` uniform parameter values across `[0, 1]` and
/// sums the straight-line distances between consecutive samples. No adaptive
/// refinement; the first sample coincides with `p1`.
fn compute_arc_length(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, steps: usize) -> f32 {
    let mut length = 0.0;
    let mut prev = p1;
    for i in 0..steps {
        let t = i as f32 / (steps - 1) as f32;
        let next = catmull_rom(p0, p1, p2, p3, t);
        length += next.distance(prev);
        prev = next;
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    /// Pushes `count` collinear points spaced one unit apart along +X.
    fn collinear_spline(capacity: usize, count: usize) -> Spline {
        let mut spline = Spline::new(capacity);
        for i in 0..count {
            spline.push_point(Vec3::new(i as f32, 0.0, 0.0));
        }
        spline
    }

    #[test]
    fn basis_passes_through_inner_points() {
        let p0 = Vec3::new(-1.0, 2.0, 0.0);
        let p1 = Vec3::new(0.0, 0.0, 1.0);
        let p2 = Vec3::new(1.0, 3.0, 0.0);
        let p3 = Vec3::new(2.0, 1.0, -1.0);

        assert!(catmull_rom(p0, p1, p2, p3, 0.0).distance(p1) < TOLERANCE);
        assert!(catmull_rom(p0, p1, p2, p3, 1.0).distance(p2) < TOLERANCE);
    }

    #[test]
    fn basis_is_linear_for_uniform_collinear_points() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(1.0, 0.0, 0.0);
        let p2 = Vec3::new(2.0, 0.0, 0.0);
        let p3 = Vec3::new(3.0, 0.0, 0.0);

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let p = catmull_rom(p0, p1, p2, p3, t);
            assert!((p.x - (1.0 + t)).abs() < TOLERANCE);
            assert!(p.y.abs() < TOLERANCE);
        }
    }

    #[test]
    fn queries_return_zero_before_four_points() {
        let spline = collinear_spline(10, 3);
        assert!(!spline.is_ready());
        assert_eq!(spline.length(), 0.0);
        assert_eq!(spline.position_at_length(0.0), Vec3::ZERO);
        assert_eq!(spline.position_at_length(5.0), Vec3::ZERO);
    }

    #[test]
    fn golden_length_five_collinear_points() {
        // Two valid segments of one unit each; the 50-step integration is
        // exact on a straight line.
        let spline = collinear_spline(10, 5);
        assert!((spline.length() - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn length_zero_is_curve_start() {
        let spline = collinear_spline(10, 5);
        // The curve spans the inner control points: it starts at the second
        // point of the oldest window, x = 1.
        let start = spline.position_at_length(0.0);
        assert!(start.distance(Vec3::new(1.0, 0.0, 0.0)) < TOLERANCE);
    }

    #[test]
    fn traversal_is_monotone() {
        // On a straight curve the arc parameter maps to x exactly, so
        // samples must advance monotonically with uniform spacing.
        let spline = collinear_spline(16, 12);
        let steps = 100;
        let mut prev = spline.position_at_length(0.0);
        for i in 1..=steps {
            let arc = spline.length() * i as f32 / steps as f32;
            let pos = spline.position_at_length(arc);
            let spacing = pos.x - prev.x;
            assert!(spacing > 0.0, "sample {} moved backwards", i);
            assert!((spacing - spline.length() / steps as f32).abs() < 1e-3);
            prev = pos;
        }
    }

    #[test]
    fn traversal_is_continuous_on_curved_input() {
        let mut spline = Spline::new(16);
        for i in 0..12 {
            let a = i as f32 * 0.7;
            spline.push_point(Vec3::new(a.cos() * 3.0, a.sin() * 3.0, i as f32 * 0.2));
        }

        // Dense samples stay close together: no index jumps across segment
        // boundaries even though parameter speed varies within a segment.
        let steps = 200;
        let step_arc = spline.length() / steps as f32;
        let mut prev = spline.position_at_length(0.0);
        for i in 1..=steps {
            let pos = spline.position_at_length(step_arc * i as f32);
            assert!(pos.distance(prev) < step_arc * 4.0 + 1e-3);
            prev = pos;
        }
    }

    #[test]
    fn ring_overwrites_oldest_point() {
        let mut spline = collinear_spline(6, 6);
        let before = spline.position_at_length(0.0);

        // One more push evicts x=0; the oldest window shifts right by one.
        spline.push_point(Vec3::new(6.0, 0.0, 0.0));
        let after = spline.position_at_length(0.0);

        assert!(before.distance(Vec3::new(1.0, 0.0, 0.0)) < TOLERANCE);
        assert!(after.distance(Vec3::new(2.0, 0.0, 0.0)) < TOLERANCE);
        // Length stays at capacity-bounded window size.
        assert!((spline.length() - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn saturated_ring_keeps_constant_segment_count() {
        let mut spline = collinear_spline(8, 8);
        let full_length = spline.length();
        for i in 8..40 {
            spline.push_point(Vec3::new(i as f32, 0.0, 0.0));
            assert!((spline.length() - full_length).abs() < TOLERANCE);
        }
    }

    #[test]
    fn beyond_total_length_extrapolates_last_segment() {
        let spline = collinear_spline(10, 5);
        let end = spline.position_at_length(spline.length());
        let beyond = spline.position_at_length(spline.length() + 0.5);

        // Curve ends at x = 3; extrapolation continues along the line.
        assert!(end.distance(Vec3::new(3.0, 0.0, 0.0)) < TOLERANCE);
        assert!(beyond.x > end.x + 0.25);
        assert!(beyond.is_finite());
    }

    #[test]
    fn duplicate_points_do_not_produce_nan() {
        let mut spline = Spline::new(8);
        for _ in 0..6 {
            spline.push_point(Vec3::new(2.0, 1.0, 0.0));
        }
        assert_eq!(spline.length(), 0.0);
        let p = spline.position_at_length(0.0);
        assert!(p.is_finite());
        let q = spline.position_at_length(1.0);
        assert!(q.is_finite());
    }

    #[test]
    fn reset_forgets_points_and_keeps_capacity() {
        let mut spline = collinear_spline(10, 10);
        spline.reset();
        assert_eq!(spline.capacity(), 10);
        assert_eq!(spline.written(), 0);
        assert_eq!(spline.position_at_length(0.0), Vec3::ZERO);
    }

    #[test]
    fn set_capacity_discards_history() {
        let mut spline = collinear_spline(10, 10);
        spline.set_capacity(20);
        assert_eq!(spline.capacity(), 20);
        assert!(!spline.is_ready());
    }

    #[test]
    #[should_panic(expected = "at least 4")]
    fn capacity_below_window_size_panics() {
        let _ = Spline::new(3);
    }
}

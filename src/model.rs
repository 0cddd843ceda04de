//! Point set model
//!
//! Owns the animated point set: a fixed-capacity contiguous array sized at
//! reset time. Cardinality is constant between resets; a resize is a reset
//! that reallocates wholesale. The per-step update rule is a deterministic
//! constant-velocity integration with reflection at the world bounds, so
//! identical seeds replay identical trajectories.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Speed range used when scattering velocities at reset, world units/second
const SCATTER_SPEED: f32 = 40.0;

/// A single animated point. Identity is the index in the owning slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Position in world coordinates
    pub position: [f32; 2],
    /// Velocity in world units per second
    pub velocity: [f32; 2],
}

impl Point {
    /// Create a stationary point at the given position
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: [x, y],
            velocity: [0.0, 0.0],
        }
    }

    /// Set the velocity
    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = [vx, vy];
        self
    }
}

/// How a reset seeds the scatter.
///
/// `Fixed` replays are fully reproducible. `Entropy` draws one seed from the
/// thread RNG at reset time; after that the update rule is deterministic
/// either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Deterministic scatter from the given seed
    Fixed(u64),
    /// Fresh seed drawn at reset time
    Entropy,
}

impl SeedPolicy {
    fn rng(self) -> StdRng {
        match self {
            SeedPolicy::Fixed(seed) => StdRng::seed_from_u64(seed),
            SeedPolicy::Entropy => {
                let seed: u64 = rand::random();
                debug!(seed, "seeding point scatter from entropy");
                StdRng::seed_from_u64(seed)
            }
        }
    }
}

/// Owns the current positions and velocities of the animated points
#[derive(Debug, Clone)]
pub struct PointSetModel {
    points: Vec<Point>,
    bounds: [f32; 2],
}

impl PointSetModel {
    /// Create an empty model for the given world bounds
    pub fn new(bounds: [f32; 2]) -> Self {
        Self {
            points: Vec::new(),
            bounds,
        }
    }

    /// Replace all points with a fresh scatter of `count` points.
    ///
    /// Positions are uniform over the world bounds, velocities uniform in
    /// `-SCATTER_SPEED..SCATTER_SPEED` per axis. The backing array is
    /// reallocated wholesale.
    pub fn reset(&mut self, count: usize, policy: SeedPolicy) {
        let mut rng = policy.rng();
        let [w, h] = self.bounds;
        self.points = (0..count)
            .map(|_| {
                Point::at(rng.gen_range(0.0..w), rng.gen_range(0.0..h)).with_velocity(
                    rng.gen_range(-SCATTER_SPEED..SCATTER_SPEED),
                    rng.gen_range(-SCATTER_SPEED..SCATTER_SPEED),
                )
            })
            .collect();
    }

    /// Replace all points with an explicit set
    pub fn reset_to(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    /// Advance every point by one step of duration `dt` seconds.
    ///
    /// `dt <= 0` is a no-op so zero-length catch-up steps are tolerated.
    /// Points reflect off the world bounds, flipping the velocity component
    /// on the crossed axis.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        for point in &mut self.points {
            for axis in 0..2 {
                let mut p = point.position[axis] + point.velocity[axis] * dt;
                let limit = self.bounds[axis];
                // A displacement larger than the world crosses a wall more
                // than once; fold until the position is back inside
                while p < 0.0 || p > limit {
                    if p < 0.0 {
                        p = -p;
                    } else {
                        p = 2.0 * limit - p;
                    }
                    point.velocity[axis] = -point.velocity[axis];
                }
                point.position[axis] = p;
            }
        }
    }

    /// Current points, in index order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// World bounds as `[width, height]`
    pub fn bounds(&self) -> [f32; 2] {
        self.bounds
    }
}

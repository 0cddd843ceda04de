//! Animation configuration
//!
//! `AnimationConfig` carries everything the core recognizes: point count,
//! fixed step duration, the catch-up cap, marker toggle, and the world
//! bounds the points live in. Configs can be loaded from a JSON file and
//! individually overridden by CLI flags.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnimationError, AnimationResult};

/// Default number of animated points (matches the minimum the original used)
pub const DEFAULT_POINT_COUNT: usize = 100;

/// Default fixed simulation step: 60 steps per second
pub const DEFAULT_FIXED_STEP: f64 = 1.0 / 60.0;

/// Default catch-up cap per visual frame (spiral-of-death guard)
pub const DEFAULT_MAX_STEPS_PER_FRAME: u32 = 5;

/// Default point circle radius in world units
pub const DEFAULT_POINT_RADIUS: f32 = 8.0;

/// Configuration recognized by the animation core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Number of points in the set (constant between resets)
    pub point_count: usize,
    /// Fixed simulation step duration in seconds
    pub fixed_step: f64,
    /// Maximum simulation steps drained per visual frame
    pub max_steps_per_frame: u32,
    /// Whether the centroid marker is drawn
    pub centroid_marker_enabled: bool,
    /// World width; points live in 0..width
    pub width: f32,
    /// World height; points live in 0..height
    pub height: f32,
    /// Point circle radius in world units
    pub point_radius: f32,
    /// RGBA color for the point set
    pub point_color: [f32; 4],
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            fixed_step: DEFAULT_FIXED_STEP,
            max_steps_per_frame: DEFAULT_MAX_STEPS_PER_FRAME,
            centroid_marker_enabled: true,
            width: 800.0,
            height: 800.0,
            point_radius: DEFAULT_POINT_RADIUS,
            point_color: [0.3, 0.65, 1.0, 1.0],
        }
    }
}

impl AnimationConfig {
    /// Load a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> AnimationResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// World bounds as `[width, height]`
    pub fn bounds(&self) -> [f32; 2] {
        [self.width, self.height]
    }

    /// Reject configurations the loop cannot run with
    pub fn validate(&self) -> AnimationResult<()> {
        if self.point_count == 0 {
            return Err(AnimationError::InvalidConfig(
                "point_count must be greater than zero".into(),
            ));
        }
        if !self.fixed_step.is_finite() || self.fixed_step <= 0.0 {
            return Err(AnimationError::InvalidConfig(
                "fixed_step must be a positive number of seconds".into(),
            ));
        }
        if self.max_steps_per_frame == 0 {
            return Err(AnimationError::InvalidConfig(
                "max_steps_per_frame must be at least 1".into(),
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(AnimationError::InvalidConfig(
                "world bounds must be positive".into(),
            ));
        }
        if self.point_radius <= 0.0 {
            return Err(AnimationError::InvalidConfig(
                "point_radius must be positive".into(),
            ));
        }
        Ok(())
    }
}

//! centroid-viz - real-time centroid animation over a double-buffered
//! WebGPU point renderer.
//!
//! Points move under a deterministic fixed-timestep update rule; their
//! centroid is recomputed each step; both are rendered through an instanced
//! circle pipeline at a visual rate decoupled from the simulation rate.

pub mod centroid;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod gpu;
pub mod model;

pub use centroid::centroid;
pub use clock::{ClockAdvance, SimulationClock};
pub use config::AnimationConfig;
pub use controller::{AnimationController, ControllerState, FrameSink};
pub use error::{AnimationError, AnimationResult};
pub use model::{Point, PointSetModel, SeedPolicy};

//! Animation controller
//!
//! Orchestrates one visual frame: drain the clock's due fixed steps, update
//! the model per step, recompute the centroid, write the back geometry
//! slot, swap, and hand the front slot to the frame sink. A single logical
//! thread drives the loop; the double buffer in `gpu::geometry` is the only
//! concurrency-relevant boundary.

use tracing::{debug, error, info, warn};

use crate::centroid::centroid;
use crate::clock::SimulationClock;
use crate::config::AnimationConfig;
use crate::error::AnimationError;
use crate::gpu::geometry::{FrameGeometry, GeometryBuffer, GeometryStyle};
use crate::gpu::renderer::RenderPipeline;
use crate::model::{Point, PointSetModel, SeedPolicy};

/// Consumer of the front geometry slot.
///
/// `RenderPipeline` is the production implementation; tests substitute a
/// recording sink. Implementations must not retain the frame borrow past
/// the call, which the signature already enforces.
pub trait FrameSink {
    /// Render one frame of geometry
    fn draw(&mut self, frame: &FrameGeometry) -> Result<(), AnimationError>;
}

impl FrameSink for RenderPipeline {
    fn draw(&mut self, frame: &FrameGeometry) -> Result<(), AnimationError> {
        // A reset may have grown the point set past the capacity the
        // pipeline was built with; reallocate to match before uploading
        let count = frame.points().len() as u32;
        if count > self.max_points() {
            self.resize(count);
        }
        RenderPipeline::draw(self, frame)
    }
}

/// Lifecycle of the animation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Before the first frame
    Idle,
    /// Steady loop
    Running,
    /// After shutdown or an unrecoverable render failure
    Stopped,
}

/// Drives the simulate/write/swap/draw sequence each visual frame
pub struct AnimationController {
    model: PointSetModel,
    clock: SimulationClock,
    geometry: GeometryBuffer,
    config: AnimationConfig,
    state: ControllerState,
}

impl AnimationController {
    /// Build a controller from a validated configuration
    pub fn new(config: AnimationConfig) -> Result<Self, AnimationError> {
        config.validate()?;
        let style = GeometryStyle {
            point_radius: config.point_radius,
            point_color: config.point_color,
        };
        Ok(Self {
            model: PointSetModel::new(config.bounds()),
            clock: SimulationClock::new(config.fixed_step, config.max_steps_per_frame),
            geometry: GeometryBuffer::new(config.point_count, style),
            config,
            state: ControllerState::Idle,
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Current points, in index order
    pub fn points(&self) -> &[Point] {
        self.model.points()
    }

    /// Seed the point set and enter the steady loop.
    ///
    /// Only valid from `Idle`; calling in any other state is ignored.
    pub fn start(&mut self, policy: SeedPolicy) {
        if self.state != ControllerState::Idle {
            warn!(state = ?self.state, "start ignored outside Idle");
            return;
        }
        self.model.reset(self.config.point_count, policy);
        self.state = ControllerState::Running;
        info!(points = self.model.len(), "animation started");
    }

    /// Replace the point set with a fresh scatter, possibly resized.
    ///
    /// A resize is a wholesale reset, never a mid-frame mutation: the
    /// geometry slots are reallocated for the new cardinality.
    pub fn reset(&mut self, count: usize, policy: SeedPolicy) {
        self.model.reset(count, policy);
        if count != self.config.point_count {
            self.config.point_count = count;
            self.geometry.reallocate(count);
        }
        info!(points = count, "point set reset");
    }

    /// Replace the point set with explicit points
    pub fn reset_to(&mut self, points: Vec<Point>) {
        let count = points.len();
        self.model.reset_to(points);
        if count != self.config.point_count {
            self.config.point_count = count;
            self.geometry.reallocate(count);
        }
    }

    /// Execute one visual frame.
    ///
    /// Ignored unless `Running`. Frame-local draw failures skip the frame
    /// and keep the loop alive; any other draw failure transitions to
    /// `Stopped`. Returns the state after the tick.
    pub fn tick(&mut self, frame_delta: f64, sink: &mut impl FrameSink) -> ControllerState {
        if self.state != ControllerState::Running {
            return self.state;
        }

        let advance = self.clock.advance(frame_delta);
        if advance.overloaded() {
            warn!(
                steps = advance.steps,
                discarded = advance.discarded,
                "simulation clock overloaded, dropping catch-up time"
            );
        }
        for _ in 0..advance.steps {
            self.model.update(self.clock.fixed_step() as f32);
        }

        let marker = if self.config.centroid_marker_enabled {
            match centroid(self.model.points()) {
                Ok(c) => Some(c),
                Err(AnimationError::EmptyPointSet) => {
                    debug!("empty point set, skipping centroid marker");
                    None
                }
                Err(_) => None,
            }
        } else {
            None
        };

        self.geometry.write_back(self.model.points(), marker);
        self.geometry.swap();

        match sink.draw(self.geometry.front()) {
            Ok(()) => {}
            Err(err) if err.is_frame_local() => {
                warn!(error = %err, "skipping frame");
            }
            Err(err) => {
                error!(error = %err, "fatal render error, stopping animation");
                self.state = ControllerState::Stopped;
            }
        }

        self.state
    }

    /// Leave the loop cooperatively: the current frame has already finished
    /// when this is called, and no further ticks execute.
    pub fn shutdown(&mut self) {
        if self.state == ControllerState::Running {
            info!("animation stopped");
        }
        self.state = ControllerState::Stopped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<(usize, Option<[f32; 2]>)>,
        next_error: Option<AnimationError>,
    }

    impl FrameSink for RecordingSink {
        fn draw(&mut self, frame: &FrameGeometry) -> Result<(), AnimationError> {
            if let Some(err) = self.next_error.take() {
                return Err(err);
            }
            self.frames
                .push((frame.points().len(), frame.marker().map(|m| m.position)));
            Ok(())
        }
    }

    fn controller(fixed_step: f64) -> AnimationController {
        AnimationController::new(AnimationConfig {
            fixed_step,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_tick_before_start_is_ignored() {
        let mut ctrl = controller(0.1);
        let mut sink = RecordingSink::default();
        assert_eq!(ctrl.tick(0.5, &mut sink), ControllerState::Idle);
        assert!(sink.frames.is_empty());
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut ctrl = controller(0.1);
        ctrl.start(SeedPolicy::Fixed(1));
        assert_eq!(ctrl.state(), ControllerState::Running);
        let first = ctrl.points().to_vec();

        // Ignored: the running point set is untouched
        ctrl.start(SeedPolicy::Fixed(2));
        assert_eq!(ctrl.points(), &first[..]);
    }

    #[test]
    fn test_frame_with_no_due_steps_still_draws() {
        let mut ctrl = controller(0.1);
        ctrl.start(SeedPolicy::Fixed(1));
        let mut sink = RecordingSink::default();

        ctrl.tick(0.01, &mut sink);
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(sink.frames[0].0, ctrl.points().len());
    }

    #[test]
    fn test_marker_disabled_by_config() {
        let mut ctrl = AnimationController::new(AnimationConfig {
            centroid_marker_enabled: false,
            ..Default::default()
        })
        .unwrap();
        ctrl.start(SeedPolicy::Fixed(1));
        let mut sink = RecordingSink::default();

        ctrl.tick(0.1, &mut sink);
        assert_eq!(sink.frames[0].1, None);
    }

    #[test]
    fn test_empty_point_set_skips_marker_only() {
        let mut ctrl = controller(0.1);
        ctrl.start(SeedPolicy::Fixed(1));
        ctrl.reset_to(Vec::new());
        let mut sink = RecordingSink::default();

        assert_eq!(ctrl.tick(0.1, &mut sink), ControllerState::Running);
        assert_eq!(sink.frames[0], (0, None));
    }

    #[test]
    fn test_layout_mismatch_skips_frame_and_continues() {
        let mut ctrl = controller(0.1);
        ctrl.start(SeedPolicy::Fixed(1));
        let mut sink = RecordingSink::default();
        sink.next_error = Some(AnimationError::LayoutMismatch {
            expected: 64,
            actual: 96,
        });

        assert_eq!(ctrl.tick(0.1, &mut sink), ControllerState::Running);
        assert!(sink.frames.is_empty());

        assert_eq!(ctrl.tick(0.1, &mut sink), ControllerState::Running);
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn test_fatal_render_error_stops() {
        let mut ctrl = controller(0.1);
        ctrl.start(SeedPolicy::Fixed(1));
        let mut sink = RecordingSink::default();
        sink.next_error = Some(AnimationError::NoAdapter);

        assert_eq!(ctrl.tick(0.1, &mut sink), ControllerState::Stopped);
        // Stopped: no further ticks execute
        assert_eq!(ctrl.tick(0.1, &mut sink), ControllerState::Stopped);
        assert!(sink.frames.is_empty());
    }

    #[test]
    fn test_shutdown_is_cooperative() {
        let mut ctrl = controller(0.1);
        ctrl.start(SeedPolicy::Fixed(1));
        let mut sink = RecordingSink::default();

        ctrl.tick(0.1, &mut sink);
        ctrl.shutdown();
        assert_eq!(ctrl.state(), ControllerState::Stopped);

        ctrl.tick(0.1, &mut sink);
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn test_reset_resizes_wholesale() {
        let mut ctrl = controller(0.1);
        ctrl.start(SeedPolicy::Fixed(1));
        assert_eq!(ctrl.points().len(), 100);

        ctrl.reset(150, SeedPolicy::Fixed(2));
        assert_eq!(ctrl.points().len(), 150);

        let mut sink = RecordingSink::default();
        ctrl.tick(0.1, &mut sink);
        assert_eq!(sink.frames[0].0, 150);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = AnimationController::new(AnimationConfig {
            max_steps_per_frame: 0,
            ..Default::default()
        });
        assert!(matches!(result, Err(AnimationError::InvalidConfig(_))));
    }
}

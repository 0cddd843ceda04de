//! End-to-end tests driving the controller through a recording sink.
//!
//! These exercise the full per-frame sequence (clock drain, model update,
//! centroid, write-back, swap, draw) without requiring a GPU.

use std::io::Write;

use centroid_viz::gpu::FrameGeometry;
use centroid_viz::{
    AnimationConfig, AnimationController, AnimationError, ControllerState, FrameSink, Point,
    SeedPolicy,
};

/// Sink that records what each frame would have drawn
#[derive(Default)]
struct RecordingSink {
    frames: Vec<(Vec<[f32; 2]>, Option<[f32; 2]>)>,
}

impl FrameSink for RecordingSink {
    fn draw(&mut self, frame: &FrameGeometry) -> Result<(), AnimationError> {
        self.frames.push((
            frame.points().iter().map(|p| p.position).collect(),
            frame.marker().map(|m| m.position),
        ));
        Ok(())
    }
}

fn square_controller(fixed_step: f64) -> AnimationController {
    let mut ctrl = AnimationController::new(AnimationConfig {
        point_count: 4,
        fixed_step,
        ..Default::default()
    })
    .unwrap();
    ctrl.start(SeedPolicy::Fixed(0));
    ctrl.reset_to(vec![
        Point::at(0.0, 0.0),
        Point::at(2.0, 0.0),
        Point::at(2.0, 2.0),
        Point::at(0.0, 2.0),
    ]);
    ctrl
}

#[test]
fn stationary_square_keeps_centroid_at_unit_center() {
    let mut ctrl = square_controller(0.1);
    let mut sink = RecordingSink::default();

    // Zero-velocity update rule: the centroid is (1, 1) after any number
    // of ticks, exactly
    for _ in 0..50 {
        assert_eq!(ctrl.tick(0.1, &mut sink), ControllerState::Running);
    }
    assert_eq!(sink.frames.len(), 50);
    for (points, marker) in &sink.frames {
        assert_eq!(points.len(), 4);
        assert_eq!(*marker, Some([1.0, 1.0]));
    }
}

#[test]
fn frame_geometry_tracks_moving_points() {
    let mut ctrl = AnimationController::new(AnimationConfig {
        point_count: 1,
        fixed_step: 0.5,
        ..Default::default()
    })
    .unwrap();
    ctrl.start(SeedPolicy::Fixed(0));
    ctrl.reset_to(vec![Point::at(10.0, 10.0).with_velocity(2.0, 0.0)]);
    let mut sink = RecordingSink::default();

    // One due step per tick moves the point by velocity * fixed_step
    ctrl.tick(0.5, &mut sink);
    ctrl.tick(0.5, &mut sink);
    assert_eq!(sink.frames[0].0[0], [11.0, 10.0]);
    assert_eq!(sink.frames[1].0[0], [12.0, 10.0]);
    // Marker follows the single point
    assert_eq!(sink.frames[1].1, Some([12.0, 10.0]));
}

#[test]
fn simulation_rate_is_decoupled_from_frame_rate() {
    // Binary-exact step and deltas so both cadences drain identical steps
    let make = || {
        let mut ctrl = AnimationController::new(AnimationConfig {
            point_count: 1,
            fixed_step: 0.25,
            ..Default::default()
        })
        .unwrap();
        ctrl.start(SeedPolicy::Fixed(0));
        ctrl.reset_to(vec![Point::at(100.0, 100.0).with_velocity(8.0, -4.0)]);
        ctrl
    };
    let mut fast = make();
    let mut slow = make();
    let mut fast_sink = RecordingSink::default();
    let mut slow_sink = RecordingSink::default();

    // Same total elapsed time, different frame cadence
    for _ in 0..8 {
        fast.tick(0.125, &mut fast_sink);
    }
    slow.tick(1.0, &mut slow_sink);

    assert_eq!(fast_sink.frames.len(), 8);
    assert_eq!(slow_sink.frames.len(), 1);
    // Both end in the same simulated state
    assert_eq!(fast.points(), slow.points());
}

#[test]
fn identical_seeds_replay_identical_frames() {
    let config = AnimationConfig {
        point_count: 25,
        fixed_step: 0.05,
        ..Default::default()
    };
    let mut a = AnimationController::new(config.clone()).unwrap();
    let mut b = AnimationController::new(config).unwrap();
    a.start(SeedPolicy::Fixed(99));
    b.start(SeedPolicy::Fixed(99));

    let mut sink_a = RecordingSink::default();
    let mut sink_b = RecordingSink::default();
    for _ in 0..20 {
        a.tick(0.05, &mut sink_a);
        b.tick(0.05, &mut sink_b);
    }
    assert_eq!(sink_a.frames, sink_b.frames);
}

#[test]
fn overload_discards_time_instead_of_spiraling() {
    let mut ctrl = AnimationController::new(AnimationConfig {
        point_count: 1,
        fixed_step: 0.1,
        max_steps_per_frame: 3,
        ..Default::default()
    })
    .unwrap();
    ctrl.start(SeedPolicy::Fixed(0));
    ctrl.reset_to(vec![Point::at(0.0, 0.0).with_velocity(10.0, 0.0)]);
    let mut sink = RecordingSink::default();

    // A one-second stall yields 3 steps, not 10; the rest is dropped
    ctrl.tick(1.0, &mut sink);
    let x = ctrl.points()[0].position[0];
    assert!((x - 3.0).abs() < 1e-4, "expected 3 capped steps, got x = {x}");

    // The dropped time is not replayed later
    ctrl.tick(0.05, &mut sink);
    assert_eq!(ctrl.points()[0].position[0], x);
}

#[test]
fn config_file_round_trip() {
    let config = AnimationConfig {
        point_count: 12,
        fixed_step: 0.25,
        max_steps_per_frame: 2,
        centroid_marker_enabled: false,
        ..Default::default()
    };

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&config).unwrap()).unwrap();

    let loaded = AnimationConfig::from_json_file(file.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = AnimationConfig::from_json_file(std::path::Path::new("/nonexistent/config.json"))
        .unwrap_err();
    assert!(matches!(err, AnimationError::Io(_)));
}

//! Fixed-timestep simulation clock
//!
//! Decouples the simulation rate from the variable visual frame rate by
//! accumulating elapsed time and draining it in constant-size steps. A cap
//! on steps per frame bounds catch-up work under slow frames; time past the
//! cap is discarded so the clock never falls permanently behind.

/// Outcome of one `advance` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockAdvance {
    /// Number of fixed steps due this frame
    pub steps: u32,
    /// Accumulated time dropped because the catch-up cap was hit, seconds
    pub discarded: f64,
}

impl ClockAdvance {
    /// Whether the catch-up cap was hit this frame.
    ///
    /// Overload is an observable condition, not an error: the simulation
    /// visibly slows under sustained overload and the discarded time is
    /// permanently lost.
    pub fn overloaded(&self) -> bool {
        self.discarded > 0.0
    }
}

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct SimulationClock {
    accumulated: f64,
    fixed_step: f64,
    max_steps_per_frame: u32,
}

impl SimulationClock {
    /// Create a clock with the given step duration and catch-up cap.
    ///
    /// Both are validated by `AnimationConfig::validate` before the loop
    /// starts; the debug assertions only guard direct construction.
    pub fn new(fixed_step: f64, max_steps_per_frame: u32) -> Self {
        debug_assert!(fixed_step > 0.0);
        debug_assert!(max_steps_per_frame >= 1);
        Self {
            accumulated: 0.0,
            fixed_step,
            max_steps_per_frame,
        }
    }

    /// Add a frame delta and drain the due fixed steps.
    ///
    /// Subtracts `fixed_step` from the accumulator while at least one whole
    /// step remains and the cap has not been hit. If whole steps are still
    /// pending at the cap, the entire remainder is discarded and reported.
    /// Negative deltas are ignored; accumulated time is monotonic.
    pub fn advance(&mut self, frame_delta: f64) -> ClockAdvance {
        if frame_delta > 0.0 {
            self.accumulated += frame_delta;
        }

        let mut steps = 0;
        while self.accumulated >= self.fixed_step && steps < self.max_steps_per_frame {
            self.accumulated -= self.fixed_step;
            steps += 1;
        }

        let mut discarded = 0.0;
        if self.accumulated >= self.fixed_step {
            // Cap hit with whole steps still pending: drop the remainder so
            // the next frame starts from a clean accumulator
            discarded = self.accumulated;
            self.accumulated = 0.0;
        }

        ClockAdvance { steps, discarded }
    }

    /// Configured step duration in seconds
    pub fn fixed_step(&self) -> f64 {
        self.fixed_step
    }

    /// Time currently carried toward the next step, seconds
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }
}

//! Frame timing and the stoppable tick gate.
//!
//! `FrameClock` turns the monotonic millisecond timestamps handed to an
//! animation-frame callback into per-frame deltas in seconds. `TickGate`
//! decides whether a scheduled callback is still allowed to run: stopping is
//! idempotent and bumps a generation counter, so a callback armed before the
//! stop observes the mismatch and returns without touching game state.

use crate::consts::MAX_FRAME_DELTA;

/// Delta-time source for the frame-driven loop.
///
/// The first observation after construction (or `reset`) establishes the
/// baseline and yields 0.0, so the opening frame cannot jump the simulation.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Advance the clock to `now_ms` and return the elapsed seconds since
    /// the previous call, clamped to [`MAX_FRAME_DELTA`].
    pub fn delta_secs(&mut self, now_ms: f64) -> f32 {
        let delta = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        delta.min(MAX_FRAME_DELTA)
    }

    /// Drop the baseline so the next observation yields 0.0 again.
    ///
    /// Called when a loop restarts after an overlay pause; without it the
    /// whole pause would arrive as one delta.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Generation-checked run guard shared by both tick drivers.
///
/// `start` arms the gate and returns the generation to capture in the
/// scheduled callback; `admits` tells that callback whether it is still
/// current. `stop` is a no-op when already stopped.
#[derive(Debug, Default)]
pub struct TickGate {
    generation: u64,
    running: bool,
}

impl TickGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the gate and return the generation for callbacks scheduled now.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.running = true;
        self.generation
    }

    /// Disarm the gate. Safe to call repeatedly; already-scheduled callbacks
    /// from the current generation are rejected from now on.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.generation += 1;
        }
    }

    /// Whether a callback carrying `generation` may run.
    pub fn admits(&self, generation: u64) -> bool {
        self.running && generation == self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero_baseline() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta_secs(123_456.0), 0.0);
        let dt = clock.delta_secs(123_472.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_delta_clamped() {
        let mut clock = FrameClock::new();
        clock.delta_secs(0.0);
        // 5 seconds in the background arrives as one clamped step
        assert_eq!(clock.delta_secs(5_000.0), MAX_FRAME_DELTA);
    }

    #[test]
    fn test_reset_reestablishes_baseline() {
        let mut clock = FrameClock::new();
        clock.delta_secs(0.0);
        clock.delta_secs(16.0);
        clock.reset();
        assert_eq!(clock.delta_secs(10_000.0), 0.0);
    }

    #[test]
    fn test_non_monotonic_timestamp_yields_zero() {
        let mut clock = FrameClock::new();
        clock.delta_secs(100.0);
        assert_eq!(clock.delta_secs(90.0), 0.0);
    }

    #[test]
    fn test_gate_admits_only_current_generation() {
        let mut gate = TickGate::new();
        let first = gate.start();
        assert!(gate.admits(first));

        let second = gate.start();
        assert!(!gate.admits(first), "stale callback must be rejected");
        assert!(gate.admits(second));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut gate = TickGate::new();
        let generation = gate.start();
        gate.stop();
        let after_first = gate.generation;
        gate.stop();
        gate.stop();
        assert_eq!(gate.generation, after_first);
        assert!(!gate.is_running());
        assert!(!gate.admits(generation));
    }

    #[test]
    fn test_restart_after_stop() {
        let mut gate = TickGate::new();
        let old = gate.start();
        gate.stop();
        let fresh = gate.start();
        assert!(gate.admits(fresh));
        assert!(!gate.admits(old));
    }
}

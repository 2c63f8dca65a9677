// Stepped carousel rotation: discrete targets on a timed cadence, smoothed per tick

use crate::constants::*;
use std::f32::consts::TAU;

/// Mutable rotation state of a single rotating assembly
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    /// Angle currently applied to the transform, in radians
    pub current: f32,
    /// Angle the assembly is moving towards, in radians
    pub target: f32,
    pub step_index: usize,
    pub step_count: usize,
    /// Timestamp (seconds) of the last discrete step
    pub last_step_timestamp: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepRotationScheduler {
    state: RotationState,
    pub step_angle: f32,
    pub wait_duration: f64,
    pub max_step_per_tick: f32,
    pub epsilon: f32,
}

impl StepRotationScheduler {
    /// Create a scheduler at rest, counting its first wait from `start_timestamp`
    pub fn new(
        step_count: usize,
        step_angle: f32,
        wait_duration: f64,
        max_step_per_tick: f32,
        start_timestamp: f64,
    ) -> Self {
        Self {
            state: RotationState {
                current: 0.0,
                target: 0.0,
                step_index: 0,
                step_count: step_count.max(1),
                last_step_timestamp: start_timestamp,
            },
            step_angle,
            wait_duration,
            max_step_per_tick,
            epsilon: DEFAULT_SNAP_EPSILON,
        }
    }

    /// Evenly divide a full turn into `step_count` stations
    pub fn with_step_count(
        step_count: usize,
        wait_duration: f64,
        max_step_per_tick: f32,
        start_timestamp: f64,
    ) -> Self {
        let step_count = step_count.max(1);
        Self::new(
            step_count,
            TAU / step_count as f32,
            wait_duration,
            max_step_per_tick,
            start_timestamp,
        )
    }

    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Advance the scheduler to `now` and return the angle to apply
    pub fn tick(&mut self, now: f64) -> f32 {
        let state = &mut self.state;

        if now - state.last_step_timestamp >= self.wait_duration {
            state.target += self.step_angle;
            state.step_index = (state.step_index + 1) % state.step_count;
            state.last_step_timestamp = now;
        }

        let delta = state.target - state.current;
        if delta.abs() > self.epsilon && delta.abs() > self.max_step_per_tick {
            state.current += delta.signum() * self.max_step_per_tick;
        } else {
            // Remaining distance fits in one tick (or is residue): land exactly
            state.current = state.target;
        }

        state.current
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn current(&self) -> f32 {
        self.state.current
    }

    pub fn target(&self) -> f32 {
        self.state.target
    }

    pub fn step_index(&self) -> usize {
        self.state.step_index
    }

    pub fn step_count(&self) -> usize {
        self.state.step_count
    }

    pub fn is_settled(&self) -> bool {
        self.state.current == self.state.target
    }
}

impl Default for StepRotationScheduler {
    fn default() -> Self {
        Self::new(
            DEFAULT_STEP_COUNT,
            DEFAULT_STEP_ANGLE,
            DEFAULT_WAIT_SECONDS,
            DEFAULT_MAX_STEP_PER_TICK,
            0.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_holds_still_before_first_wait_elapses() {
        let mut scheduler = StepRotationScheduler::default();

        for i in 0..100 {
            let angle = scheduler.tick(i as f64 * 0.04);
            assert_eq!(angle, 0.0);
        }
        assert_eq!(scheduler.step_index(), 0);
        assert!(scheduler.is_settled());
    }

    #[rstest]
    #[case(5, 5.0)]
    #[case(3, 2.0)]
    #[case(8, 0.5)]
    fn test_steps_once_per_wait_interval(#[case] step_count: usize, #[case] wait: f64) {
        let mut scheduler = StepRotationScheduler::with_step_count(step_count, wait, 0.02, 0.0);
        let step_angle = scheduler.step_angle;

        for n in 1..=(step_count * 2) {
            let previous_target = scheduler.target();
            let previous_index = scheduler.step_index();

            scheduler.tick(n as f64 * wait);

            assert_eq!(scheduler.step_index(), (previous_index + 1) % step_count);
            assert_relative_eq!(scheduler.target() - previous_target, step_angle, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_step_index_wraps_after_full_turn() {
        let mut scheduler = StepRotationScheduler::default();

        for n in 1..=5 {
            scheduler.tick(n as f64 * DEFAULT_WAIT_SECONDS);
        }

        assert_eq!(scheduler.step_index(), 0);
        assert_relative_eq!(scheduler.target(), TAU, epsilon = 1e-5);
    }

    #[test]
    fn test_reaches_target_without_overshoot() {
        let max_step = 0.02;
        let mut scheduler = StepRotationScheduler::new(5, DEFAULT_STEP_ANGLE, 5.0, max_step, 0.0);
        let expected_ticks = (DEFAULT_STEP_ANGLE / max_step).ceil() as usize;

        let mut previous = scheduler.current();
        let mut now = 5.0;
        for _ in 0..expected_ticks {
            let angle = scheduler.tick(now);
            assert!(angle <= scheduler.target(), "overshot: {angle}");
            assert!(angle >= previous, "moved backwards");
            assert!(angle - previous <= max_step + 1e-6);
            previous = angle;
            now += 1.0 / 60.0;
        }

        assert_eq!(scheduler.current(), scheduler.target());
        assert!(scheduler.is_settled());
    }

    #[test]
    fn test_moves_backwards_for_negative_steps() {
        let mut scheduler = StepRotationScheduler::new(4, -0.1, 1.0, 0.03, 0.0);

        let first = scheduler.tick(1.0);
        assert_relative_eq!(first, -0.03);

        for i in 0..10 {
            let angle = scheduler.tick(1.0 + (i + 1) as f64 * 0.01);
            assert!(angle >= scheduler.target());
        }
        assert_eq!(scheduler.current(), -0.1);
    }

    #[test]
    fn test_snaps_residue_below_epsilon() {
        let mut scheduler = StepRotationScheduler::new(5, 0.0005, 1.0, 0.02, 0.0).with_epsilon(0.001);

        let angle = scheduler.tick(1.0);

        assert_eq!(angle, 0.0005);
        assert!(scheduler.is_settled());
    }

    #[test]
    fn test_zero_step_count_is_treated_as_one_station() {
        let mut scheduler = StepRotationScheduler::new(0, 1.0, 1.0, 0.5, 0.0);

        scheduler.tick(1.0);
        scheduler.tick(2.0);

        assert_eq!(scheduler.step_count(), 1);
        assert_eq!(scheduler.step_index(), 0);
    }
}

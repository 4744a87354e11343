//! Clock-free animation state
//!
//! Timelines accumulate explicit `Duration` deltas instead of reading a
//! clock, so the phase machine and pulse curve are testable without a
//! running timer. The widget tick feeds them wall-clock deltas each frame.

use std::time::Duration;

use crate::core::constants::{PULSE_ALPHA_MAX, PULSE_ALPHA_MIN};

/// One animation run: an optional delay followed by an eased sweep.
///
/// `fraction()` holds at 0.0 for the whole delay, then ramps to 1.0 over
/// `duration`. Degenerate zero durations complete immediately.
#[derive(Debug, Clone)]
pub struct StepTimeline {
    delay: Duration,
    duration: Duration,
    elapsed: Duration,
}

impl StepTimeline {
    pub fn new(duration: Duration, delay: Duration) -> Self {
        Self {
            delay,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance the timeline by a frame delta.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Raw (un-eased) progress in [0, 1]; 0 while the delay is pending.
    pub fn fraction(&self) -> f64 {
        let active = match self.elapsed.checked_sub(self.delay) {
            Some(active) => active,
            None => return 0.0,
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (active.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}

/// Number of steps in one full loader cycle: one rectangle flip plus four
/// dot pulses plus one idle hand-off step.
pub const CYCLE_STEPS: u8 = 6;

/// The loader's six-phase state machine.
///
/// Phase 0 rotates the rectangles; phases 1-4 each pulse one dot while the
/// previous phase's dot shrinks back. Advancing past phase 5 wraps to 0,
/// and the run before phase 0 is preceded by `start_delay`.
#[derive(Debug, Clone)]
pub struct LoaderCycle {
    phase: u8,
    start_delay: Duration,
}

impl LoaderCycle {
    pub fn new(start_delay: Duration) -> Self {
        Self {
            phase: 0,
            start_delay,
        }
    }

    /// Current phase, always in 0..=5.
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Record the completion of the current step's animation run.
    ///
    /// Advances the phase (mod 6) and returns the delay to apply before the
    /// next run starts: `start_delay` at the top of each full cycle, zero
    /// otherwise.
    pub fn complete_step(&mut self) -> Duration {
        self.phase = (self.phase + 1) % CYCLE_STEPS;
        if self.phase == 0 {
            self.start_delay
        } else {
            Duration::ZERO
        }
    }
}

/// Infinite looping timeline for the text pulse.
#[derive(Debug, Clone)]
pub struct PulseTimeline {
    period: Duration,
    elapsed: Duration,
}

impl PulseTimeline {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Position within the current loop, in [0, 1).
    pub fn fraction(&self) -> f64 {
        if self.period.is_zero() {
            return 0.0;
        }
        let period = self.period.as_secs_f64();
        (self.elapsed.as_secs_f64() % period) / period
    }
}

/// Opacity triangle wave: 255 -> 100 over the first half of the loop,
/// 100 -> 255 over the second half. Result is always within [100, 255].
pub fn pulse_alpha(fraction: f64) -> i32 {
    let fraction = fraction.rem_euclid(1.0);
    let span = (PULSE_ALPHA_MAX - PULSE_ALPHA_MIN) as f64;
    let value = if fraction < 0.5 {
        PULSE_ALPHA_MAX as f64 - span * (fraction * 2.0)
    } else {
        PULSE_ALPHA_MIN as f64 + span * ((fraction - 0.5) * 2.0)
    };
    value.round() as i32
}

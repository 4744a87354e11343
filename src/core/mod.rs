//! Core animation primitives shared by both widgets

mod constants;
mod easing;
mod step;

pub use constants::{
    ANIMATION_FRAME_INTERVAL, PULSE_ALPHA_MAX, PULSE_ALPHA_MIN, PULSE_PERIOD,
    ROTATION_SWEEP_DEG, TEXT_FIT_ITERATIONS, TEXT_FIT_MAX_SIZE,
};
pub use easing::{Easing, STEP_CURVE};
pub use step::{pulse_alpha, LoaderCycle, PulseTimeline, StepTimeline, CYCLE_STEPS};

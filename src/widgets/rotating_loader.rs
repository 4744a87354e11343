//! Rotating loader widget
//!
//! Wraps the pure renderer in a `DrawingArea` and drives the six-phase
//! cycle from a 60fps glib timer. State is shared between the draw
//! function and the timer behind an `Arc<Mutex>`; the timer uses
//! `try_lock` so a contended frame is skipped instead of blocking the
//! main loop.

use gtk4::{glib, prelude::*, DrawingArea, Widget};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::core::{
    LoaderCycle, StepTimeline, ANIMATION_FRAME_INTERVAL, ROTATION_SWEEP_DEG, STEP_CURVE,
};
use crate::types::LoaderConfig;
use crate::ui::loader_display::{render_loader, LoaderFrame, LoaderGeometry};

struct LoaderData {
    config: LoaderConfig,
    geometry: LoaderGeometry,
    cycle: LoaderCycle,
    timeline: StepTimeline,
    frame: LoaderFrame,
    last_tick: Option<Instant>,
}

impl LoaderData {
    fn new(config: LoaderConfig) -> Self {
        let geometry = LoaderGeometry::from_config(&config);
        let cycle = LoaderCycle::new(Duration::from_millis(config.start_delay_ms));
        let frame = LoaderFrame {
            phase: cycle.phase(),
            rotation_deg: 0.0,
            scale: 1.0,
            scale_to: config.scale_to,
        };
        let timeline = StepTimeline::new(Duration::from_millis(config.duration_ms), Duration::ZERO);
        Self {
            config,
            geometry,
            cycle,
            timeline,
            frame,
            last_tick: None,
        }
    }

    /// Restart the in-flight step from its start values. Phase persists.
    fn restart_step(&mut self) {
        self.timeline =
            StepTimeline::new(Duration::from_millis(self.config.duration_ms), Duration::ZERO);
        self.frame.rotation_deg = 0.0;
        self.frame.scale = 1.0;
        self.last_tick = None;
    }

    /// Advance the animation by one frame tick. Returns true when the
    /// rendered frame changed and a redraw is needed.
    fn tick(&mut self, now: Instant) -> bool {
        let dt = match self.last_tick {
            Some(last) => now.duration_since(last),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);
        self.timeline.advance(dt);

        let eased = STEP_CURVE.ease(self.timeline.fraction());
        let next = LoaderFrame {
            phase: self.cycle.phase(),
            rotation_deg: ROTATION_SWEEP_DEG * eased,
            scale: 1.0 + (self.config.scale_to - 1.0) * eased,
            scale_to: self.config.scale_to,
        };
        let changed = next != self.frame;
        self.frame = next;

        if self.timeline.is_finished() {
            let delay = self.cycle.complete_step();
            self.timeline =
                StepTimeline::new(Duration::from_millis(self.config.duration_ms), delay);
        }

        changed
    }
}

/// A loading indicator built from four pulsing dots and a rotating cross.
pub struct RotatingLoader {
    data: Arc<Mutex<LoaderData>>,
}

impl RotatingLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            data: Arc::new(Mutex::new(LoaderData::new(config))),
        }
    }

    /// Derived desired size, a pure function of the configuration.
    pub fn desired_size(&self) -> (f64, f64) {
        match self.data.lock() {
            Ok(data) => (data.geometry.desired_width, data.geometry.desired_height),
            Err(_) => (0.0, 0.0),
        }
    }

    /// Create the GTK widget. The animation runs while the widget is
    /// mapped; unmapping cancels the timer and mapping restarts the
    /// current step from its start values.
    pub fn create_widget(&self) -> Widget {
        let drawing_area = DrawingArea::new();
        let (w, h) = self.desired_size();
        drawing_area.set_content_width(w.ceil() as i32);
        drawing_area.set_content_height(h.ceil() as i32);

        let data_clone = self.data.clone();
        drawing_area.set_draw_func(move |_, cr, _, _| {
            if let Ok(data) = data_clone.lock() {
                if let Err(e) = render_loader(cr, &data.geometry, &data.config.color, &data.frame) {
                    log::debug!("loader render error: {e}");
                }
            }
        });

        // Generation counter invalidates the running timer on unmap, so an
        // already-enqueued tick after detach is a no-op.
        let generation = Rc::new(Cell::new(0u32));

        drawing_area.connect_map({
            let data = self.data.clone();
            let generation = generation.clone();
            move |area| {
                let my_gen = generation.get().wrapping_add(1);
                generation.set(my_gen);

                if let Ok(mut data) = data.lock() {
                    data.restart_step();
                    log::debug!("rotating loader attached at phase {}", data.cycle.phase());
                }

                let area_weak = area.downgrade();
                let data = data.clone();
                let generation = generation.clone();
                glib::timeout_add_local(ANIMATION_FRAME_INTERVAL, move || {
                    if generation.get() != my_gen {
                        return glib::ControlFlow::Break;
                    }
                    let Some(area) = area_weak.upgrade() else {
                        return glib::ControlFlow::Break;
                    };

                    let needs_redraw = match data.try_lock() {
                        Ok(mut data) => data.tick(Instant::now()),
                        Err(_) => false,
                    };
                    if needs_redraw {
                        area.queue_draw();
                    }
                    glib::ControlFlow::Continue
                });
            }
        });

        drawing_area.connect_unmap({
            let generation = generation.clone();
            move |_| {
                generation.set(generation.get().wrapping_add(1));
                log::debug!("rotating loader detached, animation cancelled");
            }
        });

        drawing_area.upcast()
    }
}

impl Default for RotatingLoader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticked(data: &mut LoaderData, at_ms: u64) -> LoaderFrame {
        let base = Instant::now();
        data.last_tick = Some(base);
        data.tick(base + Duration::from_millis(at_ms));
        data.frame
    }

    #[test]
    fn step_end_values_hit_the_targets() {
        let mut data = LoaderData::new(LoaderConfig::default());
        let frame = ticked(&mut data, 300);
        assert_eq!(frame.phase, 0);
        assert!((frame.rotation_deg - 180.0).abs() < 1e-9);
        assert!((frame.scale - 1.3).abs() < 1e-9);
        // the completed step queued the next phase
        assert_eq!(data.cycle.phase(), 1);
    }

    #[test]
    fn full_cycle_returns_to_phase_zero() {
        let mut data = LoaderData::new(LoaderConfig {
            start_delay_ms: 0,
            ..Default::default()
        });
        for _ in 0..6 {
            ticked(&mut data, 300);
        }
        assert_eq!(data.cycle.phase(), 0);
    }

    #[test]
    fn values_hold_at_start_during_cycle_delay() {
        let mut data = LoaderData::new(LoaderConfig::default());
        // finish phases 0..=5; the wrap to phase 0 carries the 1s delay
        for _ in 0..6 {
            ticked(&mut data, 300);
        }
        assert_eq!(data.cycle.phase(), 0);

        // the first tick after the wrap snaps values back to their start
        let base = Instant::now();
        data.last_tick = Some(base);
        data.tick(base + Duration::from_millis(100));
        assert_eq!(data.frame.phase, 0);
        assert_eq!(data.frame.rotation_deg, 0.0);
        assert_eq!(data.frame.scale, 1.0);

        // for the rest of the delay nothing moves and no redraw is needed
        let changed = data.tick(base + Duration::from_millis(500));
        assert!(!changed);
        assert_eq!(data.frame.rotation_deg, 0.0);
        assert_eq!(data.frame.scale, 1.0);
    }

    #[test]
    fn restart_resets_values_but_keeps_phase() {
        let mut data = LoaderData::new(LoaderConfig::default());
        ticked(&mut data, 300);
        assert_eq!(data.cycle.phase(), 1);

        ticked(&mut data, 150);
        assert!(data.frame.scale > 1.0);

        data.restart_step();
        let base = Instant::now();
        data.last_tick = Some(base);
        data.tick(base);
        assert_eq!(data.frame.phase, 1);
        assert_eq!(data.frame.scale, 1.0);
        assert_eq!(data.frame.rotation_deg, 0.0);
    }

    #[test]
    fn scale_stays_within_configured_bounds() {
        let mut data = LoaderData::new(LoaderConfig::default());
        let base = Instant::now();
        data.last_tick = Some(base);
        for step_ms in (0..=320u64).step_by(16) {
            data.tick(base + Duration::from_millis(step_ms));
            assert!(data.frame.scale >= 1.0 - 1e-9);
            assert!(data.frame.scale <= 1.3 + 1e-9);
            assert!(data.frame.rotation_deg >= -1e-9);
            assert!(data.frame.rotation_deg <= 180.0 + 1e-9);
        }
    }
}

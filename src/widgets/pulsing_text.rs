//! Pulsing text widget
//!
//! A fixed label whose opacity ramps 255 -> 100 -> 255 on an infinite
//! linear loop. The font size is fitted to the widget's fixed width by
//! binary search on first draw (Pango needs a live context to measure)
//! and cached for every draw after that.

use gtk4::{glib, prelude::*, DrawingArea, Widget};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::core::{pulse_alpha, PulseTimeline, ANIMATION_FRAME_INTERVAL, PULSE_PERIOD};
use crate::types::PulsingTextConfig;
use crate::ui::text_display::{
    fit_label_size, render_pulsing_text, TEXT_DESIRED_HEIGHT, TEXT_DESIRED_WIDTH,
};

struct TextData {
    config: PulsingTextConfig,
    pulse: PulseTimeline,
    alpha: i32,
    fitted_size: Option<f64>,
    last_tick: Option<Instant>,
}

impl TextData {
    fn new(config: PulsingTextConfig) -> Self {
        Self {
            config,
            pulse: PulseTimeline::new(PULSE_PERIOD),
            alpha: pulse_alpha(0.0),
            fitted_size: None,
            last_tick: None,
        }
    }

    fn restart(&mut self) {
        self.pulse = PulseTimeline::new(PULSE_PERIOD);
        self.alpha = pulse_alpha(0.0);
        self.last_tick = None;
    }

    /// Advance the pulse; redraw only when the integer alpha moved.
    fn tick(&mut self, now: Instant) -> bool {
        let dt = match self.last_tick {
            Some(last) => now.duration_since(last),
            None => Duration::ZERO,
        };
        self.last_tick = Some(now);
        self.pulse.advance(dt);

        let alpha = pulse_alpha(self.pulse.fraction());
        let changed = alpha != self.alpha;
        self.alpha = alpha;
        changed
    }
}

/// A "loading" label that pulses its opacity while mapped.
pub struct PulsingText {
    data: Arc<Mutex<TextData>>,
}

impl PulsingText {
    pub fn new(config: PulsingTextConfig) -> Self {
        Self {
            data: Arc::new(Mutex::new(TextData::new(config))),
        }
    }

    pub fn create_widget(&self) -> Widget {
        let drawing_area = DrawingArea::new();
        drawing_area.set_content_width(TEXT_DESIRED_WIDTH as i32);
        drawing_area.set_content_height(TEXT_DESIRED_HEIGHT as i32);

        let data_clone = self.data.clone();
        drawing_area.set_draw_func(move |_, cr, _, _| {
            if let Ok(mut data) = data_clone.lock() {
                let size = match data.fitted_size {
                    Some(size) => size,
                    None => {
                        let size = fit_label_size(cr, &data.config);
                        data.fitted_size = Some(size);
                        log::debug!("fitted \"{}\" to {size:.2}pt", data.config.label);
                        size
                    }
                };
                if let Err(e) = render_pulsing_text(cr, &data.config, size, data.alpha) {
                    log::debug!("pulsing text render error: {e}");
                }
            }
        });

        let generation = Rc::new(Cell::new(0u32));

        drawing_area.connect_map({
            let data = self.data.clone();
            let generation = generation.clone();
            move |area| {
                let my_gen = generation.get().wrapping_add(1);
                generation.set(my_gen);

                if let Ok(mut data) = data.lock() {
                    data.restart();
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
            }
        });

        drawing_area.upcast()
    }
}

impl Default for PulsingText {
    fn default() -> Self {
        Self::new(PulsingTextConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PULSE_ALPHA_MAX, PULSE_ALPHA_MIN};

    #[test]
    fn alpha_starts_at_full_opacity() {
        let data = TextData::new(PulsingTextConfig::default());
        assert_eq!(data.alpha, PULSE_ALPHA_MAX);
    }

    #[test]
    fn alpha_reaches_the_floor_at_half_period() {
        let mut data = TextData::new(PulsingTextConfig::default());
        let base = Instant::now();
        data.last_tick = Some(base);
        data.tick(base + Duration::from_millis(500));
        assert_eq!(data.alpha, PULSE_ALPHA_MIN);
    }

    #[test]
    fn alpha_recovers_over_a_full_period() {
        let mut data = TextData::new(PulsingTextConfig::default());
        let base = Instant::now();
        data.last_tick = Some(base);
        for step in 1..=40u64 {
            data.tick(base + Duration::from_millis(step * 25));
            assert!((PULSE_ALPHA_MIN..=PULSE_ALPHA_MAX).contains(&data.alpha));
        }
        assert_eq!(data.alpha, PULSE_ALPHA_MAX);
    }

    #[test]
    fn unchanged_alpha_skips_redraw() {
        let mut data = TextData::new(PulsingTextConfig::default());
        let base = Instant::now();
        data.last_tick = Some(base);
        // sub-millisecond step: 155 alpha steps over 500ms means a 0.1ms
        // tick cannot move the rounded value
        let changed = data.tick(base + Duration::from_micros(100));
        assert!(!changed);
    }

    #[test]
    fn restart_resets_the_loop() {
        let mut data = TextData::new(PulsingTextConfig::default());
        let base = Instant::now();
        data.last_tick = Some(base);
        data.tick(base + Duration::from_millis(500));
        assert_eq!(data.alpha, PULSE_ALPHA_MIN);

        data.restart();
        assert_eq!(data.alpha, PULSE_ALPHA_MAX);
        assert!(data.last_tick.is_none());
    }
}

//! The "underlying scroll mechanism" of the card track: it receives scroll
//! commands from the pagination engine, clamps them to the valid range and
//! animates towards them. A new command redirects any animation in flight.

use std::time::{Duration, Instant};

use marquee_core::pagination::{ScrollBehavior, ScrollCommand, ScrollSink};
use marquee_core::{EasingType, ScrollConfig};

use super::easing::EasingTypeExt;

/// Poll interval while an animation runs
pub fn frame_interval(config: &ScrollConfig) -> Duration {
    match config.animation_fps {
        0 => Duration::from_millis(16),
        fps => Duration::from_millis(1000 / u64::from(fps)),
    }
}

/// One eased movement between two offsets
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    started: Instant,
    duration: Duration,
    easing: EasingType,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration, easing: EasingType, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            easing,
        }
    }

    /// Offset at `now`, and whether the tween has finished
    pub fn sample(&self, now: Instant) -> (f64, bool) {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = self.easing.apply(elapsed.as_secs_f64() / self.duration.as_secs_f64());
        (self.from + (self.to - self.from) * t, false)
    }
}

/// Horizontal scroll animator for the card track
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    tween: Option<Tween>,
    config: ScrollConfig,
    /// Offset as of the last update; what geometry reads observe
    current: f64,
    max_scroll: f64,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            tween: None,
            config,
            current: 0.0,
            max_scroll: 0.0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Where the track comes to rest once the active tween completes
    pub fn target(&self) -> f64 {
        self.tween.as_ref().map_or(self.current, |tween| tween.to)
    }

    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }

    /// Update the valid range (e.g. after a resize), clamping positions into it
    pub fn set_max_scroll(&mut self, max_scroll: f64) {
        self.max_scroll = max_scroll.max(0.0);
        self.current = self.clamp(self.current);
        let max = self.max_scroll;
        if let Some(tween) = self.tween.as_mut() {
            tween.to = tween.to.clamp(0.0, max);
        }
    }

    /// Jump without animating
    pub fn set_scroll(&mut self, offset: f64) {
        self.tween = None;
        self.current = self.clamp(offset);
    }

    /// Animate to `target`, or jump when smooth scrolling is off
    pub fn scroll_to(&mut self, target: f64) {
        let target = self.clamp(target);

        if !self.config.smooth_enabled || self.config.animation_duration_ms == 0 {
            self.set_scroll(target);
            return;
        }

        if (self.current - target).abs() < f64::EPSILON {
            self.tween = None;
            return;
        }

        self.tween = Some(Tween::new(
            self.current,
            target,
            Duration::from_millis(self.config.animation_duration_ms),
            self.config.easing,
            Instant::now(),
        ));
    }

    /// Scroll relative to the current target, so rapid steps chain
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.target() + delta);
    }

    /// Advance the animation; call once per frame
    pub fn update(&mut self) -> f64 {
        self.update_at(Instant::now())
    }

    pub fn update_at(&mut self, now: Instant) -> f64 {
        if let Some(tween) = &self.tween {
            let (offset, finished) = tween.sample(now);
            self.current = offset;
            if finished {
                self.tween = None;
            }
        }
        self.current = self.clamp(self.current);
        self.current
    }

    pub fn cancel(&mut self) {
        self.tween = None;
    }

    fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll)
    }
}

impl ScrollSink for ScrollAnimator {
    fn scroll(&mut self, command: ScrollCommand) {
        match command {
            ScrollCommand::To {
                left,
                behavior: ScrollBehavior::Smooth,
            } => self.scroll_to(left),
            ScrollCommand::To {
                left,
                behavior: ScrollBehavior::Instant,
            } => self.set_scroll(left),
            ScrollCommand::By {
                delta,
                behavior: ScrollBehavior::Smooth,
            } => self.scroll_by(delta),
            ScrollCommand::By {
                delta,
                behavior: ScrollBehavior::Instant,
            } => self.set_scroll(self.current + delta),
        }
    }
}

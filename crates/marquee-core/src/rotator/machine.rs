use std::time::Duration;

use tracing::debug;

use super::display::SlideDisplay;
use super::timer::{TimerFacility, TimerHandle};
use crate::config::RotatorConfig;
use crate::pagination::Direction;

/// Observable rotator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatorState {
    pub current_index: usize,
    /// True while no interaction is suppressing autoplay
    pub timer_armed: bool,
}

/// UI events translated by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    PointerEnter,
    PointerLeave,
    FocusIn,
    FocusOut,
    /// Arrow key pressed while the rotator has focus
    Key(Direction),
    ClickNext,
    ClickPrev,
    ClickIndicator(usize),
}

/// Auto-advancing slide state machine.
///
/// Owns its timer facility and display sink. At most one timer is pending at
/// any time, and dropping the rotator cancels it.
pub struct SlideRotator<T: TimerFacility, D: SlideDisplay> {
    slide_count: usize,
    auto_delay: Duration,
    autoplay: bool,
    state: RotatorState,
    pending: Option<TimerHandle>,
    timer: T,
    display: D,
}

impl<T: TimerFacility, D: SlideDisplay> SlideRotator<T, D> {
    /// Create a rotator showing slide 0 with autoplay armed
    pub fn new(slide_count: usize, auto_delay: Duration, timer: T, display: D) -> Self {
        Self::build(slide_count, auto_delay, true, timer, display)
    }

    pub fn from_config(slide_count: usize, config: &RotatorConfig, timer: T, display: D) -> Self {
        Self::build(
            slide_count,
            config.auto_delay(),
            config.autoplay,
            timer,
            display,
        )
    }

    fn build(slide_count: usize, auto_delay: Duration, autoplay: bool, timer: T, mut display: D) -> Self {
        if slide_count > 0 {
            display.show(None, 0);
        }

        let mut rotator = Self {
            slide_count,
            auto_delay,
            autoplay,
            state: RotatorState {
                current_index: 0,
                timer_armed: true,
            },
            pending: None,
            timer,
            display,
        };
        rotator.arm();
        rotator
    }

    pub fn state(&self) -> RotatorState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_timer_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Manual advance: pauses autoplay, then shows the next slide
    pub fn next(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.pause();
        self.step(Direction::Forward);
    }

    /// Manual retreat: pauses autoplay, then shows the previous slide
    pub fn prev(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        self.pause();
        self.step(Direction::Backward);
    }

    /// Jump to `index`; out-of-range indices are ignored without side effects
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.slide_count {
            debug!(index, slides = self.slide_count, "jump ignored: out of range");
            return;
        }
        self.pause();
        self.show(index);
    }

    /// Interaction started: disarm and cancel the pending timer
    pub fn pause(&mut self) {
        self.state.timer_armed = false;
        self.disarm();
    }

    /// Interaction ended: re-arm. A pending timer is kept as is, so repeated
    /// resumes never stack timers.
    pub fn resume(&mut self) {
        self.state.timer_armed = true;
        self.arm();
    }

    /// Timer callback. Returns true when the slide advanced.
    ///
    /// Handles that are not the currently pending one (cancelled or replaced)
    /// are ignored.
    pub fn on_timer_fired(&mut self, handle: TimerHandle) -> bool {
        if self.pending != Some(handle) {
            debug!(?handle, "stale timer ignored");
            return false;
        }
        self.pending = None;

        if !self.state.timer_armed {
            return false;
        }

        self.step(Direction::Forward);
        self.arm();
        true
    }

    /// Translate a UI interaction into commands
    pub fn handle(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::PointerEnter | Interaction::FocusIn => self.pause(),
            Interaction::PointerLeave | Interaction::FocusOut => self.resume(),
            Interaction::Key(Direction::Forward) | Interaction::ClickNext => self.next(),
            Interaction::Key(Direction::Backward) | Interaction::ClickPrev => self.prev(),
            Interaction::ClickIndicator(index) => self.jump_to(index),
        }
    }

    /// Tear down, cancelling any pending timer
    pub fn destroy(mut self) {
        self.disarm();
    }

    fn step(&mut self, direction: Direction) {
        let count = self.slide_count;
        let current = self.state.current_index;
        let index = match direction {
            Direction::Forward => (current + 1) % count,
            Direction::Backward => (current + count - 1) % count,
        };
        self.show(index);
    }

    fn show(&mut self, index: usize) {
        let previous = self.state.current_index;
        self.state.current_index = index;
        self.display.show(Some(previous), index);
        debug!(previous, current = index, "slide shown");
    }

    fn arm(&mut self) {
        if self.slide_count == 0 || !self.autoplay || !self.state.timer_armed || self.pending.is_some() {
            return;
        }
        self.pending = Some(self.timer.schedule(self.auto_delay));
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timer.cancel(handle);
        }
    }
}

impl<T: TimerFacility, D: SlideDisplay> Drop for SlideRotator<T, D> {
    fn drop(&mut self) {
        self.disarm();
    }
}

impl<T: TimerFacility, D: SlideDisplay> std::fmt::Debug for SlideRotator<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideRotator")
            .field("slide_count", &self.slide_count)
            .field("auto_delay", &self.auto_delay)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish()
    }
}

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Terminal input the frame loop reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// No input within the poll window; time to run a frame
    Tick,
}

/// Polls crossterm with an idle rate and a faster rate for animation frames
pub struct EventHandler {
    idle: Duration,
    animating: Duration,
}

impl EventHandler {
    pub fn with_animation_tick(tick_rate_ms: u64, animation_tick: Duration) -> Self {
        Self {
            idle: Duration::from_millis(tick_rate_ms),
            animating: animation_tick.min(Duration::from_millis(tick_rate_ms)),
        }
    }

    pub fn poll_interval(&self, fast: bool) -> Duration {
        if fast {
            self.animating
        } else {
            self.idle
        }
    }

    /// Wait for the next event; `fast` selects the animation poll rate
    pub fn next(&self, fast: bool) -> Result<Option<AppEvent>> {
        if !event::poll(self.poll_interval(fast))? {
            return Ok(Some(AppEvent::Tick));
        }
        Ok(translate(event::read()?))
    }
}

/// Map a raw terminal event; only key presses and resizes are kept
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('l'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_only_key_presses_pass() {
        let press = key(KeyEventKind::Press);
        assert_eq!(translate(Event::Key(press)), Some(AppEvent::Key(press)));
        assert_eq!(translate(Event::Key(key(KeyEventKind::Release))), None);
        assert_eq!(translate(Event::FocusGained), None);
    }

    #[test]
    fn test_resize_passes_through() {
        assert_eq!(translate(Event::Resize(120, 40)), Some(AppEvent::Resize(120, 40)));
    }

    #[test]
    fn test_animation_rate_never_slower_than_idle() {
        let handler = EventHandler::with_animation_tick(100, Duration::from_millis(16));
        assert_eq!(handler.poll_interval(true), Duration::from_millis(16));
        assert_eq!(handler.poll_interval(false), Duration::from_millis(100));

        let handler = EventHandler::with_animation_tick(10, Duration::from_millis(16));
        assert_eq!(handler.poll_interval(true), Duration::from_millis(10));
    }
}

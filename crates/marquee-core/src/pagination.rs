//! Viewport-aware pagination for a horizontally scrollable card track.
//!
//! A page is the run of consecutive cards that fit inside the viewport
//! starting at the first visible card. Paging forward past the last page
//! wraps to the first card; paging backward from the first page wraps to the
//! start of the last full page.

use tracing::debug;

use crate::config::CarouselConfig;
use crate::geometry::{CardGeometry, GeometryProvider, ViewportGeometry};
use crate::Error;

/// Paging direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value.signum() {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Backward),
            _ => Err(Error::Other("direction must be non-zero".to_string())),
        }
    }
}

/// First visible card and how many whole cards fit from there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start_index: usize,
    /// Zero only for an empty track
    pub visible_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Command sent to the underlying scroll mechanism
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Scroll to an absolute offset
    To { left: f64, behavior: ScrollBehavior },
    /// Scroll by a relative delta
    By { delta: f64, behavior: ScrollBehavior },
}

/// Receiver of scroll commands. Commands are fire-and-forget: a new command
/// redirects whatever animation is in flight.
pub trait ScrollSink {
    fn scroll(&mut self, command: ScrollCommand);
}

impl ScrollSink for Vec<ScrollCommand> {
    fn scroll(&mut self, command: ScrollCommand) {
        self.push(command);
    }
}

/// Pure paging arithmetic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationEngine {
    /// Slack absorbing sub-pixel rounding at the track ends and when fitting cards
    pub wrap_tolerance: f64,
    /// Single-card step used when the first card has no measurable width
    pub fallback_step: f64,
    pub behavior: ScrollBehavior,
}

impl Default for PaginationEngine {
    fn default() -> Self {
        Self {
            wrap_tolerance: 1.0,
            fallback_step: 300.0,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

impl PaginationEngine {
    pub fn from_config(config: &CarouselConfig) -> Self {
        Self {
            wrap_tolerance: config.wrap_tolerance_px,
            fallback_step: config.fallback_step_px,
            behavior: if config.smooth {
                ScrollBehavior::Smooth
            } else {
                ScrollBehavior::Instant
            },
        }
    }

    /// Locate the first (at least partially) visible card and count how many
    /// whole cards fit in the viewport from there. At least one card is counted
    /// for a non-empty track, even if it is wider than the viewport.
    pub fn compute_page_window(&self, cards: &[CardGeometry], viewport: &ViewportGeometry) -> PageWindow {
        if cards.is_empty() {
            return PageWindow {
                start_index: 0,
                visible_count: 0,
            };
        }

        let start_index = cards
            .iter()
            .position(|c| c.right() - viewport.scroll_left > self.wrap_tolerance)
            .unwrap_or(0);

        let limit = viewport.client_width + self.wrap_tolerance;
        let mut accumulated = 0.0;
        let mut visible_count = 0;

        for (i, card) in cards.iter().enumerate().skip(start_index) {
            accumulated += card.width;
            if i > start_index {
                accumulated += viewport.gap;
            }
            if accumulated <= limit {
                visible_count += 1;
            } else {
                break;
            }
        }

        PageWindow {
            start_index,
            visible_count: visible_count.max(1),
        }
    }

    /// Index of the card that starts the adjacent page
    pub fn target_index(&self, direction: Direction, window: PageWindow, card_count: usize) -> usize {
        match direction {
            Direction::Forward => {
                let next = window.start_index + window.visible_count;
                if next >= card_count {
                    0
                } else {
                    next
                }
            }
            Direction::Backward => match window.start_index.checked_sub(window.visible_count) {
                Some(prev) => prev,
                None => card_count.saturating_sub(window.visible_count),
            },
        }
    }

    /// Index of the card that starts the adjacent page, read against live
    /// geometry, or `None` for an empty track.
    ///
    /// A final page that starts past the end of the scroll range can never be
    /// aligned, so the viewport rests at the maximum offset instead. Paging
    /// forward from there wraps to the first card, using the same end
    /// detection as single-card stepping.
    pub fn page_target_index(
        &self,
        direction: Direction,
        cards: &[CardGeometry],
        viewport: &ViewportGeometry,
    ) -> Option<usize> {
        let window = self.compute_page_window(cards, viewport);
        if window.visible_count == 0 {
            return None;
        }

        let max_scroll = viewport.max_scroll();
        let at_end = max_scroll > 0.0 && viewport.scroll_left >= max_scroll - self.wrap_tolerance;
        let target_index = match direction {
            Direction::Forward if at_end => 0,
            _ => self.target_index(direction, window, cards.len()),
        };

        debug!(
            ?direction,
            start = window.start_index,
            visible = window.visible_count,
            at_end,
            target = target_index,
            "page target"
        );

        Some(target_index)
    }

    /// Scroll offset that aligns the adjacent page's first card with the
    /// viewport's content edge, or `None` when there is nothing to page to
    pub fn page_target(
        &self,
        direction: Direction,
        cards: &[CardGeometry],
        viewport: &ViewportGeometry,
    ) -> Option<f64> {
        let target_index = self.page_target_index(direction, cards, viewport)?;
        let target = cards.get(target_index)?;
        Some(target.left_offset - viewport.padding_left)
    }

    /// Single-card stepping with wrap at either end of the scroll range
    pub fn card_step_command(
        &self,
        direction: Direction,
        cards: &[CardGeometry],
        viewport: &ViewportGeometry,
    ) -> ScrollCommand {
        let max_scroll = viewport.max_scroll();

        match direction {
            Direction::Forward if viewport.scroll_left >= max_scroll - self.wrap_tolerance => {
                return ScrollCommand::To {
                    left: 0.0,
                    behavior: self.behavior,
                };
            }
            Direction::Backward if viewport.scroll_left <= self.wrap_tolerance => {
                return ScrollCommand::To {
                    left: max_scroll,
                    behavior: self.behavior,
                };
            }
            _ => {}
        }

        let step = match cards.first() {
            Some(card) if card.width > 0.0 => card.width + viewport.gap,
            _ => self.fallback_step,
        };

        ScrollCommand::By {
            delta: direction.sign() * step,
            behavior: self.behavior,
        }
    }
}

/// A card track wired to its geometry source and scroll sink
#[derive(Debug)]
pub struct Carousel<G, S> {
    geometry: G,
    sink: S,
    engine: PaginationEngine,
}

impl<G: GeometryProvider, S: ScrollSink> Carousel<G, S> {
    pub fn new(geometry: G, sink: S, engine: PaginationEngine) -> Self {
        Self {
            geometry,
            sink,
            engine,
        }
    }

    pub fn engine(&self) -> &PaginationEngine {
        &self.engine
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (G, S) {
        (self.geometry, self.sink)
    }

    /// Current page window, read from live geometry
    pub fn page_window(&self) -> PageWindow {
        let cards = self.geometry.card_geometries();
        let viewport = self.geometry.viewport_geometry();
        self.engine.compute_page_window(&cards, &viewport)
    }

    /// Scroll a whole page in `direction`. Returns the emitted command, or
    /// `None` when the track is empty.
    pub fn advance(&mut self, direction: Direction) -> Option<ScrollCommand> {
        let cards = self.geometry.card_geometries();
        let viewport = self.geometry.viewport_geometry();

        let Some(left) = self.engine.page_target(direction, &cards, &viewport) else {
            debug!("page request ignored: no cards");
            return None;
        };

        let command = ScrollCommand::To {
            left,
            behavior: self.engine.behavior,
        };
        self.sink.scroll(command);
        Some(command)
    }

    /// Page backward; the name used by the carousel's public control surface
    pub fn retreat(&mut self) -> Option<ScrollCommand> {
        self.advance(Direction::Backward)
    }

    pub fn next_page(&mut self) -> Option<ScrollCommand> {
        self.advance(Direction::Forward)
    }

    /// Alias of [`retreat`](Self::retreat), paired with `next_page`
    pub fn prev_page(&mut self) -> Option<ScrollCommand> {
        self.retreat()
    }

    /// Scroll by a single card, wrapping at the ends of the scroll range
    pub fn scroll_by_card(&mut self, direction: Direction) -> Option<ScrollCommand> {
        let cards = self.geometry.card_geometries();
        if cards.is_empty() {
            debug!("card step ignored: no cards");
            return None;
        }

        let viewport = self.geometry.viewport_geometry();
        let command = self.engine.card_step_command(direction, &cards, &viewport);
        self.sink.scroll(command);
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::StaticLayout;

    fn engine() -> PaginationEngine {
        PaginationEngine::default()
    }

    fn carousel(layout: StaticLayout) -> Carousel<StaticLayout, Vec<ScrollCommand>> {
        Carousel::new(layout, Vec::new(), engine())
    }

    fn target_of(command: Option<ScrollCommand>) -> f64 {
        match command {
            Some(ScrollCommand::To { left, .. }) => left,
            other => panic!("expected absolute scroll, got {:?}", other),
        }
    }

    #[test]
    fn test_two_cards_fit_exactly() {
        let layout = StaticLayout::uniform(5, 100.0, 10.0, 0.0, 210.0);
        let window = engine().compute_page_window(&layout.cards, &layout.viewport);
        assert_eq!(
            window,
            PageWindow {
                start_index: 0,
                visible_count: 2
            }
        );
    }

    #[test]
    fn test_oversized_card_still_counts_as_one() {
        let layout = StaticLayout::from_widths(&[500.0, 100.0], 10.0, 0.0, 210.0);
        let window = engine().compute_page_window(&layout.cards, &layout.viewport);
        assert_eq!(window.start_index, 0);
        assert_eq!(window.visible_count, 1);
    }

    #[test]
    fn test_visible_count_never_zero() {
        for width in [1.0, 50.0, 209.0, 211.5, 1000.0] {
            let layout = StaticLayout::uniform(4, width, 10.0, 0.0, 210.0);
            for scroll in [0.0, 30.0, 150.0, 10_000.0] {
                let vp = ViewportGeometry {
                    scroll_left: scroll,
                    ..layout.viewport
                };
                let window = engine().compute_page_window(&layout.cards, &vp);
                assert!(window.visible_count >= 1, "width {} scroll {}", width, scroll);
            }
        }
    }

    #[test]
    fn test_start_index_skips_scrolled_past_cards() {
        let layout = StaticLayout::uniform(6, 100.0, 10.0, 0.0, 210.0).with_scroll_left(220.0);
        let window = engine().compute_page_window(&layout.cards, &layout.viewport);
        assert_eq!(window.start_index, 2);
    }

    #[test]
    fn test_partially_visible_card_is_start() {
        // Card 1 spans 110..210; at scroll 150 it is still partly in view
        let layout = StaticLayout::uniform(6, 100.0, 10.0, 0.0, 210.0).with_scroll_left(150.0);
        let window = engine().compute_page_window(&layout.cards, &layout.viewport);
        assert_eq!(window.start_index, 1);
    }

    #[test]
    fn test_sliver_within_tolerance_is_not_visible() {
        // Card 0 ends at 100; half a pixel of it remains
        let layout = StaticLayout::uniform(6, 100.0, 10.0, 0.0, 210.0).with_scroll_left(99.5);
        let window = engine().compute_page_window(&layout.cards, &layout.viewport);
        assert_eq!(window.start_index, 1);
    }

    #[test]
    fn test_scrolled_past_everything_defaults_to_zero() {
        let layout = StaticLayout::uniform(3, 100.0, 10.0, 0.0, 210.0).with_scroll_left(5_000.0);
        let window = engine().compute_page_window(&layout.cards, &layout.viewport);
        assert_eq!(window.start_index, 0);
    }

    #[test]
    fn test_fractional_fit_uses_tolerance() {
        // 100.4 + 10 + 100.4 = 210.8, within one pixel of 210
        let layout = StaticLayout::uniform(4, 100.4, 10.0, 0.0, 210.0);
        let window = engine().compute_page_window(&layout.cards, &layout.viewport);
        assert_eq!(window.visible_count, 2);
    }

    #[test]
    fn test_pages_wrap_on_exact_multiple() {
        let mut c = carousel(StaticLayout::uniform(6, 100.0, 10.0, 0.0, 210.0));

        // 0 -> 2 -> 4 -> wrap to 0
        assert_eq!(target_of(c.next_page()), 220.0);
        c.geometry_mut().set_scroll_left(220.0);
        assert_eq!(target_of(c.next_page()), 440.0);
        c.geometry_mut().set_scroll_left(440.0);
        assert_eq!(c.page_window().start_index, 4);
        assert_eq!(target_of(c.next_page()), 0.0);

        // retreat from the first page lands on the last page start
        c.geometry_mut().set_scroll_left(0.0);
        assert_eq!(target_of(c.retreat()), 440.0);
    }

    #[test]
    fn test_forward_wraps_when_last_page_start_is_unreachable() {
        // Widths 100/100/150/100 in a 210 viewport: the last page starts at
        // card 3 (380), past the maximum offset of 270
        let layout = StaticLayout::from_widths(&[100.0, 100.0, 150.0, 100.0], 10.0, 0.0, 210.0);
        let max = layout.viewport.max_scroll();
        assert_eq!(max, 270.0);
        let mut c = carousel(layout);

        assert_eq!(target_of(c.next_page()), 220.0);
        c.geometry_mut().set_scroll_left(220.0);
        assert_eq!(target_of(c.next_page()), 380.0);

        // The scroll mechanism clamps that target to the end of the range
        c.geometry_mut().set_scroll_left(max);
        assert_eq!(target_of(c.next_page()), 0.0);

        // Within tolerance of the end still counts as the end
        c.geometry_mut().set_scroll_left(max - 0.5);
        assert_eq!(target_of(c.next_page()), 0.0);
    }

    #[test]
    fn test_page_target_index_for_empty_track() {
        let layout = StaticLayout::uniform(0, 100.0, 10.0, 0.0, 210.0);
        assert_eq!(
            engine().page_target_index(Direction::Forward, &layout.cards, &layout.viewport),
            None
        );
    }

    #[test]
    fn test_prev_page_matches_retreat() {
        let mut c = carousel(StaticLayout::uniform(6, 100.0, 10.0, 0.0, 210.0).with_scroll_left(220.0));
        let via_prev = c.prev_page();
        let via_retreat = c.retreat();
        assert_eq!(via_prev, via_retreat);
        assert_eq!(target_of(via_prev), 0.0);
    }

    #[test]
    fn test_advance_then_retreat_round_trip_on_first_page() {
        let mut c = carousel(StaticLayout::uniform(6, 100.0, 10.0, 0.0, 210.0));

        let back = target_of(c.advance(Direction::Backward));
        c.geometry_mut().set_scroll_left(back);
        let forward = target_of(c.advance(Direction::Forward));
        c.geometry_mut().set_scroll_left(forward);

        assert_eq!(c.page_window().start_index, 0);
    }

    #[test]
    fn test_retreat_mid_track() {
        let mut c = carousel(StaticLayout::uniform(6, 100.0, 10.0, 0.0, 210.0).with_scroll_left(440.0));
        assert_eq!(target_of(c.prev_page()), 220.0);
    }

    #[test]
    fn test_retreat_wrap_with_uneven_last_page() {
        // 5 cards, 2 per page: wrapping back lands on card 3 (a full final page)
        let mut c = carousel(StaticLayout::uniform(5, 100.0, 10.0, 0.0, 210.0));
        assert_eq!(target_of(c.retreat()), 330.0);
    }

    #[test]
    fn test_target_accounts_for_padding() {
        let mut c = carousel(StaticLayout::uniform(6, 100.0, 10.0, 16.0, 210.0));
        // card 2 sits at 16 + 220
        assert_eq!(target_of(c.next_page()), 220.0);
    }

    #[test]
    fn test_commands_reach_sink() {
        let mut c = carousel(StaticLayout::uniform(6, 100.0, 10.0, 0.0, 210.0));
        c.next_page();
        c.prev_page();
        let (_, sink) = c.into_parts();
        assert_eq!(sink.len(), 2);
        assert!(sink.iter().all(|cmd| matches!(
            cmd,
            ScrollCommand::To {
                behavior: ScrollBehavior::Smooth,
                ..
            }
        )));
    }

    #[test]
    fn test_empty_track_is_noop() {
        let mut c = carousel(StaticLayout::uniform(0, 100.0, 10.0, 0.0, 210.0));
        assert_eq!(c.next_page(), None);
        assert_eq!(c.retreat(), None);
        assert_eq!(c.scroll_by_card(Direction::Forward), None);
        assert!(c.sink().is_empty());
        assert_eq!(c.page_window().visible_count, 0);
    }

    #[test]
    fn test_card_step_forward() {
        let mut c = carousel(StaticLayout::uniform(6, 100.0, 10.0, 0.0, 210.0));
        assert_eq!(
            c.scroll_by_card(Direction::Forward),
            Some(ScrollCommand::By {
                delta: 110.0,
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[test]
    fn test_card_step_wraps_near_end() {
        let layout = StaticLayout::uniform(6, 100.0, 10.0, 0.0, 210.0);
        let max = layout.viewport.max_scroll();
        // Fractional position just shy of the end still wraps
        let mut c = carousel(layout.with_scroll_left(max - 0.6));
        assert_eq!(
            c.scroll_by_card(Direction::Forward),
            Some(ScrollCommand::To {
                left: 0.0,
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[test]
    fn test_card_step_wraps_near_start() {
        let layout = StaticLayout::uniform(6, 100.0, 10.0, 0.0, 210.0);
        let max = layout.viewport.max_scroll();
        let mut c = carousel(layout.with_scroll_left(0.8));
        assert_eq!(
            c.scroll_by_card(Direction::Backward),
            Some(ScrollCommand::To {
                left: max,
                behavior: ScrollBehavior::Smooth
            })
        );
    }

    #[test]
    fn test_card_step_uses_fallback_for_unmeasured_cards() {
        let layout = StaticLayout::uniform(3, 0.0, 10.0, 0.0, 210.0).with_scroll_left(50.0);
        let command = engine().card_step_command(Direction::Backward, &layout.cards, &{
            let mut vp = layout.viewport;
            vp.scroll_width = 1_000.0;
            vp
        });
        assert_eq!(
            command,
            ScrollCommand::By {
                delta: -300.0,
                behavior: ScrollBehavior::Smooth
            }
        );
    }

    #[test]
    fn test_instant_behavior_from_config() {
        let config = CarouselConfig {
            smooth: false,
            ..Default::default()
        };
        let mut c = Carousel::new(
            StaticLayout::uniform(4, 100.0, 10.0, 0.0, 210.0),
            Vec::new(),
            PaginationEngine::from_config(&config),
        );
        assert!(matches!(
            c.next_page(),
            Some(ScrollCommand::To {
                behavior: ScrollBehavior::Instant,
                ..
            })
        ));
    }

    #[test]
    fn test_direction_from_sign() {
        assert_eq!(Direction::try_from(1).unwrap(), Direction::Forward);
        assert_eq!(Direction::try_from(-1).unwrap(), Direction::Backward);
        assert!(Direction::try_from(0).is_err());
    }
}

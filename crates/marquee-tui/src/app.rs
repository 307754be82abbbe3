use std::sync::Arc;

use marquee_core::config::{CardSpec, SlideSpec};
use marquee_core::observers::{FrameCoalescer, NavbarObserver, ParallaxLayer};
use marquee_core::pagination::{Carousel, Direction, PaginationEngine};
use marquee_core::rotator::{DeadlineTimer, Interaction, SlideRotator, SlideStrip};
use marquee_core::AppConfig;
use tracing::debug;

use crate::input::Action;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;
use crate::track::TrackLayout;

/// Panel receiving arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Carousel,
    Jumbotron,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub cards: Vec<CardSpec>,
    pub slides: Vec<SlideSpec>,
    /// Card track: geometry in cells, animator as the scroll sink
    pub carousel: Carousel<TrackLayout, ScrollAnimator>,
    pub rotator: SlideRotator<DeadlineTimer, SlideStrip>,
    pub navbar: NavbarObserver,
    pub parallax: ParallaxLayer,
    pub focus: Focus,
    /// Vertical scroll of the page body, in rows
    pub page_scroll: u16,
    /// Terminal size
    pub size: (u16, u16),
    resize_frame: FrameCoalescer<(u16, u16)>,
    scroll_frame: FrameCoalescer<u16>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl App {
    pub const NAVBAR_HEIGHT: u16 = 1;
    pub const JUMBOTRON_HEIGHT: u16 = 9;
    pub const CAROUSEL_HEIGHT: u16 = 8;
    pub const FOOTER_HEIGHT: u16 = 24;
    /// Blank rows between page sections
    pub const SECTION_GAP: u16 = 1;

    pub fn new(config: Arc<AppConfig>, width: u16, height: u16) -> Self {
        let theme = Theme::from_overrides(&config.ui.theme);
        let cards = config.content.cards.clone();
        let slides = config.content.slides.clone();

        let track = TrackLayout::new(
            cards.iter().map(|c| c.width).collect(),
            config.carousel.gap,
            config.carousel.padding,
        );
        let animator = ScrollAnimator::new(config.ui.scroll.clone());
        let carousel = Carousel::new(track, animator, PaginationEngine::from_config(&config.carousel));

        let rotator = SlideRotator::from_config(
            slides.len(),
            &config.rotator,
            DeadlineTimer::new(),
            SlideStrip::new(slides.len()),
        );

        let mut app = Self {
            navbar: NavbarObserver::new(config.observers.navbar_hide_margin),
            parallax: ParallaxLayer::from_config(&config.observers),
            theme,
            cards,
            slides,
            carousel,
            rotator,
            focus: Focus::Carousel,
            page_scroll: 0,
            size: (width, height),
            resize_frame: FrameCoalescer::new(),
            scroll_frame: FrameCoalescer::new(),
            should_quit: false,
            status_message: None,
            config,
        };
        app.apply_resize(width, height);
        app
    }

    /// Total height of the scrollable page body
    pub fn page_height() -> u16 {
        Self::JUMBOTRON_HEIGHT + Self::SECTION_GAP + Self::CAROUSEL_HEIGHT + Self::SECTION_GAP + Self::FOOTER_HEIGHT
    }

    /// Rows available to the page body (below the navbar, above the status bar)
    pub fn body_height(&self) -> u16 {
        let navbar = if self.navbar.is_visible() {
            Self::NAVBAR_HEIGHT
        } else {
            0
        };
        self.size.1.saturating_sub(1 + navbar)
    }

    pub fn max_page_scroll(&self) -> u16 {
        Self::page_height().saturating_sub(self.body_height())
    }

    /// Horizontal parallax shift of the jumbotron content
    pub fn jumbotron_shift(&self) -> i32 {
        let top = -f64::from(self.page_scroll);
        let (tx, _) = self.parallax.offset(
            top,
            f64::from(Self::JUMBOTRON_HEIGHT),
            f64::from(self.body_height()),
        );
        tx
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Queue a resize; applied once on the next frame
    pub fn request_resize(&mut self, width: u16, height: u16) {
        self.resize_frame.request((width, height));
    }

    fn apply_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        // Carousel panel has a one-cell border on each side
        self.carousel.geometry_mut().viewport_width = width.saturating_sub(2);
        let max_scroll = self.carousel.geometry().max_scroll();
        self.carousel.sink_mut().set_max_scroll(max_scroll);
        self.sync_track_scroll();
        self.page_scroll = self.page_scroll.min(self.max_page_scroll());
    }

    /// Mirror the animator's live offset into the geometry source
    fn sync_track_scroll(&mut self) {
        let offset = self.carousel.sink().current();
        self.carousel.geometry_mut().scroll_left = offset;
    }

    /// Per-frame work. Returns true while an animation needs a fast frame rate.
    pub fn on_frame(&mut self) -> bool {
        if let Some((width, height)) = self.resize_frame.take() {
            self.apply_resize(width, height);
        }

        if let Some(y) = self.scroll_frame.take() {
            self.navbar
                .observe(f64::from(y), f64::from(Self::NAVBAR_HEIGHT));
        }

        if let Some(handle) = self.rotator.timer_mut().poll() {
            self.rotator.on_timer_fired(handle);
        }

        self.carousel.sink_mut().update();
        self.sync_track_scroll();

        self.carousel.sink().is_animating()
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        let interaction = match focus {
            Focus::Jumbotron => Interaction::FocusIn,
            Focus::Carousel => Interaction::FocusOut,
        };
        self.rotator.handle(interaction);
    }

    fn page(&mut self, direction: Direction) {
        self.sync_track_scroll();
        if self.carousel.advance(direction).is_none() {
            self.set_status("No cards to page through");
        }
    }

    fn card_step(&mut self, direction: Direction) {
        self.sync_track_scroll();
        if self.carousel.scroll_by_card(direction).is_none() {
            self.set_status("No cards to page through");
        }
    }

    fn slide(&mut self, interaction: Interaction) {
        // Slide controls live on the jumbotron; using them moves focus there
        self.set_focus(Focus::Jumbotron);
        self.rotator.handle(interaction);
    }

    fn scroll_page(&mut self, delta: i32) {
        let target = (i32::from(self.page_scroll) + delta).clamp(0, i32::from(self.max_page_scroll()));
        self.page_scroll = target as u16;
        self.scroll_frame.request(self.page_scroll);
    }

    /// Apply an input action
    pub fn apply(&mut self, action: Action) {
        if action != Action::None {
            debug!(?action, "action");
            self.clear_status();
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::NextPage => self.page(Direction::Forward),
            Action::PrevPage => self.page(Direction::Backward),
            Action::NextCard => self.card_step(Direction::Forward),
            Action::PrevCard => self.card_step(Direction::Backward),
            Action::NextSlide => self.slide(Interaction::ClickNext),
            Action::PrevSlide => self.slide(Interaction::ClickPrev),
            Action::JumpToSlide(index) => self.slide(Interaction::ClickIndicator(index)),
            Action::Arrow(direction) => self.rotator.handle(Interaction::Key(direction)),
            Action::ToggleFocus => {
                let next = match self.focus {
                    Focus::Carousel => Focus::Jumbotron,
                    Focus::Jumbotron => Focus::Carousel,
                };
                self.set_focus(next);
            }
            Action::ScrollDown => self.scroll_page(1),
            Action::ScrollUp => self.scroll_page(-1),
            Action::None => {}
        }
    }
}

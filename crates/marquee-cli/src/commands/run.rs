use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use marquee_core::AppConfig;
use marquee_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    scroll::frame_interval,
    widgets::{NavbarWidget, PageWidget, StatusBarWidget},
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Marquee"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(config.clone(), size.width, size.height);

    // Poll faster while the card track is animating
    let event_handler = EventHandler::with_animation_tick(
        config.ui.tick_rate_ms,
        frame_interval(&config.ui.scroll),
    );

    info!(cards = app.cards.len(), slides = app.slides.len(), "TUI started");

    let result = event_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    loop {
        // Coalesced resize/scroll work, rotator deadline, animation step
        let needs_fast_update = app.on_frame();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();
            let navbar_height = if app.navbar.is_visible() {
                App::NAVBAR_HEIGHT
            } else {
                0
            };

            // Main layout: navbar + page body + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(navbar_height),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(size);

            if navbar_height > 0 {
                NavbarWidget::render(frame, main_layout[0], app);
            }
            PageWidget::render(frame, main_layout[1], app);
            StatusBarWidget::render(frame, main_layout[2], app);
        })?;

        if let Some(event) = event_handler.next(needs_fast_update)? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    app.apply(action);
                }
                AppEvent::Resize(width, height) => app.request_resize(width, height),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

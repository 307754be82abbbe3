use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let focus_str = match app.focus {
            Focus::Carousel => "Cards",
            Focus::Jumbotron => "Slides",
        };
        let autoplay = if app.rotator.is_timer_pending() {
            "auto"
        } else {
            "paused"
        };

        let window = app.carousel.page_window();
        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | Cards {}-{} of {} | Slide {}/{} ({})",
                focus_str,
                (window.start_index + 1).min(app.cards.len()),
                (window.start_index + window.visible_count).min(app.cards.len()),
                app.cards.len(),
                (app.rotator.current_index() + 1).min(app.slides.len()),
                app.slides.len(),
                autoplay,
            )
        };

        let help_hint = " q:quit h/l:page H/L:card n/p:slide Tab:focus j/k:scroll ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg).bg(theme.card)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.card)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.card)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

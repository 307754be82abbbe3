use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};

pub struct NavbarWidget;

impl NavbarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let tab = |label: &'static str, focus: Focus| {
            let style = if app.focus == focus {
                Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg).bg(theme.card)
            };
            Span::styled(format!(" {} ", label), style)
        };

        let line = Line::from(vec![
            Span::styled(
                " marquee ",
                Style::default().fg(theme.active).bg(theme.card).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", Style::default().bg(theme.card)),
            tab("Featured", Focus::Jumbotron),
            Span::styled(" ", Style::default().bg(theme.card)),
            tab("Collection", Focus::Carousel),
        ]);

        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(theme.card)),
            area,
        );
    }
}

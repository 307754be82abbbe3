use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::app::{App, Focus};

use super::clip::render_clipped;

pub struct JumbotronWidget;

impl JumbotronWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let is_focused = app.focus == Focus::Jumbotron;

        let border_style = if is_focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.muted)
        };

        let state = if app.rotator.is_timer_pending() {
            "auto"
        } else {
            "paused"
        };
        let block = Block::default()
            .title(format!(" Featured [{}] ", state))
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let strip = app.rotator.display();
        let Some(slide) = strip.active_slide().and_then(|i| app.slides.get(i)) else {
            Paragraph::new("No slides")
                .style(Style::default().fg(theme.muted))
                .render(inner, buf);
            return;
        };

        // Last row holds the indicators
        let content_height = inner.height.saturating_sub(1);
        let shift = app.jumbotron_shift();
        let content = vec![
            Line::from(Span::styled(
                slide.title.clone(),
                Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(slide.body.clone(), Style::default().fg(theme.fg))),
        ];
        let content_clip = Rect::new(inner.x, inner.y, inner.width, content_height);
        render_clipped(
            buf,
            content_clip,
            i32::from(inner.x) + shift,
            i32::from(inner.y),
            inner.width,
            content_height,
            |local, scratch| {
                Paragraph::new(content)
                    .wrap(Wrap { trim: true })
                    .render(local, scratch);
            },
        );

        let indicators: Vec<Span> = (0..strip.len())
            .map(|i| {
                if strip.is_indicator_active(i) {
                    Span::styled("● ", Style::default().fg(theme.accent))
                } else {
                    Span::styled("○ ", Style::default().fg(theme.muted))
                }
            })
            .collect();
        let indicator_row = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        Paragraph::new(Line::from(indicators))
            .alignment(ratatui::layout::Alignment::Center)
            .render(indicator_row, buf);
    }
}

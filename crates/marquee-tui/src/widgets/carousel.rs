use marquee_core::geometry::GeometryProvider;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::app::{App, Focus};

use super::clip::render_clipped;

pub struct CarouselWidget;

impl CarouselWidget {
    pub fn render(buf: &mut Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let is_focused = app.focus == Focus::Carousel;

        let border_style = if is_focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.muted)
        };

        let block = Block::default()
            .title(" Collection ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.bg));
        let inner = block.inner(area);
        block.render(area, buf);

        if app.cards.is_empty() {
            Paragraph::new("No cards")
                .style(Style::default().fg(theme.muted))
                .render(inner, buf);
            return;
        }

        let track = app.carousel.geometry();
        let scroll_left = track.scroll_left.round() as i32;
        let window = app.carousel.page_window();
        let page = window.start_index..window.start_index + window.visible_count;

        for (i, (card, geometry)) in app
            .cards
            .iter()
            .zip(track.card_geometries())
            .enumerate()
        {
            let x = i32::from(inner.x) + geometry.left_offset.round() as i32 - scroll_left;
            let width = geometry.width.round() as u16;
            if x + i32::from(width) <= i32::from(inner.left()) || x >= i32::from(inner.right()) {
                continue;
            }

            let highlighted = is_focused && i == window.start_index;
            let card_border = if highlighted {
                Style::default().fg(theme.active)
            } else if page.contains(&i) {
                Style::default().fg(theme.fg)
            } else {
                Style::default().fg(theme.muted)
            };

            render_clipped(buf, inner, x, i32::from(inner.y), width, inner.height, |local, scratch| {
                let card_block = Block::default()
                    .title(Span::styled(
                        format!(" {} ", card.title),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(card_border)
                    .style(Style::default().bg(theme.card).fg(theme.fg));
                let body_area = card_block.inner(local);
                card_block.render(local, scratch);
                Paragraph::new(card.body.as_str())
                    .wrap(Wrap { trim: true })
                    .render(body_area, scratch);
            });
        }
    }
}

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use crate::app::App;

use super::clip::render_clipped;
use super::{CarouselWidget, JumbotronWidget};

/// Scrollable page body: jumbotron, carousel, footer stacked vertically
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let buf = frame.buffer_mut();
        let top = i32::from(area.y) - i32::from(app.page_scroll);

        let jumbotron_y = top;
        let carousel_y = jumbotron_y + i32::from(App::JUMBOTRON_HEIGHT + App::SECTION_GAP);
        let footer_y = carousel_y + i32::from(App::CAROUSEL_HEIGHT + App::SECTION_GAP);
        let x = i32::from(area.x);

        render_clipped(buf, area, x, jumbotron_y, area.width, App::JUMBOTRON_HEIGHT, |local, scratch| {
            JumbotronWidget::render(scratch, local, app)
        });
        render_clipped(buf, area, x, carousel_y, area.width, App::CAROUSEL_HEIGHT, |local, scratch| {
            CarouselWidget::render(scratch, local, app)
        });
        render_clipped(buf, area, x, footer_y, area.width, App::FOOTER_HEIGHT, |local, scratch| {
            Self::render_footer(scratch, local, app)
        });
    }

    fn render_footer(buf: &mut ratatui::buffer::Buffer, area: Rect, app: &App) {
        let theme = &app.theme;
        let lines = vec![
            Line::from(""),
            Line::from(format!("{} cards · {} slides", app.cards.len(), app.slides.len())),
            Line::from(""),
            Line::from("Scroll with j/k; the navbar hides while scrolling down."),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(theme.muted)),
            )
            .style(Style::default().fg(theme.muted).bg(theme.bg))
            .render(area, buf);
    }
}

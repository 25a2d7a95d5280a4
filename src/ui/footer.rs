use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bottom bar: like total and key hints on the left, version on the right.
pub struct Footer {
    count: u64,
}

impl Footer {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    fn status_line(&self) -> Line<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let likes = if self.count == 1 { "like" } else { "likes" };
        Line::from(vec![
            Span::styled(format!(" {} {likes}", self.count), Style::default().fg(HEADER_TEXT)),
            Span::styled(" │ ", separator_style),
            Span::styled("Click/Enter/Space: Like", text_style),
            Span::styled(" │ ", separator_style),
            Span::styled("q/Esc/Ctrl+C: Quit", text_style),
        ])
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let version = Line::from(format!("v{VERSION} "))
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM));
        let version_width = u16::try_from(version.width()).unwrap_or(u16::MAX);
        // The version yields its column when the status line needs the room.
        let status = self.status_line();
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(version_width)])
                .areas(inner);
        if status.width() > usize::from(left.width) {
            Paragraph::new(status).render(inner, buf);
            return;
        }
        Paragraph::new(status).render(left, buf);
        Paragraph::new(version)
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::GLOBAL_BORDER;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Padding};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let like_width = app.like_button().width();
    // Borders plus one column of padding on each side.
    let frame_rect = centered_rect_by_size(like_width.saturating_add(4), 3, body);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .padding(Padding::horizontal(1));
    let inner = block.inner(frame_rect);
    frame.render_widget(block, frame_rect);
    app.set_like_area(inner);
    frame.render_widget(&app.like_button(), inner);

    frame.render_widget(Footer::new(app.count()), footer);
}

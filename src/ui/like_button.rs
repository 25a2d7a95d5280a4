//! The like button: a heart icon immediately followed by a count.
//!
//! The button is stateless. It renders whatever count it is given and
//! forwards clicks to the `on_click` callback without touching any state
//! of its own; the owner decides what a click means.

use crate::ui::theme::{COUNT_TEXT, LIKE_RED};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

/// Regular (outlined) heart.
pub const LIKE_ICON: &str = "♡";

/// Inputs of a [`LikeButton`].
pub struct LikeProps<F: FnMut()> {
    pub count: u64,
    pub on_click: F,
}

pub struct LikeButton<F: FnMut()> {
    props: LikeProps<F>,
}

impl<F: FnMut()> LikeButton<F> {
    pub fn new(count: u64, on_click: F) -> Self {
        Self::from_props(LikeProps { count, on_click })
    }

    pub fn from_props(props: LikeProps<F>) -> Self {
        Self { props }
    }

    pub fn count(&self) -> u64 {
        self.props.count
    }

    /// Icon followed by the decimal count, no separator.
    pub fn line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(LIKE_ICON, Style::default().fg(LIKE_RED)),
            Span::styled(self.props.count.to_string(), Style::default().fg(COUNT_TEXT)),
        ])
    }

    /// Display width in terminal cells.
    pub fn width(&self) -> u16 {
        u16::try_from(self.line().width()).unwrap_or(u16::MAX)
    }

    /// Forward one interaction to the owner.
    pub fn click(&mut self) {
        (self.props.on_click)();
    }

    /// Left-button press inside `area` counts as a click.
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        if !area.contains(Position::new(event.column, event.row)) {
            return false;
        }
        self.click();
        true
    }

    /// Enter or Space counts as a click.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.click();
                true
            }
            _ => false,
        }
    }
}

impl<F: FnMut()> Widget for &LikeButton<F> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}

use ratatui::layout::{Constraint, Layout, Rect};

/// Header, body and footer. Header and footer get three rows each.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);
    (header, body, footer)
}

/// Rect of at most `width` x `height` centered in `area`.
pub fn centered_rect_by_size(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 40, 20));
        assert_eq!(header, Rect::new(0, 0, 40, 3));
        assert_eq!(body, Rect::new(0, 3, 40, 14));
        assert_eq!(footer, Rect::new(0, 17, 40, 3));
    }

    #[test]
    fn centered_rect_is_clamped() {
        let rect = centered_rect_by_size(10, 3, Rect::new(2, 2, 6, 9));
        assert_eq!(rect, Rect::new(2, 5, 6, 3));
    }
}

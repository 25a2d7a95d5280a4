use crate::ui::like::{LikeIntent, LikeReducer, LikeState};
use crate::ui::like_button::LikeButton;
use crate::ui::mvi::Reducer;
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($state:expr, $reducer:ty, $intent:expr) => {
        *$state = <$reducer>::reduce(std::mem::take($state), $intent);
    };
}

/// Root container: owns the like count and wires clicks to it.
pub struct App {
    should_quit: bool,
    /// Like count (MVI pattern).
    like: LikeState,
    /// Set whenever state changed since the last frame.
    needs_redraw: bool,
    /// Where the like button was last drawn, for mouse hit tests.
    like_area: Option<Rect>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            like: LikeState::default(),
            needs_redraw: true,
            like_area: None,
        }
    }

    #[cfg(test)]
    fn with_count(count: u64) -> Self {
        Self {
            like: LikeState { count },
            ..Self::new()
        }
    }

    pub fn count(&self) -> u64 {
        self.like.count
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.needs_redraw, false)
    }

    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    pub fn like_area(&self) -> Option<Rect> {
        self.like_area
    }

    pub fn set_like_area(&mut self, area: Rect) {
        self.like_area = Some(area);
    }

    /// Button showing the current count; clicking it dispatches
    /// [`LikeIntent::Click`] and schedules a redraw.
    pub fn like_button(&mut self) -> LikeButton<impl FnMut() + '_> {
        let count = self.like.count;
        let like = &mut self.like;
        let needs_redraw = &mut self.needs_redraw;
        LikeButton::new(count, move || {
            if like.is_saturated() {
                tracing::warn!(count = like.count, "like count saturated");
            }
            dispatch_mvi!(like, LikeReducer, LikeIntent::Click);
            tracing::debug!(count = like.count, "like clicked");
            *needs_redraw = true;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_with_pending_redraw() {
        let mut app = App::new();
        assert_eq!(app.count(), 0);
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
    }

    #[test]
    fn click_through_button_increments_and_requests_redraw() {
        let mut app = App::new();
        app.take_redraw();
        app.like_button().click();
        assert_eq!(app.count(), 1);
        assert!(app.take_redraw());
    }

    #[test]
    fn button_reflects_count_at_creation() {
        let mut app = App::new();
        app.like_button().click();
        app.like_button().click();
        assert_eq!(app.like_button().count(), 2);
    }

    #[test]
    fn clicks_at_ceiling_saturate_and_still_redraw() {
        let mut app = App::with_count(u64::MAX - 1);
        app.take_redraw();

        app.like_button().click();
        assert_eq!(app.count(), u64::MAX);
        assert!(app.take_redraw());

        app.like_button().click();
        assert_eq!(app.count(), u64::MAX);
        assert!(app.take_redraw());
    }
}

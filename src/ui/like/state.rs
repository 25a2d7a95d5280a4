use crate::ui::mvi::UiState;

/// Number of recorded likes. Starts at zero and only grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LikeState {
    pub count: u64,
}

impl UiState for LikeState {}

impl LikeState {
    /// True once the count can no longer grow.
    pub fn is_saturated(&self) -> bool {
        self.count == u64::MAX
    }
}

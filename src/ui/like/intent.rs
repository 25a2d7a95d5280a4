use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeIntent {
    /// The like button was clicked (mouse press, Enter or Space).
    Click,
}

impl Intent for LikeIntent {}

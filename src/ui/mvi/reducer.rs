//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Folds intents into state.
///
/// Each feature has one reducer and it owns every transition of that
/// feature's state. Reducers only compute; logging and redraw requests
/// belong to whoever dispatches.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Next state after `intent` is applied to `state`.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

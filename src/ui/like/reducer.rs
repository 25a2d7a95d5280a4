use crate::ui::like::intent::LikeIntent;
use crate::ui::like::state::LikeState;
use crate::ui::mvi::Reducer;

pub struct LikeReducer;

impl Reducer for LikeReducer {
    type State = LikeState;
    type Intent = LikeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Saturates at u64::MAX rather than wrapping back to zero.
            LikeIntent::Click => LikeState {
                count: state.count.saturating_add(1),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_increments_by_one() {
        let state = LikeReducer::reduce(LikeState { count: 41 }, LikeIntent::Click);
        assert_eq!(state.count, 42);
    }

    #[test]
    fn click_saturates_at_max() {
        let state = LikeReducer::reduce(LikeState { count: u64::MAX }, LikeIntent::Click);
        assert_eq!(state.count, u64::MAX);
        assert!(state.is_saturated());
    }
}

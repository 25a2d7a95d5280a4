use like_counter::ui::like::{LikeIntent, LikeReducer, LikeState};
use like_counter::ui::mvi::Reducer;

#[test]
fn default_state_is_zero() {
    assert_eq!(LikeState::default().count, 0);
}

#[test]
fn k_clicks_yield_k() {
    for k in [0u64, 1, 2, 5, 100] {
        let state = (0..k).fold(LikeState::default(), |state, _| {
            LikeReducer::reduce(state, LikeIntent::Click)
        });
        assert_eq!(state.count, k);
    }
}

#[test]
fn saturation_is_sticky() {
    let mut state = LikeState { count: u64::MAX - 1 };
    for _ in 0..3 {
        state = LikeReducer::reduce(state, LikeIntent::Click);
    }
    assert_eq!(state.count, u64::MAX);
}

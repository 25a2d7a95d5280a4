//! Like counter state (MVI pattern).
//!
//! - `state.rs` - the Count held by the container
//! - `intent.rs` - user interactions (Click)
//! - `reducer.rs` - pure state transitions

mod intent;
mod reducer;
mod state;

pub use intent::LikeIntent;
pub use reducer::LikeReducer;
pub use state::LikeState;

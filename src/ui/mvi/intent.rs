//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// An intent describes a user interaction (a click, a key press) that a
/// reducer turns into a new state.
pub trait Intent: Send + 'static {}

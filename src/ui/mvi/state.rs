//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned rather than mutated in place, compared to detect
/// changes, and hold everything the view needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

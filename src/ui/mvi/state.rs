//! Base trait for UI state in the unidirectional flow.

/// Marker trait for UI state objects.
///
/// A state value is immutable once produced (reducers build the next one
/// from scratch), self-contained for rendering, and comparable so the
/// view layer can detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

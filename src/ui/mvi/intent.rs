//! Base trait for intents in the unidirectional flow.

/// Marker trait for intent objects.
///
/// An intent is a user action or system event, described as data and
/// handed to a reducer. Intents never carry behavior themselves.
pub trait Intent: Send + 'static {}

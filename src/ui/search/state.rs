use crate::ui::mvi::UiState;

/// The in-progress search text.
///
/// This is the live-filter input only. Submitting it is not a state
/// transition of the box; the product list dispatches a fetch with the
/// current text and the text stays put.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchBoxState {
    pub text: String,
}

impl UiState for SearchBoxState {}

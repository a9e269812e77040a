use crate::api::Product;
use crate::ui::mvi::UiState;

/// One screen in the navigation stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Login,
    Products,
    /// Product detail, carrying the selected product verbatim.
    Details(Product),
}

/// Navigation stack; the last entry is the visible screen.
///
/// The stack is never empty: resets replace it wholesale and `Pop` stops
/// at the root.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub(super) stack: Vec<Route>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            stack: vec![Route::Login],
        }
    }
}

impl UiState for NavState {}

impl NavState {
    /// The currently visible route.
    pub fn current(&self) -> &Route {
        self.stack.last().expect("navigation stack is never empty")
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

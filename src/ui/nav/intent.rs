use crate::api::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NavIntent {
    /// Replace the whole stack with the login screen (logout, or an
    /// unauthenticated start).
    ResetToLogin,
    /// Replace the whole stack with the product list (fresh entry after
    /// login or a persisted session).
    ResetToProducts,
    /// Push the detail screen for a product. Only meaningful from the
    /// product list; ignored elsewhere.
    PushDetails { product: Product },
    /// Leave the current screen. No-op at the stack root.
    Pop,
}

impl Intent for NavIntent {}

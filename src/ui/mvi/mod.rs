//! Unidirectional data flow primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Navigation and the search box are modeled this way: key handling
//! produces intents, a pure reducer folds them into the next state, and
//! the render pass only ever reads state.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

//! Model-View-Intent primitives for the quote screen.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── Presenter ←──────────┘
//! ```
//!
//! Views only read state. The presenter turns commands and fetch results
//! into intents, and the reducer is the only place a state is produced.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

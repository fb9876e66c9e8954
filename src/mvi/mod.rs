//! Unidirectional data flow primitives.
//!
//! The engine follows a reducer architecture: the shell turns each user
//! gesture into an intent, a pure reducer folds the intent into a new
//! state, and the shell renders the result.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Display
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of everything needed to render
//! - **Intent**: one discrete user gesture
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;

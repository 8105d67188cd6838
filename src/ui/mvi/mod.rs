//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the state layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑          │                   │
//!    │        Effect                │
//!    └──────────┴───────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on intents
//! - **Effect**: Follow-up work a reducer asks the store to run

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::{Effect, EffectFuture};
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

//! Root feature module: the map, the list of water sources, and the one
//! destination (info panel or details) that may be open on top.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Region, ordered items, optional destination
//! - `intent.rs` - Activation, navigation, bindings, child routing
//! - `reducer.rs` - Transitions and routing into the child reducers

mod intent;
mod reducer;
mod state;

pub use intent::{AppIntent, DestinationIntent};
pub use reducer::AppReducer;
pub use state::{AppState, Destination};

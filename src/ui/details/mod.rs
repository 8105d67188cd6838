//! Water-source details feature module.
//!
//! Editable view of one record: the three sanitation steps, each marked
//! done at most once and persisted right away.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Record copy, disabled-predicates, completion alert
//! - `intent.rs` - Step taps, persistence, alert dismissal
//! - `reducer.rs` - State transitions and the save effect

mod intent;
mod reducer;
mod state;

pub use intent::DetailsIntent;
pub use reducer::DetailsReducer;
pub use state::{CompletionAlert, DetailsState};

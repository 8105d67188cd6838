//! Water-source list item feature module.
//!
//! Display wrapper for one record in the list and on the map. Its only
//! intent is the root writing back a record edited elsewhere.

mod intent;
mod reducer;
mod state;

pub use intent::WatersourceIntent;
pub use reducer::WatersourceReducer;
pub use state::WatersourceState;

//! Info panel feature module.
//!
//! Modal sheet with the author, a link to the CDC guidance on making
//! water safe, and a dismiss button that asks the parent to close it.

mod intent;
mod reducer;
mod state;

pub use intent::{InfoDelegate, InfoIntent};
pub use reducer::InfoReducer;
pub use state::{InfoLink, InfoState, ABOUT_TEXT, CDC_GUIDANCE};

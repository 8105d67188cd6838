//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (button taps, viewport drags)
/// - Gateway responses delivered by effects
/// - Navigation events
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Debug + Send + 'static {}

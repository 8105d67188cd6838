//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen. It never
/// performs I/O itself: work that must happen afterwards is returned as an
/// [`Effect`] and run by the [`Store`](crate::ui::Store).
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Dependencies available to effects.
    type Env: Send + Sync + 'static;

    /// Process an intent and return the new state plus follow-up work.
    fn reduce(
        state: Self::State,
        intent: Self::Intent,
        env: &Self::Env,
    ) -> (Self::State, Effect<Self::Intent>);
}

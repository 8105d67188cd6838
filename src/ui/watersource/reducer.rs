use crate::ui::env::AppEnv;
use crate::ui::mvi::{Effect, Reducer};

use super::intent::WatersourceIntent;
use super::state::WatersourceState;

pub struct WatersourceReducer;

impl Reducer for WatersourceReducer {
    type State = WatersourceState;
    type Intent = WatersourceIntent;
    type Env = AppEnv;

    fn reduce(
        state: Self::State,
        intent: Self::Intent,
        _env: &Self::Env,
    ) -> (Self::State, Effect<Self::Intent>) {
        match intent {
            WatersourceIntent::ModelUpdated(model) if model.id == state.id() => {
                (WatersourceState::new(model), Effect::None)
            }
            WatersourceIntent::ModelUpdated(model) => {
                tracing::debug!(item = %state.id(), record = %model.id, "ignoring update for another record");
                (state, Effect::None)
            }
        }
    }
}

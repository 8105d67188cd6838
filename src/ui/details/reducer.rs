//! Reducer for the details view.

use std::sync::Arc;

use crate::model::Stage;
use crate::ui::env::AppEnv;
use crate::ui::mvi::{Effect, Reducer};

use super::intent::DetailsIntent;
use super::state::{CompletionAlert, DetailsState};

/// Marks are applied locally first, then saved. A failed save leaves the
/// local record as it is.
pub struct DetailsReducer;

impl Reducer for DetailsReducer {
    type State = DetailsState;
    type Intent = DetailsIntent;
    type Env = AppEnv;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
        env: &Self::Env,
    ) -> (Self::State, Effect<Self::Intent>) {
        match intent {
            DetailsIntent::MarkBoiled => mark(state, Stage::Boil),
            DetailsIntent::MarkDisinfected => mark(state, Stage::Disinfect),
            DetailsIntent::MarkFiltered => mark(state, Stage::Filter),

            DetailsIntent::Persist => {
                // Snapshot now; later marks get their own save, written
                // after this one.
                let snapshot = state.model.clone();
                let gateway = Arc::clone(&env.gateway);
                let effect = Effect::ordered(save_lane(&state), async move {
                    DetailsIntent::PersistResponse(gateway.save_water_source(snapshot).await)
                });
                (state, effect)
            }

            DetailsIntent::PersistResponse(Ok(())) => {
                tracing::debug!(record = %state.id(), "record saved");
                (state, Effect::None)
            }

            DetailsIntent::PersistResponse(Err(err)) => {
                tracing::warn!(record = %state.id(), error = %err, "save failed, keeping local changes");
                (state, Effect::None)
            }

            DetailsIntent::AlertDismissed => {
                state.alert = None;
                (state, Effect::None)
            }
        }
    }
}

/// Saves of one record share a lane so the last snapshot wins.
fn save_lane(state: &DetailsState) -> String {
    format!("save:{}", state.id())
}

fn mark(mut state: DetailsState, stage: Stage) -> (DetailsState, Effect<DetailsIntent>) {
    if !state.model.mark(stage) {
        tracing::debug!(record = %state.id(), stage = stage.label(), "stage already complete");
        return (state, Effect::None);
    }
    if state.model.is_complete() {
        state.alert = Some(CompletionAlert::SANITIZATION_COMPLETE);
    }
    (state, Effect::Send(DetailsIntent::Persist))
}

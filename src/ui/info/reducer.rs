//! Reducer for the info panel.

use std::sync::Arc;

use crate::ui::env::AppEnv;
use crate::ui::mvi::{Effect, Reducer};

use super::intent::{InfoDelegate, InfoIntent};
use super::state::InfoState;

pub struct InfoReducer;

impl Reducer for InfoReducer {
    type State = InfoState;
    type Intent = InfoIntent;
    type Env = AppEnv;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
        env: &Self::Env,
    ) -> (Self::State, Effect<Self::Intent>) {
        match intent {
            InfoIntent::Load => {
                let client = Arc::clone(&env.app_info);
                let effect =
                    Effect::task(async move { InfoIntent::LoadResponse(client.author().await) });
                (state, effect)
            }

            InfoIntent::LoadResponse(Ok(author)) => {
                state.author = Some(author);
                (state, Effect::None)
            }

            InfoIntent::LoadResponse(Err(err)) => {
                tracing::warn!(error = %err, "author lookup failed");
                (state, Effect::None)
            }

            InfoIntent::DismissTapped => (state, Effect::Send(InfoIntent::Delegate(InfoDelegate::Dismiss))),

            InfoIntent::Delegate(_) => (state, Effect::None),
        }
    }
}

//! Reducer for the root screen.

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::model::WaterSource;
use crate::ui::details::{DetailsReducer, DetailsState};
use crate::ui::env::AppEnv;
use crate::ui::info::{InfoDelegate, InfoIntent, InfoReducer};
use crate::ui::mvi::{Effect, Reducer};
use crate::ui::watersource::{WatersourceIntent, WatersourceReducer, WatersourceState};

use super::intent::{AppIntent, DestinationIntent};
use super::state::{AppState, Destination};

const LIST_LANE: &str = "list-water-sources";

/// Root reducer. Owns the item list and the destination, and routes
/// child intents into [`WatersourceReducer`], [`InfoReducer`] and
/// [`DetailsReducer`].
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;
    type Env = AppEnv;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
        env: &Self::Env,
    ) -> (Self::State, Effect<Self::Intent>) {
        match intent {
            AppIntent::Activate => {
                let gateway = Arc::clone(&env.gateway);
                // Overlapping refreshes land in issue order.
                let effect = Effect::ordered(LIST_LANE, async move {
                    AppIntent::ActivateResponse(gateway.list_water_sources().await)
                });
                (state, effect)
            }

            AppIntent::ActivateResponse(Ok(records)) => {
                replace_watersources(&mut state, records);
                (state, Effect::None)
            }

            AppIntent::ActivateResponse(Err(err)) => {
                tracing::warn!(
                    gateway = env.gateway.name(),
                    error = %err,
                    "could not load water sources"
                );
                (state, Effect::None)
            }

            AppIntent::SetDestination(destination) => {
                state.destination = destination;
                (state, Effect::None)
            }

            AppIntent::OpenWatersource { id } => {
                match state.item(id) {
                    Some(item) => {
                        let details = DetailsState::new(item.model.clone());
                        state.destination = Some(Destination::WatersourceDetails(details));
                    }
                    None => tracing::debug!(%id, "cannot open unknown water source"),
                }
                (state, Effect::None)
            }

            AppIntent::SetRegion(region) => {
                state.region = region;
                (state, Effect::None)
            }

            AppIntent::Watersource { id, intent } => reduce_item(state, id, intent, env),

            AppIntent::Destination(intent) => reduce_destination(state, intent, env),
        }
    }
}

fn replace_watersources(state: &mut AppState, records: Vec<WaterSource>) {
    let mut seen = HashSet::with_capacity(records.len());
    state.watersources = records
        .into_iter()
        .filter(|record| {
            let fresh = seen.insert(record.id);
            if !fresh {
                tracing::warn!(id = %record.id, "duplicate record id, keeping first");
            }
            fresh
        })
        .map(WatersourceState::new)
        .collect();

    if let Some(details) = state.details() {
        if state.item(details.id()).is_none() {
            tracing::debug!(id = %details.id(), "open details no longer listed");
        }
    }
}

fn reduce_item(
    mut state: AppState,
    id: Uuid,
    intent: WatersourceIntent,
    env: &AppEnv,
) -> (AppState, Effect<AppIntent>) {
    let Some(index) = state.item_index(id) else {
        tracing::debug!(%id, "intent for unknown water source");
        return (state, Effect::None);
    };
    let (item, effect) = WatersourceReducer::reduce(state.watersources[index].clone(), intent, env);
    state.watersources[index] = item;
    (state, effect.map(move |intent| AppIntent::Watersource { id, intent }))
}

fn reduce_destination(
    mut state: AppState,
    intent: DestinationIntent,
    env: &AppEnv,
) -> (AppState, Effect<AppIntent>) {
    match (state.destination.take(), intent) {
        (Some(Destination::Info(_)), DestinationIntent::Info(InfoIntent::Delegate(InfoDelegate::Dismiss))) => {
            // Already taken out above.
            (state, Effect::None)
        }

        (Some(Destination::Info(info)), DestinationIntent::Info(intent)) => {
            let (info, effect) = InfoReducer::reduce(info, intent, env);
            state.destination = Some(Destination::Info(info));
            (state, effect.map(|intent| AppIntent::Destination(DestinationIntent::Info(intent))))
        }

        (Some(Destination::WatersourceDetails(details)), DestinationIntent::WatersourceDetails(intent)) => {
            let (details, effect) = DetailsReducer::reduce(details, intent, env);
            let edited = state
                .item(details.id())
                .is_some_and(|item| item.model != details.model);
            if edited {
                let update = WatersourceIntent::ModelUpdated(details.model.clone());
                let (next, _) = reduce_item(state, details.id(), update, env);
                state = next;
            }
            state.destination = Some(Destination::WatersourceDetails(details));
            (
                state,
                effect.map(|intent| AppIntent::Destination(DestinationIntent::WatersourceDetails(intent))),
            )
        }

        (current, intent) => {
            tracing::debug!(?intent, "no matching destination open");
            state.destination = current;
            (state, Effect::None)
        }
    }
}

//! Intents for the root screen.

use uuid::Uuid;

use crate::gateway::GatewayError;
use crate::geo::Region;
use crate::model::WaterSource;
use crate::ui::details::DetailsIntent;
use crate::ui::info::InfoIntent;
use crate::ui::mvi::Intent;
use crate::ui::watersource::WatersourceIntent;

use super::state::Destination;

#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Screen appeared; fetch every record.
    Activate,

    /// Record fetch finished.
    ActivateResponse(Result<Vec<WaterSource>, GatewayError>),

    /// Replace the open destination, `None` closes it.
    SetDestination(Option<Destination>),

    /// Open details for the listed record with `id`.
    OpenWatersource { id: Uuid },

    /// Map viewport moved.
    SetRegion(Region),

    /// Intent for the list item with `id`.
    Watersource { id: Uuid, intent: WatersourceIntent },

    /// Intent for the open destination.
    Destination(DestinationIntent),
}

/// Intent addressed to one case of [`Destination`].
#[derive(Debug, Clone, PartialEq)]
pub enum DestinationIntent {
    Info(InfoIntent),
    WatersourceDetails(DetailsIntent),
}

impl Intent for AppIntent {}

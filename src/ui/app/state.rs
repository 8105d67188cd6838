//! State for the root screen.

use uuid::Uuid;

use crate::geo::Region;
use crate::ui::details::DetailsState;
use crate::ui::info::InfoState;
use crate::ui::mvi::UiState;
use crate::ui::watersource::WatersourceState;

/// What is presented over the root screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    /// Info sheet.
    Info(InfoState),
    /// Details pushed for one record.
    WatersourceDetails(DetailsState),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Map viewport, bound two-way to the map.
    pub region: Region,
    /// List items in fetch order. Ids are unique.
    pub watersources: Vec<WatersourceState>,
    pub destination: Option<Destination>,
}

impl UiState for AppState {}

impl AppState {
    pub fn new(region: Region) -> Self {
        Self {
            region,
            ..Self::default()
        }
    }

    pub fn item(&self, id: Uuid) -> Option<&WatersourceState> {
        self.watersources.iter().find(|item| item.id() == id)
    }

    pub(super) fn item_index(&self, id: Uuid) -> Option<usize> {
        self.watersources.iter().position(|item| item.id() == id)
    }

    /// Items whose location is inside the current region.
    pub fn visible_watersources(&self) -> impl Iterator<Item = &WatersourceState> {
        self.watersources
            .iter()
            .filter(|item| self.region.contains(item.model.location))
    }

    pub fn is_info_presented(&self) -> bool {
        matches!(self.destination, Some(Destination::Info(_)))
    }

    pub fn info(&self) -> Option<&InfoState> {
        match &self.destination {
            Some(Destination::Info(info)) => Some(info),
            _ => None,
        }
    }

    pub fn details(&self) -> Option<&DetailsState> {
        match &self.destination {
            Some(Destination::WatersourceDetails(details)) => Some(details),
            _ => None,
        }
    }
}

use uuid::Uuid;

use crate::model::WaterSource;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct WatersourceState {
    pub model: WaterSource,
}

impl UiState for WatersourceState {}

impl WatersourceState {
    pub fn new(model: WaterSource) -> Self {
        Self { model }
    }

    pub fn id(&self) -> Uuid {
        self.model.id
    }

    pub fn is_complete(&self) -> bool {
        self.model.is_complete()
    }
}

use crate::model::WaterSource;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum WatersourceIntent {
    /// The record was edited in another state unit.
    ModelUpdated(WaterSource),
}

impl Intent for WatersourceIntent {}

//! State for the details view.

use uuid::Uuid;

use crate::model::{Stage, WaterSource};
use crate::ui::mvi::UiState;

/// Alert shown once every step is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionAlert {
    pub title: &'static str,
    pub message: &'static str,
    pub dismiss_label: &'static str,
}

impl CompletionAlert {
    pub const SANITIZATION_COMPLETE: CompletionAlert = CompletionAlert {
        title: "Sanitization Complete",
        message: "The water is safe for drinking.",
        dismiss_label: "Dismiss",
    };
}

/// Details of one water source.
///
/// Holds its own copy of the record; the root writes edits back into its
/// list after each transition.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsState {
    pub model: WaterSource,
    pub alert: Option<CompletionAlert>,
}

impl UiState for DetailsState {}

impl DetailsState {
    pub fn new(model: WaterSource) -> Self {
        Self { model, alert: None }
    }

    pub fn id(&self) -> Uuid {
        self.model.id
    }

    pub fn is_boiling_complete(&self) -> bool {
        self.model.is_stage_complete(Stage::Boil)
    }

    pub fn is_disinfecting_complete(&self) -> bool {
        self.model.is_stage_complete(Stage::Disinfect)
    }

    pub fn is_filtering_complete(&self) -> bool {
        self.model.is_stage_complete(Stage::Filter)
    }

    /// Button caption for `stage`: "Complete" once done.
    pub fn button_label(&self, stage: Stage) -> &'static str {
        if self.model.is_stage_complete(stage) {
            return "Complete";
        }
        match stage {
            Stage::Boil => "Start Boiling",
            Stage::Disinfect => "Start Disinfecting",
            Stage::Filter => "Start Filtering",
        }
    }
}

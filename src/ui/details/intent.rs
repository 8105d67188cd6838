//! Intents for the details view.

use crate::gateway::GatewayError;
use crate::model::Stage;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsIntent {
    /// "Start Boiling" tapped.
    MarkBoiled,

    /// "Start Disinfecting" tapped.
    MarkDisinfected,

    /// "Start Filtering" tapped.
    MarkFiltered,

    /// Save the current record snapshot.
    Persist,

    /// Save finished. The outcome never changes state.
    PersistResponse(Result<(), GatewayError>),

    /// Completion alert dismissed.
    AlertDismissed,
}

impl Intent for DetailsIntent {}

impl DetailsIntent {
    pub fn mark(stage: Stage) -> Self {
        match stage {
            Stage::Boil => Self::MarkBoiled,
            Stage::Disinfect => Self::MarkDisinfected,
            Stage::Filter => Self::MarkFiltered,
        }
    }
}

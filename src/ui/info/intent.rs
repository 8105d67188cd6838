//! Intents for the info panel.

use crate::gateway::GatewayError;
use crate::model::Author;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum InfoIntent {
    /// Panel appeared; fetch the author.
    Load,

    /// Author fetch finished.
    LoadResponse(Result<Author, GatewayError>),

    /// "Dismiss" tapped.
    DismissTapped,

    /// Requests for the presenting parent. No-op inside the panel.
    Delegate(InfoDelegate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoDelegate {
    Dismiss,
}

impl Intent for InfoIntent {}

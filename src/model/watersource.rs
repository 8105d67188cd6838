use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::geo::Location;

/// Percentage recorded once a sanitation stage is done.
pub const COMPLETE: f64 = 100.0;

/// One of the three sanitation steps applied to a water source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Boil,
    Disinfect,
    Filter,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Boil, Stage::Disinfect, Stage::Filter];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Boil => "Boil",
            Stage::Disinfect => "Disinfect",
            Stage::Filter => "Filter",
        }
    }
}

/// A water source and its sanitation progress.
///
/// Each percentage is 0 until its stage is marked, then 100. Nothing in
/// the app lowers a percentage once it reaches 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterSource {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "imageURL")]
    pub image_url: Url,
    pub location: Location,
    pub percent_boiled: f64,
    pub percent_disinfected: f64,
    pub percent_filtered: f64,
}

impl WaterSource {
    pub fn percent(&self, stage: Stage) -> f64 {
        match stage {
            Stage::Boil => self.percent_boiled,
            Stage::Disinfect => self.percent_disinfected,
            Stage::Filter => self.percent_filtered,
        }
    }

    pub fn is_stage_complete(&self, stage: Stage) -> bool {
        self.percent(stage) == COMPLETE
    }

    /// True when all three stages are at 100.
    pub fn is_complete(&self) -> bool {
        Stage::ALL.iter().all(|stage| self.is_stage_complete(*stage))
    }

    /// Sets `stage` to 100. Returns `false` if it already was.
    pub fn mark(&mut self, stage: Stage) -> bool {
        if self.is_stage_complete(stage) {
            return false;
        }
        let field = match stage {
            Stage::Boil => &mut self.percent_boiled,
            Stage::Disinfect => &mut self.percent_disinfected,
            Stage::Filter => &mut self.percent_filtered,
        };
        *field = COMPLETE;
        true
    }
}

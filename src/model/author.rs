use serde::{Deserialize, Serialize};
use url::Url;

/// Author shown in the info panel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub title: String,
    pub avatar_url: Url,
}

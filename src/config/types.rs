use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::geo::{Location, Region, Span};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub map: MapConfig,
}

/// Which store backs the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayKind {
    /// In-process store, lost on exit.
    #[default]
    Memory,
    /// JSON document on disk.
    File,
}

/// Gateway selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub kind: GatewayKind,
    /// Document path for the file store. Defaults to the data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Seed the in-memory store with sample records (default: true).
    #[serde(default = "default_seed")]
    pub seed: bool,
}

/// Initial map viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_delta")]
    pub latitude_delta: f64,
    #[serde(default = "default_delta")]
    pub longitude_delta: f64,
}

fn default_seed() -> bool {
    true
}

fn default_latitude() -> f64 {
    Region::WILMINGTON.location.latitude
}

fn default_longitude() -> f64 {
    Region::WILMINGTON.location.longitude
}

fn default_delta() -> f64 {
    Region::WILMINGTON.span.latitude_delta
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            kind: GatewayKind::default(),
            path: None,
            seed: default_seed(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            latitude_delta: default_delta(),
            longitude_delta: default_delta(),
        }
    }
}

impl Config {
    /// Starting viewport for the root screen.
    pub fn initial_region(&self) -> Region {
        Region::new(
            Location::new(self.map.latitude, self.map.longitude),
            Span::new(self.map.latitude_delta, self.map.longitude_delta),
        )
    }
}

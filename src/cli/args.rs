use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use crate::config::{Config, GatewayKind};
use crate::model::Stage;

#[derive(Debug, Parser)]
#[command(name = "water", version, about = "Track sanitation of water sources on a map")]
pub struct Cli {
    /// Config file (default: ~/.config/water/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured gateway.
    #[arg(long, global = true, value_enum)]
    pub gateway: Option<GatewayArg>,

    /// Document path for the file gateway.
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every water source.
    List,
    /// Print the map pins and viewport as GeoJSON.
    Map,
    /// Show the sanitation steps of one water source.
    Show { id: Uuid },
    /// Mark sanitation steps done, in the given order.
    Mark {
        id: Uuid,
        #[arg(required = true, value_enum)]
        stages: Vec<StageArg>,
    },
    /// Show the info panel.
    Info,
    /// Save the sample water sources through the gateway.
    Seed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GatewayArg {
    Memory,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StageArg {
    Boil,
    Disinfect,
    Filter,
}

impl From<StageArg> for Stage {
    fn from(stage: StageArg) -> Self {
        match stage {
            StageArg::Boil => Stage::Boil,
            StageArg::Disinfect => Stage::Disinfect,
            StageArg::Filter => Stage::Filter,
        }
    }
}

impl From<GatewayArg> for GatewayKind {
    fn from(gateway: GatewayArg) -> Self {
        match gateway {
            GatewayArg::Memory => GatewayKind::Memory,
            GatewayArg::File => GatewayKind::File,
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(gateway) = self.gateway {
            config.gateway.kind = gateway.into();
        }
        if let Some(store) = &self.store {
            config.gateway.path = Some(store.clone());
            // A store path only makes sense for the file gateway.
            if self.gateway.is_none() {
                config.gateway.kind = GatewayKind::File;
            }
        }
    }
}

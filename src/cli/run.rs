use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use super::args::{Cli, Command, StageArg};
use super::render;
use crate::config::{Config, GatewayConfig, GatewayKind};
use crate::gateway::{FileGateway, MemoryGateway, WaterSourceGateway};
use crate::geo::Region;
use crate::model::seed;
use crate::ui::app::{AppIntent, AppReducer, AppState, Destination, DestinationIntent};
use crate::ui::details::DetailsIntent;
use crate::ui::info::{InfoIntent, InfoState};
use crate::ui::{AppEnv, Store};

/// Gateway selected by `config`.
pub fn build_gateway(config: &GatewayConfig) -> Arc<dyn WaterSourceGateway> {
    let gateway: Arc<dyn WaterSourceGateway> = match config.kind {
        GatewayKind::Memory if config.seed => Arc::new(MemoryGateway::seeded()),
        GatewayKind::Memory => Arc::new(MemoryGateway::default()),
        GatewayKind::File => {
            let path = config.path.clone().unwrap_or_else(FileGateway::default_path);
            tracing::info!(path = %path.display(), "using file store");
            Arc::new(FileGateway::new(path))
        }
    };
    tracing::info!(gateway = gateway.name(), "gateway ready");
    gateway
}

pub async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    cli.apply_overrides(&mut config);

    let env = AppEnv::with_gateway(build_gateway(&config.gateway));
    let region = config.initial_region();
    let mut out = std::io::stdout();

    match cli.command {
        Command::List => {
            let store = activated(env, region).await;
            write!(out, "{}", render::list(store.state()))?;
        }
        Command::Map => {
            let store = activated(env, region).await;
            let document = serde_json::to_string_pretty(&render::geojson(store.state()))?;
            writeln!(out, "{document}")?;
        }
        Command::Show { id } => {
            let store = opened(env, region, id).await?;
            if let Some(details) = store.state().details() {
                write!(out, "{}", render::details(details))?;
            }
        }
        Command::Mark { id, stages } => {
            let store = mark(env, region, id, &stages).await?;
            if let Some(details) = store.state().details() {
                write!(out, "{}", render::details(details))?;
            }
        }
        Command::Info => {
            let mut store = Store::<AppReducer>::new(AppState::new(region), env);
            store.send(AppIntent::SetDestination(Some(Destination::Info(InfoState::default()))));
            store.send(AppIntent::Destination(DestinationIntent::Info(InfoIntent::Load)));
            store.settle().await;
            if let Some(info) = store.state().info() {
                write!(out, "{}", render::info(info))?;
            }
        }
        Command::Seed => {
            let records = seed::sample_watersources();
            let count = records.len();
            for record in records {
                let title = record.title.clone();
                env.gateway
                    .save_water_source(record)
                    .await
                    .with_context(|| format!("saving {title}"))?;
            }
            writeln!(out, "seeded {count} water sources into the {} store", env.gateway.name())?;
        }
    }
    Ok(())
}

/// Root store after the initial fetch has landed.
async fn activated(env: AppEnv, region: Region) -> Store<AppReducer> {
    let mut store = Store::new(AppState::new(region), env);
    store.send(AppIntent::Activate);
    store.settle().await;
    store
}

async fn opened(env: AppEnv, region: Region, id: Uuid) -> Result<Store<AppReducer>> {
    let mut store = activated(env, region).await;
    store.send(AppIntent::OpenWatersource { id });
    if store.state().details().is_none() {
        bail!("no water source with id {id}");
    }
    Ok(store)
}

async fn mark(env: AppEnv, region: Region, id: Uuid, stages: &[StageArg]) -> Result<Store<AppReducer>> {
    let mut store = opened(env, region, id).await?;
    for stage in stages {
        let intent = DetailsIntent::mark((*stage).into());
        store.send(AppIntent::Destination(DestinationIntent::WatersourceDetails(intent)));
    }
    let saves = store.settle().await;
    tracing::debug!(%id, saves, "marks applied");
    Ok(store)
}

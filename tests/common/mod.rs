//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use url::Url;
use uuid::Uuid;
use water::gateway::{GatewayError, RecordingGateway, WaterSourceGateway};
use water::geo::{Location, Region};
use water::model::WaterSource;
use water::ui::app::{AppIntent, AppReducer, AppState, DestinationIntent};
use water::ui::details::DetailsIntent;
use water::ui::{AppEnv, Store};

/// A record with every stage at 0 and a placeholder image.
pub fn record(title: &str) -> WaterSource {
    record_at(title, Location::new(0.0, 0.0))
}

pub fn record_at(title: &str, location: Location) -> WaterSource {
    WaterSource {
        id: Uuid::new_v4(),
        title: title.to_string(),
        image_url: Url::parse("https://www.google.com").unwrap(),
        location,
        percent_boiled: 0.0,
        percent_disinfected: 0.0,
        percent_filtered: 0.0,
    }
}

/// Env backed by a [`RecordingGateway`] the test can inspect.
pub fn recording_env(gateway: RecordingGateway) -> (AppEnv, Arc<RecordingGateway>) {
    let gateway = Arc::new(gateway);
    (AppEnv::with_gateway(gateway.clone()), gateway)
}

/// Root store over Wilmington with `records` already loaded.
pub async fn loaded_store(records: Vec<WaterSource>) -> (Store<AppReducer>, Arc<RecordingGateway>) {
    let (env, gateway) = recording_env(RecordingGateway::returning(records));
    let mut store = Store::new(AppState::new(Region::WILMINGTON), env);
    store.send(AppIntent::Activate);
    store.settle().await;
    (store, gateway)
}

pub fn details(intent: DetailsIntent) -> AppIntent {
    AppIntent::Destination(DestinationIntent::WatersourceDetails(intent))
}

/// Gateway whose saves sleep for a scripted delay before recording.
pub struct SlowSaveGateway {
    delays: Mutex<Vec<Duration>>,
    saved: Mutex<Vec<WaterSource>>,
}

impl SlowSaveGateway {
    /// Delays are consumed one per save, in order.
    pub fn new(delays: Vec<Duration>) -> Self {
        Self {
            delays: Mutex::new(delays),
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn saved(&self) -> Vec<WaterSource> {
        self.saved.lock().clone()
    }
}

#[async_trait]
impl WaterSourceGateway for SlowSaveGateway {
    fn name(&self) -> &'static str {
        "slow"
    }

    async fn list_water_sources(&self) -> Result<Vec<WaterSource>, GatewayError> {
        Ok(Vec::new())
    }

    async fn save_water_source(&self, record: WaterSource) -> Result<(), GatewayError> {
        let delay = {
            let mut delays = self.delays.lock();
            if delays.is_empty() {
                Duration::ZERO
            } else {
                delays.remove(0)
            }
        };
        tokio::time::sleep(delay).await;
        self.saved.lock().push(record);
        Ok(())
    }
}

/// Gateway whose saves never finish. Lists return `records`.
pub struct HangingSaveGateway {
    records: Vec<WaterSource>,
    list_calls: Mutex<usize>,
}

impl HangingSaveGateway {
    pub fn new(records: Vec<WaterSource>) -> Self {
        Self {
            records,
            list_calls: Mutex::new(0),
        }
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock()
    }
}

#[async_trait]
impl WaterSourceGateway for HangingSaveGateway {
    fn name(&self) -> &'static str {
        "hanging"
    }

    async fn list_water_sources(&self) -> Result<Vec<WaterSource>, GatewayError> {
        *self.list_calls.lock() += 1;
        Ok(self.records.clone())
    }

    async fn save_water_source(&self, _record: WaterSource) -> Result<(), GatewayError> {
        std::future::pending::<Result<(), GatewayError>>().await
    }
}

/// Gateway answering each list call with the next scripted
/// `(delay, records)` pair.
pub struct ScriptedListGateway {
    script: Mutex<Vec<(Duration, Vec<WaterSource>)>>,
}

impl ScriptedListGateway {
    pub fn new(script: Vec<(Duration, Vec<WaterSource>)>) -> Self {
        Self {
            script: Mutex::new(script),
        }
    }
}

#[async_trait]
impl WaterSourceGateway for ScriptedListGateway {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn list_water_sources(&self) -> Result<Vec<WaterSource>, GatewayError> {
        let next = {
            let mut script = self.script.lock();
            if script.is_empty() {
                None
            } else {
                Some(script.remove(0))
            }
        };
        match next {
            Some((delay, records)) => {
                tokio::time::sleep(delay).await;
                Ok(records)
            }
            None => Err(GatewayError::new("script exhausted")),
        }
    }

    async fn save_water_source(&self, _record: WaterSource) -> Result<(), GatewayError> {
        Ok(())
    }
}

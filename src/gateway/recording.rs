use async_trait::async_trait;
use parking_lot::Mutex;

use super::{GatewayError, WaterSourceGateway};
use crate::model::WaterSource;

/// Scripted gateway that remembers every save, for tests and previews.
#[derive(Default)]
pub struct RecordingGateway {
    list_response: Mutex<Option<Result<Vec<WaterSource>, GatewayError>>>,
    save_failure: Mutex<Option<GatewayError>>,
    saved: Mutex<Vec<WaterSource>>,
    list_calls: Mutex<usize>,
}

impl RecordingGateway {
    /// Lists return `records`, saves succeed.
    pub fn returning(records: Vec<WaterSource>) -> Self {
        let gateway = Self::default();
        *gateway.list_response.lock() = Some(Ok(records));
        gateway
    }

    /// Lists fail with `message`.
    pub fn failing_list(message: &str) -> Self {
        let gateway = Self::default();
        *gateway.list_response.lock() = Some(Err(GatewayError::new(message)));
        gateway
    }

    pub fn set_list_response(&self, response: Result<Vec<WaterSource>, GatewayError>) {
        *self.list_response.lock() = Some(response);
    }

    /// Makes every following save fail. The snapshot is still recorded.
    pub fn fail_saves(&self, message: &str) {
        *self.save_failure.lock() = Some(GatewayError::new(message));
    }

    /// Saved snapshots in call order.
    pub fn saved(&self) -> Vec<WaterSource> {
        self.saved.lock().clone()
    }

    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock()
    }
}

#[async_trait]
impl WaterSourceGateway for RecordingGateway {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn list_water_sources(&self) -> Result<Vec<WaterSource>, GatewayError> {
        *self.list_calls.lock() += 1;
        self.list_response
            .lock()
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn save_water_source(&self, record: WaterSource) -> Result<(), GatewayError> {
        self.saved.lock().push(record);
        match self.save_failure.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

//! Read/write access to the remote water-source store.
//!
//! The state units only ever need two calls: fetch every record, and
//! persist one record. Implementations are injected explicitly through
//! [`crate::ui::AppEnv`].

mod error;
mod file;
mod memory;
mod recording;

use async_trait::async_trait;

use crate::model::WaterSource;

pub use error::GatewayError;
pub use file::{FileGateway, StoredWaterSource};
pub use memory::MemoryGateway;
pub use recording::RecordingGateway;

/// Gateway to the store that owns water-source records.
///
/// Reads always return the full collection and writes always carry the
/// whole record.
#[async_trait]
pub trait WaterSourceGateway: Send + Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Fetch every record, in store order.
    async fn list_water_sources(&self) -> Result<Vec<WaterSource>, GatewayError>;

    /// Insert or replace the record with the same id.
    async fn save_water_source(&self, record: WaterSource) -> Result<(), GatewayError>;
}

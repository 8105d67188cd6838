use async_trait::async_trait;
use parking_lot::Mutex;

use super::{GatewayError, WaterSourceGateway};
use crate::model::{seed, WaterSource};

/// In-process store. Saves update the record with the same id in place,
/// or append it when the id is new.
#[derive(Default)]
pub struct MemoryGateway {
    records: Mutex<Vec<WaterSource>>,
}

impl MemoryGateway {
    pub fn new(records: Vec<WaterSource>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Store pre-filled with the sample records.
    pub fn seeded() -> Self {
        Self::new(seed::sample_watersources())
    }

    pub fn snapshot(&self) -> Vec<WaterSource> {
        self.records.lock().clone()
    }
}

#[async_trait]
impl WaterSourceGateway for MemoryGateway {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list_water_sources(&self) -> Result<Vec<WaterSource>, GatewayError> {
        Ok(self.snapshot())
    }

    async fn save_water_source(&self, record: WaterSource) -> Result<(), GatewayError> {
        let mut records = self.records.lock();
        match records.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stage;

    #[tokio::test]
    async fn save_updates_existing_record_in_place() {
        let gateway = MemoryGateway::seeded();
        let mut record = gateway.list_water_sources().await.unwrap()[1].clone();
        record.mark(Stage::Filter);

        gateway.save_water_source(record.clone()).await.unwrap();

        let records = gateway.list_water_sources().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1], record);
    }

    #[tokio::test]
    async fn save_appends_unknown_record() {
        let gateway = MemoryGateway::default();
        let record = seed::sample_watersources().remove(0);

        gateway.save_water_source(record.clone()).await.unwrap();

        assert_eq!(gateway.snapshot(), vec![record]);
    }
}

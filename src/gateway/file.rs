//! Durable store backed by a JSON document on disk.
//!
//! Rows use the managed store's schema: string ids and URLs, flattened
//! coordinates, and two timestamps that only the store writes.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::{GatewayError, WaterSourceGateway};
use crate::geo::Location;
use crate::model::WaterSource;

/// A record as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWaterSource {
    pub id: String,
    pub title: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub location_latitude: f64,
    pub location_longitude: f64,
    pub percent_boiled: f64,
    pub percent_disinfected: f64,
    pub percent_filtered: f64,
    /// Unix seconds of the first save. Store-managed.
    #[serde(default)]
    pub created_at: Option<u64>,
    /// Unix seconds of the latest save. Store-managed.
    #[serde(default)]
    pub updated_at: Option<u64>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    watersources: Vec<StoredWaterSource>,
}

impl From<&WaterSource> for StoredWaterSource {
    fn from(record: &WaterSource) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title.clone(),
            image_url: record.image_url.to_string(),
            location_latitude: record.location.latitude,
            location_longitude: record.location.longitude,
            percent_boiled: record.percent_boiled,
            percent_disinfected: record.percent_disinfected,
            percent_filtered: record.percent_filtered,
            created_at: None,
            updated_at: None,
        }
    }
}

impl TryFrom<StoredWaterSource> for WaterSource {
    type Error = GatewayError;

    fn try_from(row: StoredWaterSource) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| GatewayError::new(format!("invalid record id '{}': {e}", row.id)))?;
        let image_url = Url::parse(&row.image_url).map_err(|e| {
            GatewayError::new(format!("invalid image URL for record {id}: {e}"))
        })?;
        Ok(Self {
            id,
            title: row.title,
            image_url,
            location: Location::new(row.location_latitude, row.location_longitude),
            percent_boiled: row.percent_boiled,
            percent_disinfected: row.percent_disinfected,
            percent_filtered: row.percent_filtered,
        })
    }
}

/// File-backed gateway. Every call takes an exclusive lock on a sidecar
/// `<document>.lock` file, so several processes can share one document.
#[derive(Debug, Clone)]
pub struct FileGateway {
    path: PathBuf,
}

impl FileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default document location under the platform data directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("water").join("watersources.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw rows, timestamps included.
    pub async fn stored_rows(&self) -> Result<Vec<StoredWaterSource>, GatewayError> {
        let path = self.path.clone();
        let document = tokio::task::spawn_blocking(move || {
            let _lock = acquire_lock(&path)?;
            read_document(&path)
        })
        .await??;
        Ok(document.watersources)
    }
}

#[async_trait]
impl WaterSourceGateway for FileGateway {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn list_water_sources(&self) -> Result<Vec<WaterSource>, GatewayError> {
        self.stored_rows()
            .await?
            .into_iter()
            .map(WaterSource::try_from)
            .collect()
    }

    async fn save_water_source(&self, record: WaterSource) -> Result<(), GatewayError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let _lock = acquire_lock(&path)?;
            let mut document = read_document(&path)?;
            let now = unix_now();
            let mut row = StoredWaterSource::from(&record);
            row.updated_at = Some(now);

            let id = row.id.clone();
            match document.watersources.iter_mut().find(|existing| existing.id == id) {
                Some(existing) => {
                    row.created_at = existing.created_at.or(Some(now));
                    *existing = row;
                }
                None => {
                    row.created_at = Some(now);
                    document.watersources.push(row);
                }
            }
            write_document(&path, &document)
        })
        .await?
    }
}

fn acquire_lock(path: &Path) -> Result<File, GatewayError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let lock = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(sidecar(path, ".lock"))?;
    lock.lock_exclusive()?;
    Ok(lock)
}

fn read_document(path: &Path) -> Result<StoreDocument, GatewayError> {
    if !path.exists() {
        return Ok(StoreDocument::default());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(StoreDocument::default());
    }
    Ok(serde_json::from_str(&content)?)
}

/// Contents reach the disk before the rename publishes them.
fn write_document(path: &Path, document: &StoreDocument) -> Result<(), GatewayError> {
    let tmp = sidecar(path, ".tmp");
    let mut file = File::create(&tmp)?;
    file.write_all(&serde_json::to_vec_pretty(document)?)?;
    file.sync_all()?;
    drop(file);
    fs::rename(&tmp, path)?;
    Ok(())
}

/// `path` with `suffix` appended to its whole file name.
fn sidecar(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;

    #[test]
    fn stored_row_round_trips_record() {
        let record = seed::sample_watersources().remove(0);
        let row = StoredWaterSource::from(&record);
        assert_eq!(row.id, record.id.to_string());
        assert_eq!(row.location_longitude, record.location.longitude);
        assert_eq!(WaterSource::try_from(row).unwrap(), record);
    }

    #[test]
    fn negative_longitude_is_kept() {
        let record = seed::sample_watersources().remove(1);
        let row = StoredWaterSource::from(&record);
        assert!(row.location_longitude < 0.0);
    }

    #[test]
    fn bad_id_is_rejected() {
        let mut row = StoredWaterSource::from(&seed::sample_watersources()[0]);
        row.id = "not-a-uuid".into();
        let err = WaterSource::try_from(row).unwrap_err();
        assert!(err.message().contains("not-a-uuid"));
    }

    #[test]
    fn sidecars_extend_the_full_file_name() {
        let doc = Path::new("/data/water/store.lock");
        assert_eq!(sidecar(doc, ".lock"), Path::new("/data/water/store.lock.lock"));
        assert_eq!(sidecar(doc, ".tmp"), Path::new("/data/water/store.lock.tmp"));
        assert_eq!(
            sidecar(Path::new("watersources.json"), ".lock"),
            Path::new("watersources.json.lock")
        );
    }

    #[test]
    fn bad_image_url_is_rejected() {
        let mut row = StoredWaterSource::from(&seed::sample_watersources()[0]);
        row.image_url = "::".into();
        assert!(WaterSource::try_from(row).is_err());
    }
}

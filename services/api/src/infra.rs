use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use gonogo::config::AppConfig;
use gonogo::error::AppError;
use gonogo::workflows::partnership::{FileSnapshotStore, PartnershipInputs};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn snapshot_store(config: &AppConfig) -> FileSnapshotStore {
    FileSnapshotStore::new(config.snapshots.dir.clone())
}

/// Reads a JSON inputs file; missing fields take their empty defaults.
pub(crate) fn load_inputs(path: &Path) -> Result<PartnershipInputs, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::domain::PartnershipInputs;
use super::evaluation::{EvaluationEngine, EvaluationOutcome};
use super::snapshot::{PartnershipSnapshot, SavedSnapshot, SnapshotError, SnapshotStore};

/// Service composing the scoring engine with snapshot storage.
pub struct PartnershipService<S> {
    engine: Arc<EvaluationEngine>,
    snapshots: Arc<S>,
}

impl<S> PartnershipService<S>
where
    S: SnapshotStore + 'static,
{
    pub fn new(snapshots: Arc<S>) -> Self {
        Self {
            engine: Arc::new(EvaluationEngine::new()),
            snapshots,
        }
    }

    /// Inputs a fresh analysis session starts from.
    pub fn seed(&self) -> PartnershipInputs {
        PartnershipInputs::seed()
    }

    pub fn evaluate(&self, inputs: &PartnershipInputs) -> EvaluationOutcome {
        let outcome = self.engine.evaluate(inputs);
        info!(
            project = %outcome.project_name,
            total_units = outcome.total_units,
            final_score = outcome.result.final_score,
            decision = outcome.result.decision.label(),
            gates = outcome.result.gates.len(),
            "partnership evaluated"
        );
        outcome
    }

    /// Export the raw inputs stamped with the current time.
    pub fn save_snapshot(
        &self,
        inputs: PartnershipInputs,
    ) -> Result<SavedSnapshot, PartnershipServiceError> {
        self.save_snapshot_at(inputs, Utc::now())
    }

    pub fn save_snapshot_at(
        &self,
        inputs: PartnershipInputs,
        saved_at: DateTime<Utc>,
    ) -> Result<SavedSnapshot, PartnershipServiceError> {
        let snapshot = PartnershipSnapshot::new(inputs, saved_at);
        match self.snapshots.save(&snapshot) {
            Ok(saved) => {
                info!(file_name = %saved.file_name, "snapshot saved");
                Ok(saved)
            }
            Err(error) => {
                warn!(%error, file_name = %snapshot.file_name(), "snapshot save failed");
                Err(error.into())
            }
        }
    }
}

/// Error raised by the partnership service.
#[derive(Debug, thiserror::Error)]
pub enum PartnershipServiceError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

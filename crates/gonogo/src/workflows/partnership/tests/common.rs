use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::partnership::domain::{
    CommunicationTier, FinancialMetrics, PartnershipInputs, RiskRatings, StrategyRatings,
};
use crate::workflows::partnership::snapshot::{
    InMemorySnapshotStore, PartnershipSnapshot, SavedSnapshot, SnapshotError, SnapshotStore,
};
use crate::workflows::partnership::{partnership_router, PartnershipService};

pub(super) fn nominal_inputs() -> PartnershipInputs {
    let mut inputs = PartnershipInputs::seed();
    inputs.project.name = "Residencial Vista Verde".to_string();
    inputs.project.developer = "Construtora Horizonte".to_string();
    inputs.project.city = "Campinas".to_string();
    inputs.project.state = "SP".to_string();
    inputs
}

/// Scores 72 with no gate triggered.
pub(super) fn go_inputs() -> PartnershipInputs {
    let mut inputs = nominal_inputs();
    inputs.scores.financial = Some(FinancialMetrics {
        margin: 10.0,
        ticket: 15_000.0,
        ltv: 12_000.0,
        payback_months: 12.0,
        cac: 1_500.0,
    });
    inputs.scores.risk = Some(uniform_risk(2.0));
    inputs.scores.strategy = Some(StrategyRatings {
        adherence: 7.5,
        synergy: 7.5,
        recurrence: 7.5,
        cross_sell: 7.5,
    });
    inputs.communication = CommunicationTier::Basic;
    inputs
}

/// Scores 55 with a legal risk of 7 and no gate triggered.
pub(super) fn conditional_inputs() -> PartnershipInputs {
    let mut inputs = nominal_inputs();
    inputs.scores.financial = Some(FinancialMetrics {
        margin: 6.0,
        ticket: 10_000.0,
        ltv: 8_000.0,
        payback_months: 18.0,
        cac: 2_500.0,
    });
    inputs.scores.risk = Some(RiskRatings {
        legal: 7.0,
        default: 5.0,
        reputational: 5.0,
        operational: 5.0,
        litigation_percentage: 10.0,
    });
    inputs.scores.strategy = Some(StrategyRatings {
        adherence: 5.0,
        synergy: 5.0,
        recurrence: 5.0,
        cross_sell: 5.0,
    });
    inputs.operational.technical_complexity = 6.0;
    inputs.operational.supply_dependency = 6.0;
    inputs.operational.logistical_risk = 6.0;
    inputs.operational.standardization = 4.0;
    inputs
}

pub(super) fn uniform_risk(rating: f64) -> RiskRatings {
    RiskRatings {
        legal: rating,
        default: rating,
        reputational: rating,
        operational: rating,
        litigation_percentage: 0.0,
    }
}

pub(super) fn saved_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn build_service() -> (
    PartnershipService<InMemorySnapshotStore>,
    Arc<InMemorySnapshotStore>,
) {
    let store = Arc::new(InMemorySnapshotStore::new());
    let service = PartnershipService::new(store.clone());
    (service, store)
}

pub(super) fn partnership_router_with_service(
    service: PartnershipService<InMemorySnapshotStore>,
) -> axum::Router {
    partnership_router(Arc::new(service))
}

pub(super) struct UnavailableStore;

impl SnapshotStore for UnavailableStore {
    fn save(&self, _snapshot: &PartnershipSnapshot) -> Result<SavedSnapshot, SnapshotError> {
        Err(SnapshotError::Unavailable("disk offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

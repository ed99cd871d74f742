//! Go/No-Go scoring of a reform partnership with a real-estate developer.
//!
//! The engine is a pure function of one [`PartnershipInputs`] snapshot: revenue and category
//! scores first, then governance gates and the weighted composite, then the decision.

pub mod analysis;
pub mod domain;
pub mod evaluation;
pub mod revenue;
pub mod router;
pub mod service;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use analysis::PartnershipAnalysis;
pub use domain::{
    ApartmentStandard, CommercialModel, CommissionType, CommunicationTier, FinancialMetrics,
    InstallationKind, OperationalData, PackageType, PartnershipInputs, ProjectInputs,
    ProjectPhase, ProjectTypology, ReformPackage, ReformPackageSet, ReformSlot, RiskRatings,
    Scores, SimpleInstallation, StrategyRatings, Typology,
};
pub use evaluation::{
    composite_score, evaluate, CategoryWeights, Decision, DecisionResult, EvaluationEngine,
    EvaluationOutcome, GateKind, GateSeverity, GovernanceGate, OperationalBreakdown,
    RenegotiationAdvisory, SubScores,
};
pub use revenue::{RevenueBreakdown, MAX_REVENUE_PER_UNIT};
pub use router::partnership_router;
pub use service::{PartnershipService, PartnershipServiceError};
pub use snapshot::{
    FileSnapshotStore, InMemorySnapshotStore, PartnershipSnapshot, SavedSnapshot, SnapshotError,
    SnapshotStore,
};

pub mod config;
pub mod gates;
pub mod policy;
pub mod rules;

pub use config::CategoryWeights;
pub use gates::{GateKind, GateSeverity, GovernanceGate};
pub use policy::{Decision, RenegotiationAdvisory};
pub use rules::{OperationalBreakdown, SubScores};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::analysis::{self, PartnershipAnalysis};
use super::domain::PartnershipInputs;
use super::revenue::RevenueBreakdown;

/// Stateless evaluator applying the fixed category weights to an input snapshot.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationEngine {
    weights: CategoryWeights,
}

impl Default for EvaluationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationEngine {
    pub fn new() -> Self {
        Self {
            weights: CategoryWeights::STANDARD,
        }
    }

    pub fn weights(&self) -> CategoryWeights {
        self.weights
    }

    /// Run the full pipeline: revenue and sub-scores, gates, composite score, decision.
    pub fn evaluate(&self, inputs: &PartnershipInputs) -> EvaluationOutcome {
        let total_units = inputs.total_units();

        let revenue = RevenueBreakdown::calculate(
            &inputs.reform_packages,
            &inputs.commercial,
            inputs.communication,
            total_units,
        );
        let operational = OperationalBreakdown::calculate(&inputs.operational, total_units);
        let sub_scores = sub_scores(inputs, &revenue, &operational);
        debug!(total_units, ?sub_scores, "computed category scores");

        let gates = gates::evaluate_gates(&inputs.scores, &inputs.operational, total_units);
        let auto_no_go = gates::has_critical_gate(&gates);
        debug!(gates = gates.len(), auto_no_go, "evaluated governance gates");

        let final_score = composite_score(&sub_scores, &self.weights);
        let decision = policy::classify(final_score, auto_no_go);
        let factors = policy::explanatory_factors(&sub_scores);

        let result = DecisionResult {
            final_score,
            decision,
            explanation: policy::explanation(decision, &factors),
            conditions: policy::conditions(
                decision,
                &inputs.scores,
                &inputs.operational,
                &sub_scores,
            ),
            remediation_actions: gates::remediation_actions(&gates),
            warning_advisory: gates::warning_advisory(&gates),
            renegotiation: policy::renegotiation(&revenue, &inputs.scores.financial()),
            factors,
            gates,
        };

        let analysis = analysis::analyze(inputs, total_units, &revenue);

        EvaluationOutcome {
            project_name: inputs.project.name.clone(),
            total_units,
            revenue,
            operational,
            sub_scores,
            result,
            analysis,
        }
    }
}

/// Evaluate with the standard weights.
pub fn evaluate(inputs: &PartnershipInputs) -> EvaluationOutcome {
    EvaluationEngine::new().evaluate(inputs)
}

fn sub_scores(
    inputs: &PartnershipInputs,
    revenue: &RevenueBreakdown,
    operational: &OperationalBreakdown,
) -> SubScores {
    SubScores {
        financial: rules::financial_score(&inputs.scores.financial()),
        operational: operational.operational_score,
        risk: rules::risk_score(&inputs.scores.risk()),
        strategy: rules::strategy_score(&inputs.scores.strategy()),
        reform_revenue: rules::reform_revenue_score(revenue.net_revenue_per_unit),
        communication: rules::communication_score(inputs.communication),
    }
}

/// Weighted 0-10 sum scaled onto 0-100 and rounded.
///
/// Reform revenue keeps its negative range so a loss-making commission drags the total down;
/// only the final score is clamped.
pub fn composite_score(sub_scores: &SubScores, weights: &CategoryWeights) -> u8 {
    let bounded = [
        (sub_scores.financial, weights.financial),
        (sub_scores.operational, weights.operational),
        (sub_scores.risk, weights.risk),
        (sub_scores.strategy, weights.strategy),
        (sub_scores.communication, weights.communication),
    ]
    .iter()
    .map(|(score, weight)| rules::clamp_score(*score) * f64::from(*weight))
    .sum::<f64>();
    let weighted = bounded
        + rules::cap_score(sub_scores.reform_revenue) * f64::from(weights.reform_revenue);

    (weighted / 10.0).round().clamp(0.0, 100.0) as u8
}

/// Decision and the trail that justifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub final_score: u8,
    pub decision: Decision,
    pub gates: Vec<GovernanceGate>,
    pub factors: Vec<String>,
    pub explanation: String,
    pub conditions: Vec<String>,
    pub remediation_actions: Vec<String>,
    pub warning_advisory: Option<String>,
    pub renegotiation: RenegotiationAdvisory,
}

impl DecisionResult {
    pub fn auto_no_go(&self) -> bool {
        self.decision == Decision::AutomaticNoGo
    }
}

/// Everything the presentation layer needs to render one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub project_name: String,
    pub total_units: u32,
    pub revenue: RevenueBreakdown,
    pub operational: OperationalBreakdown,
    pub sub_scores: SubScores,
    pub result: DecisionResult,
    pub analysis: PartnershipAnalysis,
}

use super::common::*;

use crate::workflows::partnership::domain::{
    CommissionType, CommunicationTier, PartnershipInputs, ReformPackageSet, Typology,
};
use crate::workflows::partnership::evaluation::{
    evaluate, Decision, EvaluationEngine, GateKind, GateSeverity,
};

#[test]
fn reference_packages_produce_expected_revenue() {
    let outcome = evaluate(&nominal_inputs());

    assert_eq!(outcome.total_units, 100);
    assert!((outcome.revenue.gross_reform_revenue - 2_440_000.0).abs() < 1e-6);
    assert!((outcome.revenue.commission - 244_000.0).abs() < 1e-6);
    assert!((outcome.revenue.net_reform_revenue - 2_196_000.0).abs() < 1e-6);
    assert!((outcome.revenue.net_revenue_per_unit - 21_960.0).abs() < 1e-6);
    assert_eq!(outcome.sub_scores.reform_revenue, 10.0);
    assert!(!outcome.revenue.capped);
}

#[test]
fn seven_plus_composite_is_a_plain_go() {
    let outcome = evaluate(&go_inputs());

    assert_eq!(outcome.result.final_score, 72);
    assert_eq!(outcome.result.decision, Decision::Go);
    assert!(outcome.result.gates.is_empty());
    assert!(outcome.result.conditions.is_empty());
    assert!(!outcome.result.renegotiation.needed);
    assert_eq!(
        outcome.result.explanation,
        "Esta decisão foi classificada como GO principalmente devido a forte capacidade operacional e baixo perfil de risco."
    );
}

#[test]
fn mid_band_lists_remediation_conditions() {
    let outcome = evaluate(&conditional_inputs());

    assert_eq!(outcome.result.final_score, 55);
    assert_eq!(outcome.result.decision, Decision::GoWithConditions);
    assert_eq!(
        outcome.result.conditions,
        vec![
            "Aprovação jurídica com due diligence completa".to_string(),
            "Revisão e otimização da estrutura de custos".to_string(),
            "Plano de mitigação de riscos aprovado pelo comitê".to_string(),
        ]
    );
    assert_eq!(
        outcome.result.factors,
        vec![
            "forte capacidade operacional".to_string(),
            "viabilidade financeira comprometida".to_string(),
        ]
    );
    assert!(outcome.result.renegotiation.needed);
    assert_eq!(outcome.result.renegotiation.reasons.len(), 1);
}

#[test]
fn thin_margin_vetoes_otherwise_strong_partnership() {
    let mut inputs = go_inputs();
    if let Some(financial) = inputs.scores.financial.as_mut() {
        financial.margin = 2.0;
    }

    let outcome = evaluate(&inputs);

    assert_eq!(outcome.result.decision, Decision::AutomaticNoGo);
    assert!(outcome.result.auto_no_go());
    assert_eq!(outcome.result.gates.len(), 1);
    assert_eq!(outcome.result.gates[0].title, "Margem Insuficiente");
    assert_eq!(outcome.result.gates[0].current, "2%");
    assert!(outcome.result.conditions.is_empty());
    assert_eq!(outcome.result.remediation_actions.len(), 1);
    assert!(outcome.result.renegotiation.needed);
}

#[test]
fn two_critical_risks_trigger_elevated_profile_gate() {
    let mut inputs = nominal_inputs();
    inputs.scores.risk = Some(crate::workflows::partnership::domain::RiskRatings {
        legal: 8.0,
        default: 8.0,
        reputational: 3.0,
        operational: 3.0,
        litigation_percentage: 0.0,
    });

    let outcome = evaluate(&inputs);

    assert_eq!(outcome.result.decision, Decision::AutomaticNoGo);
    let gate = &outcome.result.gates[0];
    assert_eq!(gate.kind, GateKind::ElevatedRiskProfile);
    assert_eq!(gate.title, "Perfil de Risco Elevado");
    assert_eq!(gate.current, "2 riscos ≥8");
    assert_eq!(gate.severity, GateSeverity::Critical);
}

#[test]
fn peak_overload_vetoes_regardless_of_score() {
    let mut inputs = go_inputs();
    inputs.operational.monthly_capacity_available = 20.0;

    let outcome = evaluate(&inputs);

    assert_eq!(outcome.result.decision, Decision::AutomaticNoGo);
    assert_eq!(
        outcome.result.gates[0].kind,
        GateKind::CriticalOperationalCapacity
    );
    assert_eq!(outcome.result.gates[0].current, "188%");
    assert_eq!(outcome.operational.execution_score, 3.0);
}

#[test]
fn zero_units_resolve_to_zero_revenue() {
    let mut inputs = nominal_inputs();
    inputs.project.units = 0;
    inputs.operational.total_units = 0;

    let outcome = evaluate(&inputs);

    assert_eq!(outcome.total_units, 0);
    assert_eq!(outcome.revenue.gross_reform_revenue, 0.0);
    assert_eq!(outcome.revenue.commission, 0.0);
    assert_eq!(outcome.revenue.net_reform_revenue, 0.0);
    assert_eq!(outcome.revenue.gross_revenue_per_unit, 0.0);
    assert_eq!(outcome.revenue.net_revenue_per_unit, 0.0);
    assert_eq!(outcome.sub_scores.reform_revenue, 0.0);
    assert!(outcome.result.final_score <= 100);
}

#[test]
fn warnings_alone_do_not_block_approval() {
    let mut inputs = go_inputs();
    if let Some(financial) = inputs.scores.financial.as_mut() {
        financial.ltv = 4_000.0;
    }

    let outcome = evaluate(&inputs);

    assert_eq!(outcome.result.gates.len(), 1);
    assert_eq!(outcome.result.gates[0].severity, GateSeverity::Warning);
    assert_eq!(outcome.result.decision, Decision::Go);
    assert!(outcome.result.remediation_actions.is_empty());
    assert!(outcome.result.warning_advisory.is_some());
}

#[test]
fn empty_form_evaluates_without_gates() {
    let outcome = evaluate(&PartnershipInputs::default());

    assert_eq!(outcome.total_units, 0);
    assert!(outcome.result.gates.is_empty());
    assert_eq!(outcome.sub_scores.communication, 5.0);
    assert_eq!(
        outcome.analysis.insights.critical_risks[0].title,
        "Aguardando Dados"
    );
}

#[test]
fn typology_mix_overrides_declared_units() {
    let mut inputs = nominal_inputs();
    inputs.typologies = vec![
        Typology {
            id: "t1".to_string(),
            label: "2 dormitórios".to_string(),
            floor_area_m2: 55.0,
            quantity: 30,
            unit_price: 420_000.0,
        },
        Typology {
            id: "t2".to_string(),
            label: "3 dormitórios".to_string(),
            floor_area_m2: 78.0,
            quantity: 20,
            unit_price: 610_000.0,
        },
    ];

    let outcome = evaluate(&inputs);

    assert_eq!(outcome.total_units, 50);
    assert!((outcome.revenue.gross_reform_revenue - 1_220_000.0).abs() < 1e-6);
    assert_eq!(outcome.analysis.typology_mix.total_units, 50);
    assert!(outcome.analysis.ltv.ltv_total > 0.0);
}

#[test]
fn communication_tier_only_moves_its_own_category() {
    let mut premium = nominal_inputs();
    premium.communication = CommunicationTier::Premium;

    let base = evaluate(&nominal_inputs());
    let upgraded = evaluate(&premium);

    assert_eq!(upgraded.sub_scores.communication, 10.0);
    assert_eq!(upgraded.revenue.communication_revenue, 85_000.0);
    assert_eq!(upgraded.sub_scores.financial, base.sub_scores.financial);
    assert!(upgraded.result.final_score > base.result.final_score);
}

#[test]
fn repeated_evaluation_is_byte_identical() {
    let engine = EvaluationEngine::new();
    let inputs = conditional_inputs();

    let first = serde_json::to_string(&engine.evaluate(&inputs)).expect("serializes");
    let second = serde_json::to_string(&engine.evaluate(&inputs)).expect("serializes");

    assert_eq!(first, second);
}

#[test]
fn decision_serializes_in_screaming_case() {
    let outcome = evaluate(&conditional_inputs());
    let payload = serde_json::to_value(&outcome).expect("serializes");

    assert_eq!(payload["result"]["decision"], "GO_WITH_CONDITIONS");
    assert_eq!(payload["sub_scores"]["reform_revenue"], 10.0);
}

fn fixed_commission(inputs: &mut PartnershipInputs, per_unit: f64) {
    inputs.commercial.commission_type = CommissionType::Fixed;
    inputs.commercial.commission_value = per_unit;
}

#[test]
fn commission_without_reform_revenue_requires_renegotiation() {
    let mut inputs = nominal_inputs();
    inputs.reform_packages = ReformPackageSet::default();
    fixed_commission(&mut inputs, 500.0);

    let outcome = evaluate(&inputs);

    assert_eq!(outcome.revenue.gross_reform_revenue, 0.0);
    assert_eq!(outcome.revenue.commission, 50_000.0);
    assert!(outcome.result.renegotiation.needed);
    assert_eq!(
        outcome.result.renegotiation.reasons[0],
        "Comissão acima de 15% impacta significativamente a margem líquida"
    );
    assert_eq!(outcome.analysis.commission_impact.share_of_gross_pct, 0.0);
    assert!(!outcome.analysis.commission_impact.significant);
}

#[test]
fn commission_above_gross_pulls_the_score_below_breakeven() {
    let mut breakeven = nominal_inputs();
    fixed_commission(&mut breakeven, 24_400.0);
    let mut loss_making = nominal_inputs();
    fixed_commission(&mut loss_making, 30_000.0);

    let breakeven = evaluate(&breakeven);
    let loss_making = evaluate(&loss_making);

    assert_eq!(breakeven.sub_scores.reform_revenue, 0.0);
    assert!((loss_making.revenue.net_revenue_per_unit + 5_600.0).abs() < 1e-6);
    assert!((loss_making.sub_scores.reform_revenue + 5.6).abs() < 1e-9);
    assert!(loss_making.result.final_score < breakeven.result.final_score);
}

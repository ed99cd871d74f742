use serde::{Deserialize, Serialize};

use super::super::domain::{sanitize, OperationalData, Scores};
use super::rules::required_monthly_capacity;

const MIN_MARGIN: f64 = 3.0;
const MAX_PAYBACK_MONTHS: f64 = 24.0;
const CRITICAL_RISK_RATING: f64 = 8.0;
const MAX_CRITICAL_RISKS: usize = 2;
const MAX_PEAK_UTILIZATION_PCT: f64 = 150.0;
const MIN_LTV: f64 = 5_000.0;
const MIN_ADHERENCE: f64 = 3.0;

/// Critical gates veto the partnership; warnings only advise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateSeverity {
    Critical,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    InsufficientMargin,
    ExcessivePayback,
    ElevatedRiskProfile,
    CriticalOperationalCapacity,
    LowLifetimeValue,
    StrategicMisalignment,
}

impl GateKind {
    pub fn severity(&self) -> GateSeverity {
        match self {
            GateKind::LowLifetimeValue | GateKind::StrategicMisalignment => GateSeverity::Warning,
            _ => GateSeverity::Critical,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GateKind::InsufficientMargin => "Margem Insuficiente",
            GateKind::ExcessivePayback => "Payback Excessivo",
            GateKind::ElevatedRiskProfile => "Perfil de Risco Elevado",
            GateKind::CriticalOperationalCapacity => "Capacidade Operacional Crítica",
            GateKind::LowLifetimeValue => "LTV Abaixo do Esperado",
            GateKind::StrategicMisalignment => "Desalinhamento Estratégico",
        }
    }

    pub fn threshold(&self) -> &'static str {
        match self {
            GateKind::InsufficientMargin => "< 3%",
            GateKind::ExcessivePayback => "> 24 meses",
            GateKind::ElevatedRiskProfile => "< 2 riscos críticos",
            GateKind::CriticalOperationalCapacity => "≤ 150% no pico",
            GateKind::LowLifetimeValue => "≥ R$5.000",
            GateKind::StrategicMisalignment => "> 3/10",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GateKind::InsufficientMargin => {
                "Margem abaixo do mínimo aceitável para viabilidade do negócio"
            }
            GateKind::ExcessivePayback => {
                "Período de retorno incompatível com estratégia de crescimento"
            }
            GateKind::ElevatedRiskProfile => {
                "Múltiplos fatores de risco em nível crítico comprometem viabilidade"
            }
            GateKind::CriticalOperationalCapacity => {
                "Demanda de pico excede significativamente a capacidade instalada"
            }
            GateKind::LowLifetimeValue => {
                "Valor de vida do cliente insuficiente para justificar investimento"
            }
            GateKind::StrategicMisalignment => {
                "Projeto não alinhado com diretrizes estratégicas da companhia"
            }
        }
    }
}

/// A triggered governance gate with the observed value that breached it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceGate {
    pub kind: GateKind,
    pub severity: GateSeverity,
    pub title: String,
    pub threshold: String,
    pub current: String,
    pub description: String,
}

impl GovernanceGate {
    fn triggered(kind: GateKind, current: String) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            title: kind.title().to_string(),
            threshold: kind.threshold().to_string(),
            current,
            description: kind.description().to_string(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity == GateSeverity::Critical
    }
}

/// Peak-month demand as a percentage of the available monthly capacity.
pub fn peak_utilization_pct(operational: &OperationalData, total_units: u32) -> f64 {
    let available = sanitize(operational.monthly_capacity_available);
    if available <= 0.0 {
        return 0.0;
    }
    let peak = required_monthly_capacity(operational, total_units)
        * operational.effective_peak_multiplier();
    peak / available * 100.0
}

/// Evaluate every gate in a fixed order: critical gates first, then warnings.
///
/// Returns no gates while any rating group is still missing.
pub fn evaluate_gates(
    scores: &Scores,
    operational: &OperationalData,
    total_units: u32,
) -> Vec<GovernanceGate> {
    let (Some(financial), Some(risk), Some(strategy)) =
        (scores.financial, scores.risk, scores.strategy)
    else {
        return Vec::new();
    };

    let mut gates = Vec::new();

    if financial.margin < MIN_MARGIN {
        gates.push(GovernanceGate::triggered(
            GateKind::InsufficientMargin,
            format!("{}%", financial.margin),
        ));
    }

    if financial.payback_months > MAX_PAYBACK_MONTHS {
        gates.push(GovernanceGate::triggered(
            GateKind::ExcessivePayback,
            format!("{} meses", financial.payback_months),
        ));
    }

    let critical_risks = risk
        .ratings()
        .iter()
        .filter(|rating| **rating >= CRITICAL_RISK_RATING)
        .count();
    if critical_risks >= MAX_CRITICAL_RISKS {
        gates.push(GovernanceGate::triggered(
            GateKind::ElevatedRiskProfile,
            format!("{critical_risks} riscos ≥8"),
        ));
    }

    let peak_utilization = peak_utilization_pct(operational, total_units);
    if peak_utilization > MAX_PEAK_UTILIZATION_PCT {
        gates.push(GovernanceGate::triggered(
            GateKind::CriticalOperationalCapacity,
            format!("{:.0}%", peak_utilization),
        ));
    }

    if financial.ltv < MIN_LTV {
        gates.push(GovernanceGate::triggered(
            GateKind::LowLifetimeValue,
            format!("R$ {:.0}", financial.ltv),
        ));
    }

    if strategy.adherence <= MIN_ADHERENCE {
        gates.push(GovernanceGate::triggered(
            GateKind::StrategicMisalignment,
            format!("{}/10", strategy.adherence),
        ));
    }

    gates
}

pub fn has_critical_gate(gates: &[GovernanceGate]) -> bool {
    gates.iter().any(GovernanceGate::is_critical)
}

/// Steps required to lift an automatic NO-GO, one per critical gate.
pub fn remediation_actions(gates: &[GovernanceGate]) -> Vec<String> {
    gates
        .iter()
        .filter(|gate| gate.is_critical())
        .map(|gate| {
            format!(
                "Corrigir \"{}\" através de renegociação comercial ou revisão de premissas",
                gate.title
            )
        })
        .collect()
}

/// Advisory shown when only warning gates fired.
pub fn warning_advisory(gates: &[GovernanceGate]) -> Option<String> {
    if has_critical_gate(gates) {
        return None;
    }
    let warnings = gates.iter().filter(|gate| !gate.is_critical()).count();
    (warnings > 0).then(|| {
        format!(
            "{warnings} alerta(s) identificado(s). Recomenda-se plano de mitigação antes da aprovação final."
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::partnership::domain::{
        FinancialMetrics, RiskRatings, StrategyRatings,
    };

    fn nominal_scores() -> Scores {
        Scores {
            financial: Some(FinancialMetrics {
                margin: 9.0,
                ticket: 18_000.0,
                ltv: 15_000.0,
                payback_months: 12.0,
                cac: 1_000.0,
            }),
            risk: Some(RiskRatings {
                legal: 3.0,
                default: 3.0,
                reputational: 3.0,
                operational: 3.0,
                litigation_percentage: 0.0,
            }),
            strategy: Some(StrategyRatings {
                adherence: 7.0,
                synergy: 7.0,
                recurrence: 7.0,
                cross_sell: 7.0,
            }),
        }
    }

    #[test]
    fn nominal_inputs_trigger_nothing() {
        let gates = evaluate_gates(&nominal_scores(), &OperationalData::default(), 100);
        assert!(gates.is_empty());
        assert_eq!(warning_advisory(&gates), None);
    }

    #[test]
    fn missing_group_yields_no_gates() {
        let mut scores = nominal_scores();
        scores.financial.as_mut().expect("financial present").margin = 1.0;
        scores.strategy = None;

        assert!(evaluate_gates(&scores, &OperationalData::default(), 100).is_empty());
    }

    #[test]
    fn peak_capacity_gate_uses_default_multiplier() {
        let operational = OperationalData {
            rooms_per_unit: 3.0,
            work_duration_months: 10.0,
            monthly_capacity_available: 25.0,
            ..OperationalData::default()
        };

        // 30 rooms a month, 45 at peak, against 25 available.
        assert!((peak_utilization_pct(&operational, 100) - 180.0).abs() < 1e-9);

        let gates = evaluate_gates(&nominal_scores(), &operational, 100);
        assert_eq!(gates.len(), 1);
        assert_eq!(gates[0].kind, GateKind::CriticalOperationalCapacity);
        assert_eq!(gates[0].current, "180%");
        assert_eq!(
            remediation_actions(&gates),
            vec![
                "Corrigir \"Capacidade Operacional Crítica\" através de renegociação comercial ou revisão de premissas"
                    .to_string()
            ]
        );
    }

    #[test]
    fn warnings_do_not_count_as_critical() {
        let mut scores = nominal_scores();
        scores.financial.as_mut().expect("financial present").ltv = 4_000.0;
        scores.strategy.as_mut().expect("strategy present").adherence = 3.0;

        let gates = evaluate_gates(&scores, &OperationalData::default(), 100);

        assert_eq!(gates.len(), 2);
        assert!(!has_critical_gate(&gates));
        assert_eq!(gates[0].current, "R$ 4000");
        assert!(warning_advisory(&gates)
            .expect("advisory present")
            .starts_with("2 alerta(s)"));
    }
}

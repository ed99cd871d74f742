use serde::{Deserialize, Serialize};

use super::super::domain::{FinancialMetrics, OperationalData, Scores};
use super::super::revenue::RevenueBreakdown;
use super::config::{CONDITIONAL_THRESHOLD, GO_THRESHOLD, MAX_CONDITIONS, MAX_FACTORS};
use super::rules::SubScores;

const STRONG_CATEGORY: f64 = 7.0;
const WEAK_CATEGORY: f64 = 5.0;
const RENEGOTIATION_COMMISSION_RATIO: f64 = 0.15;
const RENEGOTIATION_MARGIN: f64 = 7.0;

/// Final Go/No-Go category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    AutomaticNoGo,
    Go,
    GoWithConditions,
    NoGo,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::AutomaticNoGo => "NO-GO AUTOMÁTICO",
            Decision::Go => "GO",
            Decision::GoWithConditions => "GO COM RESSALVAS",
            Decision::NoGo => "NO-GO",
        }
    }

    pub fn is_approval(&self) -> bool {
        matches!(self, Decision::Go | Decision::GoWithConditions)
    }
}

/// First matching rule wins: veto, then the score bands.
pub fn classify(final_score: u8, auto_no_go: bool) -> Decision {
    if auto_no_go {
        Decision::AutomaticNoGo
    } else if final_score >= GO_THRESHOLD {
        Decision::Go
    } else if final_score >= CONDITIONAL_THRESHOLD {
        Decision::GoWithConditions
    } else {
        Decision::NoGo
    }
}

/// Up to two factors: strong categories first, then weak ones, in category order.
pub fn explanatory_factors(sub_scores: &SubScores) -> Vec<String> {
    let categories = [
        (
            sub_scores.financial,
            "viabilidade financeira sólida",
            "viabilidade financeira comprometida",
        ),
        (
            sub_scores.operational,
            "forte capacidade operacional",
            "limitações operacionais",
        ),
        (
            sub_scores.risk,
            "baixo perfil de risco",
            "alto perfil de risco",
        ),
        (
            sub_scores.strategy,
            "alta aderência estratégica",
            "baixa aderência estratégica",
        ),
    ];

    let strong = categories
        .iter()
        .filter(|(score, _, _)| *score >= STRONG_CATEGORY)
        .map(|(_, phrase, _)| *phrase);
    let weak = categories
        .iter()
        .filter(|(score, _, _)| *score < WEAK_CATEGORY)
        .map(|(_, _, phrase)| *phrase);

    let mut factors: Vec<String> = strong
        .chain(weak)
        .take(MAX_FACTORS)
        .map(str::to_string)
        .collect();

    if factors.is_empty() {
        factors.push("indicadores moderados em todas as dimensões".to_string());
    }
    factors
}

pub fn explanation(decision: Decision, factors: &[String]) -> String {
    format!(
        "Esta decisão foi classificada como {} principalmente devido a {}.",
        decision.label(),
        factors.join(" e ")
    )
}

/// Remediation items required for a conditional GO; empty for every other decision.
pub fn conditions(
    decision: Decision,
    scores: &Scores,
    operational: &OperationalData,
    sub_scores: &SubScores,
) -> Vec<String> {
    if decision != Decision::GoWithConditions {
        return Vec::new();
    }

    let financial = scores.financial();
    let risk = scores.risk();
    let rules: [(bool, &str); 5] = [
        (
            risk.legal >= 6.0,
            "Aprovação jurídica com due diligence completa",
        ),
        (
            risk.default >= 6.0,
            "Estabelecimento de garantias contratuais robustas",
        ),
        (
            financial.margin < 7.0,
            "Revisão e otimização da estrutura de custos",
        ),
        (
            operational.technical_complexity >= 7.0,
            "Plano de execução detalhado com marcos de validação",
        ),
        (
            sub_scores.risk < 5.0,
            "Plano de mitigação de riscos aprovado pelo comitê",
        ),
    ];

    rules
        .iter()
        .filter(|(breached, _)| *breached)
        .take(MAX_CONDITIONS)
        .map(|(_, condition)| condition.to_string())
        .collect()
}

/// Non-blocking advisory raised next to the primary decision.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenegotiationAdvisory {
    pub needed: bool,
    pub reasons: Vec<String>,
}

pub fn renegotiation(
    revenue: &RevenueBreakdown,
    financial: &FinancialMetrics,
) -> RenegotiationAdvisory {
    let mut reasons = Vec::new();
    if revenue.commission_ratio() > RENEGOTIATION_COMMISSION_RATIO {
        reasons.push(
            "Comissão acima de 15% impacta significativamente a margem líquida".to_string(),
        );
    }
    if financial.margin < RENEGOTIATION_MARGIN {
        reasons.push("Margem abaixo de 7% requer otimização de estrutura de custos".to_string());
    }

    RenegotiationAdvisory {
        needed: !reasons.is_empty(),
        reasons,
    }
}

use serde::{Deserialize, Serialize};

use super::super::domain::Scores;

const MAX_RISKS: usize = 3;
const MAX_OPPORTUNITIES: usize = 3;
const MAX_ACTIONS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPriority {
    High,
    Medium,
    Low,
}

impl ActionPriority {
    pub fn label(&self) -> &'static str {
        match self {
            ActionPriority::High => "Alta",
            ActionPriority::Medium => "Média",
            ActionPriority::Low => "Baixa",
        }
    }
}

/// Titled observation shown in the strategic panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub description: String,
}

impl Insight {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedAction {
    pub priority: ActionPriority,
    pub action: String,
    pub description: String,
}

impl SuggestedAction {
    fn new(priority: ActionPriority, action: &str, description: &str) -> Self {
        Self {
            priority,
            action: action.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategicInsights {
    pub critical_risks: Vec<Insight>,
    pub opportunities: Vec<Insight>,
    pub suggested_actions: Vec<SuggestedAction>,
}

impl StrategicInsights {
    pub fn from_scores(scores: &Scores) -> Self {
        Self {
            critical_risks: critical_risks(scores),
            opportunities: opportunities(scores),
            suggested_actions: suggested_actions(scores),
        }
    }
}

pub fn critical_risks(scores: &Scores) -> Vec<Insight> {
    let (Some(financial), Some(risk), Some(_)) = (scores.financial, scores.risk, scores.strategy)
    else {
        return vec![Insight::new(
            "Aguardando Dados",
            "Configure os critérios de avaliação para visualizar os insights",
        )];
    };

    let candidates = [
        (
            risk.legal >= 7.0,
            "Risco Jurídico Elevado",
            "Requer análise jurídica completa antes da aprovação",
        ),
        (
            risk.default >= 7.0,
            "Alto Risco de Inadimplência",
            "Estabelecer garantias contratuais robustas e modelo de pagamento escalonado",
        ),
        (
            risk.reputational >= 7.0,
            "Risco Reputacional Significativo",
            "Avaliar histórico da incorporadora e implementar cláusulas de proteção de marca",
        ),
        (
            risk.operational >= 7.0,
            "Complexidade Operacional Alta",
            "Estruturar equipe dedicada e prever contingências operacionais",
        ),
        (
            financial.margin < 5.0,
            "Margem Financeira Insuficiente",
            "Renegociar condições comerciais ou reavaliar estrutura de custos",
        ),
    ];

    let risks = select(&candidates, MAX_RISKS);
    if risks.is_empty() {
        return vec![Insight::new(
            "Perfil de Risco Controlado",
            "Nenhum fator de risco crítico identificado na análise atual",
        )];
    }
    risks
}

/// Opportunities only need the financial and strategy groups.
pub fn opportunities(scores: &Scores) -> Vec<Insight> {
    let (Some(financial), Some(strategy)) = (scores.financial, scores.strategy) else {
        return vec![Insight::new(
            "Aguardando Análise",
            "Complete os dados para identificar oportunidades",
        )];
    };

    let candidates = [
        (
            financial.margin >= 10.0,
            "Margem Atrativa",
            "Projeto com rentabilidade acima da média do portfólio",
        ),
        (
            financial.ticket >= 25_000.0,
            "Alto Ticket Médio",
            "Potencial de receita significativa por unidade atendida",
        ),
        (
            financial.ltv >= 20_000.0,
            "LTV Elevado",
            "Oportunidade de receita recorrente e relacionamento de longo prazo",
        ),
        (
            strategy.synergy >= 7.0,
            "Forte Sinergia Operacional",
            "Aproveitamento de capacidade instalada e competências existentes",
        ),
        (
            strategy.cross_sell >= 7.0,
            "Potencial de Cross-sell",
            "Base para expansão de serviços e produtos complementares",
        ),
        (
            strategy.recurrence >= 7.0,
            "Modelo Escalável",
            "Possibilidade de replicação em outros empreendimentos",
        ),
    ];

    let found = select(&candidates, MAX_OPPORTUNITIES);
    if found.is_empty() {
        return vec![Insight::new(
            "Projeto Estratégico",
            "Oportunidade alinhada com objetivos corporativos de expansão",
        )];
    }
    found
}

pub fn suggested_actions(scores: &Scores) -> Vec<SuggestedAction> {
    let (Some(financial), Some(risk), Some(strategy)) =
        (scores.financial, scores.risk, scores.strategy)
    else {
        return vec![SuggestedAction::new(
            ActionPriority::Low,
            "Configurar Análise",
            "Preencha todos os critérios de avaliação para receber recomendações",
        )];
    };

    use ActionPriority::{High, Medium};
    let candidates = [
        (
            risk.legal >= 6.0,
            High,
            "Due Diligence Jurídica",
            "Conduzir análise completa de contratos, licenças e passivos",
        ),
        (
            financial.margin < 7.0,
            High,
            "Revisão Comercial",
            "Renegociar termos contratuais para melhorar viabilidade financeira",
        ),
        (
            strategy.synergy < 5.0,
            Medium,
            "Expansão de Rede",
            "Qualificar e homologar parceiros técnicos na região do projeto",
        ),
        (
            strategy.recurrence < 5.0,
            Medium,
            "Estratégia de Retenção",
            "Desenvolver programa de fidelização e serviços pós-entrega",
        ),
        (
            risk.default >= 6.0,
            High,
            "Estrutura de Garantias",
            "Definir modelo de pagamento com garantias e marcos de validação",
        ),
        (
            risk.operational >= 7.0,
            High,
            "Plano de Execução",
            "Criar cronograma detalhado com gestão de complexidade técnica",
        ),
    ];

    let actions: Vec<SuggestedAction> = candidates
        .iter()
        .filter(|(triggered, ..)| *triggered)
        .take(MAX_ACTIONS)
        .map(|(_, priority, action, description)| {
            SuggestedAction::new(*priority, action, description)
        })
        .collect();

    if !actions.is_empty() {
        return actions;
    }
    vec![
        SuggestedAction::new(
            ActionPriority::Low,
            "Monitoramento Contínuo",
            "Estabelecer KPIs e marcos de acompanhamento ao longo da parceria",
        ),
        SuggestedAction::new(
            ActionPriority::Low,
            "Alinhamento Estratégico",
            "Validar aderência aos objetivos do plano estratégico 2026-2028",
        ),
    ]
}

fn select(candidates: &[(bool, &str, &str)], limit: usize) -> Vec<Insight> {
    candidates
        .iter()
        .filter(|(triggered, _, _)| *triggered)
        .take(limit)
        .map(|(_, title, description)| Insight::new(title, description))
        .collect()
}

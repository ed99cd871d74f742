use serde::{Deserialize, Serialize};

use super::super::domain::{sanitize, OperationalData};
use super::super::evaluation::gates::peak_utilization_pct;
use super::super::evaluation::rules::{
    capacity_utilization, engineer_utilization, engineers_needed, required_monthly_capacity,
};

const CONCENTRATION_THRESHOLD: f64 = 0.3;
const MAX_BOTTLENECKS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    AwaitingData,
    Adequate,
    Attention,
    Insufficient,
}

impl ExecutionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExecutionStatus::AwaitingData => "Aguardando dados",
            ExecutionStatus::Adequate => "Capacidade Adequada",
            ExecutionStatus::Attention => "Atenção",
            ExecutionStatus::Insufficient => "Capacidade Insuficiente",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalStatus {
    AwaitingData,
    Adequate,
    ModerateRisk,
    Critical,
}

impl TechnicalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TechnicalStatus::AwaitingData => "Aguardando dados",
            TechnicalStatus::Adequate => "Adequado",
            TechnicalStatus::ModerateRisk => "Risco Moderado",
            TechnicalStatus::Critical => "Crítico",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BottleneckSeverity {
    Critical,
    Warning,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bottleneck {
    pub severity: BottleneckSeverity,
    pub title: String,
    pub description: String,
}

impl Bottleneck {
    fn new(severity: BottleneckSeverity, title: &str, description: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.to_string(),
            description: description.into(),
        }
    }
}

/// Capacity, staffing and supply chain read-out of the operational inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalDiagnostics {
    pub capacity_utilization_pct: f64,
    pub peak_utilization_pct: f64,
    pub concentration_ratio: f64,
    pub concentration_risk: bool,
    pub engineers_needed: u32,
    pub execution_status: ExecutionStatus,
    pub technical_status: TechnicalStatus,
    pub bottlenecks: Vec<Bottleneck>,
}

impl OperationalDiagnostics {
    pub fn diagnose(operational: &OperationalData, total_units: u32) -> Self {
        let capacity_utilization_pct = capacity_utilization(operational, total_units) * 100.0;
        let peak_utilization_pct = peak_utilization_pct(operational, total_units);

        let duration = sanitize(operational.work_duration_months);
        let concentration_ratio = if duration > 0.0 {
            sanitize(operational.peak_months) / duration
        } else {
            sanitize(operational.peak_months)
        };

        let execution_status = if total_units == 0 || duration <= 0.0 {
            ExecutionStatus::AwaitingData
        } else if peak_utilization_pct <= 80.0 {
            ExecutionStatus::Adequate
        } else if peak_utilization_pct <= 100.0 {
            ExecutionStatus::Attention
        } else {
            ExecutionStatus::Insufficient
        };

        let technical_status = match engineer_utilization(operational, total_units) {
            None => TechnicalStatus::AwaitingData,
            Some(value) if value <= 0.8 => TechnicalStatus::Adequate,
            Some(value) if value <= 1.0 => TechnicalStatus::ModerateRisk,
            Some(_) => TechnicalStatus::Critical,
        };

        let engineers_needed = engineers_needed(operational, total_units);
        let bottlenecks = bottlenecks(
            operational,
            total_units,
            capacity_utilization_pct,
            peak_utilization_pct,
            technical_status,
            engineers_needed,
        );

        Self {
            capacity_utilization_pct,
            peak_utilization_pct,
            concentration_ratio,
            concentration_risk: concentration_ratio > CONCENTRATION_THRESHOLD,
            engineers_needed,
            execution_status,
            technical_status,
            bottlenecks,
        }
    }
}

fn bottlenecks(
    operational: &OperationalData,
    total_units: u32,
    capacity_utilization_pct: f64,
    peak_utilization_pct: f64,
    technical_status: TechnicalStatus,
    engineers_needed: u32,
) -> Vec<Bottleneck> {
    use BottleneckSeverity::{Critical, Warning};

    let mut found = Vec::new();

    if peak_utilization_pct > 100.0 {
        found.push(Bottleneck::new(
            Critical,
            "Capacidade de Execução Insuficiente",
            format!(
                "Demanda de {:.0} ambientes/mês excede capacidade de {}/mês",
                required_monthly_capacity(operational, total_units).ceil(),
                operational.monthly_capacity_available
            ),
        ));
    } else if peak_utilization_pct > 85.0 {
        found.push(Bottleneck::new(
            Warning,
            "Utilização de Capacidade Elevada",
            format!(
                "{:.0}% da capacidade instalada comprometida",
                capacity_utilization_pct
            ),
        ));
    }

    if technical_status == TechnicalStatus::Critical {
        found.push(Bottleneck::new(
            Critical,
            "Equipe Técnica Subdimensionada",
            format!("Necessário {engineers_needed} engenheiros com carga acima do recomendado"),
        ));
    }
    if operational.technical_complexity >= 8.0 {
        found.push(Bottleneck::new(
            Warning,
            "Alta Complexidade Técnica",
            "Projeto demanda expertise especializada e processos customizados",
        ));
    }
    if operational.supply_dependency >= 7.0 {
        found.push(Bottleneck::new(
            Warning,
            "Dependência Crítica de Supply",
            "Risco de atrasos por indisponibilidade de materiais específicos",
        ));
    }
    if operational.logistical_risk >= 7.0 {
        found.push(Bottleneck::new(
            Critical,
            "Risco Logístico Elevado",
            "Necessário plano de contingência para cadeia de suprimentos",
        ));
    }
    if operational.standardization <= 3.0 {
        found.push(Bottleneck::new(
            Warning,
            "Baixa Padronização",
            "Dificuldade de escala e replicação do modelo operacional",
        ));
    }

    if found.is_empty() {
        found.push(Bottleneck::new(
            BottleneckSeverity::Clear,
            "Operação Viável",
            "Nenhum gargalo operacional crítico identificado",
        ));
    }
    found.truncate(MAX_BOTTLENECKS);
    found
}

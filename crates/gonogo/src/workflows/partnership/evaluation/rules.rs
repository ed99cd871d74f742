use serde::{Deserialize, Serialize};

use super::super::domain::{
    sanitize, CommunicationTier, FinancialMetrics, OperationalData, RiskRatings, StrategyRatings,
};

const MARGIN_CEILING: f64 = 15.0;
const TICKET_FLOOR: f64 = 2_000.0;
const TICKET_CEILING: f64 = 40_000.0;
const LTV_CEILING: f64 = 30_000.0;
const PAYBACK_CEILING_MONTHS: f64 = 36.0;
const CAC_CEILING: f64 = 5_000.0;
const REFORM_REVENUE_REFERENCE: f64 = 10_000.0;

const EXECUTION_WEIGHT: f64 = 0.40;
const TECHNICAL_WEIGHT: f64 = 0.30;
const SUPPLY_COMPLEXITY_WEIGHT: f64 = 0.30;
/// Technical sub-score used when the engineer inputs are missing.
const TECHNICAL_FALLBACK: f64 = 5.0;

/// Clamp onto the common 0-10 scale, mapping NaN to zero.
pub(crate) fn clamp_score(value: f64) -> f64 {
    sanitize(value).clamp(0.0, 10.0)
}

pub(crate) fn cap_score(value: f64) -> f64 {
    sanitize(value).min(10.0)
}

pub fn normalize_margin(margin: f64) -> f64 {
    clamp_score(margin / MARGIN_CEILING * 10.0)
}

pub fn normalize_ticket(ticket: f64) -> f64 {
    clamp_score((ticket - TICKET_FLOOR) / (TICKET_CEILING - TICKET_FLOOR) * 10.0)
}

pub fn normalize_ltv(ltv: f64) -> f64 {
    clamp_score(ltv / LTV_CEILING * 10.0)
}

/// Shorter payback scores higher.
pub fn normalize_payback(payback_months: f64) -> f64 {
    clamp_score(10.0 - payback_months / PAYBACK_CEILING_MONTHS * 10.0)
}

/// Cheaper acquisition scores higher.
pub fn normalize_cac(cac: f64) -> f64 {
    clamp_score(10.0 - cac / CAC_CEILING * 10.0)
}

pub fn financial_score(financial: &FinancialMetrics) -> f64 {
    let normalized = [
        normalize_margin(financial.margin),
        normalize_ticket(financial.ticket),
        normalize_ltv(financial.ltv),
        normalize_payback(financial.payback_months),
        normalize_cac(financial.cac),
    ];
    mean(&normalized)
}

/// Raw risk ratings grow worse upwards, so the mean is inverted.
pub fn risk_score(risk: &RiskRatings) -> f64 {
    let ratings = risk.ratings().map(sanitize);
    clamp_score(10.0 - mean(&ratings))
}

pub fn strategy_score(strategy: &StrategyRatings) -> f64 {
    let ratings = [
        strategy.adherence,
        strategy.synergy,
        strategy.recurrence,
        strategy.cross_sell,
    ]
    .map(sanitize);
    clamp_score(mean(&ratings))
}

/// Capped at 10 but not floored: a commission larger than the gross leaves a negative score.
pub fn reform_revenue_score(net_revenue_per_unit: f64) -> f64 {
    cap_score(net_revenue_per_unit / REFORM_REVENUE_REFERENCE * 10.0)
}

pub fn communication_score(tier: CommunicationTier) -> f64 {
    tier.score()
}

/// Rooms per month the project requires; zero while the work duration is missing.
pub fn required_monthly_capacity(operational: &OperationalData, total_units: u32) -> f64 {
    let duration = sanitize(operational.work_duration_months);
    if duration <= 0.0 {
        return 0.0;
    }
    total_rooms(operational, total_units) / duration
}

pub fn total_rooms(operational: &OperationalData, total_units: u32) -> f64 {
    f64::from(total_units) * sanitize(operational.rooms_per_unit)
}

/// Ratio of required to available monthly capacity; zero without available capacity.
pub fn capacity_utilization(operational: &OperationalData, total_units: u32) -> f64 {
    let available = sanitize(operational.monthly_capacity_available);
    if available <= 0.0 {
        return 0.0;
    }
    required_monthly_capacity(operational, total_units) / available
}

/// Engineers required to supervise every unit; zero when any input is missing.
pub fn engineers_needed(operational: &OperationalData, total_units: u32) -> u32 {
    let capacity = sanitize(operational.engineer_capacity);
    let duration = sanitize(operational.work_duration_months);
    if total_units == 0 || capacity <= 0.0 || duration <= 0.0 {
        return 0;
    }
    (f64::from(total_units) / (capacity * duration)).ceil() as u32
}

/// Load per engineer relative to the optimal load, once engineers are required.
pub fn engineer_utilization(operational: &OperationalData, total_units: u32) -> Option<f64> {
    let engineers = engineers_needed(operational, total_units);
    if engineers == 0 {
        return None;
    }
    let workload = f64::from(total_units) / f64::from(engineers);
    let optimal = operational.engineer_capacity * operational.work_duration_months;
    Some(workload / optimal)
}

fn execution_score(utilization: f64) -> f64 {
    if utilization > 1.0 {
        3.0
    } else if utilization > 0.85 {
        6.0
    } else if utilization > 0.7 {
        8.0
    } else {
        10.0
    }
}

fn technical_score(utilization: Option<f64>) -> f64 {
    match utilization {
        None => TECHNICAL_FALLBACK,
        Some(value) if value <= 0.8 => 10.0,
        Some(value) if value <= 1.0 => 7.0,
        Some(_) => 4.0,
    }
}

fn supply_complexity_score(operational: &OperationalData) -> f64 {
    let components = [
        10.0 - sanitize(operational.technical_complexity),
        10.0 - sanitize(operational.supply_dependency),
        10.0 - sanitize(operational.logistical_risk),
        sanitize(operational.standardization),
    ];
    clamp_score(mean(&components))
}

/// Intermediate figures of the operational viability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalBreakdown {
    pub total_rooms: f64,
    pub required_monthly_capacity: f64,
    pub capacity_utilization: f64,
    pub execution_score: f64,
    pub engineers_needed: u32,
    pub engineer_utilization: Option<f64>,
    pub technical_score: f64,
    pub supply_complexity_score: f64,
    pub operational_score: f64,
}

impl OperationalBreakdown {
    pub fn calculate(operational: &OperationalData, total_units: u32) -> Self {
        let capacity_utilization = capacity_utilization(operational, total_units);
        let engineer_utilization = engineer_utilization(operational, total_units);
        let execution = execution_score(capacity_utilization);
        let technical = technical_score(engineer_utilization);
        let supply_complexity = supply_complexity_score(operational);

        Self {
            total_rooms: total_rooms(operational, total_units),
            required_monthly_capacity: required_monthly_capacity(operational, total_units),
            capacity_utilization,
            execution_score: execution,
            engineers_needed: engineers_needed(operational, total_units),
            engineer_utilization,
            technical_score: technical,
            supply_complexity_score: supply_complexity,
            operational_score: clamp_score(
                execution * EXECUTION_WEIGHT
                    + technical * TECHNICAL_WEIGHT
                    + supply_complexity * SUPPLY_COMPLEXITY_WEIGHT,
            ),
        }
    }
}

/// The six category scores feeding the composite, each on a 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub financial: f64,
    pub operational: f64,
    pub risk: f64,
    pub strategy: f64,
    pub reform_revenue: f64,
    pub communication: f64,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

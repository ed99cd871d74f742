use serde::{Deserialize, Serialize};

use super::super::domain::sanitize;

/// Average operating cost of delivering one unit.
pub const COST_PER_UNIT: f64 = 2_500.0;
const MAX_EFFICIENCY_MONTHS: u32 = 12;
const PROLONGED_MONTHS: u32 = 24;
const PROLONGED_TARGET_MONTHS: u32 = 18;
const EFFICIENCY_TARGET_MONTHS: u32 = 11;

/// Capacity change suggested when the delivery schedule runs long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleAdvisory {
    /// Over 24 months; suggests enough capacity to finish in about 18.
    Prolonged { suggested_capacity: u32 },
    /// Between 12 and 24 months; suggests enough capacity to finish under 12.
    Optimization { suggested_capacity: u32 },
}

impl ScheduleAdvisory {
    pub fn message(&self) -> String {
        match self {
            ScheduleAdvisory::Prolonged { suggested_capacity } => format!(
                "Execução superior a 24 meses pode impactar o retorno do investimento. \
                 Considere aumentar a capacidade mensal para {suggested_capacity} un/mês."
            ),
            ScheduleAdvisory::Optimization { suggested_capacity } => format!(
                "Aumentar a capacidade para {suggested_capacity} un/mês alcançaria eficiência \
                 máxima (execução em menos de 12 meses)."
            ),
        }
    }
}

/// Delivery schedule and operating cost for a given monthly unit capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineeringSchedule {
    pub total_units: u32,
    pub monthly_capacity: f64,
    pub months: u32,
    pub operating_cost: f64,
    pub monthly_cost: f64,
    pub max_efficiency: bool,
    pub advisory: Option<ScheduleAdvisory>,
}

impl EngineeringSchedule {
    pub fn plan(total_units: u32, monthly_capacity: f64) -> Self {
        let monthly_capacity = sanitize(monthly_capacity);
        if total_units == 0 || monthly_capacity <= 0.0 {
            return Self {
                total_units,
                monthly_capacity,
                months: 0,
                operating_cost: 0.0,
                monthly_cost: 0.0,
                max_efficiency: false,
                advisory: None,
            };
        }

        let months = (f64::from(total_units) / monthly_capacity).ceil() as u32;
        let operating_cost = f64::from(total_units) * COST_PER_UNIT;
        let max_efficiency = months < MAX_EFFICIENCY_MONTHS;
        let advisory = if months > PROLONGED_MONTHS {
            Some(ScheduleAdvisory::Prolonged {
                suggested_capacity: total_units.div_ceil(PROLONGED_TARGET_MONTHS),
            })
        } else if !max_efficiency {
            Some(ScheduleAdvisory::Optimization {
                suggested_capacity: total_units.div_ceil(EFFICIENCY_TARGET_MONTHS),
            })
        } else {
            None
        };

        Self {
            total_units,
            monthly_capacity,
            months,
            operating_cost,
            monthly_cost: operating_cost / f64::from(months.max(1)),
            max_efficiency,
            advisory,
        }
    }

    /// Average share of the monthly capacity actually used across the schedule.
    pub fn average_utilization_pct(&self) -> f64 {
        if self.months == 0 || self.monthly_capacity <= 0.0 {
            return 0.0;
        }
        f64::from(self.total_units) / f64::from(self.months) / self.monthly_capacity * 100.0
    }
}

use serde::{Deserialize, Serialize};

use super::super::domain::sanitize;

/// Yearly decoration and maintenance spend as a share of the initial service revenue.
pub const CROSS_SELL_RATE: f64 = 0.15;
pub const PROJECTION_YEARS: u32 = 3;

/// Lifetime value of one customer and of the whole development.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LtvProjection {
    pub initial_revenue: f64,
    pub initial_margin: f64,
    pub annual_cross_sell: f64,
    pub cross_sell_total: f64,
    pub ltv_per_customer: f64,
    pub capture_total: f64,
    pub ltv_total: f64,
}

impl LtvProjection {
    /// `capture_per_unit` seeds the initial revenue; `margin_pct` is the service margin.
    pub fn project(capture_per_unit: f64, margin_pct: f64, total_units: u32) -> Self {
        let initial_revenue = sanitize(capture_per_unit);
        let initial_margin = initial_revenue * sanitize(margin_pct) / 100.0;
        let annual_cross_sell = initial_revenue * CROSS_SELL_RATE;
        let cross_sell_total = annual_cross_sell * f64::from(PROJECTION_YEARS);
        let ltv_per_customer = initial_margin + cross_sell_total;
        let units = f64::from(total_units);

        Self {
            initial_revenue,
            initial_margin,
            annual_cross_sell,
            cross_sell_total,
            ltv_per_customer,
            capture_total: initial_revenue * units,
            ltv_total: ltv_per_customer * units,
        }
    }
}

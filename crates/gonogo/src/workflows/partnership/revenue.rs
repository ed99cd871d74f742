use serde::{Deserialize, Serialize};

use super::domain::{
    sanitize, CommercialModel, CommissionType, CommunicationTier, ReformPackageSet, ReformSlot,
};

/// Gross reform revenue may never exceed this amount per unit.
pub const MAX_REVENUE_PER_UNIT: f64 = 80_000.0;
/// Adhesion total above which the form warns the analyst.
pub const MAX_TOTAL_ADHESION: f64 = 100.0;
/// Commission share (percent of gross) considered a significant hit on margin.
pub const SIGNIFICANT_COMMISSION_SHARE: f64 = 20.0;

/// Uncapped revenue contributed by one reform slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotRevenue {
    pub slot: ReformSlot,
    pub revenue: f64,
}

/// Gross to net reform revenue and the communication package value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    pub total_units: u32,
    pub slots: Vec<SlotRevenue>,
    pub gross_reform_revenue: f64,
    pub capped: bool,
    pub gross_revenue_per_unit: f64,
    pub commission: f64,
    pub commission_share_pct: f64,
    pub commission_significant: bool,
    pub net_reform_revenue: f64,
    pub net_revenue_per_unit: f64,
    pub communication_revenue: f64,
    pub total_adhesion: f64,
    pub adhesion_over_limit: bool,
}

impl RevenueBreakdown {
    pub fn calculate(
        packages: &ReformPackageSet,
        commercial: &CommercialModel,
        communication: CommunicationTier,
        total_units: u32,
    ) -> Self {
        let slots = slot_revenues(packages, total_units);
        let (gross, capped) = gross_reform_revenue(packages, total_units);
        let commission = commission(commercial, gross, total_units);
        let net = gross - commission;
        let commission_share_pct = commission_share(commission, gross) * 100.0;
        let total_adhesion = packages.total_adhesion();

        Self {
            total_units,
            slots,
            gross_reform_revenue: gross,
            capped,
            gross_revenue_per_unit: per_unit(gross, total_units),
            commission,
            commission_share_pct,
            commission_significant: commission_share_pct > SIGNIFICANT_COMMISSION_SHARE,
            net_reform_revenue: net,
            net_revenue_per_unit: per_unit(net, total_units),
            communication_revenue: communication.value(),
            total_adhesion,
            adhesion_over_limit: total_adhesion > MAX_TOTAL_ADHESION,
        }
    }

    /// Commission as a fraction of gross revenue. A zero gross divides by one, so any commission
    /// paid against no reform revenue still reads as a heavy share.
    pub fn commission_ratio(&self) -> f64 {
        if self.gross_reform_revenue > 0.0 {
            self.commission / self.gross_reform_revenue
        } else {
            self.commission
        }
    }
}

pub(crate) fn slot_revenues(packages: &ReformPackageSet, total_units: u32) -> Vec<SlotRevenue> {
    packages
        .slots()
        .iter()
        .map(|(slot, package)| SlotRevenue {
            slot: *slot,
            revenue: sanitize(package.value) * sanitize(package.adhesion) / 100.0
                * f64::from(total_units),
        })
        .collect()
}

/// Sum of slot revenue, clamped to [`MAX_REVENUE_PER_UNIT`] per unit after summing.
///
/// Returns the revenue and whether the cap was applied.
pub fn gross_reform_revenue(packages: &ReformPackageSet, total_units: u32) -> (f64, bool) {
    let uncapped: f64 = slot_revenues(packages, total_units)
        .iter()
        .map(|entry| entry.revenue)
        .sum();

    let divisor = f64::from(total_units.max(1));
    if uncapped / divisor > MAX_REVENUE_PER_UNIT {
        (MAX_REVENUE_PER_UNIT * f64::from(total_units), true)
    } else {
        (uncapped, false)
    }
}

pub fn commission(commercial: &CommercialModel, gross_revenue: f64, total_units: u32) -> f64 {
    let value = sanitize(commercial.commission_value);
    match commercial.commission_type {
        CommissionType::Percentage => value * gross_revenue / 100.0,
        CommissionType::Fixed => value * f64::from(total_units),
    }
}

/// Per-unit figure reporting zero instead of dividing by a zero unit count.
pub fn per_unit(total: f64, total_units: u32) -> f64 {
    if total_units == 0 {
        0.0
    } else {
        total / f64::from(total_units)
    }
}

fn commission_share(commission: f64, gross: f64) -> f64 {
    if gross > 0.0 {
        commission / gross
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::partnership::domain::ReformPackage;

    fn packages() -> ReformPackageSet {
        ReformPackageSet {
            bathroom: ReformPackage::new(18_000.0, 35.0),
            kitchen: ReformPackage::new(32_000.0, 25.0),
            living_room: ReformPackage::new(15_000.0, 30.0),
            bedroom: ReformPackage::new(14_000.0, 40.0),
        }
    }

    #[test]
    fn cap_applies_to_the_sum_not_each_slot() {
        let packages = ReformPackageSet {
            kitchen: ReformPackage::new(120_000.0, 60.0),
            ..ReformPackageSet::default()
        };

        let (gross, capped) = gross_reform_revenue(&packages, 10);

        assert!(!capped, "72k per unit stays under the cap");
        assert!((gross - 720_000.0).abs() < 1e-6);

        let packages = ReformPackageSet {
            kitchen: ReformPackage::new(200_000.0, 60.0),
            ..ReformPackageSet::default()
        };
        let (gross, capped) = gross_reform_revenue(&packages, 10);
        assert!(capped);
        assert_eq!(gross, MAX_REVENUE_PER_UNIT * 10.0);
    }

    #[test]
    fn fixed_commission_scales_with_units() {
        let commercial = CommercialModel {
            commission_type: CommissionType::Fixed,
            commission_value: 1_200.0,
            ..CommercialModel::default()
        };

        assert_eq!(commission(&commercial, 2_440_000.0, 100), 120_000.0);
        assert_eq!(commission(&commercial, 0.0, 0), 0.0);
    }

    #[test]
    fn breakdown_flags_heavy_commission_and_adhesion_overflow() {
        let mut packages = packages();
        packages.bedroom.adhesion = 45.0;
        let commercial = CommercialModel {
            commission_value: 25.0,
            ..CommercialModel::default()
        };

        let breakdown =
            RevenueBreakdown::calculate(&packages, &commercial, CommunicationTier::Basic, 50);

        assert!(breakdown.commission_significant);
        assert!((breakdown.commission_ratio() - 0.25).abs() < 1e-9);
        assert!(breakdown.adhesion_over_limit);
        assert_eq!(breakdown.total_adhesion, 135.0);
        assert_eq!(breakdown.communication_revenue, 20_000.0);
        assert_eq!(breakdown.slots.len(), 4);
    }

    #[test]
    fn zero_units_reports_zero_per_unit_figures() {
        let breakdown = RevenueBreakdown::calculate(
            &packages(),
            &CommercialModel::default(),
            CommunicationTier::None,
            0,
        );

        assert_eq!(breakdown.gross_reform_revenue, 0.0);
        assert_eq!(breakdown.net_revenue_per_unit, 0.0);
        assert_eq!(breakdown.commission_ratio(), 0.0);
        assert!(!breakdown.capped);
    }

    #[test]
    fn fixed_commission_without_gross_counts_against_unit_denominator() {
        let commercial = CommercialModel {
            commission_type: CommissionType::Fixed,
            commission_value: 500.0,
            ..CommercialModel::default()
        };

        let breakdown = RevenueBreakdown::calculate(
            &ReformPackageSet::default(),
            &commercial,
            CommunicationTier::None,
            100,
        );

        assert_eq!(breakdown.gross_reform_revenue, 0.0);
        assert_eq!(breakdown.commission, 50_000.0);
        assert_eq!(breakdown.commission_ratio(), 50_000.0);
        assert_eq!(breakdown.commission_share_pct, 0.0);
        assert!(!breakdown.commission_significant);
    }
}

//! Read-outs computed next to the decision. None of them feed the composite score.

pub mod insights;
pub mod ltv;
pub mod mix;
pub mod operations;
pub mod schedule;

pub use insights::{ActionPriority, Insight, StrategicInsights, SuggestedAction};
pub use ltv::LtvProjection;
pub use mix::{InstallationSummary, MarginHealth, TypologySummary};
pub use operations::{Bottleneck, ExecutionStatus, OperationalDiagnostics, TechnicalStatus};
pub use schedule::{EngineeringSchedule, ScheduleAdvisory};

use serde::{Deserialize, Serialize};

use super::domain::{sanitize, PartnershipInputs, RiskRatings};
use super::revenue::RevenueBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommissionImpact {
    pub share_of_gross_pct: f64,
    pub significant: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdhesionCheck {
    pub total_adhesion: f64,
    pub over_limit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnershipAnalysis {
    pub typology_mix: TypologySummary,
    pub installations: InstallationSummary,
    pub ltv: LtvProjection,
    pub schedule: EngineeringSchedule,
    pub operations: OperationalDiagnostics,
    pub insights: StrategicInsights,
    pub commission_impact: CommissionImpact,
    pub adhesion: AdhesionCheck,
    pub litigation_adjusted_margin: Option<f64>,
}

pub fn analyze(
    inputs: &PartnershipInputs,
    total_units: u32,
    revenue: &RevenueBreakdown,
) -> PartnershipAnalysis {
    let typology_mix = TypologySummary::from_typologies(&inputs.typologies);
    let margin = inputs.scores.financial().margin;

    PartnershipAnalysis {
        ltv: LtvProjection::project(typology_mix.capture_per_unit, margin, total_units),
        typology_mix,
        installations: InstallationSummary::from_installations(&inputs.installations),
        schedule: EngineeringSchedule::plan(
            total_units,
            inputs.operational.monthly_unit_capacity,
        ),
        operations: OperationalDiagnostics::diagnose(&inputs.operational, total_units),
        insights: StrategicInsights::from_scores(&inputs.scores),
        commission_impact: CommissionImpact {
            share_of_gross_pct: revenue.commission_share_pct,
            significant: revenue.commission_significant,
        },
        adhesion: AdhesionCheck {
            total_adhesion: revenue.total_adhesion,
            over_limit: revenue.adhesion_over_limit,
        },
        litigation_adjusted_margin: inputs
            .scores
            .financial
            .zip(inputs.scores.risk)
            .map(|(financial, risk)| litigation_adjusted_margin(financial.margin, &risk)),
    }
}

/// Margin left once the share exposed to litigation is taken out.
pub fn litigation_adjusted_margin(margin: f64, risk: &RiskRatings) -> f64 {
    let exposure = sanitize(risk.litigation_percentage).clamp(0.0, 100.0);
    sanitize(margin) * (1.0 - exposure / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn litigation_exposure_discounts_margin() {
        let risk = RiskRatings {
            litigation_percentage: 25.0,
            ..RiskRatings::default()
        };
        assert_eq!(litigation_adjusted_margin(8.0, &risk), 6.0);
    }

    #[test]
    fn analysis_mirrors_revenue_flags() {
        let inputs = PartnershipInputs::seed();
        let total_units = inputs.total_units();
        let revenue = RevenueBreakdown::calculate(
            &inputs.reform_packages,
            &inputs.commercial,
            inputs.communication,
            total_units,
        );

        let analysis = analyze(&inputs, total_units, &revenue);

        assert!(analysis.adhesion.over_limit);
        assert_eq!(analysis.adhesion.total_adhesion, 130.0);
        assert!(!analysis.commission_impact.significant);
        assert_eq!(analysis.litigation_adjusted_margin, Some(8.0));
        assert_eq!(analysis.schedule.months, 0);
    }
}

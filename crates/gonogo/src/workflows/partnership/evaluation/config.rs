use serde::Serialize;

/// Category weights of the composite score, expressed in whole percent.
///
/// Integer percentages keep the sum exact; the weights are fixed and must total 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryWeights {
    pub financial: u8,
    pub operational: u8,
    pub risk: u8,
    pub strategy: u8,
    pub reform_revenue: u8,
    pub communication: u8,
}

impl CategoryWeights {
    pub const STANDARD: Self = Self {
        financial: 25,
        operational: 30,
        risk: 20,
        strategy: 15,
        reform_revenue: 5,
        communication: 5,
    };

    pub fn total_percent(&self) -> u16 {
        [
            self.financial,
            self.operational,
            self.risk,
            self.strategy,
            self.reform_revenue,
            self.communication,
        ]
        .iter()
        .map(|weight| u16::from(*weight))
        .sum()
    }

    /// Weight of a category as a fraction of one.
    pub fn fraction(weight: u8) -> f64 {
        f64::from(weight) / 100.0
    }
}

/// Final score at or above which the partnership is a GO.
pub const GO_THRESHOLD: u8 = 70;
/// Final score at or above which the partnership is a GO with conditions.
pub const CONDITIONAL_THRESHOLD: u8 = 50;
/// Conditions attached to a conditional GO are capped at this many entries.
pub const MAX_CONDITIONS: usize = 4;
/// Explanatory factors quoted in the decision rationale.
pub const MAX_FACTORS: usize = 2;
